//! Scan input module reading barcode entries from stdin
//! Classifies each line as a scan payload or a control command and feeds the
//! main loop over channels.

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

/// Minimum payload length carrying a full country prefix
const MIN_PAYLOAD_LEN: usize = 3;

/// Events emitted for barcode input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// A payload long enough to carry a country prefix
    Decoded(String),
    /// Input that cannot be treated as a barcode
    Rejected {
        input: String,
        reason: &'static str,
    },
}

/// Control commands entered at the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleNotify,
    Report,
    Quit,
}

/// Errors during scan input watching
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("stdin read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Channel send failed")]
    ChannelClosed,
}

/// Classification of a single input line
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineKind {
    Empty,
    Control(Command),
    UnknownControl(String),
    Scan(String),
    TooShort(String),
}

fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Empty;
    }

    if let Some(word) = trimmed.strip_prefix(':') {
        return match word {
            "notify" => LineKind::Control(Command::ToggleNotify),
            "report" => LineKind::Control(Command::Report),
            "quit" => LineKind::Control(Command::Quit),
            _ => LineKind::UnknownControl(word.to_string()),
        };
    }

    if trimmed.chars().count() < MIN_PAYLOAD_LEN {
        LineKind::TooShort(trimmed.to_string())
    } else {
        LineKind::Scan(trimmed.to_string())
    }
}

/// Watches stdin for barcode entries and control commands.
/// Runs until stdin reaches EOF, then emits a final quit command so piped
/// input terminates the session cleanly.
pub async fn watch_scan_input(
    scan_tx: mpsc::Sender<ScanEvent>,
    cmd_tx: mpsc::Sender<Command>,
) -> Result<(), ScanError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match classify_line(&line) {
            LineKind::Empty => {}
            LineKind::Control(cmd) => {
                if cmd_tx.send(cmd).await.is_err() {
                    return Err(ScanError::ChannelClosed);
                }
            }
            LineKind::UnknownControl(word) => {
                tracing::warn!("Unknown command :{} (try :notify, :report, :quit)", word);
            }
            LineKind::Scan(payload) => {
                if scan_tx.send(ScanEvent::Decoded(payload)).await.is_err() {
                    return Err(ScanError::ChannelClosed);
                }
            }
            LineKind::TooShort(input) => {
                let event = ScanEvent::Rejected {
                    input,
                    reason: "payload shorter than a country prefix",
                };
                if scan_tx.send(event).await.is_err() {
                    return Err(ScanError::ChannelClosed);
                }
            }
        }
    }

    tracing::debug!("Scan input reached EOF");
    if cmd_tx.send(Command::Quit).await.is_err() {
        return Err(ScanError::ChannelClosed);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_scan_payload() {
        assert_eq!(
            classify_line("4901234567890"),
            LineKind::Scan("4901234567890".to_string())
        );
        // A bare prefix is still a valid payload
        assert_eq!(classify_line("690"), LineKind::Scan("690".to_string()));
    }

    #[test]
    fn test_classify_trims_whitespace() {
        assert_eq!(
            classify_line("  5012345678900  "),
            LineKind::Scan("5012345678900".to_string())
        );
    }

    #[test]
    fn test_classify_commands() {
        assert_eq!(classify_line(":notify"), LineKind::Control(Command::ToggleNotify));
        assert_eq!(classify_line(":report"), LineKind::Control(Command::Report));
        assert_eq!(classify_line(":quit"), LineKind::Control(Command::Quit));
        assert_eq!(
            classify_line(":bogus"),
            LineKind::UnknownControl("bogus".to_string())
        );
    }

    #[test]
    fn test_classify_short_and_empty() {
        assert_eq!(classify_line(""), LineKind::Empty);
        assert_eq!(classify_line("   "), LineKind::Empty);
        assert_eq!(classify_line("12"), LineKind::TooShort("12".to_string()));
    }
}
