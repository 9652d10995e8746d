//! Barcode Origin - terminal app displaying product origin country from EAN-13 prefixes
//!
//! Features:
//! - Resolves the 3-digit EAN-13 prefix of a scanned/typed barcode to a country
//! - Shows a flag/country label and an OpenStreetMap link for the country
//! - Optional desktop notification per scan, toggle persisted across runs
//! - Interactive stdin session or one-shot lookup via --check

mod display;
mod geocode;
mod prefix;
mod prefs;
mod scanner;

use crate::prefs::Prefs;
use crate::scanner::{watch_scan_input, Command, ScanEvent};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Current app version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    // Handle --check flag
    if let Some(pos) = args.iter().position(|a| a == "--check" || a == "-c") {
        match args.get(pos + 1) {
            Some(barcode) => run_check(barcode).await,
            None => {
                eprintln!("--check requires a barcode argument");
                std::process::exit(2);
            }
        }
        return;
    }

    // Handle --version flag
    if args.iter().any(|a| a == "--version" || a == "-v") {
        println!("barcode-origin {}", VERSION);
        return;
    }

    // Handle --help flag
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return;
    }

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Barcode Origin v{} starting...", VERSION);
    info!("Loaded {} prefix rules", prefix::rule_count());

    // Load persisted preferences
    let prefs = prefs::load();
    let mut notifications = prefs.notifications;
    info!("Desktop notifications enabled: {}", notifications);

    // Scan event channel
    let (scan_tx, mut scan_rx) = mpsc::channel::<ScanEvent>(16);

    // Command channel from the prompt
    let (cmd_tx, mut cmd_rx) = mpsc::channel::<Command>(16);

    // Spawn scan input task
    tokio::spawn(async move {
        if let Err(e) = watch_scan_input(scan_tx, cmd_tx).await {
            error!("Scan input error: {}", e);
        }
    });

    println!("Enter a barcode, or :notify / :report / :quit");

    // Main event loop
    loop {
        tokio::select! {
            // Handle scan events
            Some(event) = scan_rx.recv() => {
                match event {
                    ScanEvent::Decoded(payload) => {
                        handle_scan(&payload, notifications).await;
                    }
                    ScanEvent::Rejected { input, reason } => {
                        warn!("Barcode input rejected ({}): {:?}", reason, input);
                    }
                }
            }

            // Handle prompt commands
            Some(cmd) = cmd_rx.recv() => {
                match cmd {
                    Command::ToggleNotify => {
                        notifications = !notifications;
                        if let Err(e) = prefs::save(Prefs { notifications }) {
                            error!("Failed to save preferences: {}", e);
                        }
                        info!("Desktop notifications {}", if notifications { "enabled" } else { "disabled" });
                        println!("Notifications {}", if notifications { "on" } else { "off" });
                    }
                    Command::Report => {
                        info!("Suspicious product reported");
                        println!("Thank you for reporting! We'll investigate the issue.");
                        if notifications {
                            display::notify_report();
                        }
                    }
                    Command::Quit => {
                        info!("Quit requested");
                        break;
                    }
                }
            }

            else => break,
        }
    }

    info!("Barcode Origin shutting down");
}

/// Resolves one decoded payload and renders the result
async fn handle_scan(payload: &str, notifications: bool) {
    let country_prefix = prefix::extract_prefix(payload);
    let resolved = prefix::resolve(&country_prefix);
    info!("Scan: {} -> {} (prefix {})", payload, resolved.country, country_prefix);

    display::print_scan_result(payload, &resolved);
    if notifications {
        display::notify_scan(&resolved);
    }

    // No map link for the unknown sentinel
    if resolved.is_unknown() {
        return;
    }

    match geocode::lookup_coordinates(resolved.country).await {
        Ok(coords) => display::print_map_link(coords),
        Err(e) => warn!("Geocoding failed for {}: {}", resolved.country, e),
    }
}

fn print_help() {
    println!("barcode-origin {}", VERSION);
    println!();
    println!("Terminal app displaying product origin country based on EAN-13 barcode prefix.");
    println!();
    println!("USAGE:");
    println!("    barcode-origin [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help             Show this help message");
    println!("    -v, --version          Show version");
    println!("    -c, --check <BARCODE>  Resolve one barcode and exit");
    println!();
    println!("Without options an interactive session starts; type barcodes on stdin,");
    println!("or :notify to toggle notifications, :report to report a suspicious");
    println!("product, :quit to exit.");
}

async fn run_check(barcode: &str) {
    let country_prefix = prefix::extract_prefix(barcode);
    let resolved = prefix::resolve(&country_prefix);

    display::print_scan_result(barcode, &resolved);

    if resolved.is_unknown() {
        return;
    }

    match geocode::lookup_coordinates(resolved.country).await {
        Ok(coords) => display::print_map_link(coords),
        Err(e) => eprintln!("Geocoding failed: {}", e),
    }
}
