//! Presentation module rendering scan results
//! Prints the flag/country label and map link, and raises optional desktop
//! notifications.

use crate::geocode::Coordinates;
use crate::prefix::ResolvedCountry;
use notify_rust::Notification;

/// Map zoom level used for country-scale links
const MAP_ZOOM: u8 = 5;

/// Formats the flag-plus-name label for a resolved country
pub fn country_label(resolved: &ResolvedCountry) -> String {
    format!("{} {}", resolved.flag, resolved.country)
}

/// Builds an OpenStreetMap link with a marker at the given coordinates
pub fn map_url(coords: Coordinates) -> String {
    format!(
        "https://www.openstreetmap.org/?mlat={lat}&mlon={lon}#map={zoom}/{lat}/{lon}",
        lat = coords.lat,
        lon = coords.lon,
        zoom = MAP_ZOOM,
    )
}

/// Prints the result of one scan to the terminal
pub fn print_scan_result(payload: &str, resolved: &ResolvedCountry) {
    println!("{}  {}", payload, country_label(resolved));
}

/// Prints the map link for a geocoded country
pub fn print_map_link(coords: Coordinates) {
    println!("     {}", map_url(coords));
}

/// Raises a desktop notification for a scan result
pub fn notify_scan(resolved: &ResolvedCountry) {
    let _ = Notification::new()
        .summary("Barcode Origin")
        .body(&country_label(resolved))
        .icon("dialog-information")
        .timeout(3000)
        .show();
}

/// Raises a desktop notification acknowledging a product report
pub fn notify_report() {
    let _ = Notification::new()
        .summary("Barcode Origin")
        .body("Thank you for reporting! We'll investigate the issue.")
        .icon("dialog-information")
        .timeout(3000)
        .show();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefix::resolve;

    #[test]
    fn test_country_label() {
        let resolved = resolve("045");
        assert_eq!(country_label(&resolved), "🇯🇵 Japan");
    }

    #[test]
    fn test_unknown_label_uses_placeholder() {
        let resolved = resolve("999");
        let label = country_label(&resolved);
        assert!(label.ends_with("Unknown"));
        assert!(!label.starts_with(' '));
    }

    #[test]
    fn test_map_url() {
        let coords = Coordinates {
            lat: 35.8617,
            lon: 104.1954,
        };
        assert_eq!(
            map_url(coords),
            "https://www.openstreetmap.org/?mlat=35.8617&mlon=104.1954#map=5/35.8617/104.1954"
        );
    }
}
