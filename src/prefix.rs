//! EAN-13 prefix to country mapping
//! Source: GS1 prefix allocations by issuing country.

/// A prefix rule assigning one contiguous numeric range to a country
#[derive(Debug, Clone)]
pub struct PrefixRule {
    /// Inclusive lower end of the prefix range
    pub lower: u32,
    /// Inclusive upper end of the prefix range
    pub upper: u32,
    /// Country display name
    pub country: &'static str,
    /// ISO 3166-1 alpha-2 code
    #[allow(dead_code)]
    pub iso: &'static str,
    /// Flag glyph shown next to the country name
    pub flag: &'static str,
}

/// Sentinel values returned when no rule matches
pub const UNKNOWN_COUNTRY: &str = "Unknown";
pub const UNKNOWN_FLAG: &str = "\u{1F3F3}\u{FE0F}";

/// Prefix range allocations.
/// Ranges overlap in the upstream allocation data; declaration order decides
/// (first match wins), so earlier entries take precedence over later ones.
pub const PREFIX_RULES: &[PrefixRule] = &[
    PrefixRule { lower: 0, upper: 19, country: "USA/Canada", iso: "US", flag: "🇺🇸" },
    PrefixRule { lower: 30, upper: 39, country: "USA", iso: "US", flag: "🇺🇸" },
    PrefixRule { lower: 40, upper: 44, country: "Germany", iso: "DE", flag: "🇩🇪" },
    PrefixRule { lower: 45, upper: 49, country: "Japan", iso: "JP", flag: "🇯🇵" },
    PrefixRule { lower: 50, upper: 59, country: "UK", iso: "GB", flag: "🇬🇧" },
    PrefixRule { lower: 690, upper: 699, country: "China", iso: "CN", flag: "🇨🇳" },
    PrefixRule { lower: 890, upper: 899, country: "India", iso: "IN", flag: "🇮🇳" },
    PrefixRule { lower: 400, upper: 440, country: "Germany", iso: "DE", flag: "🇩🇪" },
    PrefixRule { lower: 500, upper: 509, country: "UK", iso: "GB", flag: "🇬🇧" },
    PrefixRule { lower: 690, upper: 695, country: "China", iso: "CN", flag: "🇨🇳" },
    PrefixRule { lower: 700, upper: 709, country: "Norway", iso: "NO", flag: "🇳🇴" },
    PrefixRule { lower: 730, upper: 739, country: "Sweden", iso: "SE", flag: "🇸🇪" },
    PrefixRule { lower: 760, upper: 769, country: "Switzerland", iso: "CH", flag: "🇨🇭" },
    PrefixRule { lower: 800, upper: 839, country: "Italy", iso: "IT", flag: "🇮🇹" },
    PrefixRule { lower: 840, upper: 849, country: "Spain", iso: "ES", flag: "🇪🇸" },
    PrefixRule { lower: 850, upper: 859, country: "Cuba", iso: "CU", flag: "🇨🇺" },
    PrefixRule { lower: 870, upper: 879, country: "Netherlands", iso: "NL", flag: "🇳🇱" },
    PrefixRule { lower: 900, upper: 919, country: "Austria", iso: "AT", flag: "🇦🇹" },
    PrefixRule { lower: 930, upper: 939, country: "Australia", iso: "AU", flag: "🇦🇺" },
    PrefixRule { lower: 940, upper: 949, country: "New Zealand", iso: "NZ", flag: "🇳🇿" },
];

/// Result of a prefix lookup. Always well-formed: unknown input maps to the
/// sentinel values rather than an absent result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedCountry {
    pub country: &'static str,
    pub flag: &'static str,
}

impl ResolvedCountry {
    fn unknown() -> Self {
        Self {
            country: UNKNOWN_COUNTRY,
            flag: UNKNOWN_FLAG,
        }
    }

    /// Returns true if this is the sentinel result
    pub fn is_unknown(&self) -> bool {
        self.country == UNKNOWN_COUNTRY
    }
}

/// Finds the first rule whose range contains the given prefix value.
/// Linear scan in declaration order; the table is small enough that no index
/// structure is warranted.
pub fn find_rule(value: u32) -> Option<&'static PrefixRule> {
    PREFIX_RULES
        .iter()
        .find(|rule| rule.lower <= value && value <= rule.upper)
}

/// Resolves a barcode prefix string to its issuing country.
/// Non-numeric input and unallocated ranges both map to the unknown sentinel;
/// this never fails regardless of how garbled the scan payload was.
pub fn resolve(prefix: &str) -> ResolvedCountry {
    let Ok(value) = prefix.parse::<u32>() else {
        return ResolvedCountry::unknown();
    };

    match find_rule(value) {
        Some(rule) => ResolvedCountry {
            country: rule.country,
            flag: rule.flag,
        },
        None => ResolvedCountry::unknown(),
    }
}

/// Extracts the leading 3-character prefix from a scanned payload
pub fn extract_prefix(payload: &str) -> String {
    payload.chars().take(3).collect()
}

/// Returns the number of prefix rules in the table
pub fn rule_count() -> usize {
    PREFIX_RULES.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usa_canada_block() {
        for value in 0..=19 {
            let resolved = resolve(&format!("{:03}", value));
            assert_eq!(resolved.country, "USA/Canada", "prefix {:03}", value);
        }
    }

    #[test]
    fn test_usa_block() {
        for value in 30..=39 {
            let resolved = resolve(&format!("{:03}", value));
            assert_eq!(resolved.country, "USA", "prefix {:03}", value);
        }
    }

    #[test]
    fn test_japan() {
        assert_eq!(resolve("045").country, "Japan");
        assert_eq!(resolve("049").country, "Japan");
    }

    #[test]
    fn test_overlapping_ranges_first_match_wins() {
        // 690 sits in both the 690-699 and 690-695 ranges; the earlier
        // declared (broader) rule must win.
        let rule = find_rule(690).unwrap();
        assert_eq!(rule.lower, 690);
        assert_eq!(rule.upper, 699);
        assert_eq!(resolve("690").country, "China");
    }

    #[test]
    fn test_different_width_overlap() {
        // 040-044 and 400-440 are distinct prefixes despite sharing digits
        assert_eq!(resolve("044").country, "Germany");
        assert_eq!(resolve("440").country, "Germany");
        assert_eq!(find_rule(44).unwrap().upper, 44);
        assert_eq!(find_rule(440).unwrap().upper, 440);
    }

    #[test]
    fn test_unallocated_prefix() {
        let resolved = resolve("999");
        assert!(resolved.is_unknown());
        assert_eq!(resolved.country, UNKNOWN_COUNTRY);
        assert_eq!(resolved.flag, UNKNOWN_FLAG);
    }

    #[test]
    fn test_non_numeric_input() {
        assert!(resolve("abc").is_unknown());
        assert!(resolve("").is_unknown());
        assert!(resolve("6-9").is_unknown());
    }

    #[test]
    fn test_repeated_calls_are_stable() {
        let first = resolve("690");
        for _ in 0..100 {
            assert_eq!(resolve("690"), first);
        }
        // Interleaved lookups do not perturb later results
        resolve("999");
        resolve("abc");
        assert_eq!(resolve("690"), first);
    }

    #[test]
    fn test_table_is_well_formed() {
        for rule in PREFIX_RULES {
            assert!(rule.lower <= rule.upper, "rule {}-{}", rule.lower, rule.upper);
            assert!(rule.upper <= 999, "prefixes are at most 3 digits");
            assert_eq!(rule.iso.len(), 2, "iso code for {}", rule.country);
            assert!(rule.iso.chars().all(|c| c.is_ascii_uppercase()));
            assert!(!rule.country.is_empty());
            assert!(!rule.flag.is_empty());
        }
    }

    #[test]
    fn test_extract_prefix() {
        assert_eq!(extract_prefix("4901234567890"), "490");
        assert_eq!(extract_prefix("690"), "690");
    }
}
