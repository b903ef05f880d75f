//! UK postcode validation and normalization.

use once_cell::sync::Lazy;
use regex::Regex;

// Outcode alternatives cover the A9, A99, AA9, AA99, A9A and AA9A forms,
// plus the GIR 0AA special case. The space before the incode is required.
static POSTCODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:GIR 0AA|(?:[A-Z][0-9]{1,2}|[A-Z][A-HJ-Y][0-9]{1,2}|[A-Z][0-9][A-Z]|[A-Z][A-HJ-Y][0-9]?[A-Z]) [0-9][A-Z]{2})$",
    )
    .expect("postcode pattern is valid")
});

/// Check whether a string is a well-formed UK postcode (case-insensitive)
pub fn is_valid_postcode(postcode: &str) -> bool {
    POSTCODE.is_match(postcode)
}

/// Strip spaces from a postcode so it can be sent as a query value
pub fn normalize_postcode(postcode: &str) -> String {
    postcode.replace(' ', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_postcodes() {
        for postcode in ["SW1A 1AA", "sW1A 1aA", "E20 2ST", "e20 2st", "GIR 0AA"] {
            assert!(is_valid_postcode(postcode), "rejected {postcode}");
        }
    }

    #[test]
    fn test_rejects_invalid_postcodes() {
        for postcode in [
            "this is not a postcode",
            "SW1A1AA",
            "SW1A 1AAX",
            "XSW1A 1AA",
            "",
        ] {
            assert!(!is_valid_postcode(postcode), "accepted {postcode}");
        }
    }

    #[test]
    fn test_normalize_strips_spaces() {
        assert_eq!(normalize_postcode("SW1A 1AA"), "SW1A1AA");
        assert_eq!(normalize_postcode("E20 2ST"), "E202ST");
        assert_eq!(normalize_postcode("E202ST"), "E202ST");
    }
}
