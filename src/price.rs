//! Decimal normalization for scraped price strings.

use crate::error::FetchError;

/// Currency markers removed before parsing.
const CURRENCY_MARKERS: &[&str] = &["€", "EUR", "Kč", "CZK"];

/// Parses a price like "34,50", "1,459 €" or "1.234,56" into a float.
///
/// Whitespace (including non-breaking spaces) and currency markers are
/// stripped; whatever remains must be a plain number.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let mut cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    for marker in CURRENCY_MARKERS {
        cleaned = cleaned.replace(marker, "");
    }

    if cleaned.is_empty() {
        return None;
    }

    let last_comma = cleaned.rfind(',');
    let last_period = cleaned.rfind('.');

    let normalized = match (last_comma, last_period) {
        // Only comma -> decimal comma (34,50 -> 34.50)
        (Some(_), None) => cleaned.replace(',', "."),
        // Both: the separator that comes last is the decimal one
        (Some(c), Some(p)) => {
            if c > p {
                cleaned.replace('.', "").replace(',', ".")
            } else {
                cleaned.replace(',', "")
            }
        }
        (None, _) => cleaned,
    };

    normalized.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Like [`parse_decimal`] but reports the offending text.
pub fn parse_price(text: &str) -> Result<f64, FetchError> {
    parse_decimal(text).ok_or_else(|| FetchError::InvalidNumber { text: text.trim().to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_comma() {
        assert_eq!(parse_decimal("34,50"), Some(34.5));
        assert_eq!(parse_decimal("34,9"), Some(34.9));
        assert_eq!(parse_decimal("1,459"), Some(1.459));
    }

    #[test]
    fn test_parse_decimal_period() {
        assert_eq!(parse_decimal("34.90"), Some(34.9));
        assert_eq!(parse_decimal("35"), Some(35.0));
    }

    #[test]
    fn test_parse_decimal_currency_and_spaces() {
        assert_eq!(parse_decimal("1,459 €"), Some(1.459));
        assert_eq!(parse_decimal("€ 1,459"), Some(1.459));
        assert_eq!(parse_decimal("1,45\u{a0}€"), Some(1.45));
        assert_eq!(parse_decimal("  34,90 Kč "), Some(34.9));
        assert_eq!(parse_decimal("1.45 EUR"), Some(1.45));
    }

    #[test]
    fn test_parse_decimal_thousands() {
        assert_eq!(parse_decimal("1.234,56"), Some(1234.56));
        assert_eq!(parse_decimal("1,234.56"), Some(1234.56));
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("   "), None);
        assert_eq!(parse_decimal("€"), None);
        assert_eq!(parse_decimal("N/A"), None);
        assert_eq!(parse_decimal("cena 34,50"), None);
        assert_eq!(parse_decimal("inf"), None);
    }

    #[test]
    fn test_parse_price_error_keeps_text() {
        let err = parse_price(" n/a ").unwrap_err();
        assert!(matches!(err, FetchError::InvalidNumber { ref text } if text == "n/a"));
    }
}
