//! Phone number matching.

use crate::error::PatternError;
use regex::Regex;

/// International numbers: `+` and a country code, then three or four digit
/// groups separated by optional whitespace or a hyphen.
///
/// Matches `+54 9 376 411 0177`, `+51 958-123-456` and `+56 9 8765 4321`.
/// Any whitespace except a line break separates groups, so a non-breaking
/// space from OCR still matches. The optional last group also absorbs a
/// trailing 3-4 digit run on the same line (`+51 958-123-456 2024`).
pub const DEFAULT_PHONE_PATTERN: &str = r"\+\d{1,3}[^\S\r\n]?\d{1,4}(?:[^\S\r\n]|-)?\d{3,4}(?:[^\S\r\n]|-)?\d{3,4}(?:(?:[^\S\r\n]|-)?\d{3,4})?";

/// Finds phone numbers in free text
#[derive(Debug, Clone)]
pub struct PhoneExtractor {
    regex: Regex,
}

impl PhoneExtractor {
    /// Extractor using [`DEFAULT_PHONE_PATTERN`]
    pub fn new() -> Self {
        Self {
            regex: Regex::new(DEFAULT_PHONE_PATTERN).expect("default phone pattern is valid"),
        }
    }

    /// Extractor using a caller-supplied pattern
    pub fn with_pattern(pattern: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(pattern).map_err(|e| PatternError::Invalid {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { regex })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// All non-overlapping matches, left to right, trimmed
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.regex
            .find_iter(text)
            .map(|m| m.as_str().trim())
            .filter(|m| !m.is_empty())
            .collect()
    }
}

impl Default for PhoneExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_argentine_mobile_in_full() {
        let extractor = PhoneExtractor::new();
        assert_eq!(
            extractor.find_all("Call +54 9 376 411 0177 today"),
            vec!["+54 9 376 411 0177"]
        );
    }

    #[test]
    fn matches_hyphenated_numbers() {
        let extractor = PhoneExtractor::new();
        assert_eq!(
            extractor.find_all("Juan: +51 958-123-456"),
            vec!["+51 958-123-456"]
        );
    }

    #[test]
    fn matches_four_digit_groups() {
        let extractor = PhoneExtractor::new();
        assert_eq!(
            extractor.find_all("+56 9 8765 4321 ~Ana"),
            vec!["+56 9 8765 4321"]
        );
    }

    #[test]
    fn keeps_every_occurrence_in_order() {
        let extractor = PhoneExtractor::new();
        let text = "Call +54 9 376 411 0177 or +54 9 376 411 0177, else +51 958-123-456";

        assert_eq!(
            extractor.find_all(text),
            vec!["+54 9 376 411 0177", "+54 9 376 411 0177", "+51 958-123-456"]
        );
    }

    #[test]
    fn does_not_join_numbers_across_lines() {
        let extractor = PhoneExtractor::new();
        let text = "+51 958-123-456\n2024\n+56 9 8765 4321";

        assert_eq!(
            extractor.find_all(text),
            vec!["+51 958-123-456", "+56 9 8765 4321"]
        );
    }

    #[test]
    fn does_not_join_numbers_across_crlf() {
        let extractor = PhoneExtractor::new();
        let text = "+51 958-123-456\r\n2024";

        assert_eq!(extractor.find_all(text), vec!["+51 958-123-456"]);
    }

    #[test]
    fn non_breaking_space_separates_groups() {
        let extractor = PhoneExtractor::new();
        assert_eq!(
            extractor.find_all("+54 9\u{a0}376 411 0177"),
            vec!["+54 9\u{a0}376 411 0177"]
        );
    }

    #[test]
    fn trailing_digit_group_on_same_line_is_absorbed() {
        let extractor = PhoneExtractor::new();
        assert_eq!(
            extractor.find_all("+51 958-123-456 2024"),
            vec!["+51 958-123-456 2024"]
        );
        assert_eq!(
            extractor.find_all("+51 958-123-456 ~ 2024"),
            vec!["+51 958-123-456"]
        );
    }

    #[test]
    fn ignores_numbers_without_country_code() {
        let extractor = PhoneExtractor::new();
        assert!(extractor.find_all("local 376 411 0177, 12:45").is_empty());
        assert!(extractor.find_all("").is_empty());
    }

    #[test]
    fn custom_pattern_is_used() {
        let extractor = PhoneExtractor::with_pattern(r"\d{3}-\d{4}").unwrap();
        assert_eq!(extractor.find_all("555-1234 and 555-9876"), vec!["555-1234", "555-9876"]);
        assert_eq!(extractor.pattern(), r"\d{3}-\d{4}");
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = PhoneExtractor::with_pattern(r"\+(\d").unwrap_err();
        assert!(err.to_string().contains(r"\+(\d"));
    }
}
