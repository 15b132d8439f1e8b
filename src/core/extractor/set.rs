//! Deduplicating accumulator for phone numbers.

use serde::Serialize;
use std::collections::BTreeSet;

/// Distinct phone numbers, kept in lexicographic order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PhoneNumberSet {
    numbers: BTreeSet<String>,
}

impl PhoneNumberSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a number, trimmed. Returns false for blanks and duplicates.
    pub fn insert(&mut self, number: &str) -> bool {
        let number = number.trim();
        if number.is_empty() {
            return false;
        }
        self.numbers.insert(number.to_string())
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn contains(&self, number: &str) -> bool {
        self.numbers.contains(number.trim())
    }

    /// Numbers in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.numbers.iter().map(String::as_str)
    }

    pub fn into_sorted_vec(self) -> Vec<String> {
        self.numbers.into_iter().collect()
    }
}

impl<'a> Extend<&'a str> for PhoneNumberSet {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for number in iter {
            self.insert(number);
        }
    }
}

impl<'a> FromIterator<&'a str> for PhoneNumberSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_kept_once() {
        let mut set = PhoneNumberSet::new();
        assert!(set.insert("+54 9 376 411 0177"));
        assert!(!set.insert("+54 9 376 411 0177"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn surrounding_whitespace_does_not_create_duplicates() {
        let set: PhoneNumberSet = ["+51 958-123-456", " +51 958-123-456\t"].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert!(set.contains("+51 958-123-456"));
    }

    #[test]
    fn blanks_are_ignored() {
        let mut set = PhoneNumberSet::new();
        assert!(!set.insert("   "));
        assert!(set.is_empty());
    }

    #[test]
    fn iteration_is_lexicographic() {
        let set: PhoneNumberSet = ["+56 9 8765 4321", "+51 958-123-456", "+54 9 376 411 0177"]
            .into_iter()
            .collect();

        assert_eq!(
            set.into_sorted_vec(),
            vec!["+51 958-123-456", "+54 9 376 411 0177", "+56 9 8765 4321"]
        );
    }

    #[test]
    fn serializes_as_a_plain_list() {
        let set: PhoneNumberSet = ["+56 9 8765 4321", "+51 958-123-456"].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["+51 958-123-456","+56 9 8765 4321"]"#);
    }
}
