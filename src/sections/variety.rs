//! Character variety sections - one per character class.

use super::SectionResult;
use crate::charset::CharClass;

fn class_section(password: &str, class: CharClass) -> SectionResult {
    if class.present_in(password) {
        return None;
    }
    Some(format!("Missing: {}", class.label()))
}

pub fn uppercase_section(password: &str) -> SectionResult {
    class_section(password, CharClass::Uppercase)
}

pub fn lowercase_section(password: &str) -> SectionResult {
    class_section(password, CharClass::Lowercase)
}

pub fn digit_section(password: &str) -> SectionResult {
    class_section(password, CharClass::Digit)
}

/// Only characters from [`crate::SPECIAL_CHARS`] count as special.
pub fn special_section(password: &str) -> SectionResult {
    class_section(password, CharClass::Special)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variety_section_missing_uppercase() {
        let result = uppercase_section("lowercase123!");
        assert_eq!(result, Some("Missing: uppercase".to_string()));
    }

    #[test]
    fn test_variety_section_missing_lowercase() {
        let result = lowercase_section("UPPERCASE123!");
        assert_eq!(result, Some("Missing: lowercase".to_string()));
    }

    #[test]
    fn test_variety_section_missing_digits() {
        let result = digit_section("NoNumbers!");
        assert!(matches!(result, Some(reason) if reason.contains("digits")));
    }

    #[test]
    fn test_variety_section_unlisted_punctuation_is_not_special() {
        assert!(special_section("No-Special_123").is_some());
        assert_eq!(special_section("Has{Brace}"), None);
    }

    #[test]
    fn test_variety_section_all_categories() {
        let pwd = "HasAll123!@#";
        assert_eq!(uppercase_section(pwd), None);
        assert_eq!(lowercase_section(pwd), None);
        assert_eq!(digit_section(pwd), None);
        assert_eq!(special_section(pwd), None);
    }
}
