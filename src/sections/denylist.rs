//! Denylist section - checks if password is a commonly used one.

use super::SectionResult;
use crate::denylist::is_common;

/// Checks if the password is in the denylist of common passwords.
///
/// # Returns
/// - `Some(reason)` if password is denylisted
/// - `None` if password is not in the denylist
pub fn denylist_section(password: &str) -> SectionResult {
    if is_common(password) {
        return Some("Commonly used password".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denylist_section_common_password() {
        assert_eq!(
            denylist_section("letmein"),
            Some("Commonly used password".to_string())
        );
    }

    #[test]
    fn test_denylist_section_strong_password() {
        assert_eq!(denylist_section("CorrectHorseBatteryStaple!123"), None);
    }
}
