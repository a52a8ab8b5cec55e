//! Strength scorer - five binary criteria mapped to a three-tier label.

use std::fmt;

use crate::sections::{
    CRITERIA_SECTIONS, digit_section, length_section, lowercase_section, special_section,
    uppercase_section,
};

/// Outcome of the five structural checks on a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Criteria {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digit: bool,
    pub special: bool,
}

impl Criteria {
    pub fn evaluate(password: &str) -> Self {
        Self {
            length: length_section(password).is_none(),
            uppercase: uppercase_section(password).is_none(),
            lowercase: lowercase_section(password).is_none(),
            digit: digit_section(password).is_none(),
            special: special_section(password).is_none(),
        }
    }

    /// Number of satisfied criteria, 0 to 5.
    pub fn score(&self) -> u8 {
        [
            self.length,
            self.uppercase,
            self.lowercase,
            self.digit,
            self.special,
        ]
        .iter()
        .filter(|&&met| met)
        .count() as u8
    }

    /// Reasons for every criterion the password misses.
    pub fn unmet(password: &str) -> Vec<String> {
        CRITERIA_SECTIONS
            .iter()
            .filter_map(|(_, section)| section(password))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl Strength {
    /// Maps a criteria count to a tier. Counts above 5 cannot come out of
    /// [`Criteria::score`] and saturate to `Strong`.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Strength::Weak,
            3 | 4 => Strength::Moderate,
            _ => Strength::Strong,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
        };
        f.write_str(label)
    }
}

pub fn score_strength(password: &str) -> Strength {
    Strength::from_score(Criteria::evaluate(password).score())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_short_lowercase() {
        let criteria = Criteria::evaluate("short");
        assert_eq!(criteria.score(), 1);
        assert_eq!(score_strength("short"), Strength::Weak);
    }

    #[test]
    fn test_score_moderate_without_special() {
        let criteria = Criteria::evaluate("Abcdefg1");
        assert_eq!(
            criteria,
            Criteria {
                length: true,
                uppercase: true,
                lowercase: true,
                digit: true,
                special: false,
            }
        );
        assert_eq!(score_strength("Abcdefg1"), Strength::Moderate);
    }

    #[test]
    fn test_score_strong() {
        assert_eq!(Criteria::evaluate("Abcdefg1!").score(), 5);
        assert_eq!(score_strength("Abcdefg1!"), Strength::Strong);
    }

    #[test]
    fn test_score_empty_password() {
        assert_eq!(Criteria::evaluate(""), Criteria::default());
        assert_eq!(score_strength(""), Strength::Weak);
    }

    #[test]
    fn test_from_score_is_monotonic() {
        let tiers: Vec<Strength> = (0..=5).map(Strength::from_score).collect();
        assert!(tiers.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(tiers[2], Strength::Weak);
        assert_eq!(tiers[3], Strength::Moderate);
        assert_eq!(tiers[4], Strength::Moderate);
        assert_eq!(tiers[5], Strength::Strong);
    }

    #[test]
    fn test_adding_a_class_never_lowers_the_tier() {
        for base in ["abc", "abcdefgh", "ABCDEFGH1", "aB1"] {
            for extra in ["A", "z", "7", "!"] {
                let grown = format!("{base}{extra}");
                assert!(
                    score_strength(&grown) >= score_strength(base),
                    "{base:?} -> {grown:?}"
                );
            }
        }
    }

    #[test]
    fn test_unmet_reasons() {
        let reasons = Criteria::unmet("abc");
        assert_eq!(
            reasons,
            vec![
                "Password must be at least 8 characters".to_string(),
                "Missing: uppercase".to_string(),
                "Missing: digits".to_string(),
                "Missing: special characters".to_string(),
            ]
        );
        assert!(Criteria::unmet("Abcdefg1!").is_empty());
    }

    #[test]
    fn test_strength_display() {
        assert_eq!(Strength::Weak.to_string(), "Weak");
        assert_eq!(Strength::Moderate.to_string(), "Moderate");
        assert_eq!(Strength::Strong.to_string(), "Strong");
    }
}
