//! Character classes shared by the criteria checks and the entropy estimate.

/// The special characters recognised by the analysis.
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// ASCII character classes. Anything outside them (whitespace, other
/// punctuation, non-ASCII letters) is unclassified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Special,
    ];

    pub fn matches(self, c: char) -> bool {
        match self {
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Uppercase => c.is_ascii_uppercase(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Special => SPECIAL_CHARS.contains(c),
        }
    }

    /// Number of symbols the class adds to the brute-force alphabet.
    pub fn pool_size(self) -> u32 {
        match self {
            CharClass::Lowercase | CharClass::Uppercase => 26,
            CharClass::Digit => 10,
            CharClass::Special => SPECIAL_CHARS.chars().count() as u32,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Digit => "digits",
            CharClass::Special => "special characters",
        }
    }

    /// Whether any character of `password` belongs to this class.
    pub fn present_in(self, password: &str) -> bool {
        password.chars().any(|c| self.matches(c))
    }
}
