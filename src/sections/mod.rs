//! Password criteria sections
//!
//! Each section checks one structural criterion of a password.

mod denylist;
mod length;
mod variety;

pub use denylist::denylist_section;
pub use length::{MIN_LENGTH, length_section};
pub use variety::{digit_section, lowercase_section, special_section, uppercase_section};

/// Result type for section check functions.
/// - `Some(reason)` - Criterion not met, with reason
/// - `None` - Criterion met
pub type SectionResult = Option<String>;

/// A named section check.
pub type Section = (&'static str, fn(&str) -> SectionResult);

/// The five scoring criteria, in reporting order.
pub const CRITERIA_SECTIONS: [Section; 5] = [
    ("length", length_section),
    ("uppercase", uppercase_section),
    ("lowercase", lowercase_section),
    ("digit", digit_section),
    ("special", special_section),
];
