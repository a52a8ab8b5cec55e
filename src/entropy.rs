//! Entropy estimator - brute-force search space from the classes present.

use crate::charset::CharClass;

/// Alphabet size implied by the character classes present in `password`.
pub fn pool_size(password: &str) -> u32 {
    CharClass::ALL
        .iter()
        .filter(|class| class.present_in(password))
        .map(|class| class.pool_size())
        .sum()
}

/// Estimates the entropy of `password` in bits.
///
/// Assumes each character is drawn uniformly from the union of the classes
/// present, which overestimates structured passwords. Returns `0.0` when no
/// class is present. The result is rounded to 2 decimals, half away from zero.
pub fn estimate_entropy(password: &str) -> f64 {
    let pool = pool_size(password);
    if pool == 0 {
        return 0.0;
    }
    let bits = password.chars().count() as f64 * f64::from(pool).log2();
    (bits * 100.0).round() / 100.0
}
