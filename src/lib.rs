//! Password strength verdicts
//!
//! This library rates a password against a denylist of common passwords and
//! five structural criteria, and estimates its entropy in bits.
//!
//! # Features
//!
//! - `async`: Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_verdict::{analyze, evaluate, Strength, Verdict};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abcdefg1!".to_string().into());
//!
//! assert_eq!(analyze(&password), "Strong Password | Entropy: 57.22 bits");
//! assert!(matches!(
//!     evaluate(&password),
//!     Verdict::Rated { strength: Strength::Strong, .. }
//! ));
//! ```

// Internal modules
mod charset;
mod denylist;
mod entropy;
mod evaluator;
mod scorer;
mod sections;
mod shell;

// Public API
pub use charset::{CharClass, SPECIAL_CHARS};
pub use denylist::{
    COMMON_PASSWORDS, Denylist, DenylistError, denylist, init_denylist_from_path, is_common,
};
pub use entropy::{estimate_entropy, pool_size};
pub use evaluator::{Verdict, analyze, analyze_str, evaluate};
pub use scorer::{Criteria, Strength, score_strength};
pub use sections::MIN_LENGTH;
pub use shell::{EMPTY_PROMPT, PasswordForm, RESULT_PREFIX};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, analyze_tx, evaluate_cancellable};
