//! Analysis facade - composes the denylist, scorer and entropy estimate into
//! a verdict.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::entropy::estimate_entropy;
use crate::scorer::{Strength, score_strength};
use crate::sections::denylist_section;

/// Delay before an evaluation sent through [`analyze_tx`] starts.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Outcome of one analysis. Rendered with [`fmt::Display`] for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    /// The password is on the denylist; entropy is not computed.
    Common,
    Rated { strength: Strength, entropy: f64 },
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Common => f.write_str("Very Weak Password (Commonly used password)"),
            // A zero estimate prints as `0`, any other keeps its decimal: `47.0`, `57.22`.
            Verdict::Rated { strength, entropy } if *entropy == 0.0 => {
                write!(f, "{} Password | Entropy: 0 bits", strength)
            }
            Verdict::Rated { strength, entropy } => {
                write!(f, "{} Password | Entropy: {:?} bits", strength, entropy)
            }
        }
    }
}

fn rate(pwd: &str) -> Verdict {
    Verdict::Rated {
        strength: score_strength(pwd),
        entropy: estimate_entropy(pwd),
    }
}

/// Evaluates a password.
///
/// The denylist is consulted first; a listed password short-circuits to
/// [`Verdict::Common`].
pub fn evaluate(password: &SecretString) -> Verdict {
    let pwd = password.expose_secret();

    if denylist_section(pwd).is_some() {
        #[cfg(feature = "tracing")]
        tracing::debug!("password rejected by denylist");
        return Verdict::Common;
    }

    let verdict = rate(pwd);

    #[cfg(feature = "tracing")]
    {
        if let Verdict::Rated { strength, entropy } = verdict {
            tracing::debug!(%strength, entropy, "password rated");
        }
    }

    verdict
}

/// Analyzes a password and returns the human-readable verdict.
///
/// The empty string is accepted and yields a Weak, zero-entropy verdict.
pub fn analyze(password: &SecretString) -> String {
    evaluate(password).to_string()
}

/// [`analyze`] for a plain string slice.
pub fn analyze_str(password: &str) -> String {
    analyze(&SecretString::new(password.into()))
}

/// Evaluates a password unless `token` is already cancelled.
///
/// Returns `None` if the evaluation was cancelled. Scoring is [`evaluate`]'s.
#[cfg(feature = "async")]
pub fn evaluate_cancellable(password: &SecretString, token: &CancellationToken) -> Option<Verdict> {
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("evaluation cancelled");
        return None;
    }
    Some(evaluate(password))
}

/// Async version that sends the rendered verdict via channel.
///
/// Waits [`DEBOUNCE`] first. Nothing is sent if `token` is cancelled.
/// The token is owned so the caller can hand a clone to the spawned task and
/// keep the original to cancel it.
#[cfg(feature = "async")]
pub async fn analyze_tx(password: &SecretString, token: CancellationToken, tx: mpsc::Sender<String>) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(DEBOUNCE).await;
    let Some(verdict) = evaluate_cancellable(password, &token) else {
        return;
    };

    if let Err(e) = tx.send(verdict.to_string()).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password verdict: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
