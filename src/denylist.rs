//! Denylist management module
//!
//! Holds the fixed list of known-weak passwords and the process-wide copy
//! consulted by the analysis.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

/// Passwords rejected outright, whatever their structure.
pub const COMMON_PASSWORDS: [&str; 15] = [
    "123456", "password", "123456789", "12345678", "12345", "qwerty", "abc123", "111111",
    "iloveyou", "123123", "welcome", "admin", "letmein", "1234", "password1",
];

static DENYLIST: OnceLock<Installed> = OnceLock::new();

/// The process-wide list and whether it came from a file.
#[derive(Debug)]
struct Installed {
    list: Denylist,
    from_file: bool,
}

#[derive(Error, Debug)]
pub enum DenylistError {
    #[error("Denylist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read denylist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Denylist file is empty")]
    EmptyFile,
    #[error("Built-in denylist already in use; install the file before the first lookup")]
    AlreadyInitialized,
}

/// An immutable set of known-weak passwords.
///
/// Membership is exact and case-sensitive: `"admin"` is listed, `"Admin"` is not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denylist {
    entries: HashSet<String>,
}

impl Denylist {
    /// The built-in list of [`COMMON_PASSWORDS`].
    pub fn builtin() -> Self {
        Self {
            entries: COMMON_PASSWORDS.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Loads extra entries from a file, one password per line, on top of the
    /// built-in list.
    ///
    /// Line terminators are stripped and blank lines skipped. Entries are kept
    /// verbatim otherwise, so surrounding spaces and letter case are significant.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File holds no entry
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DenylistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist load FAILED: FileNotFound {:?}", path);
            return Err(DenylistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        let extra: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
        if extra.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist load FAILED: Empty file {:?}", path);
            return Err(DenylistError::EmptyFile);
        }

        let mut list = Self::builtin();
        list.entries.extend(extra.into_iter().map(str::to_string));
        Ok(list)
    }

    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(password)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Denylist {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Installs the process-wide denylist from a file, extending the built-in one.
///
/// Call once at startup, before the first analysis. If a file list is already
/// installed, the path is not read and the current size is returned.
///
/// # Errors
///
/// Returns error if:
/// - A lookup already ran and defaulted the list to the built-in one
/// - The file cannot be loaded, see [`Denylist::from_path`]
///
/// # Example
///
/// ```rust,ignore
/// let entries = pwd_verdict::init_denylist_from_path("/etc/myapp/denylist.txt")?;
/// ```
pub fn init_denylist_from_path<P: AsRef<Path>>(path: P) -> Result<usize, DenylistError> {
    if let Some(installed) = DENYLIST.get() {
        return installed_len(installed);
    }

    let list = Denylist::from_path(path.as_ref())?;
    let installing = Installed {
        list,
        from_file: true,
    };
    if DENYLIST.set(installing).is_err() {
        // Lost a race against another installer or a lazy default.
        return DENYLIST
            .get()
            .map_or(Err(DenylistError::AlreadyInitialized), installed_len);
    }

    let count = denylist().len();

    #[cfg(feature = "tracing")]
    tracing::info!(
        "Denylist initialized: {} passwords from {:?}",
        count,
        path.as_ref()
    );

    Ok(count)
}

fn installed_len(installed: &Installed) -> Result<usize, DenylistError> {
    if !installed.from_file {
        #[cfg(feature = "tracing")]
        tracing::error!("Denylist initialization FAILED: built-in list already in use");
        return Err(DenylistError::AlreadyInitialized);
    }
    Ok(installed.list.len())
}

/// Returns the process-wide denylist, defaulting to [`Denylist::builtin`].
pub fn denylist() -> &'static Denylist {
    &DENYLIST
        .get_or_init(|| Installed {
            list: Denylist::builtin(),
            from_file: false,
        })
        .list
}

/// Checks if a password is a known-weak one.
///
/// Exact match only: no trimming, no case folding. Every input, the empty
/// string included, gets an answer.
pub fn is_common(password: &str) -> bool {
    denylist().contains(password)
}
