//! Common password denylist
//!
//! Handles loading and querying the set of known-weak passwords. A small
//! built-in list is always available; a larger one can be loaded from a
//! file at startup.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Environment variable pointing at an external denylist file.
pub const DENYLIST_PATH_ENV: &str = "PWD_DENYLIST_PATH";

/// Passwords rejected when no external list is configured.
pub const DEFAULT_COMMON_PASSWORDS: [&str; 6] =
    ["password", "123456", "qwerty", "admin", "letmein", "welcome"];

static BUILTIN: LazyLock<CommonPasswords> =
    LazyLock::new(|| CommonPasswords::from_entries(DEFAULT_COMMON_PASSWORDS));

#[derive(Error, Debug)]
pub enum DenylistError {
    #[error("Denylist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read denylist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Denylist file is empty")]
    EmptyFile,
}

/// Immutable set of known-weak passwords, stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonPasswords {
    entries: HashSet<String>,
}

impl CommonPasswords {
    /// Returns the shared built-in denylist.
    pub fn builtin() -> &'static CommonPasswords {
        &BUILTIN
    }

    /// Builds a denylist from in-memory entries.
    ///
    /// Entries are trimmed and lower-cased; blank entries are skipped.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    /// Loads a denylist from a file with one password per line.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no entries
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DenylistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist load FAILED: file not found {:?}", path);
            return Err(DenylistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let denylist = Self::from_entries(content.lines());

        if denylist.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist load FAILED: empty file {:?}", path);
            return Err(DenylistError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Denylist loaded: {} passwords from {:?}", denylist.len(), path);

        Ok(denylist)
    }

    /// Loads the denylist configured through `PWD_DENYLIST_PATH`, falling
    /// back to the built-in list when the variable is unset.
    pub fn from_env() -> Result<Self, DenylistError> {
        match get_denylist_path() {
            Some(path) => Self::from_path(path),
            None => Ok(Self::builtin().clone()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks if a password is in the denylist (case-insensitive).
    pub fn is_common(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }
}

impl Default for CommonPasswords {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

/// Returns the external denylist path, if configured.
pub fn get_denylist_path() -> Option<PathBuf> {
    std::env::var_os(DENYLIST_PATH_ENV)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
}

/// Checks a password against the built-in denylist.
pub fn is_common_password(password: &SecretString) -> bool {
    CommonPasswords::builtin().is_common(password.expose_secret())
}
