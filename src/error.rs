//! error
//!
//! Error taxonomy for password store access.
//!
//! # Design
//!
//! Callers are expected to branch on [`PassError::NotFound`] (an expected,
//! recoverable condition) while treating every other variant as unexpected.
//! Decryption-layer problems are deliberately distinct variants so they can
//! never be mistaken for an absent key.
//!
//! Note: Error messages intentionally do not include secret values.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors from password store construction and lookups.
#[derive(Debug, Error)]
pub enum PassError {
    /// The `pass` binary is missing or non-functional.
    ///
    /// Raised when the availability probe (`pass --version`) cannot be
    /// spawned or exits non-zero, or when a later lookup fails to spawn.
    #[error("pass is not available: {reason}")]
    ToolUnavailable {
        /// Why the tool could not be used (spawn error or exit status)
        reason: String,
    },

    /// The resolved store directory is unusable.
    ///
    /// Either the path does not exist as a directory, or it exists but has
    /// never been initialized (no `.gpg-id` marker file inside it).
    #[error("invalid password store at {path}: {reason}")]
    InvalidDirectory {
        /// The directory that failed validation
        path: PathBuf,
        /// What was wrong with it
        reason: String,
    },

    /// The key has no entry in the store.
    ///
    /// This is the one expected failure mode; convenience operations such as
    /// `get_or` and `exists` absorb it while letting every other variant
    /// propagate.
    #[error("secret not found: {key}")]
    NotFound {
        /// The key that was looked up
        key: String,
    },

    /// gpg could not decrypt the entry.
    #[error("gpg failed to decrypt entry for '{key}'")]
    DecryptionFailed {
        /// The key whose entry could not be decrypted
        key: String,
    },

    /// gpg has no usable secret key for the entry.
    #[error("no gpg secret key available to decrypt entry for '{key}'")]
    SecretKeyUnavailable {
        /// The key whose entry needs an unavailable secret key
        key: String,
    },

    /// `pass` failed in a way we do not recognize.
    ///
    /// The exit status and the full stderr text are preserved verbatim for
    /// debugging; nothing is swallowed.
    #[error("pass command failed ({status}): {stderr}")]
    CommandFailed {
        /// Exit status of the subprocess (exit code absent if signal-killed)
        status: ExitStatus,
        /// Complete stderr output of the failed invocation
        stderr: String,
    },

    /// `pass` exited successfully but its output was not valid UTF-8.
    ///
    /// Secrets must round-trip byte-for-byte as strings; rather than
    /// lossily converting, the lookup is rejected.
    #[error("pass produced non-UTF-8 output for '{key}'")]
    InvalidOutput {
        /// The key whose output could not be decoded
        key: String,
    },
}
