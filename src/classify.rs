//! classify
//!
//! Maps a failed `pass show` invocation to a [`PassError`] kind.
//!
//! # Design
//!
//! `pass` reports everything through its exit status and free-form stderr
//! text, so classification is substring matching against known diagnostics.
//! That coupling to message wording is fragile by nature (a locale or
//! upstream wording change breaks it), which is exactly why it is confined
//! to this one function: call sites depend on [`PassError`] kinds, never on
//! the matching rules.
//!
//! Matching is priority-ordered. "Not in the password store" wins over any
//! gpg noise, and a decryption failure wins over a missing-secret-key
//! message because gpg commonly emits both on the same run.

use std::process::ExitStatus;

use crate::error::PassError;

/// Stderr fragment `pass` prints for an absent entry.
const NOT_IN_STORE: &str = "is not in the password store";

/// Stderr fragments gpg prints when decryption fails outright.
const DECRYPTION_FAILED: &[&str] = &["gpg: decryption failed", "gpg: public key decryption failed"];

/// Stderr fragments gpg prints when no usable secret key is present.
const NO_SECRET_KEY: &[&str] = &["gpg: No secret key", "gpg: secret key not available"];

/// Classify a non-zero `pass show` exit into a semantic error.
///
/// Anything unrecognized becomes [`PassError::CommandFailed`] with the exit
/// status and the complete stderr text preserved for debugging.
pub fn classify_failure(status: ExitStatus, stderr: &str, key: &str) -> PassError {
    if stderr.contains(NOT_IN_STORE) {
        return PassError::NotFound {
            key: key.to_string(),
        };
    }

    if DECRYPTION_FAILED.iter().any(|m| stderr.contains(m)) {
        return PassError::DecryptionFailed {
            key: key.to_string(),
        };
    }

    if NO_SECRET_KEY.iter().any(|m| stderr.contains(m)) {
        return PassError::SecretKeyUnavailable {
            key: key.to_string(),
        };
    }

    PassError::CommandFailed {
        status,
        stderr: stderr.to_string(),
    }
}
