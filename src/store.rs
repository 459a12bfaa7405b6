//! store
//!
//! The `PassStore` handle: construction-time validation plus per-request
//! lookups through `pass show`.
//!
//! # Design
//!
//! A handle is an immutable resolved directory, nothing more. Construction
//! front-loads every environment check (tool invocable, directory exists,
//! store initialized) so that lookup failures can be attributed to the
//! lookup itself. Each lookup spawns an independent `pass` subprocess with
//! `PASSWORD_STORE_DIR` pointed at the frozen directory; there is no cache,
//! no retry, and no shared mutable state, so handles are freely shareable
//! across threads.
//!
//! The directory is validated once. If the store is deleted or broken after
//! construction, the next lookup surfaces whatever `pass` reports; that race
//! is accepted rather than defended against.
//!
//! # Security
//!
//! Secret values are never logged or included in error messages. Tracing
//! output mentions key names and the store directory only.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::classify::classify_failure;
use crate::error::PassError;
use crate::location::{StoreLocation, MARKER_FILE, STORE_DIR_ENV};

/// Name of the external binary everything is delegated to.
const PASS_PROGRAM: &str = "pass";

/// Read-only handle to an initialized password store.
///
/// # Example
///
/// ```ignore
/// use passgate::{PassStore, StoreLocation};
///
/// let store = PassStore::open(StoreLocation::Path("/srv/secrets".into()))?;
///
/// let secret = store.get("deploy/registry-token")?;
/// // Use secret (never print it!)
///
/// let region = store.get_or("deploy/region", "us-east-1")?;
/// ```
#[derive(Debug, Clone)]
pub struct PassStore {
    /// Resolved store root, frozen at construction
    dir: PathBuf,
}

impl PassStore {
    /// Open a store at the given location.
    ///
    /// Verifies that `pass` is invocable (`pass --version` exits zero),
    /// resolves the directory per [`StoreLocation`] precedence, and checks
    /// that the directory exists and contains a `.gpg-id` marker.
    ///
    /// # Errors
    ///
    /// - [`PassError::ToolUnavailable`] if `pass` cannot be run
    /// - [`PassError::InvalidDirectory`] if the resolved directory is
    ///   missing or was never initialized with `pass init`
    pub fn open(location: StoreLocation) -> Result<Self, PassError> {
        probe_tool()?;

        let dir = location.resolve()?;
        validate_store_dir(&dir)?;

        debug!(dir = %dir.display(), "opened password store");
        Ok(Self { dir })
    }

    /// Open the store at the platform default location
    /// (`~/.password-store`), ignoring `$PASSWORD_STORE_DIR`.
    pub fn open_default() -> Result<Self, PassError> {
        Self::open(StoreLocation::Default)
    }

    /// The store root this handle operates on.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Fetch and decrypt the secret stored at `key`.
    ///
    /// Runs `pass show <key>` against this handle's directory. On success
    /// the returned string is the subprocess's stdout with exactly one
    /// trailing line terminator removed; interior newlines (multi-line
    /// entries) are preserved.
    ///
    /// # Errors
    ///
    /// - [`PassError::NotFound`] if the key has no entry
    /// - [`PassError::DecryptionFailed`] / [`PassError::SecretKeyUnavailable`]
    ///   for gpg-layer problems; these are never mapped to `NotFound`
    /// - [`PassError::CommandFailed`] for any unrecognized non-zero exit
    ///
    /// # Security
    ///
    /// The returned value is the raw secret. Do not log or print it.
    pub fn get(&self, key: &str) -> Result<String, PassError> {
        debug!(key, "pass show");

        let output = Command::new(PASS_PROGRAM)
            .arg("show")
            .arg(key)
            .env(STORE_DIR_ENV, &self.dir)
            .output()
            .map_err(|e| PassError::ToolUnavailable {
                reason: format!("cannot invoke {PASS_PROGRAM}: {e}"),
            })?;

        if output.status.success() {
            // A zero exit is authoritative; stderr may still carry gpg
            // chatter and is ignored.
            let stdout = String::from_utf8(output.stdout).map_err(|_| PassError::InvalidOutput {
                key: key.to_string(),
            })?;
            return Ok(trim_one_terminator(stdout));
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let err = classify_failure(output.status, &stderr, key);
        debug!(key, error = %err, "pass show failed");
        Err(err)
    }

    /// Like [`get`](Self::get), but an absent key is `Ok(None)` instead of
    /// an error. All other failures propagate.
    pub fn get_opt(&self, key: &str) -> Result<Option<String>, PassError> {
        match self.get(key) {
            Ok(value) => Ok(Some(value)),
            Err(PassError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Like [`get`](Self::get), but an absent key yields `default`
    /// unchanged. All other failures propagate.
    pub fn get_or(&self, key: &str, default: impl Into<String>) -> Result<String, PassError> {
        match self.get(key) {
            Ok(value) => Ok(value),
            Err(PassError::NotFound { .. }) => Ok(default.into()),
            Err(e) => Err(e),
        }
    }

    /// Whether an entry exists at `key`.
    ///
    /// `false` means the store answered "not found". Decryption and tooling
    /// failures propagate as errors rather than being collapsed into
    /// `false`, so a misconfigured gpg setup is never mistaken for an
    /// absent key.
    pub fn exists(&self, key: &str) -> Result<bool, PassError> {
        match self.get(key) {
            Ok(_) => Ok(true),
            Err(PassError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// Check that `pass` can be invoked at all.
///
/// Output is discarded; only spawnability and a zero exit matter.
fn probe_tool() -> Result<(), PassError> {
    let output = Command::new(PASS_PROGRAM)
        .arg("--version")
        .output()
        .map_err(|e| PassError::ToolUnavailable {
            reason: format!("cannot invoke {PASS_PROGRAM}: {e}"),
        })?;

    if !output.status.success() {
        return Err(PassError::ToolUnavailable {
            reason: format!("`{PASS_PROGRAM} --version` exited with {}", output.status),
        });
    }

    Ok(())
}

/// Check that `dir` exists and has been initialized with `pass init`.
fn validate_store_dir(dir: &Path) -> Result<(), PassError> {
    if !dir.exists() {
        return Err(PassError::InvalidDirectory {
            path: dir.to_path_buf(),
            reason: "does not exist".into(),
        });
    }

    if !dir.is_dir() {
        return Err(PassError::InvalidDirectory {
            path: dir.to_path_buf(),
            reason: "not a directory".into(),
        });
    }

    if !dir.join(MARKER_FILE).is_file() {
        return Err(PassError::InvalidDirectory {
            path: dir.to_path_buf(),
            reason: format!("not initialized (missing {MARKER_FILE})"),
        });
    }

    Ok(())
}

/// Strip exactly one trailing line terminator (`\n` or `\r\n`).
///
/// `pass show` appends a single newline to the decrypted content; removing
/// more than one would corrupt secrets that legitimately end in blank
/// lines.
fn trim_one_terminator(mut s: String) -> String {
    if s.ends_with('\n') {
        s.pop();
        if s.ends_with('\r') {
            s.pop();
        }
    }
    s
}
