//! location
//!
//! Store directory resolution.
//!
//! # Design
//!
//! Callers express their intent as a three-way choice rather than an
//! `Option<PathBuf>`: "I did not say" and "consult the environment" are
//! different intents with different precedence, and collapsing them into a
//! nullable value would lose that distinction.
//!
//! Precedence:
//!
//! - [`StoreLocation::Path`]: the given path, verbatim
//! - [`StoreLocation::Default`]: `<home>/.password-store`, ignoring the
//!   environment entirely
//! - [`StoreLocation::Environment`]: `$PASSWORD_STORE_DIR` if set and
//!   non-empty, else `<home>/.password-store`
//!
//! The environment is read exactly once, when a handle is constructed.
//! Nothing here touches the filesystem; existence and initialization checks
//! belong to [`crate::store`].

use std::env;
use std::path::PathBuf;

use crate::error::PassError;

/// Environment variable naming the active store root.
///
/// This is the same variable `pass` itself honors, and it is also what we
/// set on each `pass show` invocation so the tool operates on the handle's
/// frozen directory.
pub const STORE_DIR_ENV: &str = "PASSWORD_STORE_DIR";

/// Marker file that identifies an initialized store.
///
/// `pass init <gpg-id>` writes this file; its presence is the only layout
/// detail we inspect.
pub const MARKER_FILE: &str = ".gpg-id";

/// Relative path of the platform default store under the home directory.
const DEFAULT_STORE_SUBDIR: &str = ".password-store";

/// Where to find the password store.
///
/// # Example
///
/// ```ignore
/// use passgate::{PassStore, StoreLocation};
///
/// // Explicit directory, used verbatim:
/// let store = PassStore::open(StoreLocation::Path("/srv/secrets".into()))?;
///
/// // Defer to $PASSWORD_STORE_DIR (falling back to ~/.password-store):
/// let store = PassStore::open(StoreLocation::Environment)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    /// Caller passed nothing: use `<home>/.password-store`.
    ///
    /// The environment variable is **not** consulted on this branch; a
    /// caller who wants it must say [`StoreLocation::Environment`].
    Default,

    /// Consult `$PASSWORD_STORE_DIR`, falling back to the platform default
    /// when the variable is unset or empty (mirroring how `pass` itself
    /// treats an empty value).
    Environment,

    /// Use this path verbatim, even if empty or relative.
    Path(PathBuf),
}

impl StoreLocation {
    /// Resolve this intent to a concrete directory path.
    ///
    /// Pure resolution; validation happens at handle construction.
    pub(crate) fn resolve(&self) -> Result<PathBuf, PassError> {
        match self {
            StoreLocation::Path(path) => Ok(path.clone()),
            StoreLocation::Default => default_store_dir(),
            StoreLocation::Environment => match env::var_os(STORE_DIR_ENV) {
                Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
                _ => default_store_dir(),
            },
        }
    }
}

/// `<home>/.password-store`, the directory `pass` uses when unconfigured.
fn default_store_dir() -> Result<PathBuf, PassError> {
    let home = dirs::home_dir().ok_or_else(|| PassError::InvalidDirectory {
        path: PathBuf::from(format!("~/{DEFAULT_STORE_SUBDIR}")),
        reason: "cannot determine home directory".into(),
    })?;
    Ok(home.join(DEFAULT_STORE_SUBDIR))
}
