//! Passgate - a read-only client for `pass`, the standard Unix password manager.
//!
//! Passgate is a thin adapter over the `pass` command-line tool. It does not
//! implement any cryptography of its own: `pass` (and, underneath it, GnuPG)
//! owns encryption, file layout, and key management. Passgate's job is to
//! resolve the store directory, verify up front that the tool and the store
//! are usable, and turn each lookup's exit status and stderr diagnostics into
//! a typed result.
//!
//! # Architecture
//!
//! - [`store`] - The [`PassStore`] handle: construction-time validation and
//!   per-request lookups via `pass show`
//! - [`location`] - Three-way store directory resolution
//!   (explicit path / environment / platform default)
//! - [`classify`] - Maps a failed invocation's exit status and stderr text
//!   to a [`PassError`] kind
//! - [`error`] - The [`PassError`] taxonomy
//!
//! # Security
//!
//! Secret values are **never** logged, printed, or included in error
//! messages. Diagnostics mention key names and directories only.
//!
//! # Example
//!
//! ```ignore
//! use passgate::{PassStore, StoreLocation};
//!
//! // Respect $PASSWORD_STORE_DIR, falling back to ~/.password-store.
//! let store = PassStore::open(StoreLocation::Environment)?;
//!
//! let token = store.get("work/email/gmail")?;
//! // Use token (never print it!)
//!
//! if !store.exists("work/email/outlook")? {
//!     // Key absent; decryption problems would have been an Err instead.
//! }
//! ```
//!
//! # Correctness Invariants
//!
//! 1. A constructed [`PassStore`] saw an existing directory containing a
//!    `.gpg-id` marker at construction time (later external changes are an
//!    accepted race, surfaced at lookup time)
//! 2. The environment is consulted only during construction; each handle
//!    freezes its resolved directory
//! 3. "Not found" is never conflated with decryption or tooling failures
//! 4. No lookup result is cached and nothing is written to disk

pub mod classify;
pub mod error;
pub mod location;
pub mod store;

pub use error::PassError;
pub use location::StoreLocation;
pub use store::PassStore;
