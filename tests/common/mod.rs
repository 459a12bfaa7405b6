//! Shared test fixture: a fake `pass` executable plus disposable store
//! directories.
//!
//! The real `pass` needs gpg and an imported key, which makes it a poor
//! citizen in CI. The shim below speaks the same contract at the process
//! boundary - `--version`, `show <key>`, `$PASSWORD_STORE_DIR`, the exact
//! not-found wording on stderr - while storing entries as plain files, so
//! the crate's subprocess plumbing and classification are exercised against
//! a real subprocess without any gpg dependency.

#![allow(dead_code)]

use std::env;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use assert_fs::prelude::*;
use passgate::{PassStore, StoreLocation};
use tempfile::TempDir;

/// Shell stand-in for pass(1).
///
/// Entries live at `$PASSWORD_STORE_DIR/<key>.secret`; a `<key>.fail` file
/// makes `show` print that file to stderr and exit 2, which lets tests
/// script gpg-style failures.
const PASS_SHIM: &str = r#"#!/bin/sh
case "$1" in
    --version)
        echo "passgate test shim v1"
        exit 0
        ;;
    show)
        key="$2"
        base="$PASSWORD_STORE_DIR/$key"
        if [ -f "$base.fail" ]; then
            cat "$base.fail" >&2
            exit 2
        fi
        if [ -f "$base.secret" ]; then
            cat "$base.secret"
            exit 0
        fi
        echo "Error: $key is not in the password store." >&2
        exit 1
        ;;
    *)
        echo "Usage: pass show pass-name" >&2
        exit 2
        ;;
esac
"#;

/// Install the shim on `PATH` once per test process.
///
/// Must be called before any `PassStore` is opened. The shim directory is
/// prepended, so it shadows a real `pass` if one is installed.
pub fn install_pass_shim() {
    static SHIM_DIR: OnceLock<TempDir> = OnceLock::new();

    SHIM_DIR.get_or_init(|| {
        let dir = TempDir::new().expect("create shim dir");
        let shim = dir.path().join("pass");
        fs::write(&shim, PASS_SHIM).expect("write shim");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&shim, fs::Permissions::from_mode(0o755)).expect("chmod shim");
        }

        let old_path = env::var_os("PATH").unwrap_or_default();
        let mut new_path = dir.path().as_os_str().to_os_string();
        new_path.push(":");
        new_path.push(old_path);
        env::set_var("PATH", new_path);

        dir
    });
}

/// An initialized (or deliberately uninitialized) store directory served by
/// the shim.
pub struct StoreFixture {
    dir: assert_fs::TempDir,
}

impl StoreFixture {
    /// A fresh store containing a `.gpg-id` marker.
    pub fn new() -> Self {
        install_pass_shim();

        let dir = assert_fs::TempDir::new().expect("create store dir");
        dir.child(".gpg-id")
            .write_str("testkey@example.com\n")
            .expect("write marker");

        Self { dir }
    }

    /// An existing directory that was never `pass init`ed.
    pub fn uninitialized() -> Self {
        install_pass_shim();

        Self {
            dir: assert_fs::TempDir::new().expect("create store dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Store `value` at `key` the way pass would hand it back: with a
    /// trailing newline appended by the tool.
    pub fn insert(&self, key: &str, value: &str) {
        self.insert_raw(key, &format!("{value}\n"));
    }

    /// Store exact bytes at `key`, no newline added.
    pub fn insert_raw(&self, key: &str, content: &str) {
        self.dir
            .child(format!("{key}.secret"))
            .write_str(content)
            .expect("write entry");
    }

    /// Store raw bytes at `key`, for entries that are not valid UTF-8.
    pub fn insert_bytes(&self, key: &str, content: &[u8]) {
        self.dir
            .child(format!("{key}.secret"))
            .write_binary(content)
            .expect("write binary entry");
    }

    /// Make lookups of `key` fail with the given stderr text (exit 2).
    pub fn insert_failure(&self, key: &str, stderr: &str) {
        self.dir
            .child(format!("{key}.fail"))
            .write_str(stderr)
            .expect("write failure entry");
    }

    /// Open a handle on this fixture's directory.
    pub fn store(&self) -> PassStore {
        PassStore::open(StoreLocation::Path(self.dir.path().to_path_buf()))
            .expect("open fixture store")
    }
}
