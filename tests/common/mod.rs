//! Shared integration test helpers for mini-ini.
//!
//! Include with `mod common;` at the top of a test file. The
//! `#[allow(dead_code)]` attribute suppresses warnings when only a subset of
//! helpers are used per file.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A small document exercising every line shape.
pub const SAMPLE_INI: &str = "\
; global settings
name=demo
debug=

[server]
host=localhost
port=8080

[server/ tls ]
cert=/etc/cert.pem
=orphan
not an ini line
";

/// Writes `contents` to `<tmp>/<file_name>` and returns its path.
///
/// The `TempDir` must be kept alive for the duration of the test.
pub fn write_ini(file_name: &str, contents: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(file_name);
    fs::write(&path, contents).expect("Failed to write INI file");
    (path, temp_dir)
}
