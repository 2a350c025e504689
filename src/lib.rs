//! mini-ini: collaborators built on the stateless `mini-ini-reader` core.
//!
//! - [`document`] groups classified lines into sections and entries
//! - [`cli`] implements the `mini-ini` dump tool

/// Crate version, reported by the CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod document;

pub use document::{IniDocument, IniEntry, IniSection};
pub use mini_ini_reader as reader;
