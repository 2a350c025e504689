//! Event-driven INI line reader.
//!
//! Classifies one line at a time as empty, comment, section header or
//! `key=value` pair and reports it through an [`IniHandler`]. The reader
//! keeps no state between lines: tracking the current section, building a
//! document or reading files is up to the handler and its caller.
//!
//! Features:
//! - Nested section paths (`[parent/child]`) reported segment by segment
//! - Empty key, value and section-segment notifications
//! - Event-producer API ([`line_events`]) for callers that prefer values over callbacks
//! - Per-line outcome reports over a sequence of lines ([`read_lines`])

mod classify;
mod error;
pub mod event;
pub mod handler;
pub mod sequence;

pub use classify::{
    IniReader, KEY_VALUE_SEPARATOR, LineKind, PATH_SEPARATOR, classify_line, read_line,
    read_optional_line, sniff,
};
pub use error::ReaderError;
pub use event::{EventRecorder, LineEvent, line_events};
pub use handler::{IniHandler, NoopHandler};
pub use sequence::{LineOutcome, ReadReport, read_line_outcome, read_lines};
