//! INI line classifier.
//!
//! Sniffs the shape of a single line and dispatches it to an [`IniHandler`].
//! Nothing is retained between calls, so the same line always produces the
//! same hook sequence.

use crate::error::ReaderError;
use crate::handler::IniHandler;
use serde::Serialize;
use std::fmt;

/// Separator between nested section names, e.g. `[parent/child]`.
pub const PATH_SEPARATOR: char = '/';

/// Separator between a key and its value.
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Recognized shape of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Exactly the empty string
    Empty,
    /// Starts with `#` or `;`
    Comment,
    /// Starts with `[` and ends with `]`
    Section,
    /// Contains at least one `=`
    KeyValue,
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineKind::Empty => "empty",
            LineKind::Comment => "comment",
            LineKind::Section => "section",
            LineKind::KeyValue => "key-value",
        };
        write!(f, "{}", name)
    }
}

/// Determine the shape of a line without firing any hook.
///
/// Checks run on the untrimmed line, first match wins:
/// empty, comment, section, key-value. Returns `None` for anything else.
///
/// A whitespace-only line is not empty; it is only recognized if it
/// happens to contain `=`.
pub fn sniff(line: &str) -> Option<LineKind> {
    if line.is_empty() {
        Some(LineKind::Empty)
    } else if line.starts_with('#') || line.starts_with(';') {
        Some(LineKind::Comment)
    } else if line.starts_with('[') && line.ends_with(']') {
        Some(LineKind::Section)
    } else if line.contains(KEY_VALUE_SEPARATOR) {
        Some(LineKind::KeyValue)
    } else {
        None
    }
}

/// Classify one line and fire the matching hooks on `handler`.
///
/// Returns `true` if the line was recognized, `false` if it matched none of
/// the known shapes (in which case no hook fires).
pub fn read_line<H: IniHandler + ?Sized>(line: &str, handler: &mut H) -> bool {
    classify_line(line, handler).is_some()
}

/// Classify one line, fire its hooks, and report the shape it matched.
///
/// Returns `None` for an unrecognized line.
pub fn classify_line<H: IniHandler + ?Sized>(line: &str, handler: &mut H) -> Option<LineKind> {
    let Some(kind) = sniff(line) else {
        log::trace!("Unrecognized INI line: {:?}", line);
        return None;
    };
    log::trace!("Classified INI line as {}: {:?}", kind, line);

    match kind {
        LineKind::Empty => handler.on_empty(),
        LineKind::Comment => handler.on_comment(line),
        LineKind::Section => read_section(line, handler),
        LineKind::KeyValue => read_key_value(line, handler),
    }
    Some(kind)
}

/// Like [`read_line`], but rejects an absent line.
///
/// `None` is a caller error distinct from an empty line and is reported as
/// [`ReaderError::InvalidArgument`] without invoking any hook.
pub fn read_optional_line<H: IniHandler + ?Sized>(
    line: Option<&str>,
    handler: &mut H,
) -> Result<bool, ReaderError> {
    let line = line.ok_or(ReaderError::InvalidArgument("no line provided"))?;
    Ok(read_line(line, handler))
}

/// Dispatch a `[a/b/c]` header.
///
/// The caller guarantees the line starts with `[` and ends with `]`, so it
/// is at least two bytes long and both ends are single-byte characters.
fn read_section<H: IniHandler + ?Sized>(line: &str, handler: &mut H) {
    let interior = &line[1..line.len() - 1];
    let names: Vec<&str> = interior.split(PATH_SEPARATOR).map(str::trim).collect();

    let separator = PATH_SEPARATOR.to_string();
    handler.on_section(&names.join(separator.as_str()));

    let mut path = String::with_capacity(interior.len());
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            path.push(PATH_SEPARATOR);
        }
        path.push_str(name);

        if name.is_empty() {
            handler.on_section_empty(name, &path);
        }
        handler.on_sub_section(name, &path);
    }
}

/// Dispatch a `key=value` line.
///
/// The line is split on every `=`; only the first two parts are used, so
/// `a=b=c` yields key `a` and value `b`. Neither part is trimmed.
fn read_key_value<H: IniHandler + ?Sized>(line: &str, handler: &mut H) {
    let mut parts = line.split(KEY_VALUE_SEPARATOR);
    let key = parts.next().unwrap_or_default();
    let value = parts.next().unwrap_or_default();

    if key.is_empty() {
        handler.on_key_empty(value);
    }
    if value.is_empty() {
        handler.on_value_empty(key);
    }
    handler.on_key_value(key, value);
}

/// A line reader that owns (or borrows, via `&mut H`) its handler.
///
/// Holds no state of its own beyond the handler; every call to
/// [`IniReader::read_line`] is independent.
#[derive(Debug, Default)]
pub struct IniReader<H> {
    handler: H,
}

impl<H: IniHandler> IniReader<H> {
    /// Wrap a handler.
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    /// Classify one line, firing hooks on the wrapped handler.
    pub fn read_line(&mut self, line: &str) -> bool {
        read_line(line, &mut self.handler)
    }

    /// Classify an optional line; `None` is rejected.
    pub fn read_optional_line(&mut self, line: Option<&str>) -> Result<bool, ReaderError> {
        read_optional_line(line, &mut self.handler)
    }

    /// Borrow the handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Mutably borrow the handler.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Unwrap the handler.
    pub fn into_handler(self) -> H {
        self.handler
    }
}
