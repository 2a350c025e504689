//! Hook interface for classified lines.
//!
//! Implementors override the subset of hooks they care about; every hook
//! defaults to a no-op.

/// Receives classification events from [`read_line`](crate::read_line).
///
/// Hooks are invoked synchronously, in the order the line is analysed. A
/// single line produces exactly one primary hook (`on_empty`, `on_comment`,
/// `on_section` or `on_key_value`) plus any sub-events attached to it.
pub trait IniHandler {
    /// The line was exactly the empty string.
    fn on_empty(&mut self) {}

    /// The line is a comment.
    ///
    /// `line` is the complete line, comment prefix included.
    fn on_comment(&mut self, _line: &str) {}

    /// The line is a section header.
    ///
    /// Called before any subsection hook, with the whole path after each
    /// segment has been trimmed and rejoined with `/`.
    /// Example: `[a/b /c/  d]` reports `"a/b/c/d"`.
    fn on_section(&mut self, _path: &str) {}

    /// Called once per segment of a section path, left to right.
    ///
    /// For `[a/b/c]` this is called three times:
    /// - `on_sub_section("a", "a")`
    /// - `on_sub_section("b", "a/b")`
    /// - `on_sub_section("c", "a/b/c")`
    fn on_sub_section(&mut self, _name: &str, _path: &str) {}

    /// A section path segment is empty after trimming.
    ///
    /// Fired immediately before the matching `on_sub_section`.
    fn on_section_empty(&mut self, _name: &str, _path: &str) {}

    /// The line is a `key=value` pair.
    fn on_key_value(&mut self, _key: &str, _value: &str) {}

    /// The key of a `key=value` pair is empty. Fired before `on_key_value`.
    fn on_key_empty(&mut self, _value: &str) {}

    /// The value of a `key=value` pair is empty. Fired before `on_key_value`.
    fn on_value_empty(&mut self, _key: &str) {}
}

impl<H: IniHandler + ?Sized> IniHandler for &mut H {
    fn on_empty(&mut self) {
        (**self).on_empty();
    }

    fn on_comment(&mut self, line: &str) {
        (**self).on_comment(line);
    }

    fn on_section(&mut self, path: &str) {
        (**self).on_section(path);
    }

    fn on_sub_section(&mut self, name: &str, path: &str) {
        (**self).on_sub_section(name, path);
    }

    fn on_section_empty(&mut self, name: &str, path: &str) {
        (**self).on_section_empty(name, path);
    }

    fn on_key_value(&mut self, key: &str, value: &str) {
        (**self).on_key_value(key, value);
    }

    fn on_key_empty(&mut self, value: &str) {
        (**self).on_key_empty(value);
    }

    fn on_value_empty(&mut self, key: &str) {
        (**self).on_value_empty(key);
    }
}

/// Handler that ignores every event.
///
/// Useful when only the recognized/unrecognized result matters.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHandler;

impl IniHandler for NoopHandler {}
