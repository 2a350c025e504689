//! Event-producer view of the classifier.
//!
//! Instead of implementing [`IniHandler`], callers can collect the hook
//! sequence for a line as a list of [`LineEvent`] values.

use crate::classify::read_line;
use crate::handler::IniHandler;
use serde::Serialize;

/// One hook invocation, with owned arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LineEvent {
    Empty,
    Comment { line: String },
    Section { path: String },
    SubSection { name: String, path: String },
    SectionEmpty { name: String, path: String },
    KeyValue { key: String, value: String },
    KeyEmpty { value: String },
    ValueEmpty { key: String },
}

/// Handler that records every hook call as a [`LineEvent`].
#[derive(Debug, Default, Clone)]
pub struct EventRecorder {
    events: Vec<LineEvent>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far, in firing order.
    pub fn events(&self) -> &[LineEvent] {
        &self.events
    }

    /// Take the recorded events, leaving the recorder empty.
    pub fn drain(&mut self) -> Vec<LineEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn into_events(self) -> Vec<LineEvent> {
        self.events
    }
}

impl IniHandler for EventRecorder {
    fn on_empty(&mut self) {
        self.events.push(LineEvent::Empty);
    }

    fn on_comment(&mut self, line: &str) {
        self.events.push(LineEvent::Comment {
            line: line.to_string(),
        });
    }

    fn on_section(&mut self, path: &str) {
        self.events.push(LineEvent::Section {
            path: path.to_string(),
        });
    }

    fn on_sub_section(&mut self, name: &str, path: &str) {
        self.events.push(LineEvent::SubSection {
            name: name.to_string(),
            path: path.to_string(),
        });
    }

    fn on_section_empty(&mut self, name: &str, path: &str) {
        self.events.push(LineEvent::SectionEmpty {
            name: name.to_string(),
            path: path.to_string(),
        });
    }

    fn on_key_value(&mut self, key: &str, value: &str) {
        self.events.push(LineEvent::KeyValue {
            key: key.to_string(),
            value: value.to_string(),
        });
    }

    fn on_key_empty(&mut self, value: &str) {
        self.events.push(LineEvent::KeyEmpty {
            value: value.to_string(),
        });
    }

    fn on_value_empty(&mut self, key: &str) {
        self.events.push(LineEvent::ValueEmpty {
            key: key.to_string(),
        });
    }
}

/// Classify a line and return its events.
///
/// Returns `None` if the line is unrecognized. A recognized line always
/// yields at least one event.
pub fn line_events(line: &str) -> Option<Vec<LineEvent>> {
    let mut recorder = EventRecorder::new();
    read_line(line, &mut recorder).then(|| recorder.into_events())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_events_unrecognized() {
        assert_eq!(line_events("nothing here"), None);
        assert_eq!(line_events("  "), None);
    }

    #[test]
    fn test_line_events_key_value() {
        assert_eq!(
            line_events("key="),
            Some(vec![
                LineEvent::ValueEmpty {
                    key: "key".to_string()
                },
                LineEvent::KeyValue {
                    key: "key".to_string(),
                    value: String::new()
                },
            ])
        );
    }

    #[test]
    fn test_recorder_drain() {
        let mut recorder = EventRecorder::new();
        read_line("", &mut recorder);
        read_line("# c", &mut recorder);
        assert_eq!(recorder.events().len(), 2);

        let drained = recorder.drain();
        assert_eq!(drained[0], LineEvent::Empty);
        assert!(recorder.events().is_empty());
    }
}
