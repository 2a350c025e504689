//! Classify a sequence of lines through one handler.
//!
//! Splitting text into lines is the caller's job; this module only walks an
//! iterator of already-split lines and records how each one was classified.

use crate::classify::{LineKind, classify_line};
use crate::handler::IniHandler;
use serde::Serialize;

/// Classification result for one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineOutcome {
    /// The line matched a known shape and its hooks fired
    Recognized(LineKind),
    /// The line matched nothing; no hooks fired
    Unrecognized,
}

impl LineOutcome {
    pub fn is_recognized(&self) -> bool {
        matches!(self, LineOutcome::Recognized(_))
    }
}

/// Per-line outcomes of [`read_lines`], in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReadReport {
    outcomes: Vec<LineOutcome>,
}

impl ReadReport {
    /// Outcomes indexed by `line_number - 1`.
    pub fn outcomes(&self) -> &[LineOutcome] {
        &self.outcomes
    }

    /// Outcome for a 1-based line number.
    pub fn outcome(&self, line_number: usize) -> Option<LineOutcome> {
        line_number
            .checked_sub(1)
            .and_then(|i| self.outcomes.get(i).copied())
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn recognized_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_recognized()).count()
    }

    pub fn unrecognized_count(&self) -> usize {
        self.len() - self.recognized_count()
    }

    /// 1-based numbers of the lines that were not recognized.
    pub fn unrecognized_lines(&self) -> impl Iterator<Item = usize> + '_ {
        self.outcomes
            .iter()
            .enumerate()
            .filter(|(_, o)| !o.is_recognized())
            .map(|(i, _)| i + 1)
    }

    /// Whether every line was recognized.
    pub fn all_recognized(&self) -> bool {
        self.outcomes.iter().all(LineOutcome::is_recognized)
    }

    fn push(&mut self, outcome: LineOutcome) {
        self.outcomes.push(outcome);
    }
}

impl FromIterator<LineOutcome> for ReadReport {
    fn from_iter<T: IntoIterator<Item = LineOutcome>>(iter: T) -> Self {
        Self {
            outcomes: iter.into_iter().collect(),
        }
    }
}

impl Extend<LineOutcome> for ReadReport {
    fn extend<T: IntoIterator<Item = LineOutcome>>(&mut self, iter: T) {
        self.outcomes.extend(iter);
    }
}

/// Classify a single line and report its outcome.
pub fn read_line_outcome<H: IniHandler + ?Sized>(line: &str, handler: &mut H) -> LineOutcome {
    match classify_line(line, handler) {
        Some(kind) => LineOutcome::Recognized(kind),
        None => LineOutcome::Unrecognized,
    }
}

/// Classify every line in order, firing hooks on `handler`.
///
/// Each line is handled independently; an unrecognized line does not stop
/// the walk.
pub fn read_lines<I, S, H>(lines: I, handler: &mut H) -> ReadReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    H: IniHandler + ?Sized,
{
    let mut report = ReadReport::default();
    for line in lines {
        report.push(read_line_outcome(line.as_ref(), handler));
    }

    log::debug!(
        "Read {} INI lines ({} recognized, {} unrecognized)",
        report.len(),
        report.recognized_count(),
        report.unrecognized_count()
    );
    report
}
