//! Recorded transcripts and the line-level comparison behind `fpack check`.
//!
//! A transcript is the expected byte sequence for a sample, recorded here
//! independently of the renderer. `check` re-renders each sample and compares
//! line by line, so an accidental edit to either side shows up as a refuted
//! sample with the first divergence pinpointed.

use serde::{Deserialize, Serialize};

use crate::samples::{syntax, walkthrough};

/// Current schema version for check reports.
pub const CHECK_REPORT_SCHEMA_VERSION: u32 = 1;

/// Recorded transcript for the indentation walkthrough.
const WALKTHROUGH_TRANSCRIPT: &str = "\
Hello, World!
Number: 0
Even
Number: 1
Odd
Number: 2
Even
Number: 3
Odd
Number: 4
Even
Number: 5
Odd
Number: 6
Even
Number: 7
Odd
Number: 8
Even
Number: 9
Odd
This is true
This will print
";

/// Recorded transcript for the syntax tour.
const SYNTAX_TOUR_TRANSCRIPT: &str = "\
Hello, world!
Even: 0
Odd: 1
Even: 2
Odd: 3
Even: 4
Odd: 5
Even: 6
Odd: 7
Even: 8
Odd: 9
";

/// Recorded transcript for a sample id, exactly as emitted (trailing newline
/// included).
pub fn recorded(id: &str) -> Option<&'static str> {
    match id {
        walkthrough::ID => Some(WALKTHROUGH_TRANSCRIPT),
        syntax::ID => Some(SYNTAX_TOUR_TRANSCRIPT),
        _ => None,
    }
}

/// First point where a rendered sample departs from its transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Divergence {
    /// 1-based line number of the mismatch.
    pub line: usize,
    /// Transcript line, absent when the rendering ran long.
    pub expected: Option<String>,
    /// Rendered line, absent when the rendering ran short.
    pub actual: Option<String>,
}

/// Compare a recorded transcript against rendered lines.
pub fn first_divergence(expected: &str, actual: &[String]) -> Option<Divergence> {
    let mut expected_lines = expected.lines();
    let mut actual_lines = actual.iter();
    let mut line = 1;
    loop {
        match (expected_lines.next(), actual_lines.next()) {
            (None, None) => return None,
            (expected, actual) if expected == actual.map(String::as_str) => {}
            (expected, actual) => {
                return Some(Divergence {
                    line,
                    expected: expected.map(str::to_string),
                    actual: actual.cloned(),
                });
            }
        }
        line += 1;
    }
}

/// Per-sample check verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Confirmed,
    Refuted,
}

/// Check outcome for a single sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub sample_id: String,
    pub status: CheckStatus,
    pub divergence: Option<Divergence>,
}

/// Full check report across the requested samples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub schema_version: u32,
    pub pass_count: usize,
    pub fail_count: usize,
    pub results: Vec<CheckResult>,
}

impl CheckReport {
    pub fn from_results(results: Vec<CheckResult>) -> Self {
        let pass_count = results
            .iter()
            .filter(|result| result.status == CheckStatus::Confirmed)
            .count();
        let fail_count = results.len() - pass_count;
        CheckReport {
            schema_version: CHECK_REPORT_SCHEMA_VERSION,
            pass_count,
            fail_count,
            results,
        }
    }
}

#[cfg(test)]
#[path = "transcript_tests.rs"]
mod tests;
