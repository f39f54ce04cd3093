//! Small text utilities shared by the pipeline and the CLI boundary.

use regex::Regex;
use std::sync::LazyLock;

static BLANK_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    Crlf,
}

/// Detect the dominant line ending of the input. Ties go to LF.
pub fn detect_line_ending(content: &str) -> LineEnding {
    let crlf_count = content.matches("\r\n").count();
    let lf_count = content.matches('\n').count() - crlf_count;
    if crlf_count > lf_count { LineEnding::Crlf } else { LineEnding::Lf }
}

/// Normalize all line endings to LF for internal processing.
pub fn normalize_to_lf(content: &str) -> String {
    content.replace("\r\n", "\n")
}

/// Convert LF-normalized output back to the requested line ending.
pub fn apply_line_ending(content: &str, ending: LineEnding) -> String {
    match ending {
        LineEnding::Lf => content.to_string(),
        LineEnding::Crlf => content.replace('\n', "\r\n"),
    }
}

/// Collapse runs of three or more newlines to exactly two.
pub fn collapse_blank_runs(content: &str) -> String {
    BLANK_RUN_REGEX.replace_all(content, "\n\n").into_owned()
}
