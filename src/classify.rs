//! Structural classification of input lines.
//!
//! Each (already redacted) line gets exactly one tag. Rules are
//! evaluated in a fixed priority order and the first match wins, so a
//! line like `Terminal` is a bold UI label even though it would also
//! pass the section-header shape.

use regex::Regex;
use std::sync::LazyLock;

/// Short standalone lines matching `Uppercase words, optional colon`.
static SECTION_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z][A-Za-z\s]+:?$").unwrap());

/// Bare file names by extension.
static FILENAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(js|ts|jsx|tsx|html|css|json|env|md|py|java|go|rs)$").unwrap());

/// `(H:MM:SS)` style markers at the start of a line.
static TIMESTAMP_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\(\d+:\d+:\d+\)").unwrap());

/// Code-syntax signatures. Any hit makes the line part of a code block.
static CODE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\{.*\}",                            // braces on one line
        r"function\s+\w+",                    // function declarations
        r"const\s+\w+\s*=",                   // const declarations
        r"let\s+\w+\s*=",                     // let declarations
        r"var\s+\w+\s*=",                     // var declarations
        r"=>",                                // arrow functions
        r"import\s+.*from",                   // ES module imports
        r#"require\(['"]"#,                   // CommonJS require
        r"export\s+(default|const|function)", // exports
        r"</?\w+[^>]*>",                      // HTML/JSX tags
        r"interface\s+\w+",                   // TypeScript interfaces
        r"type\s+\w+\s*=",                    // TypeScript type aliases
        r"^[A-Z][A-Z0-9_]*\s*=",              // env-style assignments
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Shell-invocation signatures, checked against the trimmed line.
static TERMINAL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^(npm|yarn|npx|pnpm)\s+",
        r"^(node|git|docker|kubectl)\s+",
        r"^(cd|ls|mkdir|cp|mv|rm)\s+",
        r"^\$\s+",
        r"^[a-zA-Z]:\\.*>", // Windows drive-path prompt
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// UI elements that read better in bold than as prose.
const UI_LABELS: &[&str] = &[
    "Terminal",
    "Explorer",
    "Visual Studio Code",
    "Web Browser",
    "AWS UI",
    "AWS Console",
    "Services",
    "Resources",
];

/// Structural role of one input line.
///
/// `Code`, `Terminal` and `Text` are block-joining: consecutive lines
/// of the same tag merge into one rendered block. Everything else is
/// emitted directly and never accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTag {
    Blank,
    Title,
    BulletUrl,
    BoldLabel,
    SectionHeader,
    Code,
    Terminal,
    Separator,
    Timestamp,
    Text,
}

impl LineTag {
    /// Whether this tag renders immediately instead of joining a block.
    pub fn is_direct_emit(&self) -> bool {
        matches!(
            self,
            LineTag::Title
                | LineTag::BulletUrl
                | LineTag::BoldLabel
                | LineTag::SectionHeader
                | LineTag::Separator
                | LineTag::Timestamp
        )
    }
}

/// Line classifier closing over the immutable label table.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    extra_labels: Vec<String>,
}

impl Classifier {
    pub fn new(extra_labels: &[String]) -> Self {
        Self {
            extra_labels: extra_labels.to_vec(),
        }
    }

    /// Classify a redacted line at the given 0-based position.
    pub fn classify(&self, line: &str, index: usize) -> LineTag {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return LineTag::Blank;
        }

        if index == 0 && !trimmed.starts_with('#') {
            return LineTag::Title;
        }

        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            return LineTag::BulletUrl;
        }

        if self.is_ui_label(trimmed) || FILENAME_REGEX.is_match(trimmed) {
            return LineTag::BoldLabel;
        }

        if trimmed.len() < 50 && SECTION_HEADER_REGEX.is_match(trimmed) {
            return LineTag::SectionHeader;
        }

        if CODE_PATTERNS.iter().any(|p| p.is_match(line)) {
            return LineTag::Code;
        }

        if TERMINAL_PATTERNS.iter().any(|p| p.is_match(trimmed)) {
            return LineTag::Terminal;
        }

        if trimmed == "---" || trimmed == "___" {
            return LineTag::Separator;
        }

        if TIMESTAMP_REGEX.is_match(trimmed) {
            return LineTag::Timestamp;
        }

        LineTag::Text
    }

    fn is_ui_label(&self, trimmed: &str) -> bool {
        UI_LABELS.contains(&trimmed) || self.extra_labels.iter().any(|l| l == trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(line: &str, index: usize) -> LineTag {
        Classifier::default().classify(line, index)
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(classify("", 3), LineTag::Blank);
        assert_eq!(classify("   \t", 3), LineTag::Blank);
        // Blank wins even at index 0
        assert_eq!(classify("", 0), LineTag::Blank);
    }

    #[test]
    fn test_title_only_at_first_line() {
        assert_eq!(classify("My Project", 0), LineTag::Title);
        assert_ne!(classify("My Project", 1), LineTag::Title);
    }

    #[test]
    fn test_existing_heading_is_not_retitled() {
        assert_ne!(classify("# Already a heading", 0), LineTag::Title);
    }

    #[test]
    fn test_bullet_url() {
        assert_eq!(classify("https://example.com", 2), LineTag::BulletUrl);
        assert_eq!(classify("  http://localhost:3000", 2), LineTag::BulletUrl);
        assert_eq!(classify("see https://example.com", 2), LineTag::Text);
    }

    #[test]
    fn test_bold_ui_labels() {
        assert_eq!(classify("Terminal", 2), LineTag::BoldLabel);
        assert_eq!(classify("Visual Studio Code", 2), LineTag::BoldLabel);
        assert_eq!(classify("AWS Console", 2), LineTag::BoldLabel);
    }

    #[test]
    fn test_bold_filenames() {
        assert_eq!(classify("index.js", 2), LineTag::BoldLabel);
        assert_eq!(classify("main.RS", 2), LineTag::BoldLabel);
        assert_eq!(classify("styles.css", 2), LineTag::BoldLabel);
        assert_eq!(classify("notes.txt", 2), LineTag::Text);
    }

    #[test]
    fn test_extra_labels_from_config() {
        let classifier = Classifier::new(&["Dock".to_string()]);
        assert_eq!(classifier.classify("Dock", 2), LineTag::BoldLabel);
        // Without the extra label the word falls back to the header shape
        assert_eq!(classify("Dock", 2), LineTag::SectionHeader);
    }

    #[test]
    fn test_section_header() {
        assert_eq!(classify("Installation", 2), LineTag::SectionHeader);
        assert_eq!(classify("Getting Started:", 2), LineTag::SectionHeader);
        // lowercase start is plain text
        assert_eq!(classify("installation", 2), LineTag::Text);
        // 50 chars and beyond are prose, not headers
        let long = "A".repeat(50);
        assert_eq!(classify(&long, 2), LineTag::Text);
    }

    #[test]
    fn test_label_priority_over_section_header() {
        // "Services" fits the section-header shape but the label rule fires first
        assert_eq!(classify("Services", 2), LineTag::BoldLabel);
    }

    #[test]
    fn test_code_lines() {
        assert_eq!(classify("const x = 5;", 2), LineTag::Code);
        assert_eq!(classify("let total = 3;", 2), LineTag::Code);
        assert_eq!(classify("function handle(req) {", 2), LineTag::Code);
        assert_eq!(classify("items.map(i => i.id)", 2), LineTag::Code);
        assert_eq!(classify("import fs from 'fs';", 2), LineTag::Code);
        assert_eq!(classify("require('express')", 2), LineTag::Code);
        assert_eq!(classify("export default App", 2), LineTag::Code);
        assert_eq!(classify("<div className=\"app\">", 2), LineTag::Code);
        assert_eq!(classify("interface Props {", 2), LineTag::Code);
        assert_eq!(classify("type Id = string;", 2), LineTag::Code);
        assert_eq!(classify("API_KEY=...", 2), LineTag::Code);
    }

    #[test]
    fn test_terminal_lines() {
        assert_eq!(classify("npm install express", 2), LineTag::Terminal);
        assert_eq!(classify("git commit -m 'wip'", 2), LineTag::Terminal);
        assert_eq!(classify("  cd projects", 2), LineTag::Terminal);
        assert_eq!(classify("$ make build", 2), LineTag::Terminal);
        assert_eq!(classify("C:\\Users\\dev> dir", 2), LineTag::Terminal);
    }

    #[test]
    fn test_code_priority_over_terminal() {
        // A command line containing an arrow token is still code
        assert_eq!(classify("npm run build => ok", 2), LineTag::Code);
    }

    #[test]
    fn test_separator() {
        assert_eq!(classify("---", 2), LineTag::Separator);
        assert_eq!(classify("___", 2), LineTag::Separator);
        assert_eq!(classify("----", 2), LineTag::Text);
    }

    #[test]
    fn test_timestamp() {
        assert_eq!(classify("(1:23:45) Setting up the repo", 2), LineTag::Timestamp);
        assert_eq!(classify("(0:05:00)", 2), LineTag::Timestamp);
        assert_eq!(classify("at (1:23:45)", 2), LineTag::Text);
    }

    #[test]
    fn test_default_text() {
        assert_eq!(classify("just some prose here", 2), LineTag::Text);
    }

    #[test]
    fn test_direct_emit_split() {
        assert!(LineTag::Title.is_direct_emit());
        assert!(LineTag::BulletUrl.is_direct_emit());
        assert!(LineTag::Separator.is_direct_emit());
        assert!(!LineTag::Code.is_direct_emit());
        assert!(!LineTag::Terminal.is_direct_emit());
        assert!(!LineTag::Text.is_direct_emit());
        assert!(!LineTag::Blank.is_direct_emit());
    }
}
