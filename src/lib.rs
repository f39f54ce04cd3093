pub mod block;
pub mod classify;
pub mod config;
pub mod exit_codes;
pub mod language;
pub mod redact;
pub mod utils;

pub use block::{Accumulator, BlockKind};
pub use classify::{Classifier, LineTag};
pub use language::detect_language;
pub use redact::redact;

use crate::config::Config;

/// Options for one enhancement pass.
#[derive(Debug, Clone)]
pub struct EnhanceOptions {
    /// Mask credential-shaped substrings before rendering
    pub redact: bool,
    /// Additional bold UI labels on top of the built-in set
    pub extra_labels: Vec<String>,
}

impl Default for EnhanceOptions {
    fn default() -> Self {
        Self {
            redact: true,
            extra_labels: Vec::new(),
        }
    }
}

impl EnhanceOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            redact: config.global.redact,
            extra_labels: config.labels.extra.clone(),
        }
    }
}

/// Enhance raw text into well-formed Markdown with the default options.
pub fn enhance(text: &str) -> String {
    enhance_with_options(text, &EnhanceOptions::default())
}

/// Enhance raw text into well-formed Markdown.
///
/// One forward pass: each line is redacted, classified, and either
/// emitted directly or merged into the open block. A blank line, a
/// direct-emit tag, or a block-kind change flushes the open block; the
/// end of input flushes unconditionally. The result is trimmed and
/// never contains more than two consecutive newlines.
pub fn enhance_with_options(text: &str, options: &EnhanceOptions) -> String {
    let classifier = Classifier::new(&options.extra_labels);
    let mut acc = Accumulator::new();

    for (index, raw) in text.lines().enumerate() {
        let line = if options.redact {
            redact(raw)
        } else {
            raw.to_string()
        };

        let tag = classifier.classify(&line, index);
        log::trace!("line {index}: {tag:?}");

        match tag {
            LineTag::Blank => acc.flush(),
            LineTag::Title => acc.emit(&format!("# {line}\n\n")),
            LineTag::BulletUrl => acc.emit(&format!("- {}\n", line.trim())),
            LineTag::BoldLabel => acc.emit(&format!("**{}**\n\n", line.trim())),
            LineTag::SectionHeader => {
                let trimmed = line.trim();
                let header = trimmed.strip_suffix(':').unwrap_or(trimmed);
                acc.emit(&format!("## {header}\n\n"));
            }
            LineTag::Separator => acc.emit("---\n\n"),
            LineTag::Timestamp => acc.emit(&format!("{line}\n\n")),
            LineTag::Code => acc.push(BlockKind::Code, line),
            LineTag::Terminal => acc.push(BlockKind::Terminal, line),
            LineTag::Text => acc.push(BlockKind::Text, line),
        }
    }

    acc.finish()
}
