//! Block accumulation and rendering.
//!
//! The accumulator is the only mutable state in the whole pipeline: one
//! optional in-progress block plus the output buffer, both local to a
//! single enhancement pass. "No block open" is represented by `None`;
//! an open block always holds at least one line.

use crate::language::detect_language;
use crate::utils::collapse_blank_runs;

/// Kind of an in-progress block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Code,
    Terminal,
    Text,
}

#[derive(Debug)]
struct Block {
    kind: BlockKind,
    lines: Vec<String>,
}

/// Walks the classified line sequence and builds the output string.
#[derive(Debug, Default)]
pub struct Accumulator {
    block: Option<Block>,
    out: String,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line to the open block of `kind`, flushing first if a
    /// block of a different kind is open.
    pub fn push(&mut self, kind: BlockKind, line: String) {
        match self.block.as_mut() {
            Some(block) if block.kind == kind => block.lines.push(line),
            _ => {
                self.flush();
                self.block = Some(Block { kind, lines: vec![line] });
            }
        }
    }

    /// Direct emission: flush any open block, then write `rendered`
    /// verbatim. The caller supplies trailing newlines.
    pub fn emit(&mut self, rendered: &str) {
        self.flush();
        self.out.push_str(rendered);
    }

    /// Render and clear the open block. No-op when no block is open.
    pub fn flush(&mut self) {
        let Some(block) = self.block.take() else {
            return;
        };

        let content = block.lines.join("\n");
        match block.kind {
            BlockKind::Code => {
                let lang = detect_language(&content);
                self.out.push_str(&format!("```{lang}\n{content}\n```\n\n"));
            }
            BlockKind::Terminal => {
                self.out.push_str(&format!("```bash\n{content}\n```\n\n"));
            }
            BlockKind::Text => {
                self.out.push_str(&content);
                self.out.push_str("\n\n");
            }
        }
    }

    /// Final flush plus whitespace normalization: runs of three or
    /// more newlines collapse to two, and the whole result is trimmed.
    pub fn finish(mut self) -> String {
        self.flush();
        collapse_blank_runs(self.out.trim())
    }
}
