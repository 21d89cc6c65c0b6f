use std::fmt;

use crate::parser::lexer::{Classification, classify};
use crate::parser::types::{ContentItem, ContentKind, Document, Scene};
use crate::parser::{block_lines, scene_blocks};

pub use crate::parser::lexer::DropReason;

/// A non-blank line that produced no content item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedLine {
    /// 1-based index of the scene block, counting blocks that were omitted.
    pub block: usize,
    /// 1-based line number within the trimmed block.
    pub line: usize,
    pub content: String,
    pub reason: DropReason,
}

#[derive(Debug, Clone)]
pub struct ParseReport {
    pub document: Document,
    /// Raw scene blocks found, including those omitted for having no content.
    pub blocks: usize,
    /// Blank and comment lines.
    pub skipped: usize,
    pub dropped: Vec<DroppedLine>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub scenes: usize,
    pub text: usize,
    pub images: usize,
    pub items: usize,
    pub flags: usize,
    pub actions: usize,
    pub dropped: usize,
}

impl Summary {
    pub fn content_items(&self) -> usize {
        self.text + self.images + self.items + self.flags + self.actions
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} scenes, {} content items ({} text, {} images, {} item, {} flag, {} action), {} dropped lines",
            self.scenes,
            self.content_items(),
            self.text,
            self.images,
            self.items,
            self.flags,
            self.actions,
            self.dropped
        )
    }
}

/// Parses `script` like [`crate::parse`] and also records what was dropped.
pub fn inspect(script: &str) -> ParseReport {
    let mut scenes = Vec::new();
    let mut dropped = Vec::new();
    let mut blocks = 0;
    let mut skipped = 0;

    for (block_idx, block) in scene_blocks(script).enumerate() {
        blocks += 1;
        let mut content: Vec<ContentItem> = Vec::new();

        for (line_idx, line) in block_lines(block).enumerate() {
            match classify(line) {
                Classification::Item(item) => content.push(item),
                Classification::Blank | Classification::Comment => skipped += 1,
                Classification::Dropped(reason) => {
                    tracing::debug!(
                        block = block_idx + 1,
                        line = line_idx + 1,
                        %reason,
                        "dropped script line"
                    );
                    dropped.push(DroppedLine {
                        block: block_idx + 1,
                        line: line_idx + 1,
                        content: line.trim().to_string(),
                        reason,
                    });
                }
            }
        }

        if content.is_empty() {
            tracing::debug!(block = block_idx + 1, "omitting scene block without content");
        } else {
            scenes.push(Scene { content });
        }
    }

    ParseReport {
        document: Document { scenes },
        blocks,
        skipped,
        dropped,
    }
}

impl ParseReport {
    pub fn summary(&self) -> Summary {
        let mut summary = Summary {
            scenes: self.document.scenes.len(),
            dropped: self.dropped.len(),
            ..Summary::default()
        };

        for item in self.document.scenes.iter().flat_map(|scene| &scene.content) {
            match item.kind() {
                ContentKind::Text => summary.text += 1,
                ContentKind::Image => summary.images += 1,
                ContentKind::Item => summary.items += 1,
                ContentKind::Flag => summary.flags += 1,
                ContentKind::Action => summary.actions += 1,
            }
        }

        summary
    }

    pub fn into_document(self) -> Document {
        self.document
    }
}
