pub mod lexer;
pub mod markup;
pub mod types;

use types::{ContentItem, Document, Scene};

/// Scene blocks are separated by a line holding exactly `---`.
pub const SCENE_SEPARATOR: &str = "\n---\n";

pub(crate) fn scene_blocks(script: &str) -> impl Iterator<Item = &str> {
    script.trim().split(SCENE_SEPARATOR).map(str::trim)
}

pub(crate) fn block_lines(block: &str) -> impl Iterator<Item = &str> {
    block.split('\n')
}

/// Parses a script into its scenes.
///
/// Never fails: blank lines, comments, unknown commands and malformed
/// sub-commands contribute nothing, and scenes left without content are
/// omitted.
pub fn parse(script: &str) -> Document {
    let scenes = scene_blocks(script)
        .filter_map(|block| {
            let content: Vec<ContentItem> =
                block_lines(block).filter_map(lexer::classify_line).collect();
            (!content.is_empty()).then_some(Scene { content })
        })
        .collect();

    Document { scenes }
}
