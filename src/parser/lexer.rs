use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::markup::render_emphasis;
use super::types::ContentItem;

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!\[(.*?)\]\((.*?)\)").expect("valid regex"));

// Greedy payload: the last `]` on the line closes the command.
static COMMAND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(\w+):\s*(.+)\]").expect("valid regex"));

static SUB_COMMAND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)\((.+)\)").expect("valid regex"));

/// Why a non-blank line produced no content item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropReason {
    /// A bracket command whose name is not `item`, `flag` or `action`.
    UnknownCommand { name: String },
    /// An `item`/`flag` command whose payload is not `action(value)`.
    MalformedSubCommand { command: String },
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::UnknownCommand { name } => write!(f, "unknown command '{name}'"),
            DropReason::MalformedSubCommand { command } => {
                write!(f, "'{command}' payload is not of the form action(value)")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Classification {
    Blank,
    Comment,
    Item(ContentItem),
    Dropped(DropReason),
}

pub(crate) fn classify_line(line: &str) -> Option<ContentItem> {
    match classify(line) {
        Classification::Item(item) => Some(item),
        Classification::Blank | Classification::Comment | Classification::Dropped(_) => None,
    }
}

/// Classifies one line. Tiers are tried in order and the first match wins:
/// blank/comment, image, bracket command, text.
pub(crate) fn classify(line: &str) -> Classification {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return Classification::Blank;
    }

    if trimmed.starts_with('#') {
        return Classification::Comment;
    }

    if let Some(caps) = IMAGE_RE.captures(trimmed) {
        return Classification::Item(ContentItem::Image {
            alt: caps[1].to_string(),
            src: caps[2].to_string(),
        });
    }

    if let Some(caps) = COMMAND_RE.captures(trimmed) {
        let name = caps[1].to_lowercase();
        let payload = caps[2].trim();
        return classify_command(name, payload);
    }

    Classification::Item(ContentItem::Text {
        value: render_emphasis(trimmed),
    })
}

fn classify_command(name: String, payload: &str) -> Classification {
    match name.as_str() {
        "item" | "flag" => {
            let Some(caps) = SUB_COMMAND_RE.captures(payload) else {
                return Classification::Dropped(DropReason::MalformedSubCommand { command: name });
            };
            let action = caps[1].to_lowercase();
            let value = caps[2].to_string();
            if name == "item" {
                Classification::Item(ContentItem::ItemCommand { action, value })
            } else {
                Classification::Item(ContentItem::FlagCommand { action, value })
            }
        }
        "action" => Classification::Item(ContentItem::ActionCommand {
            value: payload.to_string(),
        }),
        _ => Classification::Dropped(DropReason::UnknownCommand { name }),
    }
}
