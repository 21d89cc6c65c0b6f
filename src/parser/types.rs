use serde::{Deserialize, Serialize};
use std::fmt;

/// One classified line of a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ContentItem {
    /// Prose with emphasis already rendered to `<strong>`/`<em>` markup.
    #[serde(rename = "text")]
    Text { value: String },
    #[serde(rename = "image")]
    Image { alt: String, src: String },
    /// Inventory directive, e.g. `[item: get(old key)]`.
    #[serde(rename = "item")]
    ItemCommand { action: String, value: String },
    /// State flag directive, e.g. `[flag: set(entered castle)]`.
    #[serde(rename = "flag")]
    FlagCommand { action: String, value: String },
    #[serde(rename = "action")]
    ActionCommand { value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentKind {
    Text,
    Image,
    Item,
    Flag,
    Action,
}

impl ContentItem {
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentItem::Text { .. } => ContentKind::Text,
            ContentItem::Image { .. } => ContentKind::Image,
            ContentItem::ItemCommand { .. } => ContentKind::Item,
            ContentItem::FlagCommand { .. } => ContentKind::Flag,
            ContentItem::ActionCommand { .. } => ContentKind::Action,
        }
    }
}

/// Renders the item back into script syntax.
impl fmt::Display for ContentItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentItem::Text { value } => write!(f, "{value}"),
            ContentItem::Image { alt, src } => write!(f, "![{alt}]({src})"),
            ContentItem::ItemCommand { action, value } => write!(f, "[item: {action}({value})]"),
            ContentItem::FlagCommand { action, value } => write!(f, "[flag: {action}({value})]"),
            ContentItem::ActionCommand { value } => write!(f, "[action: {value}]"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub content: Vec<ContentItem>,
}

/// Ordered scenes of a parsed script. Every scene holds at least one item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub scenes: Vec<Scene>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.scenes.iter().map(|scene| scene.content.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_item_display() {
        assert_eq!(
            ContentItem::Text {
                value: "<em>hi</em>".into()
            }
            .to_string(),
            "<em>hi</em>"
        );
        assert_eq!(
            ContentItem::Image {
                alt: "door".into(),
                src: "door.jpg".into()
            }
            .to_string(),
            "![door](door.jpg)"
        );
        assert_eq!(
            ContentItem::ItemCommand {
                action: "get".into(),
                value: "old key".into()
            }
            .to_string(),
            "[item: get(old key)]"
        );
        assert_eq!(
            ContentItem::FlagCommand {
                action: "set".into(),
                value: "entered castle".into()
            }
            .to_string(),
            "[flag: set(entered castle)]"
        );
        assert_eq!(
            ContentItem::ActionCommand {
                value: "open door".into()
            }
            .to_string(),
            "[action: open door]"
        );
    }

    #[test]
    fn test_serialize_uses_type_tag() {
        let item = ContentItem::ItemCommand {
            action: "get".into(),
            value: "key".into(),
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"type\":\"item\""));
        assert!(json.contains("\"action\":\"get\""));

        let json = serde_json::to_string(&ContentItem::ActionCommand {
            value: "run".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"action","value":"run"}"#);
    }

    #[test]
    fn test_deserialize_ignores_field_order() {
        let json = r#"{"src":"a.png","type":"image","alt":"A"}"#;
        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(
            item,
            ContentItem::Image {
                alt: "A".into(),
                src: "a.png".into()
            }
        );
    }

    #[test]
    fn test_deserialize_unknown_type_fails() {
        let json = r#"{"type":"sound","value":"bang"}"#;
        assert!(serde_json::from_str::<ContentItem>(json).is_err());
    }

    #[test]
    fn test_document_roundtrip_preserves_order() {
        let doc = Document {
            scenes: vec![
                Scene {
                    content: vec![
                        ContentItem::Text {
                            value: "first".into(),
                        },
                        ContentItem::FlagCommand {
                            action: "set".into(),
                            value: "seen".into(),
                        },
                    ],
                },
                Scene {
                    content: vec![ContentItem::ActionCommand {
                        value: "leave".into(),
                    }],
                },
            ],
        };
        let json = serde_json::to_string(&doc).unwrap();
        let roundtrip: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, doc);
        assert_eq!(roundtrip.item_count(), 3);
    }

    #[test]
    fn test_kind() {
        assert_eq!(
            ContentItem::Text { value: "x".into() }.kind(),
            ContentKind::Text
        );
        assert_eq!(
            ContentItem::FlagCommand {
                action: "set".into(),
                value: "x".into()
            }
            .kind(),
            ContentKind::Flag
        );
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::default();
        assert!(doc.is_empty());
        assert_eq!(doc.item_count(), 0);
        assert_eq!(serde_json::to_string(&doc).unwrap(), r#"{"scenes":[]}"#);
    }
}
