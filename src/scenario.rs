use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::parser::types::Document;

/// A parsed document plus the metadata a store keys it by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub game_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(flatten)]
    pub document: Document,
}

impl Scenario {
    /// Wraps `document` under a fresh random id.
    pub fn new(document: Document) -> Self {
        Self {
            game_id: Uuid::new_v4().to_string(),
            title: None,
            theme: None,
            document,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.game_id = id.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }
}
