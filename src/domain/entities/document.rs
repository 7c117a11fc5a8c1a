use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ingestion request: a payload not yet owned by the store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewDocument {
    pub id: Option<String>,
    pub text: String,
    pub tags: Vec<String>,
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub text: String,
    pub tags: Vec<String>,
    pub metadata: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl Document {
    pub fn new(request: NewDocument) -> Self {
        Self {
            id: request
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            text: request.text,
            tags: request.tags,
            metadata: request.metadata,
            created_at: Utc::now(),
        }
    }

    /// Text representation handed to the embedding provider.
    pub fn embeddable_text(&self) -> String {
        if self.tags.is_empty() {
            self.text.clone()
        } else {
            format!("{} {}", self.text, self.tags.join(" "))
        }
    }
}
