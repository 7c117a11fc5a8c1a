use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use crate::infrastructure::embeddings::remote;
use reqwest::Client;
use serde::Serialize;

/// OpenAI-style embeddings endpoint. `base_url` covers the hosted API
/// as well as self-hosted OpenAI-compatible servers, so the model table
/// includes the common local models too.
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
struct OpenAiRequest {
    input: Vec<String>,
    model: String,
}

impl OpenAiProvider {
    pub fn new(api_key: String, model: Option<String>, base_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: model.unwrap_or_else(|| "text-embedding-3-small".to_string()),
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com".to_string()),
        }
    }

    fn model_dimension(model: &str) -> usize {
        match model {
            "text-embedding-3-large" => 3072,
            "text-embedding-3-small" | "text-embedding-ada-002" => 1536,
            "nomic-embed-text" => 768,
            "all-minilm" => 384,
            _ => 1536,
        }
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for OpenAiProvider {
    async fn embed(
        &self,
        texts: &[String],
        _input_type: InputType,
    ) -> Result<Vec<Vec<f32>>, DomainError> {
        let url = format!("{}/v1/embeddings", self.base_url);
        remote::post_embeddings(
            &self.client,
            &url,
            &self.api_key,
            "OpenAI",
            &OpenAiRequest {
                input: texts.to_vec(),
                model: self.model.clone(),
            },
        )
        .await
    }

    fn dimension(&self) -> usize {
        Self::model_dimension(&self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_follows_model() {
        let large =
            OpenAiProvider::new(String::new(), Some("text-embedding-3-large".into()), None);
        assert_eq!(large.dimension(), 3072);

        let local = OpenAiProvider::new(String::new(), Some("nomic-embed-text".into()), None);
        assert_eq!(local.dimension(), 768);

        let default = OpenAiProvider::new(String::new(), None, None);
        assert_eq!(default.dimension(), 1536);
    }

    #[test]
    fn test_base_url_override() {
        let provider =
            OpenAiProvider::new(String::new(), None, Some("http://localhost:8080".into()));
        assert_eq!(provider.base_url, "http://localhost:8080");
        assert_eq!(provider.model, "text-embedding-3-small");
    }
}
