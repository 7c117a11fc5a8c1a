use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use crate::infrastructure::embeddings::remote;
use reqwest::Client;
use serde::Serialize;

pub struct VoyageProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
struct VoyageRequest {
    input: Vec<String>,
    model: String,
    input_type: String,
}

impl VoyageProvider {
    pub fn new(api_key: String, model: Option<String>, base_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: model.unwrap_or_else(|| "voyage-4-lite".to_string()),
            base_url: base_url.unwrap_or_else(|| "https://api.voyageai.com".to_string()),
        }
    }

    fn model_dimension(model: &str) -> usize {
        match model {
            "voyage-4-lite" | "voyage-3-lite" => 512,
            "voyage-3" | "voyage-code-3" => 1024,
            "voyage-3-large" | "voyage-large-2" => 1536,
            _ => 512,
        }
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for VoyageProvider {
    async fn embed(
        &self,
        texts: &[String],
        input_type: InputType,
    ) -> Result<Vec<Vec<f32>>, DomainError> {
        // Voyage embeds documents and queries differently
        let input_type = match input_type {
            InputType::Document => "document",
            InputType::Query => "query",
        };

        let url = format!("{}/v1/embeddings", self.base_url);
        remote::post_embeddings(
            &self.client,
            &url,
            &self.api_key,
            "Voyage",
            &VoyageRequest {
                input: texts.to_vec(),
                model: self.model.clone(),
                input_type: input_type.to_string(),
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
        let default = VoyageProvider::new(String::new(), None, None);
        assert_eq!(default.dimension(), 512);

        let code = VoyageProvider::new(String::new(), Some("voyage-code-3".into()), None);
        assert_eq!(code.dimension(), 1024);

        let unknown = VoyageProvider::new(String::new(), Some("voyage-unknown".into()), None);
        assert_eq!(unknown.dimension(), 512);
    }
}
