//! Shared HTTP plumbing for hosted embedding endpoints. Both supported
//! services speak the same response shape:
//! `{ "data": [ { "embedding": [...] } ] }`.

use crate::domain::error::DomainError;
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

pub(crate) async fn post_embeddings<B: Serialize + Sync>(
    client: &Client,
    url: &str,
    api_key: &str,
    provider: &str,
    body: &B,
) -> Result<Vec<Vec<f32>>, DomainError> {
    let resp = client
        .post(url)
        .bearer_auth(api_key)
        .json(body)
        .send()
        .await
        .map_err(|e| DomainError::Embedding(format!("{provider} API error: {e}")))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(DomainError::Embedding(format!("{provider} API {status}: {body}")));
    }

    let result: EmbeddingResponse = resp
        .json()
        .await
        .map_err(|e| DomainError::Parse(format!("{provider} response: {e}")))?;
    Ok(result.data.into_iter().map(|d| d.embedding).collect())
}
