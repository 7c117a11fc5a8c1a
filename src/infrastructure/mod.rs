pub mod docstore;
pub mod embeddings;
pub mod index;
