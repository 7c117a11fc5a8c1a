use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ragstore", about = "Personal RAG knowledge store")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a document
    Add {
        /// JSON data with text (required), id, tags, metadata
        json: String,
    },
    /// Semantic search over indexed documents
    Search {
        query: String,
        #[arg(long, default_value = "10")]
        limit: usize,
    },
    /// Show store statistics
    Stats,
    /// Embed and index documents missing vectors
    Reindex,
    /// Export all documents as JSON
    Export,
}
