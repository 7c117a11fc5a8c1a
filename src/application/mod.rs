pub mod ingest;
pub mod reindex;
pub mod search;
pub mod stats;
