use clap::Parser;
use ragstore::cli::commands::{Cli, Commands};
use ragstore::domain::entities::document::NewDocument;
use ragstore::RagStore;

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let dir = std::env::var("RAGSTORE_DIR").unwrap_or_else(|_| "./ragstore".into());

    let store = match RagStore::open(&dir) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error opening store: {e}");
            std::process::exit(1);
        }
    };

    let result = run_command(store, cli.command).await;
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(store: RagStore, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Add { json } => {
            let data: serde_json::Value = serde_json::from_str(&json)?;

            let text = data["text"]
                .as_str()
                .ok_or("Missing required field: text")?
                .to_string();
            let id = data["id"].as_str().map(String::from);
            let tags: Vec<String> = data["tags"]
                .as_array()
                .map(|a| {
                    a.iter()
                        .filter_map(|v| v.as_str().map(String::from))
                        .collect()
                })
                .unwrap_or_default();
            let metadata = data.get("metadata").cloned();

            let documents = store
                .add_documents(vec![NewDocument {
                    id,
                    text,
                    tags,
                    metadata,
                }])
                .await?;
            store.persist()?;
            println!("{}", serde_json::to_string_pretty(&documents[0]).unwrap());
        }
        Commands::Search { query, limit } => {
            let hits = store.search(&query, limit).await?;
            println!("{}", serde_json::to_string_pretty(&hits).unwrap());
        }
        Commands::Stats => {
            let stats = store.stats()?;
            println!("{}", serde_json::to_string_pretty(&stats).unwrap());
        }
        Commands::Reindex => {
            let count = store.reindex().await?;
            store.persist()?;
            println!("Indexed {count} documents");
        }
        Commands::Export => {
            let documents = store.export()?;
            println!("{}", serde_json::to_string_pretty(&documents).unwrap());
        }
    }
    Ok(())
}
