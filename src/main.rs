use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use semantic_search::client::HttpSearchClient;
use semantic_search::component::SearchComponent;
use semantic_search::config::CONFIG;
use semantic_search::data_models::SearchState;
use semantic_search::effects::SearchEffects;
use semantic_search::render::render_view;
use semantic_search::store::Store;

/// Search posts from the terminal. Type a query per line;
/// `:focus`, `:refresh` and `:quit` are commands.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Base URL of the search API (defaults to SEARCH_API_URL).
    #[arg(long)]
    api_url: Option<String>,

    /// Quiet period before a typed query is searched (defaults to SEARCH_DEBOUNCE_MS).
    #[arg(long)]
    debounce_ms: Option<u64>,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // The fmt subscriber also picks up `log` records from the library.
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let api_url = args.api_url.unwrap_or_else(|| CONFIG.api_url.clone());
    let debounce = Duration::from_millis(args.debounce_ms.unwrap_or(CONFIG.debounce_ms));

    let http = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;
    let client =
        HttpSearchClient::with_client(http, &api_url).context("Failed to create search client")?;
    log::info!("using search api at {}", client.base_url());

    let store = Store::new(SearchState::new());
    let effects = SearchEffects::new(client)
        .with_debounce(debounce)
        .register(&store)
        .await;

    let mut component = SearchComponent::new(&store);
    let mut renderer = SearchComponent::new(&store);
    component.init()?;
    print!("{}", render_view(&component.view()));

    let render_task = tokio::spawn(async move {
        while let Ok(view) = renderer.changed().await {
            print!("{}", render_view(&view));
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        match line.trim() {
            ":quit" => break,
            ":focus" => component.focus_changed()?,
            ":refresh" => component.refresh_suggestions()?,
            term => component.input_search(term)?,
        }
    }

    store.shutdown().await;
    effects.join().await;
    render_task.abort();
    Ok(())
}
