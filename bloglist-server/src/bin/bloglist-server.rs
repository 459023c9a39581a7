/// Bloglist HTTP Server Binary
///
/// Starts the JSON API over an in-memory blog store.

use std::sync::Arc;

use bloglist_core::MemoryStore;
use bloglist_server::{metrics, router, AppState};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bloglist-server")]
#[command(about = "Bloglist HTTP API server", long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3003")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing with environment filter
    // Default to info level, can override with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run --bin bloglist-server
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .init();

    // Initialize Prometheus metrics
    metrics::register_metrics();
    info!("Initialized Prometheus metrics");

    let args = Args::parse();

    // The store lives for the process; request handlers only see the trait
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store);

    let app = router(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Bloglist server listening on http://{}", addr);

    println!("Blog List API running at http://{}", addr);
    println!("   POST   /api/blogs      - Create blog");
    println!("   GET    /api/blogs      - List all blogs");
    println!("   GET    /api/blogs/:id  - Get specific blog");
    println!("   PUT    /api/blogs/:id  - Update blog");
    println!("   DELETE /api/blogs/:id  - Delete blog");
    println!("   GET    /api/stats      - List statistics");
    println!("   GET    /api/health     - Health check");
    println!("   GET    /metrics        - Prometheus metrics");

    axum::serve(listener, app).await?;

    Ok(())
}
