use country_lookup::directory::client::DirectoryClient;
use country_lookup::lookup::handlers::router;
use country_lookup::lookup::service::LookupService;
use country_lookup::lookup::types::Country;
use country_lookup::storage::memory::MemoryStore;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

const UPSTREAM_BASE_URL: &str = "https://restcountries.com";
const HTTP_PORT: u16 = 8000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // 1. Shared store, created once and handed to the service:
    let store: MemoryStore<Country> = MemoryStore::new();

    // 2. Upstream directory client:
    let directory = DirectoryClient::new(UPSTREAM_BASE_URL);

    let service = Arc::new(LookupService::new(store, directory));

    // 3. HTTP router:
    let app = router(service.clone());

    // 4. Spawn stats reporter:
    let stats_service = service.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(60));

        loop {
            interval.tick().await;
            tracing::info!("Cache stats: {} entries", stats_service.cached_entries());
        }
    });

    // 5. Start HTTP server:
    let http_addr = SocketAddr::from(([127, 0, 0, 1], HTTP_PORT));

    tracing::info!("HTTP server listening on {}", http_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(http_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
