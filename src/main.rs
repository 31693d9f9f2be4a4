use doctor_directory::app::router;
use doctor_directory::config::Config;
use doctor_directory::source::fetcher::spawn_initial_load;
use doctor_directory::source::store::DoctorStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // 1. Store, empty and loading until the fetch resolves:
    let store = DoctorStore::new();

    // 2. One-shot fetch in the background; the page serves meanwhile:
    let _fetch_handle = spawn_initial_load(
        store.clone(),
        reqwest::Client::new(),
        config.doctors_url.clone(),
    );

    // 3. HTTP Router:
    let app = router(store);

    // 4. Start HTTP server:
    tracing::info!("Doctor directory listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
