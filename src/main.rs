use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use media_transcriber::application::ports::{JobRepository, WorkExecutor};
use media_transcriber::infrastructure::executor::HttpWorkExecutor;
use media_transcriber::infrastructure::observability::{TracingConfig, init_tracing};
use media_transcriber::infrastructure::persistence::InMemoryJobRepository;
use media_transcriber::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig {
            environment: environment.to_string(),
            json_format: settings.logging.enable_json,
            filter: settings.logging.level.clone(),
        },
        settings.server.port,
    );

    let executor = HttpWorkExecutor::new(
        &settings.executor.base_url,
        &settings.executor.endpoint_path,
        settings.executor.timeout(),
    )?;
    tracing::info!(
        endpoint = %executor.endpoint(),
        timeout_secs = settings.executor.timeout_secs,
        "Work executor configured"
    );

    let job_repository: Arc<dyn JobRepository> = Arc::new(InMemoryJobRepository::new());
    let work_executor: Arc<dyn WorkExecutor> = Arc::new(executor);

    let router = create_router(AppState::new(job_repository, work_executor));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, draining connections");
}
