use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qcs_site::config::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qcs_site=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let settings = Settings::new().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config: {}. Using defaults.", e);
        Settings::default()
    });

    tracing::info!(
        "Starting {} site on {}:{} (data in {})",
        settings.society.short_name,
        settings.server.host,
        settings.server.port,
        settings.data.dir.display()
    );

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let app = qcs_site::build_app(settings);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
