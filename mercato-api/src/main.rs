use std::sync::Arc;
use std::net::SocketAddr;
use mercato_api::{app, AppState};
use mercato_store::{FileSnapshotSource, SnapshotStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mercato_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = mercato_store::app_config::Config::load()?;
    tracing::info!(
        "Starting Mercato API on port {} (promotion policy {:?})",
        config.server.port,
        config.pricing.selection_policy
    );

    let store = Arc::new(SnapshotStore::default());
    if let Some(path) = &config.pricing.snapshot_path {
        let event = store.refresh_from(&FileSnapshotSource::new(path)).await?;
        tracing::info!("Seeded snapshot v{} from {}", event.version, path);
    }

    let app = app(AppState::new(store, config.pricing.clone()));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
