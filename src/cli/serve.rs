use std::sync::Arc;
use poem::{listener::TcpListener, Server};

use crate::api::build_app;
use crate::app_data::AppData;
use crate::config::{init_database, migrate_database, BootstrapSettings};

/// Connect, migrate, and serve until Ctrl-C
pub async fn run_server(settings: &BootstrapSettings) -> Result<(), Box<dyn std::error::Error>> {
    let db = init_database(settings).await?;
    migrate_database(&db).await?;

    let app_data = Arc::new(AppData::init(db));
    let app = build_app(app_data, settings.public_url().to_string());

    let address = settings.server_address();
    tracing::info!("Starting server on http://{}", address);
    tracing::info!("Swagger UI available at http://{}/swagger", address);

    Server::new(TcpListener::bind(address))
        .run_with_graceful_shutdown(
            app,
            async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("Shutdown signal received");
            },
            None,
        )
        .await?;

    Ok(())
}
