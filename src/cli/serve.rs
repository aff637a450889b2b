use std::sync::Arc;

use poem::{listener::TcpListener, middleware::Tracing, EndpointExt, Server};

use crate::api::build_routes;
use crate::app_data::AppData;
use crate::config::{BootstrapSettings, DatabaseConnections};

/// Connect, migrate and serve the HTTP API until the process is stopped
pub async fn serve(settings: &BootstrapSettings) -> Result<(), Box<dyn std::error::Error>> {
    let connections = DatabaseConnections::init(settings).await?;
    connections.migrate().await?;

    let app_data = Arc::new(AppData::init(connections));

    let address = settings.server_address();
    let server_url = format!("http://{}", address);
    let app = build_routes(app_data, &server_url).with(Tracing);

    tracing::info!("Starting server on {}", server_url);
    tracing::info!("Swagger UI available at {}/swagger", server_url);

    Server::new(TcpListener::bind(address))
        .run(app)
        .await?;

    Ok(())
}
