use super::build_router;
use crate::app::hotel::{HotelSearchApp, HotelSearchAppError, ServerConfig};
use std::sync::Arc;

/// serves the application until ctrl-c is received.
pub async fn serve(app: HotelSearchApp, config: &ServerConfig) -> Result<(), HotelSearchAppError> {
    let address = config.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|e| HotelSearchAppError::BindFailure {
            address: address.clone(),
            message: e.to_string(),
        })?;
    log::info!("hotel search listening on {}", address);

    let router = build_router(Arc::new(app));
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| HotelSearchAppError::ServerFailure(e.to_string()))?;

    log::info!("hotel search stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("shutdown signal received");
}
