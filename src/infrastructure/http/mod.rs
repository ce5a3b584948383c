pub mod envelope_context;
pub mod extract;
pub mod request_id;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::controllers::{health, otp::OtpController};
use crate::error::handle_panic;
use crate::infrastructure::config::Config;

pub use extract::ValidatedEnvelope;
pub use envelope_context::{envelope_context_middleware, EnvelopeSlot};
pub use request_id::{request_id_middleware, X_REQUEST_ID};

/// Build the application router with all routes and layers
pub fn create_router(otp_controller: Arc<OtpController>) -> Router {
    let otp_routes = Router::new()
        .route("/v1/otpmanager/otp/generate", post(OtpController::generate))
        .route("/v1/otpmanager/otp/validate", get(OtpController::validate))
        .with_state(otp_controller);

    Router::new()
        .route("/health", get(health::health))
        .merge(otp_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_id_middleware))
                .layer(middleware::from_fn(envelope_context_middleware))
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    otp_controller: Arc<OtpController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(otp_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
