use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use otpmanager_service::controllers::otp::OtpController;
use otpmanager_service::domain::otp::OtpService;
use otpmanager_service::infrastructure::config::{Config, LogFormat};
use otpmanager_service::infrastructure::engine::HttpOtpEngine;
use otpmanager_service::infrastructure::http::start_http_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting OTP manager on {}:{}",
        config.host,
        config.port
    );

    let key_policy = config.key_policy();
    tracing::info!(
        engine_url = %config.otp_engine_url,
        key_min_length = key_policy.min_length,
        key_max_length = key_policy.max_length,
        development = config.is_development(),
        "Configuration loaded"
    );

    let engine = Arc::new(HttpOtpEngine::new(
        &config.otp_engine_url,
        Duration::from_secs(config.otp_engine_timeout_seconds),
    )?);

    let otp_service = Arc::new(OtpService::new(engine, key_policy));
    let otp_controller = Arc::new(OtpController::new(otp_service));

    start_http_server(Arc::new(config), otp_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "otpmanager_service=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "otpmanager_service=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
