pub mod http_engine;

use async_trait::async_trait;

use crate::domain::otp::{OtpGeneratorResponse, OtpValidatorResponse};
use crate::domain::shared::ServiceError;

pub use http_engine::HttpOtpEngine;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("OTP engine rejected the request with {} error(s)", .0.len())]
    Rejected(Vec<ServiceError>),
    #[error("OTP engine unavailable: {0}")]
    Unavailable(String),
    #[error("OTP engine returned status {0}")]
    Status(u16),
    #[error("OTP engine response carried no payload")]
    EmptyResponse,
}

/// Backend that actually issues and checks one-time passwords.
///
/// Implementations report business-rule failures as [`EngineError::Rejected`]
/// with the engine's own error list; everything else is an outage.
#[async_trait]
pub trait OtpEngine: Send + Sync {
    /// Issue a new OTP bound to `key`
    async fn generate(&self, key: &str) -> Result<OtpGeneratorResponse, EngineError>;

    /// Check `otp` against the one last issued for `key`
    async fn validate(&self, key: &str, otp: &str) -> Result<OtpValidatorResponse, EngineError>;
}
