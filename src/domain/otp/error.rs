use crate::domain::shared::ServiceError;
use crate::error::AppError;
use crate::infrastructure::engine::EngineError;

use super::OtpErrorConstants;

#[derive(Debug, thiserror::Error)]
pub enum OtpServiceError {
    #[error("invalid argument ({} error(s))", .0.len())]
    InvalidArgument(Vec<ServiceError>),
    #[error("key not found")]
    KeyNotFound(Vec<ServiceError>),
    #[error("dependency error: {0}")]
    Dependency(String),
}

impl From<EngineError> for OtpServiceError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Rejected(errors) => {
                let key_not_found = OtpErrorConstants::OtpValKeyNotFound.error_code();
                if errors.iter().any(|e| e.error_code == key_not_found) {
                    OtpServiceError::KeyNotFound(errors)
                } else {
                    OtpServiceError::InvalidArgument(errors)
                }
            }
            other => OtpServiceError::Dependency(other.to_string()),
        }
    }
}

impl From<OtpServiceError> for AppError {
    fn from(err: OtpServiceError) -> Self {
        match err {
            OtpServiceError::InvalidArgument(errors) => AppError::InvalidArgument(errors),
            OtpServiceError::KeyNotFound(errors) => AppError::RequiredKeyNotFound(errors),
            OtpServiceError::Dependency(msg) => AppError::Internal(msg),
        }
    }
}
