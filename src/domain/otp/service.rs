use std::sync::Arc;

use async_trait::async_trait;

use super::dto::{OtpGeneratorRequest, OtpGeneratorResponse, OtpValidateParams, OtpValidatorResponse};
use super::error::OtpServiceError;
use super::validation::KeyPolicy;
use crate::infrastructure::engine::OtpEngine;

pub struct OtpService {
    engine: Arc<dyn OtpEngine>,
    key_policy: KeyPolicy,
}

impl OtpService {
    pub fn new(engine: Arc<dyn OtpEngine>, key_policy: KeyPolicy) -> Self {
        Self { engine, key_policy }
    }
}

#[async_trait]
pub trait OtpServiceApi: Send + Sync {
    /// Validate the key and ask the engine for a new OTP
    async fn generate(
        &self,
        request: OtpGeneratorRequest,
    ) -> Result<OtpGeneratorResponse, OtpServiceError>;

    /// Validate key and OTP, then ask the engine whether they match
    ///
    /// All argument violations are reported together. An unknown key is
    /// reported as [`OtpServiceError::KeyNotFound`].
    async fn validate(
        &self,
        params: OtpValidateParams,
    ) -> Result<OtpValidatorResponse, OtpServiceError>;
}

#[async_trait]
impl OtpServiceApi for OtpService {
    async fn generate(
        &self,
        request: OtpGeneratorRequest,
    ) -> Result<OtpGeneratorResponse, OtpServiceError> {
        let key = self.key_policy.check_generate(request.key.as_deref())?;

        tracing::info!(key_length = key.chars().count(), "OTP generation requested");

        let response = self.engine.generate(key).await?;

        tracing::info!(status = %response.status, "OTP generated");
        Ok(response)
    }

    async fn validate(
        &self,
        params: OtpValidateParams,
    ) -> Result<OtpValidatorResponse, OtpServiceError> {
        let (key, otp) = self
            .key_policy
            .check_validate(params.key.as_deref(), params.otp.as_deref())?;

        tracing::info!(key_length = key.chars().count(), "OTP validation requested");

        let response = self.engine.validate(key, otp).await?;

        tracing::info!(status = %response.status, "OTP validated");
        Ok(response)
    }
}
