use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use serde::de::DeserializeOwned;

use super::{EngineError, OtpEngine};
use crate::domain::otp::{OtpGeneratorRequest, OtpGeneratorResponse, OtpValidatorResponse};
use crate::domain::shared::{RequestWrapper, ResponseWrapper};

const ENGINE_REQUEST_ID: &str = "otpmanager.engine.generate";
const ENGINE_REQUEST_VERSION: &str = "1.0";

/// OTP engine reached over HTTP, speaking the same envelope format as this service
pub struct HttpOtpEngine {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpOtpEngine {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, EngineError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EngineError::Unavailable(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    async fn read_envelope<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, EngineError> {
        let status = response.status();

        let envelope = match response.json::<ResponseWrapper<T>>().await {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => return Err(EngineError::Status(status.as_u16())),
            Err(e) => {
                return Err(EngineError::Unavailable(format!(
                    "Failed to parse engine response: {}",
                    e
                )))
            }
        };

        if !envelope.errors.is_empty() {
            return Err(EngineError::Rejected(envelope.errors));
        }

        if !status.is_success() {
            return Err(EngineError::Status(status.as_u16()));
        }

        envelope.response.ok_or(EngineError::EmptyResponse)
    }
}

#[async_trait]
impl OtpEngine for HttpOtpEngine {
    async fn generate(&self, key: &str) -> Result<OtpGeneratorResponse, EngineError> {
        let body = RequestWrapper {
            id: Some(ENGINE_REQUEST_ID.to_string()),
            version: Some(ENGINE_REQUEST_VERSION.to_string()),
            requesttime: Some(Utc::now()),
            request: Some(OtpGeneratorRequest {
                key: Some(key.to_string()),
            }),
        };

        let response = self
            .http_client
            .post(format!("{}/otp/generate", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| EngineError::Unavailable(format!("OTP generation call failed: {}", e)))?;

        Self::read_envelope(response).await
    }

    async fn validate(&self, key: &str, otp: &str) -> Result<OtpValidatorResponse, EngineError> {
        let response = self
            .http_client
            .get(format!("{}/otp/validate", self.base_url))
            .query(&[("key", key), ("otp", otp)])
            .send()
            .await
            .map_err(|e| EngineError::Unavailable(format!("OTP validation call failed: {}", e)))?;

        Self::read_envelope(response).await
    }
}
