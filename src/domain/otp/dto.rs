use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body of POST /v1/otpmanager/otp/generate, inside the envelope
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OtpGeneratorRequest {
    #[validate(required(message = "must not be null"))]
    pub key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtpGeneratorResponse {
    pub otp: String,
    pub status: String,
}

/// Query parameters of GET /v1/otpmanager/otp/validate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OtpValidateParams {
    pub key: Option<String>,
    pub otp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtpValidatorResponse {
    pub status: String,
    pub message: String,
}
