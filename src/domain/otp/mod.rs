pub mod constants;
pub mod dto;
pub mod error;
pub mod service;
pub mod validation;

pub use constants::OtpErrorConstants;
pub use dto::{OtpGeneratorRequest, OtpGeneratorResponse, OtpValidateParams, OtpValidatorResponse};
pub use error::OtpServiceError;
pub use service::{OtpService, OtpServiceApi};
pub use validation::KeyPolicy;
