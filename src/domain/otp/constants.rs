use crate::domain::shared::ServiceError;

/// Logical OTP manager error names and their wire codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpErrorConstants {
    OtpGenIllegalKeyInput,
    OtpValInvalidOtpInput,
    OtpValIllegalKeyInput,
    OtpValIllegalOtpInput,
    OtpValKeyNotFound,
    InternalServerError,
}

impl OtpErrorConstants {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::OtpGenIllegalKeyInput => "KER-OTG-001",
            Self::OtpValInvalidOtpInput => "KER-OTV-001",
            Self::OtpValIllegalKeyInput => "KER-OTV-002",
            Self::OtpValIllegalOtpInput => "KER-OTV-003",
            Self::OtpValKeyNotFound => "KER-OTV-005",
            Self::InternalServerError => "KER-OTM-500",
        }
    }

    /// Default message. Key range messages here assume the default key policy;
    /// `KeyPolicy` renders them for the configured bounds.
    pub fn error_message(&self) -> &'static str {
        match self {
            Self::OtpGenIllegalKeyInput | Self::OtpValIllegalKeyInput => {
                "Length of Key should be in the range of 3-255"
            }
            Self::OtpValInvalidOtpInput => "Invalid OTP request",
            Self::OtpValIllegalOtpInput => "OTP should contain only numeric characters",
            Self::OtpValKeyNotFound => {
                "Validation can't be performed against this key. Generate OTP first."
            }
            Self::InternalServerError => "Internal server error",
        }
    }

    pub fn to_service_error(&self) -> ServiceError {
        ServiceError::new(self.error_code(), self.error_message())
    }

    pub fn with_message(&self, message: impl Into<String>) -> ServiceError {
        ServiceError::new(self.error_code(), message)
    }
}
