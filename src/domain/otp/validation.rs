use crate::domain::shared::ServiceError;

use super::{OtpErrorConstants, OtpServiceError};

pub const DEFAULT_KEY_MIN_LENGTH: usize = 3;
pub const DEFAULT_KEY_MAX_LENGTH: usize = 255;

/// Accepted key lengths, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPolicy {
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for KeyPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_KEY_MIN_LENGTH,
            max_length: DEFAULT_KEY_MAX_LENGTH,
        }
    }
}

impl KeyPolicy {
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
        }
    }

    fn accepts(&self, key: &str) -> bool {
        let length = key.chars().count();
        length >= self.min_length && length <= self.max_length
    }

    fn key_error(&self, constant: OtpErrorConstants) -> ServiceError {
        constant.with_message(format!(
            "Length of Key should be in the range of {}-{}",
            self.min_length, self.max_length
        ))
    }

    /// Check the key of a generation request
    pub fn check_generate<'a>(&self, key: Option<&'a str>) -> Result<&'a str, OtpServiceError> {
        match key {
            Some(key) if self.accepts(key) => Ok(key),
            _ => Err(OtpServiceError::InvalidArgument(vec![
                self.key_error(OtpErrorConstants::OtpGenIllegalKeyInput),
            ])),
        }
    }

    /// Check a validation request, reporting every violation at once
    pub fn check_validate<'a>(
        &self,
        key: Option<&'a str>,
        otp: Option<&'a str>,
    ) -> Result<(&'a str, &'a str), OtpServiceError> {
        let mut errors = Vec::new();

        let key = key.filter(|k| self.accepts(k));
        if key.is_none() {
            errors.push(self.key_error(OtpErrorConstants::OtpValIllegalKeyInput));
        }

        let otp = otp.filter(|o| !o.is_empty() && o.chars().all(|c| c.is_ascii_digit()));
        if otp.is_none() {
            errors.push(OtpErrorConstants::OtpValIllegalOtpInput.to_service_error());
        }

        match (key, otp) {
            (Some(key), Some(otp)) => Ok((key, otp)),
            _ => Err(OtpServiceError::InvalidArgument(errors)),
        }
    }
}
