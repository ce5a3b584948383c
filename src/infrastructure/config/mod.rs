use serde::Deserialize;
use std::env;

use crate::domain::otp::validation::{DEFAULT_KEY_MAX_LENGTH, DEFAULT_KEY_MIN_LENGTH};
use crate::domain::otp::KeyPolicy;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Upstream OTP engine
    pub otp_engine_url: String,
    pub otp_engine_timeout_seconds: u64,
    // Key length bounds
    pub key_min_length: usize,
    pub key_max_length: usize,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT").as_deref() {
                Ok("production") => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            otp_engine_url: env::var("OTP_ENGINE_URL")?,
            otp_engine_timeout_seconds: env::var("OTP_ENGINE_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()?,
            key_min_length: env::var("OTP_KEY_MIN_LENGTH")
                .map(|v| v.parse())
                .unwrap_or(Ok(DEFAULT_KEY_MIN_LENGTH))?,
            key_max_length: env::var("OTP_KEY_MAX_LENGTH")
                .map(|v| v.parse())
                .unwrap_or(Ok(DEFAULT_KEY_MAX_LENGTH))?,
        };

        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.key_min_length > self.key_max_length {
            return Err(format!(
                "OTP_KEY_MIN_LENGTH ({}) must not exceed OTP_KEY_MAX_LENGTH ({})",
                self.key_min_length, self.key_max_length
            )
            .into());
        }
        Ok(())
    }

    pub fn key_policy(&self) -> KeyPolicy {
        KeyPolicy::new(self.key_min_length, self.key_max_length)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}
