use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use validator::{Validate, ValidationError, ValidationErrors};

use super::error_dto::ServiceError;

/// Wire format of `responsetime`, e.g. `2024-03-01T10:15:30.123Z`
pub const RESPONSE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Incoming request envelope shared by every body-carrying endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestWrapper<T> {
    pub id: Option<String>,
    pub version: Option<String>,
    #[serde(alias = "requestTime")]
    pub requesttime: Option<DateTime<Utc>>,
    pub request: Option<T>,
}

impl<T> RequestWrapper<T> {
    pub fn context(&self) -> RequestContext {
        RequestContext {
            id: self.id.clone(),
            version: self.version.clone(),
        }
    }
}

impl<T: Validate> Validate for RequestWrapper<T> {
    fn validate(&self) -> Result<(), ValidationErrors> {
        match &self.request {
            Some(request) => ValidationErrors::merge(Ok(()), "request", request.validate()),
            None => {
                let mut error = ValidationError::new("required");
                error.message = Some(Cow::Borrowed("must not be null"));

                let mut errors = ValidationErrors::new();
                errors.add("request", error);
                Err(errors)
            }
        }
    }
}

/// Identity of the request being answered, echoed back in response envelopes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub id: Option<String>,
    pub version: Option<String>,
}

impl RequestContext {
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            version: Some(version.into()),
        }
    }
}

/// Outgoing response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseWrapper<T> {
    pub id: Option<String>,
    pub version: Option<String>,
    #[serde(serialize_with = "serialize_response_time")]
    pub responsetime: DateTime<Utc>,
    pub response: Option<T>,
    #[serde(default)]
    pub errors: Vec<ServiceError>,
}

impl<T> ResponseWrapper<T> {
    /// Empty envelope stamped with the current UTC time
    pub fn for_context(context: Option<&RequestContext>) -> Self {
        let context = context.cloned().unwrap_or_default();
        Self {
            id: context.id,
            version: context.version,
            responsetime: Utc::now(),
            response: None,
            errors: Vec::new(),
        }
    }

    pub fn with_response(mut self, response: T) -> Self {
        self.response = Some(response);
        self
    }

    pub fn with_error(mut self, error: ServiceError) -> Self {
        self.errors.push(error);
        self
    }
}

fn serialize_response_time<S>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&time.format(RESPONSE_TIME_FORMAT))
}
