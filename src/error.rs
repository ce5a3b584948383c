use std::any::Any;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use validator::{ValidationErrors, ValidationErrorsKind};

use crate::domain::otp::OtpErrorConstants;
use crate::domain::shared::{ErrorResponse, RequestContext, ResponseWrapper, ServiceError};

/// A single rejected field from structural request validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Main application error type
#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    #[error("Request validation failed with {} field error(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    #[error("Invalid argument: {}", error_codes(.0))]
    InvalidArgument(Vec<ServiceError>),

    #[error("Required key not found: {}", error_codes(.0))]
    RequiredKeyNotFound(Vec<ServiceError>),

    #[error("{0}")]
    MalformedBody(String),

    #[error("{0}")]
    Internal(String),
}

fn error_codes(errors: &[ServiceError]) -> String {
    errors
        .iter()
        .map(|e| e.error_code.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// JSON body produced for a translated failure
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ErrorBody {
    Errors(ErrorResponse),
    Wrapped(ResponseWrapper<()>),
}

impl ErrorBody {
    pub fn errors(&self) -> &[ServiceError] {
        match self {
            Self::Errors(response) => &response.errors,
            Self::Wrapped(wrapper) => &wrapper.errors,
        }
    }
}

impl AppError {
    /// Get the HTTP status code for this error
    ///
    /// Client-side failures are answered with 200 and an error list. Callers of
    /// the OTP manager read `errors` rather than the status line, so this must
    /// not move to 4xx without agreeing the contract with them.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_)
            | Self::InvalidArgument(_)
            | Self::RequiredKeyNotFound(_)
            | Self::MalformedBody(_) => StatusCode::OK,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Map this error to its status and envelope
    pub fn translate(&self, context: Option<&RequestContext>) -> (StatusCode, ErrorBody) {
        let status = self.status_code();
        let body = match self {
            Self::Validation(violations) => {
                let code = OtpErrorConstants::OtpGenIllegalKeyInput;
                ErrorBody::Errors(ErrorResponse {
                    status: status.as_u16(),
                    errors: violations
                        .iter()
                        .map(|v| code.with_message(format!("{}: {}", v.field, v.message)))
                        .collect(),
                })
            }
            Self::InvalidArgument(errors) | Self::RequiredKeyNotFound(errors) => {
                ErrorBody::Errors(ErrorResponse {
                    status: status.as_u16(),
                    errors: errors.clone(),
                })
            }
            Self::MalformedBody(message) => ErrorBody::Errors(ErrorResponse {
                status: status.as_u16(),
                errors: vec![OtpErrorConstants::OtpValInvalidOtpInput.with_message(message.clone())],
            }),
            Self::Internal(message) => ErrorBody::Wrapped(
                ResponseWrapper::for_context(context)
                    .with_error(OtpErrorConstants::InternalServerError.with_message(message.clone())),
            ),
        };

        (status, body)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut violations = Vec::new();
        collect_violations(&errors, None, &mut violations);
        violations.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::Validation(violations)
    }
}

fn collect_violations(errors: &ValidationErrors, prefix: Option<&str>, out: &mut Vec<FieldViolation>) {
    for (field, kind) in errors.errors() {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, field),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    out.push(FieldViolation::new(path.clone(), message));
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_violations(inner, Some(&path), out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_violations(inner, Some(&format!("{}[{}]", path, index)), out);
                }
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                AppError::MalformedBody(rejection.body_text())
            }
            other => AppError::Internal(other.body_text()),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::MalformedBody(rejection.body_text())
    }
}

/// An [`AppError`] together with the identity of the request it answers
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: AppError,
    pub context: Option<RequestContext>,
}

impl ApiError {
    pub fn new(error: AppError, context: Option<RequestContext>) -> Self {
        Self { error, context }
    }

    pub fn translate(&self) -> (StatusCode, ErrorBody) {
        self.error.translate(self.context.as_ref())
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self::new(error, None)
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.translate();
        let request_id = self.context.as_ref().and_then(|c| c.id.as_deref());

        if status.is_server_error() {
            tracing::error!(
                error = %self.error,
                status = %status.as_u16(),
                request_id = ?request_id,
                "Request failed"
            );
        } else {
            tracing::warn!(
                error = %self.error,
                error_count = body.errors().len(),
                request_id = ?request_id,
                "Request rejected"
            );
        }

        (status, Json(body)).into_response()
    }
}

/// Attach the request identity to a failed result
pub trait ResultExt<T> {
    fn in_context(self, context: &RequestContext) -> AppResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<AppError>,
{
    fn in_context(self, context: &RequestContext) -> AppResult<T> {
        self.map_err(|e| ApiError::new(e.into(), Some(context.clone())))
    }
}

/// Message of a caught handler panic, carried on the fallback response
#[derive(Debug, Clone)]
pub struct PanicMessage(pub String);

/// Panic handler for the HTTP stack; answers like any other internal failure.
///
/// The response has no request identity yet. It carries a [`PanicMessage`]
/// so the envelope context middleware can answer again with the id and
/// version of the envelope being handled, and log the failure.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };

    let (status, body) = AppError::Internal(message.clone()).translate(None);
    let mut response = (status, Json(body)).into_response();
    response.extensions_mut().insert(PanicMessage(message));
    response
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, ApiError>;
