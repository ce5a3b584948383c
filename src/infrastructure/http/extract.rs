use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::domain::shared::{RequestContext, RequestWrapper};
use crate::error::{ApiError, AppError, FieldViolation, ResultExt};

use super::envelope_context::EnvelopeSlot;

/// JSON request envelope that parsed and passed structural validation
///
/// Rejects with [`AppError::MalformedBody`] when the body is not a readable
/// envelope and with [`AppError::Validation`] when a field constraint fails.
#[derive(Debug)]
pub struct ValidatedEnvelope<T> {
    pub context: RequestContext,
    pub request: T,
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedEnvelope<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let slot = req.extensions().get::<EnvelopeSlot>().cloned();

        let Json(envelope) = Json::<RequestWrapper<T>>::from_request(req, state)
            .await
            .map_err(AppError::from)?;

        let context = envelope.context();
        if let Some(slot) = slot {
            slot.record(&context);
        }
        envelope.validate().in_context(&context)?;

        let request = envelope.request.ok_or_else(|| {
            ApiError::new(
                AppError::Validation(vec![FieldViolation::new("request", "must not be null")]),
                Some(context.clone()),
            )
        })?;

        Ok(Self { context, request })
    }
}
