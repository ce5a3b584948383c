use std::sync::{Arc, Mutex};

use axum::{extract::Request, middleware::Next, response::IntoResponse, response::Response};

use crate::domain::shared::RequestContext;
use crate::error::{ApiError, AppError, PanicMessage};

/// Identity of the envelope a request carried, once it has been parsed
#[derive(Debug, Clone, Default)]
pub struct EnvelopeSlot(Arc<Mutex<Option<RequestContext>>>);

impl EnvelopeSlot {
    pub fn record(&self, context: &RequestContext) {
        if let Ok(mut slot) = self.0.lock() {
            *slot = Some(context.clone());
        }
    }

    pub fn take(&self) -> Option<RequestContext> {
        self.0.lock().ok().and_then(|mut slot| slot.take())
    }
}

/// Middleware that lets a caught panic answer with the envelope's id and version.
/// Must sit outside the panic-catching layer.
pub async fn envelope_context_middleware(mut request: Request, next: Next) -> Response {
    let slot = EnvelopeSlot::default();
    request.extensions_mut().insert(slot.clone());

    let response = next.run(request).await;

    match response.extensions().get::<PanicMessage>() {
        Some(PanicMessage(message)) => {
            ApiError::new(AppError::Internal(message.clone()), slot.take()).into_response()
        }
        None => response,
    }
}
