pub mod envelope;
pub mod error_dto;

pub use envelope::{RequestContext, RequestWrapper, ResponseWrapper};
pub use error_dto::{ErrorResponse, ServiceError};
