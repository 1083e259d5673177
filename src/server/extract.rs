//! Axum extractor for order payloads
//!
//! Wraps `Json<OrderDto>` so malformed bodies are reported with the same
//! error shape as every other failure instead of axum's plain-text rejection.

use crate::core::error::{OrderError, RequestError, ValidationError};
use crate::core::order::OrderDto;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};

/// Deserialized order transfer object
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_order(OrderPayload(dto): OrderPayload) -> StatusCode {
///     // dto is well-formed JSON of the right shape, not yet validated
/// }
/// ```
pub struct OrderPayload(pub OrderDto);

impl<S> FromRequest<S> for OrderPayload
where
    S: Send + Sync,
{
    type Rejection = OrderError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<OrderDto>::from_request(req, state).await {
            Ok(Json(dto)) => Ok(OrderPayload(dto)),
            Err(JsonRejection::MissingJsonContentType(e)) => {
                Err(RequestError::UnsupportedMediaType {
                    message: e.body_text(),
                }
                .into())
            }
            Err(JsonRejection::BytesRejection(e)) => Err(RequestError::InvalidBody {
                message: e.body_text(),
            }
            .into()),
            Err(e) => Err(ValidationError::InvalidJson {
                message: e.body_text(),
            }
            .into()),
        }
    }
}
