use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::Validate;

use crate::application::app_error::AppError;

/// `Json<T>` that also runs `T`'s validation rules before the handler sees it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.inspect_err(|rejection| {
            debug!(reason = %rejection.body_text(), "Rejected request body");
        })?;
        value.validate().inspect_err(|errors| {
            debug!(%errors, "Request body failed validation");
        })?;
        Ok(ValidJson(value))
    }
}
