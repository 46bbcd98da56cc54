//! Request extractors.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

use super::error::AppError;

/// `Json` extractor whose rejections are reported as [`AppError`] JSON bodies
/// instead of axum's plain-text responses.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
