//! Extractors that render binding failures as structured JSON
//!
//! The stock `Json` and `Path` rejections reply with plain text. These
//! wrappers keep the rejection's status code but swap the body for an
//! [`ErrorResponse`], so clients always get the same error shape.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::Json;
use serde::de::DeserializeOwned;

use super::handlers::ErrorResponse;

/// JSON body extractor with structured rejections
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err((
                rejection.status(),
                Json(ErrorResponse {
                    error: rejection.body_text(),
                }),
            )),
        }
    }
}

/// Path parameter extractor with structured rejections
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(ApiPath(value)),
            Err(rejection) => Err((
                rejection.status(),
                Json(ErrorResponse {
                    error: rejection.body_text(),
                }),
            )),
        }
    }
}
