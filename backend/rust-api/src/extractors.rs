use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ApiResponse;

pub const INVALID_REQUEST_MESSAGE: &str = "Invalid request format.";

/// JSON extractor whose rejections use the quiz response envelope instead of
/// axum's plain-text body.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: serde::de::DeserializeOwned + 'static,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => {
                tracing::warn!("Failed to parse JSON request body: {}", rejection);
                let body = ApiResponse::<()>::failure(INVALID_REQUEST_MESSAGE);
                Err((StatusCode::BAD_REQUEST, Json(body)).into_response())
            }
        }
    }
}
