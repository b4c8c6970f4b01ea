use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    http::Uri,
};
use tracing::debug;

use crate::models::response::ErrorResponse;

pub async fn fallback_handler(uri: Uri) -> Response {
    debug!(path = %uri.path(), "No route matched");

    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            success: false,
            error: "Invalid endpoint. Valid endpoints: /users, /users/details/{id}, /users/create, \
                    /users/edit/{id}, /users/delete/{id}, /health"
                .to_string(),
        }),
    )
        .into_response()
}
