// Centralized error handling for the user directory

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;
use tracing::error;

use crate::models::response::ErrorResponse;

/// Mapping definition bugs. Callers are not expected to recover from these.
#[derive(Error, Debug)]
pub enum MappingError {
    #[error("Could not read source of type {source_shape}: source is absent")]
    NullSource { source_shape: &'static str },

    #[error("Could not create instance of destination type {destination_shape}")]
    DestinationConstruction { destination_shape: &'static str },

    #[error("Field '{field}' of type '{source_type}' cannot be mapped to a field of type '{destination_type}'")]
    UnsupportedMapping {
        field: String,
        source_type: String,
        destination_type: String,
    },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("No record with id {id}")]
    NotFound { id: i64 },
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors returned by the user handlers
#[derive(Error, Debug)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(i64),

    #[error("Invalid form: {0}")]
    InvalidForm(String),

    #[error("Form id {form_id} does not match path id {path_id}")]
    IdMismatch { path_id: i64, form_id: i64 },

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<ServiceError> for UserError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Store(StoreError::NotFound { id }) => UserError::NotFound(id),
            ServiceError::Mapping(e) => {
                error!(error = %e, "Mapping failed");
                UserError::InternalError(e.to_string())
            }
        }
    }
}

impl From<MappingError> for UserError {
    fn from(err: MappingError) -> Self {
        ServiceError::from(err).into()
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = match &self {
            UserError::NotFound(_) => StatusCode::NOT_FOUND,
            UserError::InvalidForm(_) => StatusCode::BAD_REQUEST,
            UserError::IdMismatch { .. } => StatusCode::BAD_REQUEST,
            UserError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(ErrorResponse {
                success: false,
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

impl From<ValidationError> for UserError {
    fn from(err: ValidationError) -> Self {
        UserError::InvalidForm(err.to_string())
    }
}
