//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::error::config::ConfigError,
};

/// Message returned with every 404 for an unknown or malformed student identifier.
pub const STUDENT_NOT_FOUND: &str = "Student not found";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error carrying the store's message.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket or runtime error while starting or running the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with a `{ message }` body.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with an `{ error }` body.
    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    /// Reclassifies a store failure as a client error.
    ///
    /// Create and update answer every failure with 400, including ones raised by
    /// the store itself.
    pub fn bad_request_from(err: sea_orm::DbErr) -> Self {
        tracing::warn!("Store rejected write: {}", err);
        AppError::BadRequest(err.to_string())
    }

    pub fn student_not_found() -> Self {
        AppError::NotFound(STUDENT_NOT_FOUND.to_string())
    }
}

/// Body decode failures surface as validation errors instead of axum's plain-text 422.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant, `{ error }` body
/// - 404 Not Found - For `NotFound` variant, `{ message }` body
/// - 500 Internal Server Error - For `DbErr`, `{ error }` body with the store's message
/// - 500 Internal Server Error - For everything else, generic `{ error }` body
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(MessageDto { message })).into_response()
            }
            Self::BadRequest(error) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error })).into_response()
            }
            Self::DbErr(err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal Server Error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod test;
