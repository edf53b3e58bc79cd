//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum is the top-level error
//! type returned by services and controllers and implements `IntoResponse` so handlers
//! can propagate failures with `?`.

pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, internal::InternalError},
};

/// Message returned to clients for every unhandled failure.
const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor";

/// Top-level application error type.
///
/// Request-level kinds (`NotFound`, `Validation`, `HasDependents`) carry the message
/// shown to the client. Every other variant is an unhandled failure: it is logged and
/// answered with a generic 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Includes primary-key conflicts from concurrent creates racing on the same
    /// allocated id.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Password hashing failure.
    #[error(transparent)]
    HashErr(#[from] bcrypt::BcryptError),

    /// A blocking task such as password hashing panicked or was cancelled.
    #[error(transparent)]
    TaskErr(#[from] tokio::task::JoinError),

    /// Socket or listener failure while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Unexpected data found in the database.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// The requested id does not reference an existing row.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Blank required field, malformed value, unknown foreign key or duplicate
    /// unique value.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    Validation(String),

    /// Delete blocked because other rows still reference the target.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    HasDependents(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation` and `HasDependents`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For all other variants, with details logged
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { message })).into_response()
            }
            Self::Validation(message) | Self::HasDependents(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { message })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                message: INTERNAL_ERROR_MESSAGE.to_string(),
            }),
        )
            .into_response()
    }
}
