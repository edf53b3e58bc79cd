use crate::server::error::AppError;

mod zona;

/// Extracts the client message of a request-level error.
fn message(err: AppError) -> String {
    match err {
        AppError::NotFound(message)
        | AppError::Validation(message)
        | AppError::HasDependents(message) => message,
        other => panic!("expected a request-level error, got {other:?}"),
    }
}
