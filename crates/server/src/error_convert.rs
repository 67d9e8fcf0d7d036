use shared_types::AppError;

/// Convert a sqlx::Error into an AppError.
///
/// The caller gets a generic message; the underlying fault is logged
/// here and never leaks into the response body.
pub fn sqlx_to_app_error(err: sqlx::Error) -> AppError {
    tracing::error!(error = %err, "database operation failed");
    match &err {
        sqlx::Error::RowNotFound => AppError::not_found("Resource not found"),
        _ => AppError::database("Database error"),
    }
}

/// Extension trait providing `.into_app_error()` on sqlx::Error.
pub trait SqlxErrorExt {
    fn into_app_error(self) -> AppError;
}

impl SqlxErrorExt for sqlx::Error {
    fn into_app_error(self) -> AppError {
        sqlx_to_app_error(self)
    }
}
