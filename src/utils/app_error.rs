use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationErrorDetail {
    pub field: String,
    pub title: String,   // validator code, e.g. "is_required", "length"
    pub message: String, // Human readable
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("Page not found")]
    PageNotFound,

    #[error("Validation failed")]
    Validation(Vec<ValidationErrorDetail>),

    #[error("{0}")]
    ConstraintViolation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[source] DbErr),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        AppError::NotFound { entity, id }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } | AppError::PageNotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ConstraintViolation(_) => StatusCode::CONFLICT,
            AppError::Config(_) | AppError::Database(_) | AppError::Template(_) | AppError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound { .. } | AppError::PageNotFound => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::ConstraintViolation(_) => "CONSTRAINT_VIOLATION",
            AppError::Config(_) => "CONFIG_ERR",
            AppError::Database(_) => "DB_ERR",
            AppError::Template(_) => "TEMPLATE_ERR",
            AppError::Io(_) => "IO_ERR",
        }
    }

    pub fn to_error_page(&self) -> ErrorPage {
        let status = self.status_code();
        // Internal details stay in the logs
        let message = if status.is_server_error() {
            "Something went wrong while handling this request.".to_string()
        } else {
            self.to_string()
        };
        let details = match self {
            AppError::Validation(details) => details.clone(),
            _ => Vec::new(),
        };

        ErrorPage {
            status: status.as_u16(),
            code: self.code(),
            message,
            details,
        }
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => {
                AppError::ConstraintViolation(format!("Duplicate value violates a unique constraint: {}", msg))
            }
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                AppError::ConstraintViolation(format!("Referenced record does not exist: {}", msg))
            }
            _ => AppError::Database(err),
        }
    }
}

/// Carried in the response extensions so the error page middleware can
/// render it with the shared templates.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorPage {
    pub status: u16,
    pub code: &'static str,
    pub message: String,
    pub details: Vec<ValidationErrorDetail>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{} ({}): {}", status, self.code(), self);
        }

        let page = self.to_error_page();
        let mut response = (status, page.message.clone()).into_response();
        response.extensions_mut().insert(page);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_entity_and_id() {
        let err = AppError::not_found("User", 99999);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "User 99999 not found");
    }

    #[test]
    fn server_errors_hide_internal_details() {
        let err = AppError::Database(DbErr::Custom("connection reset".into()));
        let page = err.to_error_page();
        assert_eq!(page.status, 500);
        assert!(!page.message.contains("connection reset"));
    }

    #[test]
    fn plain_db_errors_stay_database_errors() {
        let err: AppError = DbErr::Custom("boom".into()).into();
        assert!(matches!(err, AppError::Database(_)));
    }

    #[test]
    fn error_response_carries_error_page() {
        let response = AppError::ConstraintViolation("Tag 'rust' already exists".into()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let page = response.extensions().get::<ErrorPage>().unwrap();
        assert_eq!(page.code, "CONSTRAINT_VIOLATION");
        assert_eq!(page.message, "Tag 'rust' already exists");
    }
}
