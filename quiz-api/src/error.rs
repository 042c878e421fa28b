use crate::models::ErrorResponse;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Template error: {0}")]
    Template(String),

    #[error("{0}")]
    InvalidRequest(String),
}

impl From<handlebars::RenderError> for AppError {
    fn from(err: handlebars::RenderError) -> Self {
        AppError::Template(err.to_string())
    }
}

impl From<handlebars::TemplateError> for AppError {
    fn from(err: handlebars::TemplateError) -> Self {
        AppError::Template(err.to_string())
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let error_response = ErrorResponse {
            error: self.to_string(),
        };

        match self {
            AppError::InvalidRequest(_) => HttpResponse::BadRequest().json(error_response),
            AppError::Io(_)
            | AppError::Yaml(_)
            | AppError::Json(_)
            | AppError::Config(_)
            | AppError::Template(_) => {
                tracing::error!(error = %self, "Request failed");
                HttpResponse::InternalServerError().json(error_response)
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
