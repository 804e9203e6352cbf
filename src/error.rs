use std::fmt;

use axum::response::{IntoResponse, Response};
use axum::{http::StatusCode, Json};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    MissingLabel,
    EmptyLabel,
    NotFound(i64),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::MissingLabel => write!(f, "label is required"),
            StoreError::EmptyLabel => write!(f, "label cannot be empty"),
            StoreError::NotFound(id) => write!(f, "todo {id} not found"),
        }
    }
}

impl std::error::Error for StoreError {}

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound,
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MissingLabel | StoreError::EmptyLabel => {
                AppError::BadRequest(err.to_string())
            }
            StoreError::NotFound(_) => AppError::NotFound,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidPort(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort(value) => write!(f, "invalid port number: {value:?}"),
        }
    }
}

impl std::error::Error for ConfigError {}
