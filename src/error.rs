//! Error types for the PDFPro API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::net::SocketAddr;
use thiserror::Error;

/// Result type alias for the PDFPro API
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while setting up or running the server
#[derive(Error, Debug)]
pub enum Error {
    /// Listener could not be bound
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// Accept loop failed
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),

    /// CORS origin is not a valid header value
    #[error("Invalid CORS origin: {origin:?}")]
    InvalidOrigin { origin: String },
}

impl Error {
    /// Return a sanitized error message safe to show to operators and clients.
    /// Full details should be logged via tracing before calling this.
    pub fn client_message(&self) -> String {
        match self {
            Error::Bind { addr, .. } => format!("Failed to bind {}", addr),
            Error::Serve(_) => "Server error".to_string(),
            Error::InvalidOrigin { .. } => "Invalid CORS origin".to_string(),
        }
    }
}

/// Transport-level failures answered with a JSON body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    NotFound,
    MethodNotAllowed,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: &'static str,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    pub fn detail(&self) -> &'static str {
        match self {
            ApiError::NotFound => "Not Found",
            ApiError::MethodNotAllowed => "Method Not Allowed",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.detail(),
        };
        (self.status(), Json(body)).into_response()
    }
}
