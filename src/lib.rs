//! PDFPro API Library
//!
//! Minimal metadata backend for PDFPro. All PDF processing happens in the
//! browser; this crate only serves:
//! - `GET /`: service identity
//! - `GET /health`: liveness check
//! - `GET /api/v1/tools`: the client-side tool catalog

pub mod error;
pub mod metadata;
pub mod server;

pub use error::{ApiError, Error, Result};
pub use metadata::{HealthStatus, ServiceInfo, ToolCategory, ToolDescriptor, ToolList};
pub use server::{router, run_server, run_server_with_config, ServerConfig};
