//! Service identity and health payloads

use serde::Serialize;

/// Human-readable service name
const SERVICE_NAME: &str = "PDFPro API";

/// Service identity returned from the root endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub note: &'static str,
}

impl ServiceInfo {
    pub fn current() -> Self {
        Self {
            name: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
            description: "Privacy-first PDF platform backend",
            note: "All PDF processing happens client-side. \
                   This server only provides metadata and static files.",
        }
    }
}

/// Liveness payload for uptime monitors
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub message: &'static str,
}

impl HealthStatus {
    /// The process is up, so it is healthy. No dependencies are probed.
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            message: "PDFPro API is running",
        }
    }
}
