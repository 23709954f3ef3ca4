//! Static metadata served by the API
//!
//! Everything here is built from literals and never changes while the
//! process runs.

pub mod info;
pub mod tools;

pub use info::{HealthStatus, ServiceInfo};
pub use tools::{catalog, ToolCategory, ToolDescriptor, ToolList};
