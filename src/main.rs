//! PDFPro API - Entry point
//!
//! Serves static platform metadata over HTTP.

use pdfpro_api::{run_server, Error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pdfpro_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting PDFPro API v{}", env!("CARGO_PKG_VERSION"));

    run_server().await.map_err(exit_error)
}

/// Log the full error, then surface only the sanitized message
fn exit_error(e: Error) -> anyhow::Error {
    tracing::error!(error = %e, "server exited with error");
    anyhow::anyhow!(e.client_message())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_error_uses_client_message() {
        let err = exit_error(Error::Serve(std::io::Error::other("fd 7 closed")));
        assert_eq!(err.to_string(), "Server error");
        assert!(!format!("{err:?}").contains("fd 7"));
    }
}
