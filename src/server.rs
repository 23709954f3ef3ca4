//! HTTP server implementation using axum

use crate::error::{ApiError, Error, Result};
use crate::metadata::{HealthStatus, ServiceInfo, ToolList};
use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

const PATH_ROOT: &str = "/";
const PATH_HEALTH: &str = "/health";
const PATH_TOOLS: &str = "/api/v1/tools";

/// Front-end origins allowed to call the API
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// Default listen port
pub const DEFAULT_PORT: u16 = 8000;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (default: 0.0.0.0:8000)
    pub bind_addr: SocketAddr,
    /// Origins that receive CORS allow headers, credentials included
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo::current())
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}

async fn list_tools() -> Json<ToolList> {
    Json(ToolList::all())
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

// ============================================================================
// CORS
// ============================================================================

fn parse_origins(origins: &[String]) -> Result<Vec<HeaderValue>> {
    origins
        .iter()
        .map(|origin| {
            if origin == "*" {
                return Err(Error::InvalidOrigin {
                    origin: origin.clone(),
                });
            }
            HeaderValue::from_str(origin).map_err(|_| Error::InvalidOrigin {
                origin: origin.clone(),
            })
        })
        .collect()
}

/// Credentialed CORS cannot use the `*` wildcard, so "any method" and
/// "any header" are granted by mirroring the preflight request.
fn cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// State for [`preflight_gate`]
#[derive(Clone)]
struct PreflightGate {
    /// Routes without the CORS layer
    routes: Router,
    origins: Arc<[HeaderValue]>,
}

/// `CorsLayer` answers every `OPTIONS` request itself. Only a real preflight
/// (`Origin` plus `Access-Control-Request-Method`) from an allowed origin
/// may reach it; other `OPTIONS` requests go to the routes so they get the
/// usual 404/405, and preflights from unlisted origins are refused.
async fn preflight_gate(
    State(gate): State<PreflightGate>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() != Method::OPTIONS {
        return next.run(request).await;
    }

    let headers = request.headers();
    let is_preflight = headers.contains_key(header::ORIGIN)
        && headers.contains_key(header::ACCESS_CONTROL_REQUEST_METHOD);
    if !is_preflight {
        return match gate.routes.oneshot(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        };
    }

    let origin = request.headers().get(header::ORIGIN);
    if !origin.is_some_and(|origin| gate.origins.iter().any(|allowed| allowed == origin)) {
        tracing::debug!(origin = ?origin, "rejected preflight from unlisted origin");
        return (StatusCode::BAD_REQUEST, "Disallowed CORS origin").into_response();
    }

    next.run(request).await
}

// ============================================================================
// Router
// ============================================================================

fn routes() -> Router {
    Router::new()
        .route(PATH_ROOT, get(root))
        .route(PATH_HEALTH, get(health))
        .route(PATH_TOOLS, get(list_tools))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
}

/// Build the application router with CORS and request tracing applied
pub fn router(config: &ServerConfig) -> Result<Router> {
    let origins = parse_origins(&config.allowed_origins)?;
    let gate = PreflightGate {
        routes: routes(),
        origins: origins.clone().into(),
    };

    Ok(routes()
        .layer(cors_layer(origins))
        .layer(middleware::from_fn_with_state(gate, preflight_gate))
        .layer(TraceLayer::new_for_http()))
}

/// Resolve when the process is asked to stop
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Run the server on the default address
pub async fn run_server() -> Result<()> {
    run_server_with_config(ServerConfig::default()).await
}

/// Run the server with full configuration
pub async fn run_server_with_config(config: ServerConfig) -> Result<()> {
    let app = router(&config)?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(|source| Error::Bind {
            addr: config.bind_addr,
            source,
        })?;

    tracing::info!(addr = %config.bind_addr, "PDFPro API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(Error::Serve)?;

    tracing::info!("PDFPro API stopped");

    Ok(())
}
