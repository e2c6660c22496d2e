//! # HTTP Server
//!
//! Combines the route modules into one axum router and serves it.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::storage::SnippetStore;

use super::admin_routes::admin_routes;
use super::snippet_routes::snippet_routes;

/// HTTP server for the snippet API
pub struct HttpServer {
    addr: String,
    router: Router,
}

impl HttpServer {
    /// Create a server over a bootstrapped store.
    pub fn new(store: Arc<SnippetStore>, config: &Config) -> Self {
        Self {
            addr: config.socket_addr(),
            router: Self::build_router(store, config),
        }
    }

    /// Build the combined router with all endpoints
    fn build_router(store: Arc<SnippetStore>, config: &Config) -> Router {
        // Permissive CORS when no origins are configured, explicit list otherwise
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<HeaderValue> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            // Health check at root level
            .merge(health_routes())
            // Public read/search API under /api
            .nest("/api", snippet_routes(store.clone()))
            // Admin write API under /api/admin
            .nest("/api/admin", admin_routes(store))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> &str {
        &self.addr
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the listener and serve until the process exits.
    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self
            .addr
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("bind address: {}", e)))?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, "snippetd HTTP server listening");
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Health check route, kept at the root path
pub fn health_routes() -> Router {
    Router::new().route("/", get(health_handler))
}

async fn health_handler() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_server_uses_configured_addr() {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(SnippetStore::new(temp_dir.path().join("snippets.db")));
        let config = Config {
            port: 8080,
            ..Default::default()
        };

        let server = HttpServer::new(store, &config);
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds_with_cors_origins() {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(SnippetStore::new(temp_dir.path().join("snippets.db")));
        let config = Config {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };

        let server = HttpServer::new(store, &config);
        let _router = server.router();
    }
}
