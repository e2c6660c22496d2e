//! # HTTP Server Module
//!
//! Axum-based JSON API for snippets.
//!
//! # Endpoints
//!
//! - `GET /` - Health check (plain text)
//! - `GET /api/snippets` - List snippets, with optional `lang` and `q` filters
//! - `GET /api/snippets/:id` - Fetch one snippet
//! - `POST /api/admin/add_snippet` - Create a snippet (form fields)
//! - `PUT /api/admin/snippets/:id` - Overwrite a snippet (form fields)
//! - `DELETE /api/admin/snippets/:id` - Remove a snippet

pub mod admin_routes;
pub mod errors;
pub mod server;
pub mod snippet_routes;

pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;

use crate::storage::StoreResult;

/// Run a synchronous storage operation off the async runtime.
///
/// rusqlite is blocking; handlers hand their storage work to the blocking
/// pool and map both task and storage failures into [`ApiError`].
pub(crate) async fn run_blocking<T, F>(task: F) -> ApiResult<T>
where
    F: FnOnce() -> StoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| ApiError::Internal(format!("blocking task failed: {}", e)))?
        .map_err(ApiError::from)
}
