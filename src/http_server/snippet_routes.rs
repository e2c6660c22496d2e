//! Public Snippet Routes
//!
//! Read-only endpoints: listing with optional filters, and get-by-id.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::storage::{Snippet, SnippetFilter, SnippetStore};

use super::run_blocking;
use super::ApiResult;

/// Listing query parameters
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Exact language filter; `All` or absent means no restriction
    pub lang: Option<String>,

    /// Case-insensitive title substring
    pub q: Option<String>,
}

/// Create public snippet routes (nested under `/api`)
pub fn snippet_routes(store: Arc<SnippetStore>) -> Router {
    Router::new()
        .route("/snippets", get(list_snippets_handler))
        .route("/snippets/:id", get(get_snippet_handler))
        .with_state(store)
}

async fn list_snippets_handler(
    State(store): State<Arc<SnippetStore>>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Vec<Snippet>>> {
    let filter = SnippetFilter::new(query.lang, query.q);
    let snippets = run_blocking(move || store.list(&filter)).await?;
    Ok(Json(snippets))
}

async fn get_snippet_handler(
    State(store): State<Arc<SnippetStore>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Snippet>> {
    let snippet = run_blocking(move || store.get(id)).await?;
    Ok(Json(snippet))
}
