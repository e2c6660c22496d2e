//! Admin Snippet Routes
//!
//! Write endpoints: create, update, delete. All four text fields are
//! required non-empty; validation happens here, before storage is touched.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{post, put},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::storage::{NewSnippet, SnippetStore};

use super::run_blocking;
use super::{ApiError, ApiResult};

// ==================
// Request/Response Types
// ==================

/// Form fields shared by create and update
#[derive(Debug, Deserialize)]
pub struct SnippetForm {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

impl SnippetForm {
    /// Reject any missing or empty field before touching storage.
    fn into_new_snippet(self) -> ApiResult<NewSnippet> {
        match (self.title, self.language, self.description, self.code) {
            (Some(title), Some(language), Some(description), Some(code))
                if !title.is_empty()
                    && !language.is_empty()
                    && !description.is_empty()
                    && !code.is_empty() =>
            {
                Ok(NewSnippet {
                    title,
                    language,
                    description,
                    code,
                })
            }
            _ => Err(ApiError::MissingFields),
        }
    }
}

/// Success response body
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: String,
}

impl SuccessResponse {
    fn new(message: &str) -> Self {
        Self {
            success: message.to_string(),
        }
    }
}

// ==================
// Admin Routes
// ==================

/// Create admin routes (nested under `/api/admin`)
pub fn admin_routes(store: Arc<SnippetStore>) -> Router {
    Router::new()
        .route("/add_snippet", post(add_snippet_handler))
        .route(
            "/snippets/:id",
            put(update_snippet_handler).delete(delete_snippet_handler),
        )
        .with_state(store)
}

// ==================
// Handlers
// ==================

async fn add_snippet_handler(
    State(store): State<Arc<SnippetStore>>,
    Form(form): Form<SnippetForm>,
) -> ApiResult<(StatusCode, Json<SuccessResponse>)> {
    let snippet = form.into_new_snippet()?;
    let id = run_blocking(move || store.insert(&snippet)).await?;
    tracing::info!(id, "snippet added");

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::new("Snippet added successfully!")),
    ))
}

async fn update_snippet_handler(
    State(store): State<Arc<SnippetStore>>,
    Path(id): Path<i64>,
    Form(form): Form<SnippetForm>,
) -> ApiResult<Json<SuccessResponse>> {
    let snippet = form.into_new_snippet()?;
    run_blocking(move || store.update(id, &snippet)).await?;
    tracing::info!(id, "snippet updated");

    Ok(Json(SuccessResponse::new("Snippet updated successfully!")))
}

async fn delete_snippet_handler(
    State(store): State<Arc<SnippetStore>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<SuccessResponse>> {
    run_blocking(move || store.delete(id)).await?;
    tracing::info!(id, "snippet deleted");

    Ok(Json(SuccessResponse::new("Snippet deleted successfully!")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_form() -> SnippetForm {
        SnippetForm {
            title: Some("t".to_string()),
            language: Some("l".to_string()),
            description: Some("d".to_string()),
            code: Some("c".to_string()),
        }
    }

    #[test]
    fn test_full_form_validates() {
        let snippet = full_form().into_new_snippet().unwrap();
        assert_eq!(snippet.title, "t");
        assert_eq!(snippet.code, "c");
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let form = SnippetForm {
            code: None,
            ..full_form()
        };
        assert!(matches!(
            form.into_new_snippet().unwrap_err(),
            ApiError::MissingFields
        ));
    }

    #[test]
    fn test_empty_field_is_rejected() {
        let form = SnippetForm {
            title: Some(String::new()),
            ..full_form()
        };
        assert!(matches!(
            form.into_new_snippet().unwrap_err(),
            ApiError::MissingFields
        ));
    }
}
