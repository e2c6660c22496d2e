//! # Snippet Store
//!
//! CRUD operations against the `snippets` table. Every operation opens its
//! own connection and drops it on return, success or error.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

use super::errors::{StoreError, StoreResult};
use super::filter::SnippetFilter;
use super::schema::{BOOTSTRAP_PRAGMAS, SEED_SNIPPETS, SNIPPETS_DDL};

/// A stored snippet, one field per column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: i64,
    pub title: String,
    pub language: String,
    pub description: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
}

/// The caller-supplied fields of a snippet, used for create and update.
///
/// `id` and `created_at` are storage-assigned and never pass through here.
#[derive(Debug, Clone)]
pub struct NewSnippet {
    pub title: String,
    pub language: String,
    pub description: String,
    pub code: String,
}

/// SQLite-backed store for snippets.
///
/// Holds only the database path; connections are opened per operation.
#[derive(Debug, Clone)]
pub struct SnippetStore {
    path: PathBuf,
}

impl SnippetStore {
    /// Create a store for the database at `path`. Does not touch the file;
    /// call [`bootstrap`](Self::bootstrap) before serving.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The database file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> StoreResult<Connection> {
        Ok(Connection::open(&self.path)?)
    }

    /// Idempotent startup step: apply pragmas, create the table if missing,
    /// and seed two example rows when the table is empty.
    pub fn bootstrap(&self) -> StoreResult<()> {
        let conn = self.open()?;
        conn.execute_batch(BOOTSTRAP_PRAGMAS)?;
        conn.execute_batch(SNIPPETS_DDL)?;

        let count: i64 = conn.query_row("SELECT COUNT(id) FROM snippets", [], |row| row.get(0))?;
        if count == 0 {
            let created_at = Utc::now();
            for (title, language, description, code) in SEED_SNIPPETS {
                conn.execute(
                    "INSERT INTO snippets (title, language, description, code, created_at)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![title, language, description, code, created_at],
                )?;
            }
            tracing::info!(rows = SEED_SNIPPETS.len(), "seeded example snippets");
        }

        Ok(())
    }

    /// List snippets matching `filter`, most recently created first.
    ///
    /// `id DESC` is the tie-break for equal timestamps, so a full listing
    /// always returns insertion order reversed.
    pub fn list(&self, filter: &SnippetFilter) -> StoreResult<Vec<Snippet>> {
        let conn = self.open()?;
        let (where_clause, bind_params) = filter.where_clause();
        let query = format!(
            "SELECT id, title, language, description, code, created_at
             FROM snippets{}
             ORDER BY created_at DESC, id DESC",
            where_clause
        );

        let mut stmt = conn.prepare(&query)?;
        let rows = stmt.query_map(params_from_iter(bind_params), Self::map_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Fetch a single snippet by id.
    pub fn get(&self, id: i64) -> StoreResult<Snippet> {
        let conn = self.open()?;
        conn.query_row(
            "SELECT id, title, language, description, code, created_at
             FROM snippets WHERE id = ?1",
            params![id],
            Self::map_row,
        )
        .optional()?
        .ok_or(StoreError::SnippetNotFound)
    }

    /// Insert a new snippet. Returns the storage-assigned id.
    pub fn insert(&self, snippet: &NewSnippet) -> StoreResult<i64> {
        let conn = self.open()?;
        let created_at = Utc::now();
        conn.execute(
            "INSERT INTO snippets (title, language, description, code, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                snippet.title,
                snippet.language,
                snippet.description,
                snippet.code,
                created_at
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Overwrite all four text fields of the snippet with `id`.
    ///
    /// `id` and `created_at` are untouched. Fails with
    /// [`StoreError::SnippetNotFound`] when no row matches.
    pub fn update(&self, id: i64, snippet: &NewSnippet) -> StoreResult<()> {
        let conn = self.open()?;
        let affected = conn.execute(
            "UPDATE snippets SET title = ?1, language = ?2, description = ?3, code = ?4
             WHERE id = ?5",
            params![
                snippet.title,
                snippet.language,
                snippet.description,
                snippet.code,
                id
            ],
        )?;
        if affected == 0 {
            return Err(StoreError::SnippetNotFound);
        }
        Ok(())
    }

    /// Remove the snippet with `id` if it exists. Idempotent: deleting an
    /// unknown id is not an error.
    pub fn delete(&self, id: i64) -> StoreResult<()> {
        let conn = self.open()?;
        conn.execute("DELETE FROM snippets WHERE id = ?1", params![id])?;
        Ok(())
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<Snippet> {
        Ok(Snippet {
            id: row.get(0)?,
            title: row.get(1)?,
            language: row.get(2)?,
            description: row.get(3)?,
            code: row.get(4)?,
            created_at: row.get(5)?,
        })
    }
}
