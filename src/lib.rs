//! snippetd - A self-hostable code snippet API server
//!
//! Stores short code snippets (title, language, description, code body) in a
//! single SQLite table and exposes them over HTTP as JSON: a public
//! read/search API and an admin API for create/update/delete.

pub mod cli;
pub mod config;
pub mod http_server;
pub mod storage;
