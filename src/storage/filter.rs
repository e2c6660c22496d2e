//! # Listing Filter
//!
//! Typed filter for the snippet listing query. Filter values are rendered as
//! bound parameters, never concatenated into the SQL text.

/// Sentinel language value meaning "no language restriction".
const LANGUAGE_ALL: &str = "All";

/// Optional restrictions applied to a snippet listing.
///
/// Both restrictions combine with logical AND when present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetFilter {
    language: Option<String>,
    title_query: Option<String>,
}

impl SnippetFilter {
    /// Build a filter from raw query parameters.
    ///
    /// A language of `"All"` (or empty) and an empty title query are both
    /// treated as absent.
    pub fn new(language: Option<String>, title_query: Option<String>) -> Self {
        let language = language.filter(|l| !l.is_empty() && l != LANGUAGE_ALL);
        let title_query = title_query.filter(|q| !q.is_empty());
        Self {
            language,
            title_query,
        }
    }

    /// Filter that matches every row.
    pub fn all() -> Self {
        Self::default()
    }

    /// Exact-match language restriction, if any.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Case-insensitive title substring restriction, if any.
    pub fn title_query(&self) -> Option<&str> {
        self.title_query.as_deref()
    }

    /// Render the WHERE clause and its bound parameters.
    ///
    /// Returns an empty clause when no restriction is present. The language
    /// comparison is exact and case-sensitive; the title comparison uses
    /// `LIKE` with surrounding wildcards, which is case-insensitive for
    /// ASCII in SQLite.
    pub(crate) fn where_clause(&self) -> (String, Vec<String>) {
        let mut conditions: Vec<&str> = Vec::new();
        let mut params: Vec<String> = Vec::new();

        if let Some(language) = &self.language {
            conditions.push("language = ?");
            params.push(language.clone());
        }

        if let Some(query) = &self.title_query {
            conditions.push("title LIKE ?");
            params.push(format!("%{}%", query));
        }

        if conditions.is_empty() {
            (String::new(), params)
        } else {
            (format!(" WHERE {}", conditions.join(" AND ")), params)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_renders_no_clause() {
        let (clause, params) = SnippetFilter::all().where_clause();
        assert!(clause.is_empty());
        assert!(params.is_empty());
    }

    #[test]
    fn test_all_sentinel_is_no_restriction() {
        let filter = SnippetFilter::new(Some("All".to_string()), None);
        assert_eq!(filter, SnippetFilter::all());
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let filter = SnippetFilter::new(Some(String::new()), Some(String::new()));
        assert_eq!(filter, SnippetFilter::all());
    }

    #[test]
    fn test_language_only() {
        let filter = SnippetFilter::new(Some("Rust".to_string()), None);
        let (clause, params) = filter.where_clause();
        assert_eq!(clause, " WHERE language = ?");
        assert_eq!(params, vec!["Rust".to_string()]);
    }

    #[test]
    fn test_title_query_is_wrapped_in_wildcards() {
        let filter = SnippetFilter::new(None, Some("flex".to_string()));
        let (clause, params) = filter.where_clause();
        assert_eq!(clause, " WHERE title LIKE ?");
        assert_eq!(params, vec!["%flex%".to_string()]);
    }

    #[test]
    fn test_both_restrictions_combine_with_and() {
        let filter = SnippetFilter::new(Some("CSS".to_string()), Some("center".to_string()));
        let (clause, params) = filter.where_clause();
        assert_eq!(clause, " WHERE language = ? AND title LIKE ?");
        assert_eq!(params, vec!["CSS".to_string(), "%center%".to_string()]);
    }

    #[test]
    fn test_filter_value_is_a_parameter_not_sql() {
        // A hostile value stays a bound parameter; the clause text is fixed.
        let filter = SnippetFilter::new(Some("x'; DROP TABLE snippets; --".to_string()), None);
        let (clause, params) = filter.where_clause();
        assert_eq!(clause, " WHERE language = ?");
        assert_eq!(params.len(), 1);
    }
}
