//! Full-text search across shelves, books, chapters, and pages.
//!
//! Queries use BookStack's search syntax: `{created_by:me}`, `{in_name:text}`,
//! `[tag_name=value]`, and so on. Search is paged by page number rather than
//! offset.
//!
//! # Example
//!
//! ```rust,ignore
//! let search = client.search();
//!
//! let first_page = search.all("deploy", 1, 20).await?;
//! let everything = search.search_all("deploy", 1_000).await?;
//! let pages_only = search.pages("{in_name:deploy}").await?;
//! ```

use serde_json::Value;

use crate::clients::rest::pagination::is_final_page;
use crate::clients::RestClient;
use crate::rest::{decode_list, ListResponse, Record, Resource, ResourceError};

/// Largest page the search endpoint returns.
pub const MAX_SEARCH_COUNT: u32 = 100;

/// Result cap used by [`Search::search_all`] callers that have no preference.
pub const DEFAULT_MAX_RESULTS: usize = 500;

/// Handle for the `search` endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Search<'a> {
    client: &'a RestClient,
}

impl<'a> Search<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Fetches one page of results. `page` is 1-based; `count` is capped at 100.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport and decoding errors.
    pub async fn all(
        &self,
        query: &str,
        page: u32,
        count: u32,
    ) -> Result<ListResponse, ResourceError> {
        let params = [
            ("query".to_string(), query.to_string()),
            ("page".to_string(), page.to_string()),
            ("count".to_string(), count.min(MAX_SEARCH_COUNT).to_string()),
        ];
        let body = self.client.get(Self::ENDPOINT, &params).await?;
        decode_list(body)
    }

    /// Collects up to `max_results` matches, paging through results.
    ///
    /// Stops on an empty page, or on a short page once the reported total is
    /// reached. The result is truncated to `max_results`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport and decoding errors.
    pub async fn search_all(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<Record>, ResourceError> {
        let mut results = Vec::new();
        let mut page = 1;

        while results.len() < max_results {
            let response = self.all(query, page, MAX_SEARCH_COUNT).await?;
            let received = response.data.len();
            results.extend(response.data);

            if is_final_page(
                received,
                MAX_SEARCH_COUNT,
                results.len() as u64,
                response.total,
            ) {
                break;
            }
            page += 1;
        }

        results.truncate(max_results);
        Ok(results)
    }

    /// Searches pages only.
    ///
    /// # Errors
    ///
    /// See [`search_all`](Self::search_all).
    pub async fn pages(&self, query: &str) -> Result<Vec<Record>, ResourceError> {
        self.of_type(query, "page").await
    }

    /// Searches chapters only.
    ///
    /// # Errors
    ///
    /// See [`search_all`](Self::search_all).
    pub async fn chapters(&self, query: &str) -> Result<Vec<Record>, ResourceError> {
        self.of_type(query, "chapter").await
    }

    /// Searches books only.
    ///
    /// # Errors
    ///
    /// See [`search_all`](Self::search_all).
    pub async fn books(&self, query: &str) -> Result<Vec<Record>, ResourceError> {
        self.of_type(query, "book").await
    }

    /// Searches shelves only.
    ///
    /// # Errors
    ///
    /// See [`search_all`](Self::search_all).
    pub async fn shelves(&self, query: &str) -> Result<Vec<Record>, ResourceError> {
        self.of_type(query, "bookshelf").await
    }

    // Filtering happens client-side over the full aggregated result set.
    async fn of_type(&self, query: &str, kind: &str) -> Result<Vec<Record>, ResourceError> {
        let results = self.search_all(query, DEFAULT_MAX_RESULTS).await?;
        Ok(filter_by_type(results, kind))
    }
}

fn filter_by_type(results: Vec<Record>, kind: &str) -> Vec<Record> {
    results
        .into_iter()
        .filter(|record| record.get("type").and_then(Value::as_str) == Some(kind))
        .collect()
}

impl Resource for Search<'_> {
    const ENDPOINT: &'static str = "search";
    const NAME: &'static str = "Search result";

    fn client(&self) -> &RestClient {
        self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::into_record;
    use serde_json::json;

    #[test]
    fn test_filter_by_type_is_exact() {
        let results: Vec<Record> = [
            json!({"id": 1, "type": "page"}),
            json!({"id": 2, "type": "book"}),
            json!({"id": 3, "type": "page"}),
            json!({"id": 4, "type": "Page"}),
            json!({"id": 5}),
        ]
        .into_iter()
        .map(|v| into_record(v).unwrap())
        .collect();

        let pages = filter_by_type(results, "page");
        assert_eq!(pages.len(), 2);
        assert!(pages.iter().all(|r| r["type"] == "page"));
    }

    #[test]
    fn test_shelves_use_bookshelf_type() {
        let results = vec![into_record(json!({"type": "bookshelf"})).unwrap()];
        assert_eq!(filter_by_type(results, "bookshelf").len(), 1);
    }
}
