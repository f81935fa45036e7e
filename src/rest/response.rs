//! Record, list envelope, and list query types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An opaque JSON object as returned by the API.
///
/// Records are passed through unchanged; no field is validated or coerced.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// The `{"data": [...], "total": N}` envelope of list endpoints.
///
/// Missing or null fields default to an empty list and a total of zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListResponse {
    /// Records on this page.
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<Record>,
    /// Total matching records reported by the server.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ListResponse {
    /// Returns `true` if the page has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of records on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }
}

/// Field filters rendered as `filter[<field>]=<value>` query parameters.
///
/// # Example
///
/// ```rust
/// use bookstack_api::rest::Filters;
///
/// let filters = Filters::new().with("book_id", 12).with("draft", "false");
/// assert_eq!(
///     filters.to_query(),
///     vec![
///         ("filter[book_id]".to_string(), "12".to_string()),
///         ("filter[draft]".to_string(), "false".to_string()),
///     ]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filters(BTreeMap<String, String>);

impl Filters {
    /// Creates an empty filter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a filter.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl ToString) -> Self {
        self.insert(field, value);
        self
    }

    /// Adds (or replaces) a filter in place.
    pub fn insert(&mut self, field: impl Into<String>, value: impl ToString) {
        self.0.insert(field.into(), value.to_string());
    }

    /// Returns the filter value for a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Returns `true` if no filter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders the filters as query parameters.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(field, value)| (format!("filter[{field}]"), value.clone()))
            .collect()
    }
}

/// Parameters for a single list request.
///
/// # Example
///
/// ```rust
/// use bookstack_api::rest::ListParams;
///
/// let params = ListParams::new().count(20).offset(40).sort("-updated_at");
/// assert_eq!(params.to_query().len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Page size.
    pub count: Option<u32>,
    /// Index of the first record.
    pub offset: Option<u64>,
    /// Sort field, prefixed `+` or `-`.
    pub sort: Option<String>,
    /// Field filters.
    pub filters: Filters,
}

impl ListParams {
    /// Creates empty list parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    #[must_use]
    pub const fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Sets the offset.
    #[must_use]
    pub const fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the sort field.
    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Adds a filter.
    #[must_use]
    pub fn filter(mut self, field: impl Into<String>, value: impl ToString) -> Self {
        self.filters.insert(field, value);
        self
    }

    /// Replaces the filter set.
    #[must_use]
    pub fn filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }

    /// Renders the parameters as query pairs.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(count) = self.count {
            query.push(("count".to_string(), count.to_string()));
        }
        if let Some(offset) = self.offset {
            query.push(("offset".to_string(), offset.to_string()));
        }
        if let Some(sort) = &self.sort {
            query.push(("sort".to_string(), sort.clone()));
        }
        query.extend(self.filters.to_query());
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_response_defaults_missing_fields() {
        let response: ListResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.is_empty());
        assert_eq!(response.total, 0);

        let response: ListResponse =
            serde_json::from_value(json!({"data": [{"id": 1}, {"id": 2}]})).unwrap();
        assert_eq!(response.len(), 2);
        assert_eq!(response.total, 0);
    }

    #[test]
    fn test_list_response_treats_null_as_missing() {
        let response: ListResponse =
            serde_json::from_value(json!({"data": [{"id": 3}], "total": null})).unwrap();
        assert_eq!(response.len(), 1);
        assert_eq!(response.total, 0);

        let response: ListResponse =
            serde_json::from_value(json!({"data": null, "total": 4})).unwrap();
        assert!(response.is_empty());
        assert_eq!(response.total, 4);
    }

    #[test]
    fn test_list_response_keeps_records_opaque() {
        let response: ListResponse = serde_json::from_value(json!({
            "data": [{"id": 7, "name": "Guide", "custom": {"nested": [1, 2]}}],
            "total": 1,
        }))
        .unwrap();

        assert_eq!(response.data[0]["custom"], json!({"nested": [1, 2]}));
    }

    #[test]
    fn test_filters_replace_existing_field() {
        let filters = Filters::new().with("book_id", 1).with("book_id", 2);
        assert_eq!(filters.get("book_id"), Some("2"));
        assert_eq!(filters.to_query().len(), 1);
    }

    #[test]
    fn test_list_params_to_query_order() {
        let params = ListParams::new()
            .count(10)
            .sort("+name")
            .filter("uploaded_to", 5);

        assert_eq!(
            params.to_query(),
            vec![
                ("count".to_string(), "10".to_string()),
                ("sort".to_string(), "+name".to_string()),
                ("filter[uploaded_to]".to_string(), "5".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_list_params_produce_no_query() {
        assert!(ListParams::new().to_query().is_empty());
    }
}
