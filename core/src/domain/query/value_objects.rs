use std::collections::{BTreeMap, HashMap};

/// Parameter names with pipeline meaning. Everything else is an equality
/// filter on the record.
pub const RESERVED_KEYS: [&str; 5] = ["searchTerm", "page", "limit", "sortBy", "fields"];

/// Parsed request query parameters
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pub search_term: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub sort_by: Option<String>,
    pub fields: Option<String>,
    pub filters: BTreeMap<String, String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a query string map.
    ///
    /// `page` and `limit` values that do not parse as positive integers are
    /// treated as absent, so the stage defaults apply. Reserved keys land in
    /// their typed slots and never reach the filter map.
    pub fn from_query_map(query_map: &HashMap<String, String>) -> Self {
        let mut params = Self::new();

        for (key, value) in query_map {
            match key.as_str() {
                "searchTerm" => {
                    if !value.is_empty() {
                        params.search_term = Some(value.clone());
                    }
                }
                "page" => params.page = parse_positive(value),
                "limit" => params.limit = parse_positive(value),
                "sortBy" => {
                    if !value.is_empty() {
                        params.sort_by = Some(value.clone());
                    }
                }
                "fields" => {
                    if !value.is_empty() {
                        params.fields = Some(value.clone());
                    }
                }
                _ => {
                    params.filters.insert(key.clone(), value.clone());
                }
            }
        }

        params
    }
}

fn parse_positive(value: &str) -> Option<u64> {
    value.parse::<u64>().ok().filter(|v| *v > 0)
}

/// Constraint handed to the query handle. `Eq` predicates are conjunctive
/// across calls; `AnyContains` encodes a case-insensitive substring match
/// ORed over its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    Eq { field: String, value: String },
    AnyContains { fields: Vec<String>, term: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_reserved_keys_fill_typed_slots() {
        let params = QueryParams::from_query_map(&map_of(&[
            ("searchTerm", "jo"),
            ("page", "2"),
            ("limit", "5"),
            ("sortBy", "name"),
            ("fields", "name,email"),
        ]));

        assert_eq!(params.search_term.as_deref(), Some("jo"));
        assert_eq!(params.page, Some(2));
        assert_eq!(params.limit, Some(5));
        assert_eq!(params.sort_by.as_deref(), Some("name"));
        assert_eq!(params.fields.as_deref(), Some("name,email"));
        assert!(params.filters.is_empty());
    }

    #[test]
    fn test_reserved_keys_never_become_filters() {
        let params = QueryParams::from_query_map(&map_of(&[
            ("searchTerm", "jo"),
            ("page", "2"),
            ("limit", "5"),
            ("sortBy", "name"),
            ("fields", "name"),
            ("role", "admin"),
            ("status", "active"),
        ]));

        for key in RESERVED_KEYS {
            assert!(!params.filters.contains_key(key));
        }
        assert_eq!(params.filters.len(), 2);
        assert_eq!(params.filters.get("role").map(String::as_str), Some("admin"));
        assert_eq!(
            params.filters.get("status").map(String::as_str),
            Some("active")
        );
    }

    #[test]
    fn test_non_numeric_page_and_limit_are_absent() {
        let params =
            QueryParams::from_query_map(&map_of(&[("page", "abc"), ("limit", "-3")]));

        assert_eq!(params.page, None);
        assert_eq!(params.limit, None);
    }

    #[test]
    fn test_zero_page_is_absent() {
        let params = QueryParams::from_query_map(&map_of(&[("page", "0")]));

        assert_eq!(params.page, None);
    }

    #[test]
    fn test_empty_values_for_reserved_keys_are_absent() {
        let params = QueryParams::from_query_map(&map_of(&[
            ("searchTerm", ""),
            ("sortBy", ""),
            ("fields", ""),
        ]));

        assert_eq!(params.search_term, None);
        assert_eq!(params.sort_by, None);
        assert_eq!(params.fields, None);
    }
}
