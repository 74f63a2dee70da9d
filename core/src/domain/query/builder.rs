//! Translates request query parameters into constraints on a query handle.
//!
//! The five stages are independent and may be chained in any combination;
//! the intended order is search, filter, sort, paginate, fields. The builder
//! owns the handle for the duration of one request and is discarded after
//! [`QueryBuilder::build`].

use super::ports::QueryHandle;
use super::value_objects::{Predicate, QueryParams};

pub const DEFAULT_LIMIT: u64 = 10;
pub const DEFAULT_SORT: &str = "-created_at";

pub struct QueryBuilder<Q: QueryHandle> {
    params: QueryParams,
    query: Q,
    search: Option<Predicate>,
}

impl<Q: QueryHandle> QueryBuilder<Q> {
    pub fn new(query: Q, params: QueryParams) -> Self {
        Self {
            params,
            query,
            search: None,
        }
    }

    /// Record a case-insensitive substring match on the `searchTerm`
    /// parameter, ORed over `searchable_fields`. A later call replaces the
    /// recorded constraint; it reaches the handle once, in [`build`].
    /// An empty field list imposes no restriction.
    ///
    /// [`build`]: QueryBuilder::build
    pub fn search(mut self, searchable_fields: &[&str]) -> Self {
        let term = self.params.search_term.clone().unwrap_or_default();

        self.search = Some(Predicate::AnyContains {
            fields: searchable_fields.iter().map(|f| f.to_string()).collect(),
            term,
        });
        self
    }

    /// Apply every non-reserved parameter as an equality constraint, ANDed.
    pub fn filter(mut self) -> Self {
        let mut query = self.query;
        for (field, value) in &self.params.filters {
            query = query.constrain(Predicate::Eq {
                field: field.clone(),
                value: value.clone(),
            });
        }
        self.query = query;
        self
    }

    /// Apply the `sortBy` parameter verbatim, defaulting to descending
    /// creation time. The sort-spec convention belongs to the engine.
    pub fn sort(mut self) -> Self {
        let sort_by = self
            .params
            .sort_by
            .clone()
            .unwrap_or_else(|| DEFAULT_SORT.to_string());

        self.query = self.query.order(&sort_by);
        self
    }

    /// Window the result: `limit` from the `limit` parameter (default 10),
    /// skip `(page - 1) * limit` records when `page` is present, else none.
    pub fn paginate(mut self) -> Self {
        let limit = self.params.limit.unwrap_or(DEFAULT_LIMIT);
        let skip = self.params.page.map(|page| (page - 1) * limit).unwrap_or(0);

        self.query = self.query.window(skip, limit);
        self
    }

    /// Project onto the comma-separated `fields` parameter; absent means the
    /// engine default (all fields).
    pub fn fields(mut self) -> Self {
        let projection = self
            .params
            .fields
            .as_deref()
            .map(format_field_list)
            .unwrap_or_default();

        self.query = self.query.project(&projection);
        self
    }

    /// Apply the pending search constraint and hand the final query back to
    /// the caller for execution.
    pub fn build(self) -> Q {
        match self.search {
            Some(Predicate::AnyContains { fields, term }) => {
                if fields.is_empty() {
                    self.query
                } else {
                    self.query
                        .constrain(Predicate::AnyContains { fields, term })
                }
            }
            Some(predicate) => self.query.constrain(predicate),
            None => self.query,
        }
    }
}

/// `"a, b,c"` -> `"a b c"`, the engine's field-list syntax.
fn format_field_list(raw: &str) -> String {
    raw.split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Op {
        Constrain(Predicate),
        Project(String),
        Order(String),
        Window { skip: u64, limit: u64 },
    }

    #[derive(Debug, Default)]
    struct RecordingQuery {
        ops: Vec<Op>,
    }

    impl QueryHandle for RecordingQuery {
        fn constrain(mut self, predicate: Predicate) -> Self {
            self.ops.push(Op::Constrain(predicate));
            self
        }

        fn project(mut self, field_list: &str) -> Self {
            self.ops.push(Op::Project(field_list.to_string()));
            self
        }

        fn order(mut self, sort_spec: &str) -> Self {
            self.ops.push(Op::Order(sort_spec.to_string()));
            self
        }

        fn window(mut self, skip: u64, limit: u64) -> Self {
            self.ops.push(Op::Window { skip, limit });
            self
        }
    }

    fn params_from(pairs: &[(&str, &str)]) -> QueryParams {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        QueryParams::from_query_map(&map)
    }

    fn builder(pairs: &[(&str, &str)]) -> QueryBuilder<RecordingQuery> {
        QueryBuilder::new(RecordingQuery::default(), params_from(pairs))
    }

    #[test]
    fn test_paginate_defaults_to_first_ten() {
        let query = builder(&[]).paginate().build();

        assert_eq!(query.ops, vec![Op::Window { skip: 0, limit: 10 }]);
    }

    #[test]
    fn test_paginate_computes_skip_from_page_and_limit() {
        let query = builder(&[("page", "3"), ("limit", "5")]).paginate().build();

        assert_eq!(query.ops, vec![Op::Window { skip: 10, limit: 5 }]);
    }

    #[test]
    fn test_paginate_without_page_keeps_zero_skip() {
        let query = builder(&[("limit", "25")]).paginate().build();

        assert_eq!(query.ops, vec![Op::Window { skip: 0, limit: 25 }]);
    }

    #[test]
    fn test_paginate_treats_malformed_numbers_as_absent() {
        let query = builder(&[("page", "abc"), ("limit", "xyz")])
            .paginate()
            .build();

        assert_eq!(query.ops, vec![Op::Window { skip: 0, limit: 10 }]);
    }

    #[test]
    fn test_filter_applies_only_non_reserved_keys() {
        let query = builder(&[
            ("searchTerm", "jo"),
            ("page", "2"),
            ("limit", "5"),
            ("sortBy", "name"),
            ("fields", "name"),
            ("role", "admin"),
            ("status", "active"),
        ])
        .filter()
        .build();

        assert_eq!(
            query.ops,
            vec![
                Op::Constrain(Predicate::Eq {
                    field: "role".to_string(),
                    value: "admin".to_string(),
                }),
                Op::Constrain(Predicate::Eq {
                    field: "status".to_string(),
                    value: "active".to_string(),
                }),
            ]
        );
    }

    #[test]
    fn test_sort_defaults_to_descending_creation_time() {
        let query = builder(&[]).sort().build();

        assert_eq!(query.ops, vec![Op::Order(DEFAULT_SORT.to_string())]);
    }

    #[test]
    fn test_sort_forwards_the_raw_value() {
        let query = builder(&[("sortBy", "name,-age")]).sort().build();

        assert_eq!(query.ops, vec![Op::Order("name,-age".to_string())]);
    }

    #[test]
    fn test_fields_joins_the_comma_list_with_spaces() {
        let query = builder(&[("fields", "name, email ,phone")]).fields().build();

        assert_eq!(query.ops, vec![Op::Project("name email phone".to_string())]);
    }

    #[test]
    fn test_fields_absent_applies_empty_projection() {
        let query = builder(&[]).fields().build();

        assert_eq!(query.ops, vec![Op::Project(String::new())]);
    }

    #[test]
    fn test_search_builds_a_disjunction_over_the_given_fields() {
        let query = builder(&[("searchTerm", "jo")])
            .search(&["name", "email"])
            .build();

        assert_eq!(
            query.ops,
            vec![Op::Constrain(Predicate::AnyContains {
                fields: vec!["name".to_string(), "email".to_string()],
                term: "jo".to_string(),
            })]
        );
    }

    #[test]
    fn test_search_without_a_term_matches_everything_per_field() {
        let query = builder(&[]).search(&["name"]).build();

        assert_eq!(
            query.ops,
            vec![Op::Constrain(Predicate::AnyContains {
                fields: vec!["name".to_string()],
                term: String::new(),
            })]
        );
    }

    #[test]
    fn test_search_replaces_a_previous_search() {
        let query = builder(&[("searchTerm", "jo")])
            .search(&["name"])
            .search(&["email"])
            .build();

        assert_eq!(
            query.ops,
            vec![Op::Constrain(Predicate::AnyContains {
                fields: vec!["email".to_string()],
                term: "jo".to_string(),
            })]
        );
    }

    #[test]
    fn test_search_over_no_fields_imposes_no_restriction() {
        let query = builder(&[("searchTerm", "jo")]).search(&[]).build();

        assert!(query.ops.is_empty());
    }

    #[test]
    fn test_stages_are_optional() {
        let query = builder(&[("role", "admin")]).sort().build();

        assert_eq!(query.ops, vec![Op::Order(DEFAULT_SORT.to_string())]);
    }

    #[test]
    fn test_chaining_all_stages_accumulates_every_constraint() {
        let query = builder(&[
            ("searchTerm", "al"),
            ("page", "2"),
            ("limit", "5"),
            ("sortBy", "name"),
            ("fields", "name,email"),
            ("role", "admin"),
        ])
        .search(&["name"])
        .filter()
        .sort()
        .paginate()
        .fields()
        .build();

        assert_eq!(
            query.ops,
            vec![
                Op::Constrain(Predicate::Eq {
                    field: "role".to_string(),
                    value: "admin".to_string(),
                }),
                Op::Order("name".to_string()),
                Op::Window { skip: 5, limit: 5 },
                Op::Project("name email".to_string()),
                Op::Constrain(Predicate::AnyContains {
                    fields: vec!["name".to_string()],
                    term: "al".to_string(),
                }),
            ]
        );
    }
}
