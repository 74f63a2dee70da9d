use axum::{extract::FromRequestParts, http::request::Parts, response::Response};
use std::collections::HashMap;

use mantaray_core::domain::query::value_objects::QueryParams;

/// Extractor decoding the request query string into [`QueryParams`].
///
/// Reserved keys (`searchTerm`, `page`, `limit`, `sortBy`, `fields`) land in
/// their typed slots; every other key becomes an equality filter.
///
/// Usage:
/// ```ignore
/// async fn handler(
///     QueryParamsExtractor(params): QueryParamsExtractor,
/// ) -> Result<Response, ApiError> {
///     // Use params.search_term, params.filters, params.page, ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct QueryParamsExtractor(pub QueryParams);

impl<S> FromRequestParts<S> for QueryParamsExtractor
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let query_map: HashMap<String, String> =
            serde_urlencoded::from_str(query_string).unwrap_or_default();

        Ok(QueryParamsExtractor(QueryParams::from_query_map(
            &query_map,
        )))
    }
}
