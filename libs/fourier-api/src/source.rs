use crate::error::SourceError;
use crate::page::QueryPage;

/// One page request. The initial request carries no token; every
/// continuation carries the token the previous page returned.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRequest {
    pub query: String,
    /// Maximum-rows-per-page hint. The service may return fewer.
    pub max_rows: Option<u32>,
    pub next_token: Option<String>,
}

/// The query-service collaborator.
///
/// - `query()` — submit a request and block until one page (or an error)
///   arrives. The runner issues exactly one call per page advance; retry
///   and backoff are not this seam's concern.
/// - `cancel()` — out-of-band cancellation against a query identifier.
///   The service tracks identifiers independently of pagination, so this
///   may be called from a different client while a run is in flight.
pub trait QuerySource {
    fn query(&mut self, request: &QueryRequest) -> Result<QueryPage, SourceError>;
    fn cancel(&mut self, query_id: &str) -> Result<(), SourceError>;
}
