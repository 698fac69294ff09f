use crate::column::ColumnInfo;
use crate::datum::Row;

/// One page of a query execution. Immutable decoder input; discarded
/// after rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPage {
    /// Header, shared by every row in the page.
    pub columns: Vec<ColumnInfo>,
    pub rows: Vec<Row>,
    /// Opaque cursor; absent on the last page.
    pub next_token: Option<String>,
    /// Identifier the service tracks for out-of-band cancellation.
    pub query_id: Option<String>,
    pub status: Option<QueryStatus>,
}

/// Progress metadata the service attaches to a page. Logged, never
/// rendered into row output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryStatus {
    pub progress_percentage: f64,
    pub cumulative_bytes_scanned: u64,
    pub cumulative_bytes_metered: u64,
}
