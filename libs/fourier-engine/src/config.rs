/// Per-run request configuration. Explicit and passed in — there is no
/// process-wide transport state to mutate.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryConfig {
    /// Maximum-rows-per-page hint attached to every request. The service
    /// may return fewer rows; `None` leaves paging entirely to it.
    pub max_rows: Option<u32>,
}
