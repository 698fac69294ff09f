use fourier_api::source::{QueryRequest, QuerySource};

use crate::config::QueryConfig;
use crate::decode;
use crate::error::EngineError;
use crate::sink::Sink;

/// Totals for one completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub pages: usize,
    pub rows: usize,
}

/// Drives one query to completion: fetch a page, decode it, emit it,
/// follow the continuation token, stop when the token is absent.
///
/// Single-threaded and blocking — a page is fully decoded and emitted
/// before the next request goes out, and exactly one request is issued
/// per page advance. There is no retry loop here: any source or sink
/// error stops the run and propagates. Resumption is the caller's
/// concern (re-run from the last known token).
pub struct QueryRunner<S: QuerySource> {
    source: S,
    config: QueryConfig,
}

impl<S: QuerySource> QueryRunner<S> {
    pub fn new(source: S, config: QueryConfig) -> Self {
        Self { source, config }
    }

    /// Run `query` until all pages are consumed, emitting each page to
    /// `sink` as a header line, one line per row, and a row-count line.
    pub fn run(&mut self, query: &str, sink: &mut Sink) -> Result<RunStats, EngineError> {
        let mut stats = RunStats::default();
        let mut next_token: Option<String> = None;

        loop {
            let request = QueryRequest {
                query: query.to_string(),
                max_rows: self.config.max_rows,
                next_token: next_token.take(),
            };
            let page = self.source.query(&request)?;

            if let Some(status) = &page.status {
                tracing::info!(
                    progress = status.progress_percentage,
                    bytes_scanned = status.cumulative_bytes_scanned,
                    bytes_metered = status.cumulative_bytes_metered,
                    "query progress"
                );
            }

            sink.write_line(&decode::render_header(&page.columns))?;
            for (i, row) in page.rows.iter().enumerate() {
                let line = decode::render_row(&page.columns, row)
                    .map_err(|e| e.with_context(format!("page {}, row {i}", stats.pages)))?;
                sink.write_line(&line)?;
            }
            sink.write_line(&format!("Number of rows: {}", page.rows.len()))?;

            stats.pages += 1;
            stats.rows += page.rows.len();
            tracing::debug!(page = stats.pages, rows = page.rows.len(), "page emitted");

            match page.next_token {
                Some(token) => next_token = Some(token),
                None => break,
            }
        }

        tracing::info!(pages = stats.pages, rows = stats.rows, "query complete");
        Ok(stats)
    }

    /// Forward an out-of-band cancellation to the source. The service
    /// tracks query identifiers independently of pagination, so this is
    /// valid while another client's run is still in flight.
    pub fn cancel(&mut self, query_id: &str) -> Result<(), EngineError> {
        self.source.cancel(query_id).map_err(EngineError::from)
    }
}
