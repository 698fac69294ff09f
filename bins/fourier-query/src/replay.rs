use std::collections::VecDeque;
use std::io::Read;

use fourier_api::error::SourceError;
use fourier_api::page::QueryPage;
use fourier_api::source::{QueryRequest, QuerySource};
use fourier_api::wire::WireQueryResponse;

/// Query source over recorded wire responses: serves pages in recording
/// order and checks that every continuation request carries the token
/// the previous page returned. Stands in for a network client — the
/// seam is identical.
#[derive(Debug)]
pub struct ReplaySource {
    pages: VecDeque<WireQueryResponse>,
    expected_token: Option<String>,
}

impl ReplaySource {
    /// Load from a file path, or stdin when `path` is `-`.
    pub fn from_path(path: &str) -> Result<Self, SourceError> {
        let input = if path == "-" {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            std::fs::read_to_string(path)
                .map_err(|e| SourceError::request(format!("read {path}: {e}")))?
        };
        Self::parse(&input)
    }

    /// Accepts either a JSON array of responses or a single response
    /// object (a one-page recording).
    pub fn parse(input: &str) -> Result<Self, SourceError> {
        let pages: Vec<WireQueryResponse> = match serde_json::from_str(input) {
            Ok(pages) => pages,
            Err(_) => vec![
                serde_json::from_str(input)
                    .map_err(|e| SourceError::format(format!("recorded responses: {e}")))?,
            ],
        };
        Ok(Self {
            pages: pages.into(),
            expected_token: None,
        })
    }
}

impl QuerySource for ReplaySource {
    fn query(&mut self, request: &QueryRequest) -> Result<QueryPage, SourceError> {
        if request.next_token != self.expected_token {
            return Err(SourceError::request(format!(
                "continuation token mismatch: request carries {:?}, recording expects {:?}",
                request.next_token, self.expected_token
            )));
        }
        let wire = self
            .pages
            .pop_front()
            .ok_or_else(|| SourceError::request("no recorded pages left"))?;
        let page = wire.into_page()?;
        self.expected_token = page.next_token.clone();
        Ok(page)
    }

    fn cancel(&mut self, query_id: &str) -> Result<(), SourceError> {
        tracing::info!(query_id, "cancellation acknowledged (recorded session)");
        Ok(())
    }
}
