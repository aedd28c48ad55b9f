//! Endpoint resolution.
//!
//! Combines the parsed host, path, and response status of one captured
//! exchange into a candidate endpoint record. Pure transformation, no side
//! effects; serials are assigned later by the deduplication index.

use crate::capture::RawExchange;
use crate::config::{NO_RESPONSE, URL_SCHEME_PREFIX};
use crate::models::EndpointRecord;
use crate::parse::{parse_request_target, parse_status_code};

/// A resolved endpoint candidate, before the index assigns its serial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateEndpoint {
    /// Canonical endpoint URL.
    pub url: String,
    /// Status code text, or the no-response marker.
    pub status: String,
    /// Decoded request text.
    pub request_text: String,
    /// Decoded response text, or the no-response marker.
    pub response_text: String,
}

impl CandidateEndpoint {
    /// Promotes this candidate into a record with the given serial.
    pub fn into_record(self, serial: usize) -> EndpointRecord {
        EndpointRecord {
            serial,
            url: self.url,
            status: self.status,
            request_text: self.request_text,
            response_text: self.response_text,
        }
    }
}

/// Resolves one exchange into an endpoint candidate.
///
/// Returns `None` for exchanges without a request; they never produce a
/// record and are not counted as errors. The canonical URL always carries
/// the `https://` scheme: the capture scheme is not retained, and downstream
/// consumers rely on the literal prefix.
pub fn resolve_exchange(exchange: &RawExchange) -> Option<CandidateEndpoint> {
    let request_text = exchange.request.as_deref()?;

    // Header block ends at the first blank line; tolerate both CRLF and LF
    let header_lines = request_text
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .take_while(|line| !line.is_empty());
    let target = parse_request_target(header_lines);

    let (status, response_text) = match exchange.response.as_deref() {
        Some(response) => (
            parse_status_code(response).unwrap_or_else(|| NO_RESPONSE.to_string()),
            response.to_string(),
        ),
        None => (NO_RESPONSE.to_string(), NO_RESPONSE.to_string()),
    };

    Some(CandidateEndpoint {
        url: format!("{URL_SCHEME_PREFIX}{}{}", target.host, target.path),
        status,
        request_text: request_text.to_string(),
        response_text,
    })
}
