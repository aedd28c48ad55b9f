//! First-seen endpoint deduplication.
//!
//! Rebuilds the deduplicated endpoint set from a full capture snapshot. The
//! index is not a persistent cache: every rebuild starts from empty and the
//! result replaces any prior snapshot wholesale.

use std::collections::HashSet;

use log::debug;

use crate::capture::RawExchange;
use crate::endpoint::resolve_exchange;
use crate::models::EndpointRecord;

/// Rebuilds the deduplicated record set from an ordered capture snapshot.
///
/// Exchanges are resolved in the supplied order; only the first candidate
/// for each `(url, status)` pair is retained, and retained records receive
/// dense 1-based serials in admission order. Deterministic and stable for a
/// fixed input order.
pub fn rebuild_index(exchanges: &[RawExchange]) -> Vec<EndpointRecord> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut records: Vec<EndpointRecord> = Vec::new();

    for exchange in exchanges {
        let Some(candidate) = resolve_exchange(exchange) else {
            continue;
        };

        let key = (candidate.url.clone(), candidate.status.clone());
        if !seen.insert(key) {
            continue;
        }

        let serial = records.len() + 1;
        records.push(candidate.into_record(serial));
    }

    debug!(
        "Deduplicated {} exchanges into {} unique endpoints",
        exchanges.len(),
        records.len()
    );

    records
}
