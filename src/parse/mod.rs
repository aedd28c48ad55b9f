//! Raw HTTP text parsing.
//!
//! Recovers the target host and path from a request's header block, and the
//! status code from a response's status line. Malformed input never raises
//! an error here; the stated defaults always apply, so the pipeline
//! completes for any capture.

use crate::config::{DEFAULT_PATH, UNKNOWN_HOST};

/// Host and path recovered from one request's header block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTarget {
    /// Value of the first `Host` header, or `"Unknown Host"`.
    pub host: String,
    /// Second token of the request line, or `"/"`.
    pub path: String,
}

/// Parses the header block of a raw request into its target host and path.
///
/// `lines` must be the ordered header lines of one request, request line
/// first (e.g. `GET /api/test HTTP/1.1`). The header name is matched
/// case-insensitively; the value is everything after the first `": "`.
/// An empty sequence or malformed lines fall back to the defaults.
pub fn parse_request_target<'a, I>(lines: I) -> RequestTarget
where
    I: IntoIterator<Item = &'a str>,
{
    let mut lines = lines.into_iter();
    let request_line = lines.next().unwrap_or("");

    let mut tokens = request_line.split_whitespace();
    let path = match (tokens.next(), tokens.next()) {
        (Some(_method), Some(target)) => target.to_string(),
        _ => DEFAULT_PATH.to_string(),
    };

    let mut host = UNKNOWN_HOST.to_string();
    for line in lines {
        if line.to_lowercase().starts_with("host:") {
            if let Some((_name, value)) = line.split_once(": ") {
                host = value.to_string();
            }
            break;
        }
    }

    RequestTarget { host, path }
}

/// Parses the status code token from a raw response's status line.
///
/// Takes the second whitespace-separated token of the first line (e.g. `200`
/// from `HTTP/1.1 200 OK`) and accepts it only if it is a numeric code.
pub fn parse_status_code(response_text: &str) -> Option<String> {
    let status_line = response_text.lines().next()?;
    let token = status_line.split_whitespace().nth(1)?;
    token.parse::<u16>().ok().map(|code| code.to_string())
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
