//! `Authorization: Bearer <token>` extraction.
use axum::http::{HeaderMap, header};

pub const BEARER_PREFIX: &str = "Bearer ";

/// What the first `Authorization` value holds, as far as the gate cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credential<'a> {
    /// No header, or a value that does not start with `"Bearer "`.
    Missing,
    /// The token following one leading `"Bearer "`.
    Bearer(&'a str),
    /// `"Bearer "` followed by bytes that are not UTF-8; no validator accepts these.
    Unreadable,
}

/// Classify the first `Authorization` value.
///
/// - Only the first header value is read, even when several are present.
/// - The scheme prefix is matched case-sensitively on raw bytes; `bearer x`
///   or `Basic x` are `Missing`.
/// - Exactly one leading `"Bearer "` is removed; the rest is returned verbatim.
pub fn bearer_credential(headers: &HeaderMap) -> Credential<'_> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return Credential::Missing;
    };

    match value.as_bytes().strip_prefix(BEARER_PREFIX.as_bytes()) {
        None => Credential::Missing,
        Some(rest) => match std::str::from_utf8(rest) {
            Ok(token) => Credential::Bearer(token),
            Err(_) => Credential::Unreadable,
        },
    }
}
