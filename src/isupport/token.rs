//! Splitting helpers for ISUPPORT tokens and values.
//!
//! Values are stored verbatim by the tracker; these functions give them
//! shape only when a typed accessor asks.

use std::collections::HashMap;

/// Split one `KEY` or `KEY=VALUE` token at the first `=`.
///
/// A bare key yields an empty value. Anything after the first `=`,
/// including further `=`, `,` or `:`, belongs to the value.
pub fn split_token(token: &str) -> (&str, &str) {
    token.split_once('=').unwrap_or((token, ""))
}

/// Split a list value on `,`, keeping order, empty elements and whitespace.
///
/// An empty value is a one-element list holding an empty string.
pub fn split_list(value: &str) -> Vec<String> {
    value.split(',').map(str::to_owned).collect()
}

/// Parse a `key:value,key:value` value.
///
/// Every element must contain a `:`; one element without it rejects the
/// whole value. A repeated key keeps its last value.
pub fn parse_map(value: &str) -> Option<HashMap<String, String>> {
    value
        .split(',')
        .map(|element| {
            element
                .split_once(':')
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
        })
        .collect()
}
