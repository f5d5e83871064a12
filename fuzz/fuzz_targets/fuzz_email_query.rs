//! Fuzz target: query-string parsing of `EmailQuery`.
//!
//! Arbitrary query strings must either parse or be rejected, never panic.

#![no_main]

use activity_gateway::routes::EmailQuery;
use axum::{extract::Query, http::Uri};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(uri) = format!("/activities/x/signup?{raw}").parse::<Uri>() else {
        return;
    };
    let _ = Query::<EmailQuery>::try_from_uri(&uri);
});
