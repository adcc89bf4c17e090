// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Request and response dumps
//!
//! Emitted at `DEBUG` under the `upcloud_client::dump` target as text
//! blocks framed by `#` rules as wide as the terminal (no rule when stderr
//! is not a terminal). The authorization header never appears in a dump.

use std::fmt::Write as _;
use std::io::IsTerminal;

use http::header::AUTHORIZATION;
use http::{HeaderMap, StatusCode};
use tracing::debug;

pub(crate) const REDACTED: &str = "[REDACTED]";

fn rule_width() -> usize {
    if !std::io::stderr().is_terminal() {
        return 0;
    }
    crossterm::terminal::size()
        .map(|(cols, _)| usize::from(cols))
        .unwrap_or(0)
}

pub(crate) fn request(request: &reqwest::Request) {
    let body = request.body().and_then(|b| b.as_bytes()).unwrap_or_default();
    let text = format_request(
        request.method().as_str(),
        request.url().as_str(),
        request.headers(),
        body,
        rule_width(),
    );
    debug!(target: "upcloud_client::dump", "\n{text}");
}

pub(crate) fn response(status: StatusCode, headers: &HeaderMap, body: &[u8]) {
    let text = format_response(status, headers, body, rule_width());
    debug!(target: "upcloud_client::dump", "\n{text}");
}

fn format_request(
    method: &str,
    url: &str,
    headers: &HeaderMap,
    body: &[u8],
    width: usize,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{method} {url}");
    block(&mut out, headers, body, width);
    out
}

fn format_response(status: StatusCode, headers: &HeaderMap, body: &[u8], width: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "HTTP {status}");
    block(&mut out, headers, body, width);
    out
}

fn block(out: &mut String, headers: &HeaderMap, body: &[u8], width: usize) {
    let rule = "#".repeat(width);
    let mut lines = String::new();
    for (name, value) in headers {
        let value = if name == AUTHORIZATION {
            REDACTED.to_string()
        } else {
            String::from_utf8_lossy(value.as_bytes()).into_owned()
        };
        let _ = writeln!(lines, "{name}: {value}");
    }
    if !body.is_empty() {
        let _ = writeln!(lines);
        let _ = writeln!(lines, "{}", String::from_utf8_lossy(body));
    }
    *out = format!("{rule}\n{out}{lines}{rule}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use http::header::CONTENT_TYPE;

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer ucat_secret"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    #[test]
    fn test_request_dump_redacts_authorization() {
        let text = format_request(
            "POST",
            "https://api.upcloud.com/1.3/server",
            &headers(),
            br#"{"server":{}}"#,
            8,
        );
        assert!(text.starts_with("########\nPOST https://api.upcloud.com/1.3/server\n"));
        assert!(text.contains("authorization: [REDACTED]"));
        assert!(!text.contains("ucat_secret"));
        assert!(text.contains("content-type: application/json"));
        assert!(text.contains("\n{\"server\":{}}\n"));
        assert!(text.ends_with("\n########"));
    }

    #[test]
    fn test_response_dump_without_terminal() {
        let text = format_response(StatusCode::NO_CONTENT, &HeaderMap::new(), b"", 0);
        assert_eq!(text, "\nHTTP 204 No Content\n");
    }
}
