//! Request inspector: turns a [`RequestInfo`] snapshot into renderable lines.
//!
//! The web-framework glue (extracting routes, sessions, and parameters from
//! a concrete request type) stays outside this crate; this module only
//! formats already-extracted plain data, applying the redaction rules from
//! [`Config`].

use crate::config::Config;
use crate::model::{ErrorBag, LogLine, RequestInfo};
use crate::render::pad::char_len;

/// Header string for a request block: `"GET /path"`.
///
/// A leading slash is added to the path if missing.
pub fn request_header(request: &RequestInfo) -> String {
    let path = &request.path;
    if path.starts_with('/') {
        format!("{} {}", request.method, path)
    } else {
        format!("{} /{}", request.method, path)
    }
}

/// Build the ordered line list for one request.
///
/// Emits the route line (with bound parameters), the middleware chain, the
/// session line, and, when any loggable parameter remains, a
/// `request parameters` section followed by one line per parameter.
pub fn request_lines(request: &RequestInfo, config: &Config) -> Vec<LogLine> {
    let mut lines = Vec::new();

    let mut route = format!(
        "route: {}",
        request.route_name.as_deref().unwrap_or("(anonymous)")
    );
    if !request.route_params.is_empty() {
        let params: Vec<String> = request
            .route_params
            .iter()
            .map(|(key, value)| format!("{key} => {value}"))
            .collect();
        route.push_str(&format!(" [{}]", params.join(", ")));
    }
    lines.push(LogLine::Content(route));

    lines.push(LogLine::Content(format!(
        "mw: {}",
        request.middleware.join(", ")
    )));

    lines.push(LogLine::Content(match &request.session {
        Some(session) => format!(
            "sid:{} u:{}",
            session.id,
            session.user_id.as_deref().unwrap_or("none")
        ),
        None => "(no session)".to_string(),
    }));

    let params: Vec<LogLine> = request
        .params
        .iter()
        .filter(|(key, _)| !key.starts_with('_'))
        .map(|(key, value)| LogLine::Content(parameter_line(key, value, config)))
        .collect();
    if !params.is_empty() {
        lines.push(LogLine::section("request parameters"));
        lines.extend(params);
    }

    lines
}

/// Format one `[key] value` parameter line, applying redaction.
fn parameter_line(key: &str, value: &str, config: &Config) -> String {
    if key == "totp_password" {
        // One-time codes are numeric; show them zero-padded to six digits.
        let code = value.parse::<u64>().unwrap_or(0);
        return format!("[{key}] {code:06}");
    }

    let mut shown = format!("{value:?}");
    if char_len(&shown) > config.maximum_parameter_length {
        shown = shown
            .chars()
            .take(config.maximum_parameter_length)
            .collect::<String>()
            + " (…)";
    }
    if is_sensitive(key, &config.sensitive_keys) {
        return format!("[{key}] {}", "*".repeat(char_len(&shown)));
    }
    format!("[{key}] {shown}")
}

/// Case-insensitive substring match against the configured key patterns.
fn is_sensitive(key: &str, patterns: &[String]) -> bool {
    let key = key.to_lowercase();
    patterns
        .iter()
        .any(|pattern| key.contains(&pattern.to_lowercase()))
}

/// Build the post-response report of validation errors left in the session.
///
/// Renders a heading, a blank separator, and one `[key][index] message` line
/// per recorded message. Returns an empty list when the bag is empty.
pub fn error_report(errors: &ErrorBag) -> Vec<LogLine> {
    if errors.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![
        LogLine::content("error(s) set in session"),
        LogLine::rule(),
    ];
    for (key, messages) in errors.iter() {
        for (index, message) in messages.iter().enumerate() {
            lines.push(LogLine::Content(format!("[{key}][{index}] {message:?}")));
        }
    }
    lines
}
