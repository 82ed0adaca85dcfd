//! Domain types shared between the inspector and the renderer.

/// A single line destined for a rendered box.
///
/// The variant is decided by the producer (the request inspector or any other
/// caller), not by string-sniffing inside the renderer. The legacy sentinel
/// convention (`BR`-prefixed strings) is still accepted at the boundary via
/// [`LogLine::from_sentinel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogLine {
    /// Ordinary text, rendered inside vertical bars with padding.
    Content(String),
    /// A horizontal separator row, optionally carrying a short label.
    /// An empty label renders as a plain full-width rule.
    SectionBreak(String),
}

impl LogLine {
    /// Shorthand for a content line.
    pub fn content(text: impl Into<String>) -> Self {
        LogLine::Content(text.into())
    }

    /// Shorthand for a labeled separator.
    pub fn section(label: impl Into<String>) -> Self {
        LogLine::SectionBreak(label.into())
    }

    /// A blank separator row.
    pub fn rule() -> Self {
        LogLine::SectionBreak(String::new())
    }

    /// Parse a line in the legacy sentinel convention.
    ///
    /// A line is a separator if it is exactly `BR`, or starts with `BR`
    /// followed by a single delimiter character (space or `|`); the sentinel
    /// and delimiter are stripped from the label. Everything else is content.
    pub fn from_sentinel(line: &str) -> Self {
        if line == "BR" {
            return LogLine::SectionBreak(String::new());
        }
        if let Some(rest) = line.strip_prefix("BR") {
            let mut chars = rest.chars();
            if let Some(delim) = chars.next() {
                if delim == ' ' || delim == '|' {
                    return LogLine::SectionBreak(chars.collect());
                }
            }
        }
        LogLine::Content(line.to_string())
    }
}

impl From<&str> for LogLine {
    fn from(line: &str) -> Self {
        LogLine::from_sentinel(line)
    }
}

/// A route parameter value, pre-resolved by the caller.
///
/// Frameworks that substitute route bindings can report a bound ORM-style
/// model as class name plus primary key; everything else arrives as the plain
/// string representation. The crate only formats; it never inspects types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundValue {
    /// A bound model, displayed as `Class(key)`.
    Model {
        /// Short class name, already stripped of any namespace prefix.
        class: String,
        /// Primary key rendered as text.
        key: String,
    },
    /// Any other value, displayed verbatim.
    Plain(String),
}

impl std::fmt::Display for BoundValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundValue::Model { class, key } => write!(f, "{class}({key})"),
            BoundValue::Plain(value) => f.write_str(value),
        }
    }
}

/// Session identity attached to a request, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    /// Opaque session id.
    pub id: String,
    /// Authenticated user id, if a user is logged in.
    pub user_id: Option<String>,
}

/// Flat, framework-agnostic snapshot of one HTTP request.
///
/// The web-framework glue (extractors, middleware adapters) stays outside this
/// crate; it fills this struct and hands it to [`crate::inspect`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestInfo {
    /// HTTP method, upper-case (`GET`, `POST`, …).
    pub method: String,
    /// Request path; a leading slash is added for display if missing.
    pub path: String,
    /// Route name, if the route is named.
    pub route_name: Option<String>,
    /// Ordered route parameters with their bound values.
    pub route_params: Vec<(String, BoundValue)>,
    /// Middleware chain names, in execution order.
    pub middleware: Vec<String>,
    /// Session identity, if the request carries a session.
    pub session: Option<SessionInfo>,
    /// Ordered request body/query parameters as name/value text pairs.
    pub params: Vec<(String, String)>,
}

/// Validation errors flashed into the session, keyed by field.
///
/// Ordered so the rendered report matches insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBag {
    entries: Vec<(String, Vec<String>)>,
}

impl ErrorBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message under `key`, preserving insertion order of keys.
    pub fn push(&mut self, key: impl Into<String>, message: impl Into<String>) {
        let key = key.into();
        if let Some((_, messages)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            messages.push(message.into());
        } else {
            self.entries.push((key, vec![message.into()]));
        }
    }

    /// True when no messages have been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate keys with their messages, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}
