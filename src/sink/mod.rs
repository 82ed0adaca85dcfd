//! Line-oriented log sinks and block-level logging helpers.
//!
//! A rendered block is written one row per sink call, matching line-oriented
//! log writers. Ordering across concurrent requests is the sink's concern;
//! each render itself touches only its own inputs.

use crate::config::Config;
use crate::inspect;
use crate::model::{ErrorBag, LogLine, RequestInfo};
use crate::render::Block;

/// A destination accepting one formatted row at a time.
pub trait LogSink {
    /// Write a single rendered row.
    fn write_line(&mut self, line: &str);
}

/// Sink that emits each row as a `tracing` debug event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write_line(&mut self, line: &str) {
        tracing::debug!(target: "boxlog", "{line}");
    }
}

/// Sink that collects rows in memory, for tests and buffering callers.
#[derive(Debug, Default, Clone)]
pub struct BufferSink {
    lines: Vec<String>,
}

impl BufferSink {
    /// Create an empty buffer sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows written so far, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl LogSink for BufferSink {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Render `lines` with the config's widths and write the rows to `sink`.
///
/// Does nothing when `config.enabled` is false.
pub fn log_block(
    sink: &mut dyn LogSink,
    config: &Config,
    lines: Vec<LogLine>,
    header: &str,
    footer: &str,
) {
    if !config.enabled {
        return;
    }
    let rows = Block::new(lines)
        .header(header)
        .footer(footer)
        .min_width(config.minimum_width)
        .max_width(config.maximum_width)
        .render();
    for row in rows {
        sink.write_line(&row);
    }
}

/// Inspect `request` and log the resulting block, headed by `METHOD /path`.
pub fn log_request(sink: &mut dyn LogSink, config: &Config, request: &RequestInfo) {
    if !config.enabled {
        return;
    }
    let lines = inspect::request_lines(request, config);
    let header = inspect::request_header(request);
    log_block(sink, config, lines, &header, "");
}

/// Log the post-response session-error report, if any errors are present.
pub fn log_error_report(sink: &mut dyn LogSink, config: &Config, errors: &ErrorBag) {
    if !config.enabled || errors.is_empty() {
        return;
    }
    log_block(sink, config, inspect::error_report(errors), "", "");
}
