//! boxlog: fixed-width Unicode box rendering for request debug logging.
//!
//! The crate turns an ordered list of text lines (plus optional header and
//! footer strings) into a bordered, fixed-width, multibyte-safe text block
//! suitable for a line-oriented log sink:
//!
//! ```text
//! ╔═╡GET /users/42╞══════════════════════════════════╗
//! ║ route: users.show [user => User(42)]             ║
//! ║ mw: web, auth                                    ║
//! ║ sid:abc123 u:7                                   ║
//! ╟─┤request parameters├─────────────────────────────╢
//! ║ [name] "Ada"                                     ║
//! ╚══════════════════════════════════════════════════╝
//! ```
//!
//! The rendering engine lives in [`render`]; [`inspect`] builds line lists
//! from framework-agnostic request data; [`sink`] hands rendered rows to a
//! log writer. Every render is a pure function of its inputs; there is no
//! shared mutable state between renders.

pub mod config;
pub mod inspect;
pub mod model;
pub mod render;
pub mod sink;

pub use config::Config;
pub use model::LogLine;
pub use render::render;
pub use sink::{log_block, log_error_report, log_request, BufferSink, LogSink, TracingSink};
