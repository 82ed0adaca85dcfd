//! The box rendering engine.
//!
//! Pipeline, per block: wrap raw lines to the maximum content width
//! ([`wrap`]), escape not-so-printable characters ([`encode`]), truncate
//! header/footer/section labels ([`pad::truncate`]), compute the single
//! render width, and assemble bordered rows ([`block`]).

pub mod block;
pub mod encode;
pub mod pad;
pub mod wrap;

pub use block::{render, Block};
pub use encode::{encode, encode_with};
pub use pad::{pad_both, pad_left, pad_right, truncate};
pub use wrap::{wrap_line, CONTINUATION_MARKER};
