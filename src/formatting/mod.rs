//! Inline `§` formatting codes.
//!
//! Translation values may embed two-character codes (the section sign
//! followed by a suffix) that switch color or turn on a decoration for the
//! text after them. This module detects, strips, and segments those codes.
//! Everything here is pure and can be called from any thread.

mod codes;
pub mod render;
mod scanner;
mod types;

pub use codes::{
    code_for_color, codes_of_kind, is_code_suffix, lookup, CodeKind, Effect, FormatCode,
    FORMAT_CODES, SENTINEL,
};
pub use scanner::{
    contains_formatting, segment, strip_formatting, unknown_codes, Scanner, UnknownCode,
    UnknownCodePolicy,
};
pub use types::{plain_text, Rgb, Segment, TextStyle};
