//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! - **`CodeSpan`**: `` TICK = b"`" `` - raw zone that suppresses other parsing
//! - **`Strong`**: `STARS = b"**"`
//! - **`Emphasis`**: `STAR = b"*"`, `UNDERSCORE = b"_"`
//! - **`Link`**: `[`, `]`, `(`, `)`
//!
//! The parser calls these constants; it never hardcodes delimiters.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
pub use link::Link;
