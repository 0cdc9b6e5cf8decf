//! # Inline Parsing
//!
//! Cursor-based inline parsing for a single line of text.
//!
//! ## Modules
//!
//! - **`types`**: `Pattern` (precedence order) and `Match`
//! - **`kinds`**: Inline types with owned delimiters (CodeSpan, Strong, Emphasis, Link)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`parser`**: `parse_inline()` main entry point
//!
//! ## Match selection
//!
//! Each pattern contributes its first occurrence, closed lazily at the next
//! closing delimiter. The earliest start wins; ties follow
//! [`Pattern::PRECEDENCE`]. Code spans are raw zones: `` `**x**` `` is a
//! single code element, never bold.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::{Match, Pattern};
