//! # Block Segmentation
//!
//! Two-phase, line-at-a-time block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` holding local facts (raw and trimmed text, blank status)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` tracks the open
//!    fence and title suppression, emitting `BlockNode`s
//!
//! ## Modules
//!
//! - **`types`**: Core types (`BlockNode`, `BlockKind`)
//! - **`kinds`**: Block types with owned delimiters (Heading, CodeFence, BlockQuote)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`open`**: `try_open_leaf` dispatch for detecting block openers
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Every block covers whole lines; no block spans lines except fenced code
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Title suppression state lives in one builder and is never shared

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{BlockKind, BlockNode};
