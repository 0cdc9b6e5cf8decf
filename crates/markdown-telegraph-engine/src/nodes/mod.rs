//! # Nodes
//!
//! The typed output tree handed to the publishing API.
//!
//! - **`tag`**: the closed [`Tag`] vocabulary and HTML name mapping
//! - **`node`**: [`Node`], [`Child`] and [`Attrs`], serialized in the API's
//!   `{tag, attrs, children}` content format
//! - **`document`**: [`Document`], the top-level node sequence
//! - **`html`**: HTML preview rendering

pub mod document;
pub mod html;
pub mod node;
pub mod tag;

pub use document::Document;
pub use html::render_html;
pub use node::{Attrs, Child, Node};
pub use tag::Tag;
