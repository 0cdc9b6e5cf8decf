pub mod io;
pub mod models;
pub mod nodes;
pub mod parsing;


// Re-export key types for easier usage
pub use io::*;
pub use models::*;
pub use nodes::{Attrs, Child, Document, Node, Tag, render_html};
pub use parsing::{
    convert, convert_with_links,
    frontmatter::strip_frontmatter,
    links::{LinkContext, LinkLookup, resolve_link},
    rich::convert_rich,
};
