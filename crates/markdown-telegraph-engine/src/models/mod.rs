pub mod markdown_file;
pub mod page_mapping;

pub use markdown_file::{MarkdownFile, extract_title};
pub use page_mapping::PageMapping;
