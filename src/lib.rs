//! mdtoc - generate an aggregated toc.md outline for a tree of Markdown documents

pub mod headers;
pub mod render;
pub mod scan;

pub use headers::{Header, extract_headers};
pub use render::render_outline;
pub use scan::{OUTPUT_FILENAME, Scanner, TreeNode};
