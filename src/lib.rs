//! notemill — document-to-notebook processing core.
//!
//! Takes the raw body produced by an upstream extraction service and
//! normalizes it into two reusable artifacts: typed tabular data recovered
//! from embedded markdown tables, and a generation-tracked set of image
//! assets that survives repeated re-processing of the same document.
//!
//! The surrounding application (extraction agent calls, LLM summarization,
//! any UI) orchestrates these pieces; nothing in this crate performs
//! network I/O.

pub mod models;
pub mod pipeline;

pub use models::notebook::{Notebook, NotebookError};
pub use pipeline::assets::{archive, promote, AssetError};
pub use pipeline::tables::{
    FragmentKind, MalformedTableError, MarkdownAnalyzer, StructuredTable, TableFragment,
};
