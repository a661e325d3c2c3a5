//! LLM-backed document pipelines.
//!
//! Each operation follows the same shape: load a prompt template, fill its
//! placeholders, make one LLM call, pull the answer out of its response
//! tags, and parse or return it. `extract` turns an uploaded PDF into the
//! plain text the pipelines consume.

pub mod extract;
pub mod handlers;
pub mod ops;

pub use extract::{join_pages, PageTextExtractor, PdfExtractBackend};
pub use ops::{CoverLetter, Pipelines};
