//! Resume Rendering Engine.
//!
//! One consolidated engine: a structured CV in, paginated A4 PDF bytes out.
//! `style` holds every color/font/spacing constant, `metrics` measures text
//! with static Helvetica width tables, `writer` owns the vertical cursor and
//! page breaks, and `resume` walks the CV sections in fixed order.

pub mod metrics;
pub mod resume;
pub mod style;
pub mod writer;

pub use resume::{RenderedResume, ResumeRenderer};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("CV name is empty, cannot derive an export filename")]
    EmptyName,

    #[error("PDF error: {0}")]
    Pdf(String),
}
