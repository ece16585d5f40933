//! Booklet Report - paginated PDF tables from nested benefit data
//!
//! This crate provides:
//! - Column discovery over heterogeneous, schema-less data groups
//! - Bordered, alternating-row tables with automatic page breaks
//! - Colored section headers and per-category content pages
//! - A cover page and final PDF assembly via `pdf-core`
//!
//! # Example
//!
//! ```ignore
//! use booklet_report::{BookletData, BookletReport, LayoutConfig};
//!
//! let booklet = BookletData::from_json(&std::fs::read_to_string("booklet.json")?)?;
//! let report = BookletReport::new(LayoutConfig::default());
//! let pdf_bytes = report.generate(&booklet)?;
//! std::fs::write("booklet.pdf", pdf_bytes)?;
//! ```

mod assembler;
mod booklet;
pub mod catalog;
mod columns;
mod config;
mod cursor;
mod labels;
mod section;
pub mod surface;
mod table;
mod values;

pub use assembler::{generate, BookletReport};
pub use booklet::BookletData;
pub use columns::{extract_columns, ColumnSet};
pub use config::{LayoutConfig, Margins, RgbColor};
pub use cursor::{RenderContext, RenderCursor};
pub use labels::format_label;
pub use section::{render_section, SectionGroup};
pub use surface::{DrawCall, RecordingSurface, Surface};
pub use table::{cell_text, render_table, Row, TableGeometry};
pub use values::value_to_string;

use thiserror::Error;

/// Errors that can occur while generating a report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("PDF error: {0}")]
    PdfError(#[from] pdf_core::PdfError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid layout configuration: {0}")]
    ConfigError(String),
}

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;
