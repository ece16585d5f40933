//! PDF Core - Low-level PDF drawing primitives
//!
//! This crate provides functionality for:
//! - Creating PDF documents from scratch with fixed-size pages
//! - Drawing filled and stroked rectangles
//! - Placing text with the standard Helvetica fonts at specific coordinates
//! - Truncating text to a maximum width using the font metrics
//! - Writing the finished document to bytes or a file
//!
//! All coordinates are in points with the origin at the top-left corner of
//! the page; conversion to PDF's bottom-left origin happens internally.
//!
//! # Example
//!
//! ```ignore
//! use pdf_core::{Align, Color, PageSize, PdfDocument, StandardFont};
//!
//! let mut doc = PdfDocument::new(PageSize::letter());
//! doc.add_page();
//! doc.fill_rect(50.0, 50.0, 512.0, 22.0, Color::from_rgb(41, 98, 155), None)?;
//! doc.set_font(StandardFont::HelveticaBold, 12.0);
//! doc.set_text_color(Color::white());
//! doc.insert_text("Deductibles", 58.0, 66.0, None, Align::Left)?;
//! let bytes = doc.to_bytes()?;
//! ```

mod document;
mod font;
mod text;

pub use document::{Color, PageSize, PdfDocument};
pub use font::StandardFont;
pub use text::{generate_rect_operators, generate_text_operators, TextRenderContext};

use thiserror::Error;

/// Errors that can occur during PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Failed to save PDF: {0}")]
    SaveError(String),

    #[error("Invalid page number: {0} (document has {1} pages)")]
    InvalidPage(usize, usize),

    #[error("No page has been started")]
    NoCurrentPage,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Lopdf error: {0}")]
    LopdfError(#[from] lopdf::Error),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Text alignment options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_default() {
        assert_eq!(Align::default(), Align::Left);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PdfError::InvalidPage(3, 2).to_string(),
            "Invalid page number: 3 (document has 2 pages)"
        );
        assert_eq!(PdfError::NoCurrentPage.to_string(), "No page has been started");
    }
}
