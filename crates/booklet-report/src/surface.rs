//! Drawing surface used by the layout engine
//!
//! The layout code only talks to a [`Surface`]. [`PdfDocument`] is the real
//! implementation; [`RecordingSurface`] keeps every call in memory so a
//! layout can be inspected (page count, positions, cell text) without
//! producing a PDF.

use crate::Result;
use pdf_core::{Align, Color, PageSize, PdfDocument, PdfError, StandardFont};

/// Page-oriented drawing primitives
///
/// Coordinates are in points from the top-left corner of the current page.
pub trait Surface {
    /// Size shared by every page
    fn page_size(&self) -> PageSize;

    /// Start a new physical page and make it the drawing target
    fn start_new_page(&mut self) -> Result<()>;

    /// Font used by subsequent [`Surface::draw_text`] calls
    fn set_font(&mut self, font: StandardFont, size: f32);

    /// Color used by subsequent [`Surface::draw_text`] calls
    fn set_text_color(&mut self, color: Color);

    /// Fill a rectangle whose top-left corner is at `(x, y)`
    fn draw_filled_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Color,
        stroke: Option<Color>,
    ) -> Result<()>;

    /// Place text with its baseline at `y`, cut to `max_width` if given
    fn draw_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        max_width: Option<f64>,
        align: Align,
    ) -> Result<()>;
}

impl Surface for PdfDocument {
    fn page_size(&self) -> PageSize {
        PdfDocument::page_size(self)
    }

    fn start_new_page(&mut self) -> Result<()> {
        self.add_page();
        Ok(())
    }

    fn set_font(&mut self, font: StandardFont, size: f32) {
        PdfDocument::set_font(self, font, size);
    }

    fn set_text_color(&mut self, color: Color) {
        PdfDocument::set_text_color(self, color);
    }

    fn draw_filled_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Color,
        stroke: Option<Color>,
    ) -> Result<()> {
        self.fill_rect(x, y, width, height, fill, stroke)?;
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        max_width: Option<f64>,
        align: Align,
    ) -> Result<()> {
        self.insert_text(text, x, y, max_width, align)?;
        Ok(())
    }
}

/// A single recorded drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    NewPage {
        page: usize,
    },
    Rect {
        page: usize,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Color,
        stroke: Option<Color>,
    },
    Text {
        page: usize,
        text: String,
        x: f64,
        y: f64,
        max_width: Option<f64>,
        align: Align,
        font: StandardFont,
        size: f32,
        color: Color,
    },
}

impl DrawCall {
    /// Page (1-indexed) the call applies to
    pub fn page(&self) -> usize {
        match self {
            DrawCall::NewPage { page }
            | DrawCall::Rect { page, .. }
            | DrawCall::Text { page, .. } => *page,
        }
    }
}

/// Surface that records calls instead of drawing
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    page_size: PageSize,
    page_count: usize,
    font: StandardFont,
    font_size: f32,
    text_color: Color,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            page_count: 0,
            font: StandardFont::default(),
            font_size: 12.0,
            text_color: Color::default(),
            calls: Vec::new(),
        }
    }

    /// Every recorded call, in order
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Number of pages started so far
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Text of every text call, in order
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Text of every text call on one page
    pub fn texts_on_page(&self, page: usize) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { page: p, text, .. } if *p == page => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Calls that put ink on a page (rectangles and text)
    pub fn drawing_calls(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| !matches!(call, DrawCall::NewPage { .. }))
            .count()
    }

    fn current_page(&self) -> Result<usize> {
        match self.page_count {
            0 => Err(PdfError::NoCurrentPage.into()),
            n => Ok(n),
        }
    }
}

impl Surface for RecordingSurface {
    fn page_size(&self) -> PageSize {
        self.page_size
    }

    fn start_new_page(&mut self) -> Result<()> {
        self.page_count += 1;
        self.calls.push(DrawCall::NewPage {
            page: self.page_count,
        });
        Ok(())
    }

    fn set_font(&mut self, font: StandardFont, size: f32) {
        self.font = font;
        self.font_size = size;
    }

    fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    fn draw_filled_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Color,
        stroke: Option<Color>,
    ) -> Result<()> {
        let page = self.current_page()?;
        self.calls.push(DrawCall::Rect {
            page,
            x,
            y,
            width,
            height,
            fill,
            stroke,
        });
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        max_width: Option<f64>,
        align: Align,
    ) -> Result<()> {
        let page = self.current_page()?;
        self.calls.push(DrawCall::Text {
            page,
            text: text.to_string(),
            x,
            y,
            max_width,
            align,
            font: self.font,
            size: self.font_size,
            color: self.text_color,
        });
        Ok(())
    }
}
