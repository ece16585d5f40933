//! PDF Document builder

use crate::font::{encode_text_hex, StandardFont};
use crate::text::{
    calculate_x_offset, generate_rect_operators, generate_text_operators, TextRenderContext,
};
use crate::{Align, PdfError, Result};
use chrono::NaiveDateTime;
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use std::path::Path;

/// RGB Color (values 0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a new RGB color (values 0.0 - 1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create color from RGB values (0-255)
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Gray level (0.0 = black, 1.0 = white)
    pub fn gray(level: f32) -> Self {
        Self::rgb(level, level, level)
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// White color
    pub fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Red color
    pub fn red() -> Self {
        Self::rgb(1.0, 0.0, 0.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Physical page size in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// US Letter, 8.5 x 11 in
    pub fn letter() -> Self {
        Self::new(612.0, 792.0)
    }

    /// ISO A4
    pub fn a4() -> Self {
        Self::new(595.28, 841.89)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::letter()
    }
}

/// PDF document built page by page
///
/// Pages are appended with [`PdfDocument::add_page`]; every drawing call
/// targets the most recently added page. Content operators are buffered per
/// page and the object tree is only assembled when the document is finished
/// with [`PdfDocument::to_bytes`] or [`PdfDocument::save`].
pub struct PdfDocument {
    /// The underlying lopdf document
    inner: Document,
    /// Size shared by every page
    page_size: PageSize,
    /// Buffered content operators, one entry per page
    page_content_buffer: Vec<Vec<u8>>,
    /// Current font face
    current_font: StandardFont,
    /// Current font size
    current_font_size: f32,
    /// Current text color
    current_text_color: Color,
    /// Stroke width for outlined rectangles
    line_width: f64,
    /// Document title (Info dictionary)
    title: Option<String>,
    /// Creation timestamp (Info dictionary)
    creation_date: Option<NaiveDateTime>,
}

impl PdfDocument {
    /// Create an empty document with the given page size
    ///
    /// The document has no pages until [`PdfDocument::add_page`] is called.
    pub fn new(page_size: PageSize) -> Self {
        Self {
            inner: Document::with_version("1.5"),
            page_size,
            page_content_buffer: Vec::new(),
            current_font: StandardFont::default(),
            current_font_size: 12.0,
            current_text_color: Color::default(),
            line_width: 0.5,
            title: None,
            creation_date: None,
        }
    }

    /// Page size shared by every page
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Get the number of pages in the document
    pub fn page_count(&self) -> usize {
        self.page_content_buffer.len()
    }

    /// Append a blank page and make it the drawing target
    ///
    /// # Returns
    /// New page number (1-indexed)
    pub fn add_page(&mut self) -> usize {
        self.page_content_buffer.push(Vec::new());
        self.page_content_buffer.len()
    }

    /// Set the current font face and size
    pub fn set_font(&mut self, font: StandardFont, size: f32) {
        self.current_font = font;
        self.current_font_size = size;
    }

    /// Set the text color
    ///
    /// # Example
    /// ```ignore
    /// doc.set_text_color(Color::white());
    /// doc.set_text_color(Color::from_rgb(255, 128, 0)); // Orange
    /// ```
    pub fn set_text_color(&mut self, color: Color) {
        self.current_text_color = color;
    }

    /// Set the stroke width used for outlined rectangles
    pub fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    /// Set the document title written to the Info dictionary
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    /// Set the creation date written to the Info dictionary
    pub fn set_creation_date(&mut self, date: NaiveDateTime) {
        self.creation_date = Some(date);
    }

    /// Width of `text` in points using the current font and size
    pub fn text_width(&self, text: &str) -> f64 {
        self.current_font
            .text_width_points(text, self.current_font_size)
    }

    /// Draw a filled rectangle on the current page
    ///
    /// # Arguments
    /// * `x` - Left edge in points
    /// * `y` - Top edge in points (from top)
    /// * `width` - Width in points
    /// * `height` - Height in points
    /// * `fill` - Fill color
    /// * `stroke` - Optional outline color
    pub fn fill_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Color,
        stroke: Option<Color>,
    ) -> Result<()> {
        let page = self.current_page()?;

        // Convert Y coordinate from top-origin to PDF bottom-origin
        let pdf_y = self.page_size.height - y - height;
        let operators =
            generate_rect_operators(x, pdf_y, width, height, fill, stroke, self.line_width);
        self.buffer_content(page, &operators);

        Ok(())
    }

    /// Insert text on the current page
    ///
    /// Text wider than `max_width` is truncated with an ellipsis. With
    /// `Align::Center` or `Align::Right`, `x` is the center or right edge of
    /// the text.
    ///
    /// # Arguments
    /// * `text` - Text to insert
    /// * `x` - X coordinate in points
    /// * `y` - Baseline Y coordinate in points (from top)
    /// * `max_width` - Optional width limit in points
    /// * `align` - Text alignment
    pub fn insert_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        max_width: Option<f64>,
        align: Align,
    ) -> Result<()> {
        let page = self.current_page()?;

        // Skip empty text - nothing to render
        if text.is_empty() {
            return Ok(());
        }

        let text = match max_width {
            Some(limit) => {
                self.current_font
                    .truncate_to_width(text, self.current_font_size, limit)
            }
            None => text.to_string(),
        };
        if text.is_empty() {
            return Ok(());
        }

        let text_width = self.text_width(&text);
        let start_x = x + calculate_x_offset(text_width, 0.0, align);
        let pdf_y = self.page_size.height - y;

        let ctx = TextRenderContext {
            font_name: self.current_font.resource_name().to_string(),
            font_size: self.current_font_size,
            color: self.current_text_color,
        };
        let operators = generate_text_operators(&encode_text_hex(&text), start_x, pdf_y, &ctx);
        self.buffer_content(page, &operators);

        Ok(())
    }

    /// Save the document to a file
    ///
    /// # Arguments
    /// * `path` - Output file path
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Finish the document and serialize it to bytes
    pub fn to_bytes(mut self) -> Result<Vec<u8>> {
        self.build_object_tree()?;

        let mut buffer = Vec::new();
        self.inner
            .save_to(&mut buffer)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;

        Ok(buffer)
    }

    /// Current page number (1-indexed)
    fn current_page(&self) -> Result<usize> {
        match self.page_content_buffer.len() {
            0 => Err(PdfError::NoCurrentPage),
            n => Ok(n),
        }
    }

    /// Buffer content operators for a page (written at save time)
    fn buffer_content(&mut self, page: usize, content: &[u8]) {
        if let Some(buffer) = self.page_content_buffer.get_mut(page - 1) {
            buffer.extend_from_slice(content);
        }
    }

    /// Assemble catalog, page tree, fonts, content streams and Info
    fn build_object_tree(&mut self) -> Result<()> {
        if self.page_content_buffer.is_empty() {
            return Err(PdfError::InvalidPage(1, 0));
        }

        let pages_id = self.inner.new_object_id();
        let resources_id = self.add_font_resources();

        let media_box = vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(self.page_size.width as f32),
            Object::Real(self.page_size.height as f32),
        ];

        let buffers = std::mem::take(&mut self.page_content_buffer);
        let mut kids = Vec::with_capacity(buffers.len());
        for content in buffers {
            let contents_id = self
                .inner
                .add_object(Stream::new(Dictionary::new(), content));
            let page_id = self.inner.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => media_box.clone(),
                "Resources" => resources_id,
                "Contents" => contents_id,
            });
            kids.push(Object::Reference(page_id));
        }

        let count = kids.len() as i64;
        self.inner.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = self.inner.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        self.inner.trailer.set("Root", catalog_id);

        let info_id = self.add_info_dictionary();
        self.inner.trailer.set("Info", info_id);

        Ok(())
    }

    /// Add the shared Resources dictionary with the standard fonts
    fn add_font_resources(&mut self) -> ObjectId {
        let mut font_dict = Dictionary::new();
        for font in StandardFont::all() {
            let font_id = self.inner.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            font_dict.set(font.resource_name(), Object::Reference(font_id));
        }

        self.inner.add_object(dictionary! {
            "Font" => font_dict,
        })
    }

    fn add_info_dictionary(&mut self) -> ObjectId {
        let mut info = Dictionary::new();
        info.set(
            "Producer",
            Object::string_literal(concat!("pdf-core ", env!("CARGO_PKG_VERSION"))),
        );
        if let Some(title) = &self.title {
            info.set("Title", text_string(title));
        }
        if let Some(date) = self.creation_date {
            let stamp = date.format("D:%Y%m%d%H%M%S").to_string();
            info.set("CreationDate", Object::string_literal(stamp));
        }
        self.inner.add_object(info)
    }
}

/// PDF text string: ASCII as a literal, anything else as UTF-16BE with a BOM
fn text_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::string_literal(text);
    }
    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_string_encoding() {
        match text_string("Acme") {
            Object::String(bytes, StringFormat::Literal) => assert_eq!(bytes, b"Acme"),
            other => panic!("unexpected object {other:?}"),
        }
        match text_string("Café") {
            Object::String(bytes, StringFormat::Hexadecimal) => assert_eq!(
                bytes,
                [0xFE, 0xFF, 0x00, 0x43, 0x00, 0x61, 0x00, 0x66, 0x00, 0xE9]
            ),
            other => panic!("unexpected object {other:?}"),
        }
    }

    #[test]
    fn test_new_document_has_no_pages() {
        let doc = PdfDocument::new(PageSize::letter());
        assert_eq!(doc.page_count(), 0);
        assert_eq!(doc.page_size(), PageSize::new(612.0, 792.0));
    }

    #[test]
    fn test_add_page_numbers() {
        let mut doc = PdfDocument::new(PageSize::letter());
        assert_eq!(doc.add_page(), 1);
        assert_eq!(doc.add_page(), 2);
        assert_eq!(doc.page_count(), 2);
    }

    #[test]
    fn test_drawing_without_page_fails() {
        let mut doc = PdfDocument::new(PageSize::letter());
        let result = doc.fill_rect(0.0, 0.0, 10.0, 10.0, Color::black(), None);
        assert!(matches!(result, Err(PdfError::NoCurrentPage)));

        let result = doc.insert_text("x", 0.0, 0.0, None, Align::Left);
        assert!(matches!(result, Err(PdfError::NoCurrentPage)));
    }

    #[test]
    fn test_finish_without_pages_fails() {
        let doc = PdfDocument::new(PageSize::letter());
        assert!(doc.to_bytes().is_err());
    }

    #[test]
    fn test_rect_uses_top_origin() {
        let mut doc = PdfDocument::new(PageSize::letter());
        doc.add_page();
        doc.fill_rect(50.0, 50.0, 100.0, 20.0, Color::black(), None)
            .unwrap();

        let ops = String::from_utf8(doc.page_content_buffer[0].clone()).unwrap();
        // 792 - 50 - 20
        assert!(ops.contains("50 722 100 20 re"));
    }

    #[test]
    fn test_text_goes_to_current_page() {
        let mut doc = PdfDocument::new(PageSize::letter());
        doc.add_page();
        doc.add_page();
        doc.insert_text("Hi", 50.0, 100.0, None, Align::Left).unwrap();

        assert!(doc.page_content_buffer[0].is_empty());
        let ops = String::from_utf8(doc.page_content_buffer[1].clone()).unwrap();
        assert!(ops.contains("50 692 Td"));
        assert!(ops.contains("<4869> Tj"));
    }

    #[test]
    fn test_center_alignment() {
        let mut doc = PdfDocument::new(PageSize::letter());
        doc.add_page();
        doc.set_font(StandardFont::Helvetica, 10.0);
        // "Hi" is 9.44pt wide at 10pt
        doc.insert_text("Hi", 100.0, 92.0, None, Align::Center)
            .unwrap();

        let ops = String::from_utf8(doc.page_content_buffer[0].clone()).unwrap();
        let expected = format!("{} 700 Td", 100.0 - 9.44 / 2.0);
        assert!(ops.contains(&expected));
    }

    #[test]
    fn test_empty_text_is_skipped() {
        let mut doc = PdfDocument::new(PageSize::letter());
        doc.add_page();
        doc.insert_text("", 50.0, 100.0, Some(80.0), Align::Left)
            .unwrap();
        assert!(doc.page_content_buffer[0].is_empty());
    }
}
