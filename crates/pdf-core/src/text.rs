//! Content stream operator generation

use crate::document::Color;
use crate::Align;

/// Context for rendering text
pub struct TextRenderContext {
    /// PDF font resource name (e.g., "F1")
    pub font_name: String,
    /// Font size in points
    pub font_size: f32,
    /// Text color (RGB)
    pub color: Color,
}

/// Calculate X offset for text alignment
///
/// # Arguments
/// * `text_width` - Width of text in points
/// * `container_width` - Available width for alignment
/// * `align` - Desired alignment
pub fn calculate_x_offset(text_width: f64, container_width: f64, align: Align) -> f64 {
    match align {
        Align::Left => 0.0,
        Align::Center => (container_width - text_width) / 2.0,
        Align::Right => container_width - text_width,
    }
}

/// Generate PDF operators for text insertion
///
/// Creates the PDF text operators (BT, rg, Tf, Td, Tj, ET) to render text
/// with its baseline starting at the given position.
///
/// # Arguments
/// * `text_hex` - Hex-encoded text (e.g., "<48656C6C6F>")
/// * `x` - X coordinate in points (PDF coordinates, from left)
/// * `y` - Y coordinate in points (PDF coordinates, from bottom)
/// * `ctx` - Text rendering context
pub fn generate_text_operators(
    text_hex: &str,
    x: f64,
    y: f64,
    ctx: &TextRenderContext,
) -> Vec<u8> {
    let mut ops = String::new();

    ops.push_str("BT\n");
    ops.push_str(&format!(
        "{} {} {} rg\n",
        ctx.color.r, ctx.color.g, ctx.color.b
    ));
    ops.push_str(&format!("/{} {} Tf\n", ctx.font_name, ctx.font_size));
    ops.push_str(&format!("{x} {y} Td\n"));
    ops.push_str(&format!("{text_hex} Tj\n"));
    ops.push_str("ET\n");

    ops.into_bytes()
}

/// Generate PDF operators for a rectangle
///
/// The rectangle is filled with `fill` and, when `stroke` is given, outlined
/// with a line of `line_width` points. Graphics state is saved and restored
/// around the drawing so colors do not leak into later operators.
///
/// # Arguments
/// * `x`, `y` - Lower-left corner in PDF coordinates
/// * `width`, `height` - Size in points
pub fn generate_rect_operators(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    fill: Color,
    stroke: Option<Color>,
    line_width: f64,
) -> Vec<u8> {
    let mut ops = String::new();

    ops.push_str("q\n");
    ops.push_str(&format!("{} {} {} rg\n", fill.r, fill.g, fill.b));
    if let Some(stroke) = stroke {
        ops.push_str(&format!("{} {} {} RG\n", stroke.r, stroke.g, stroke.b));
        ops.push_str(&format!("{line_width} w\n"));
    }
    ops.push_str(&format!("{x} {y} {width} {height} re\n"));
    // B = fill then stroke, f = fill only
    ops.push_str(if stroke.is_some() { "B\n" } else { "f\n" });
    ops.push_str("Q\n");

    ops.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_offset_left() {
        let offset = calculate_x_offset(100.0, 500.0, Align::Left);
        assert_eq!(offset, 0.0);
    }

    #[test]
    fn test_x_offset_center() {
        let offset = calculate_x_offset(100.0, 500.0, Align::Center);
        assert_eq!(offset, 200.0);
    }

    #[test]
    fn test_x_offset_right() {
        let offset = calculate_x_offset(100.0, 500.0, Align::Right);
        assert_eq!(offset, 400.0);
    }

    #[test]
    fn test_generate_text_operators() {
        let ctx = TextRenderContext {
            font_name: "F1".to_string(),
            font_size: 12.0,
            color: Color::black(),
        };

        let ops = generate_text_operators("<48656C6C6F>", 100.0, 700.0, &ctx);
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.starts_with("BT\n"));
        assert!(ops_str.contains("0 0 0 rg"));
        assert!(ops_str.contains("/F1 12 Tf"));
        assert!(ops_str.contains("100 700 Td"));
        assert!(ops_str.contains("<48656C6C6F> Tj"));
        assert!(ops_str.ends_with("ET\n"));
    }

    #[test]
    fn test_generate_text_operators_with_color() {
        let ctx = TextRenderContext {
            font_name: "F2".to_string(),
            font_size: 9.0,
            color: Color::white(),
        };

        let ops = generate_text_operators("<41>", 58.0, 600.5, &ctx);
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("1 1 1 rg"));
        assert!(ops_str.contains("/F2 9 Tf"));
        assert!(ops_str.contains("58 600.5 Td"));
    }

    #[test]
    fn test_generate_rect_fill_only() {
        let ops = generate_rect_operators(50.0, 100.0, 512.0, 18.0, Color::red(), None, 0.5);
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("1 0 0 rg"));
        assert!(ops_str.contains("50 100 512 18 re"));
        assert!(ops_str.contains("f\n"));
        assert!(!ops_str.contains("RG"));
        assert!(ops_str.starts_with("q\n"));
        assert!(ops_str.ends_with("Q\n"));
    }

    #[test]
    fn test_generate_rect_fill_and_stroke() {
        let ops = generate_rect_operators(
            50.0,
            100.0,
            120.0,
            18.0,
            Color::white(),
            Some(Color::black()),
            0.5,
        );
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("1 1 1 rg"));
        assert!(ops_str.contains("0 0 0 RG"));
        assert!(ops_str.contains("0.5 w"));
        assert!(ops_str.contains("B\n"));
    }
}
