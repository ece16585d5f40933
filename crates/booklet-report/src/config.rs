//! Layout configuration
//!
//! Every geometry and style constant used by the report can be overridden
//! from JSON. Missing fields fall back to the defaults below (US Letter,
//! 50pt margins, 120pt label column, 18pt rows).

use crate::{ReportError, Result};
use pdf_core::{Color, PageSize};
use serde::{Deserialize, Serialize};

/// RGB color in configuration files
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RgbColor {
    /// Red component (0.0 - 1.0)
    pub r: f64,
    /// Green component (0.0 - 1.0)
    pub g: f64,
    /// Blue component (0.0 - 1.0)
    pub b: f64,
}

impl RgbColor {
    /// Create a new RGB color (values 0.0 - 1.0)
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Gray level (0.0 = black, 1.0 = white)
    pub fn gray(level: f64) -> Self {
        Self::rgb(level, level, level)
    }

    /// Create color from RGB values (0-255)
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }
}

impl From<RgbColor> for Color {
    fn from(c: RgbColor) -> Self {
        Color::rgb(c.r as f32, c.g as f32, c.b as f32)
    }
}

/// Page margins in points
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    /// Same margin on all four sides
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(50.0)
    }
}

/// Geometry and style of the generated report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Page width in points
    pub page_width: f64,
    /// Page height in points
    pub page_height: f64,
    pub margins: Margins,

    /// Width of the row label column
    pub label_column_width: f64,
    /// Height of every table row, header included
    pub row_height: f64,
    /// Horizontal inset of text inside a cell
    pub cell_padding: f64,
    /// Space left below a table
    pub table_gap: f64,

    /// Height of the colored section header bar
    pub section_bar_height: f64,
    /// Space between the header bar and its table
    pub section_gap: f64,
    /// A section starting closer than this to the bottom margin moves to a new page
    pub page_guard: f64,
    /// Inset of the section title inside the bar
    pub section_title_inset: f64,

    pub cover_title_size: f32,
    pub cover_name_size: f32,
    pub cover_meta_size: f32,
    pub tab_heading_size: f32,
    pub section_title_size: f32,
    pub table_font_size: f32,
    pub line_width: f64,

    pub heading_color: RgbColor,
    pub text_color: RgbColor,
    pub muted_text_color: RgbColor,
    pub section_title_color: RgbColor,
    pub header_row_fill: RgbColor,
    pub even_row_fill: RgbColor,
    pub odd_row_fill: RgbColor,
    pub border_color: RgbColor,

    /// Static title on the cover page
    pub cover_title: String,
    /// Name shown when the booklet has neither a display title nor an organization
    pub default_organization: String,
    /// chrono format string for the generation timestamp
    pub timestamp_format: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_width: 612.0,
            page_height: 792.0,
            margins: Margins::default(),
            label_column_width: 120.0,
            row_height: 18.0,
            cell_padding: 5.0,
            table_gap: 15.0,
            section_bar_height: 22.0,
            section_gap: 5.0,
            page_guard: 150.0,
            section_title_inset: 8.0,
            cover_title_size: 26.0,
            cover_name_size: 18.0,
            cover_meta_size: 11.0,
            tab_heading_size: 18.0,
            section_title_size: 11.0,
            table_font_size: 9.0,
            line_width: 0.5,
            heading_color: RgbColor::from_rgb(31, 56, 100),
            text_color: RgbColor::gray(0.15),
            muted_text_color: RgbColor::gray(0.45),
            section_title_color: RgbColor::gray(1.0),
            header_row_fill: RgbColor::gray(0.88),
            even_row_fill: RgbColor::gray(0.98),
            odd_row_fill: RgbColor::gray(0.93),
            border_color: RgbColor::gray(0.75),
            cover_title: "Employee Benefits Booklet".to_string(),
            default_organization: "Benefits Overview".to_string(),
            timestamp_format: "%B %-d, %Y %-I:%M %p".to_string(),
        }
    }
}

impl LayoutConfig {
    /// Parse a configuration from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LayoutConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Page size as used by the PDF document
    pub fn page_size(&self) -> PageSize {
        PageSize::new(self.page_width, self.page_height)
    }

    /// Width between the left and right margins
    pub fn usable_width(&self) -> f64 {
        self.page_width - self.margins.left - self.margins.right
    }

    /// Height between the top and bottom margins
    pub fn usable_height(&self) -> f64 {
        self.page_height - self.margins.top - self.margins.bottom
    }

    /// Reject geometry that cannot produce a readable page
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("pageWidth", self.page_width),
            ("pageHeight", self.page_height),
            ("rowHeight", self.row_height),
            ("sectionBarHeight", self.section_bar_height),
            ("labelColumnWidth", self.label_column_width),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ReportError::ConfigError(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let m = &self.margins;
        if [m.top, m.right, m.bottom, m.left].iter().any(|v| *v < 0.0) {
            return Err(ReportError::ConfigError(
                "margins must not be negative".to_string(),
            ));
        }

        if self.usable_width() <= self.label_column_width {
            return Err(ReportError::ConfigError(format!(
                "label column ({}) leaves no room for data columns in {} points",
                self.label_column_width,
                self.usable_width()
            )));
        }

        // a section needs its bar, the header row and one data row
        let minimum = self.section_bar_height + self.section_gap + 2.0 * self.row_height;
        if self.usable_height() < minimum {
            return Err(ReportError::ConfigError(format!(
                "usable page height {} is below the minimum of {minimum}",
                self.usable_height()
            )));
        }
        if self.page_guard < minimum {
            return Err(ReportError::ConfigError(format!(
                "pageGuard {} is below the section minimum of {minimum}",
                self.page_guard
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.page_size(), PageSize::letter());
        assert_eq!(config.margins, Margins::uniform(50.0));
        assert_eq!(config.usable_width(), 512.0);
        assert_eq!(config.usable_height(), 692.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = LayoutConfig::from_json(r#"{ "rowHeight": 20, "coverTitle": "Plans" }"#)
            .unwrap();
        assert_eq!(config.row_height, 20.0);
        assert_eq!(config.cover_title, "Plans");
        assert_eq!(config.label_column_width, 120.0);
    }

    #[test]
    fn test_margins_from_json() {
        let config = LayoutConfig::from_json(
            r#"{ "margins": { "top": 36, "right": 36, "bottom": 36, "left": 36 } }"#,
        )
        .unwrap();
        assert_eq!(config.usable_width(), 540.0);
    }

    #[test]
    fn test_rejects_zero_row_height() {
        let result = LayoutConfig::from_json(r#"{ "rowHeight": 0 }"#);
        assert!(matches!(result, Err(ReportError::ConfigError(_))));
    }

    #[test]
    fn test_rejects_wide_label_column() {
        let result = LayoutConfig::from_json(r#"{ "labelColumnWidth": 600 }"#);
        assert!(matches!(result, Err(ReportError::ConfigError(_))));
    }

    #[test]
    fn test_rejects_tiny_page() {
        let result = LayoutConfig::from_json(r#"{ "pageHeight": 120 }"#);
        assert!(matches!(result, Err(ReportError::ConfigError(_))));
    }

    #[test]
    fn test_rejects_page_guard_below_section_start() {
        // bar 22 + gap 5 + header and one row 36
        let result = LayoutConfig::from_json(r#"{ "pageGuard": 0 }"#);
        assert!(matches!(result, Err(ReportError::ConfigError(_))));
        assert!(LayoutConfig::from_json(r#"{ "pageGuard": 63 }"#).is_ok());
    }

    #[test]
    fn test_invalid_json() {
        let result = LayoutConfig::from_json("{ not json");
        assert!(matches!(result, Err(ReportError::JsonError(_))));
    }

    #[test]
    fn test_color_conversion() {
        let color: Color = RgbColor::from_rgb(255, 0, 0).into();
        assert_eq!(color, Color::red());
    }
}
