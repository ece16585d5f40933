//! Cover page, category pages and final PDF output

use crate::booklet::BookletData;
use crate::catalog::{Category, CATEGORIES, SECTIONS};
use crate::config::LayoutConfig;
use crate::cursor::RenderContext;
use crate::section::render_section;
use crate::surface::Surface;
use crate::values::resolve_path;
use crate::{ReportError, Result};
use chrono::NaiveDateTime;
use pdf_core::{Align, Color, PdfDocument, StandardFont};
use serde_json::Value;
use std::fmt::Write;
use std::path::Path;

/// Report generator
///
/// Holds the layout configuration and, optionally, a fixed generation time
/// so output can be reproduced byte for byte.
#[derive(Debug, Clone, Default)]
pub struct BookletReport {
    config: LayoutConfig,
    generated_at: Option<NaiveDateTime>,
}

impl BookletReport {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            generated_at: None,
        }
    }

    /// Use a fixed timestamp instead of the local clock
    pub fn with_timestamp(mut self, generated_at: NaiveDateTime) -> Self {
        self.generated_at = Some(generated_at);
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Render the booklet and return the finished PDF
    pub fn generate(&self, booklet: &BookletData) -> Result<Vec<u8>> {
        let generated_at = self.timestamp();

        let mut doc = PdfDocument::new(self.config.page_size());
        doc.set_line_width(self.config.line_width);
        doc.set_title(booklet.display_name(&self.config.default_organization));
        doc.set_creation_date(generated_at);

        self.render_at(&mut doc, booklet, generated_at)?;

        let pages = doc.page_count();
        let bytes = doc.to_bytes()?;
        log::info!(
            "generated booklet {}: {} pages, {} bytes",
            booklet.id.as_deref().unwrap_or("<unsaved>"),
            pages,
            bytes.len()
        );
        Ok(bytes)
    }

    /// Render the booklet and write the PDF to `path`
    pub fn generate_to_file<P: AsRef<Path>>(&self, booklet: &BookletData, path: P) -> Result<()> {
        let bytes = self.generate(booklet)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Draw the whole booklet onto any surface
    pub fn render<S: Surface>(&self, surface: &mut S, booklet: &BookletData) -> Result<()> {
        self.render_at(surface, booklet, self.timestamp())
    }

    fn timestamp(&self) -> NaiveDateTime {
        self.generated_at
            .unwrap_or_else(|| chrono::Local::now().naive_local())
    }

    fn render_at<S: Surface>(
        &self,
        surface: &mut S,
        booklet: &BookletData,
        generated_at: NaiveDateTime,
    ) -> Result<()> {
        self.config.validate()?;
        let mut ctx = RenderContext::new(surface, &self.config);

        self.render_cover(&mut ctx, booklet, generated_at)?;

        for category in CATEGORIES {
            match booklet.tab(category.key) {
                Some(tab) => self.render_category(&mut ctx, category, tab)?,
                None => log::debug!("no data for category '{}'", category.key),
            }
        }

        Ok(())
    }

    fn render_cover<S: Surface>(
        &self,
        ctx: &mut RenderContext<'_, S>,
        booklet: &BookletData,
        generated_at: NaiveDateTime,
    ) -> Result<()> {
        let config = &self.config;
        let mut stamp = String::new();
        write!(stamp, "{}", generated_at.format(&config.timestamp_format)).map_err(|_| {
            ReportError::ConfigError(format!(
                "invalid timestamp format '{}'",
                config.timestamp_format
            ))
        })?;

        ctx.new_page()?;
        let center = config.page_width / 2.0;
        let max_width = Some(ctx.cursor.usable_width());
        let top = config.page_height * 0.35;
        let heading: Color = config.heading_color.into();

        let surface = ctx.surface();
        surface.set_font(StandardFont::HelveticaBold, config.cover_title_size);
        surface.set_text_color(heading);
        surface.draw_text(&config.cover_title, center, top, max_width, Align::Center)?;

        surface.draw_filled_rect(center - 60.0, top + 16.0, 120.0, 3.0, heading, None)?;

        surface.set_font(StandardFont::Helvetica, config.cover_name_size);
        surface.set_text_color(config.text_color.into());
        surface.draw_text(
            booklet.display_name(&config.default_organization),
            center,
            top + 50.0,
            max_width,
            Align::Center,
        )?;

        surface.set_font(StandardFont::Helvetica, config.cover_meta_size);
        surface.set_text_color(config.muted_text_color.into());
        surface.draw_text(
            &format!("Generated on {stamp}"),
            center,
            top + 80.0,
            max_width,
            Align::Center,
        )?;

        Ok(())
    }

    fn render_category<S: Surface>(
        &self,
        ctx: &mut RenderContext<'_, S>,
        category: &Category,
        tab: &Value,
    ) -> Result<()> {
        let config = &self.config;
        ctx.new_page()?;

        let x = ctx.cursor.margins.left;
        let y = ctx.cursor.y;
        let width = ctx.cursor.usable_width();
        let size = config.tab_heading_size as f64;
        let heading: Color = config.heading_color.into();

        let surface = ctx.surface();
        surface.set_font(StandardFont::HelveticaBold, config.tab_heading_size);
        surface.set_text_color(heading);
        surface.draw_text(category.title, x, y + size, Some(width), Align::Left)?;
        surface.draw_filled_rect(x, y + size + 6.0, width, 1.5, heading, None)?;
        ctx.cursor.advance(size + 20.0);

        for section in SECTIONS {
            let Some(data) = resolve_path(section.key, tab) else {
                log::debug!("{}: no '{}' section", category.key, section.key);
                continue;
            };
            let groups = section.groups(data);
            render_section(
                ctx,
                section.title,
                section.color(),
                &groups,
                section.dollar_format,
            )?;
        }

        Ok(())
    }
}

/// Render a booklet with the default layout
pub fn generate(booklet: &BookletData) -> Result<Vec<u8>> {
    BookletReport::default().generate(booklet)
}
