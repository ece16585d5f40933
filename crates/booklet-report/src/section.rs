//! Colored section header followed by its table

use crate::columns::extract_columns;
use crate::cursor::RenderContext;
use crate::surface::Surface;
use crate::table::{render_table, Row};
use crate::Result;
use pdf_core::{Align, Color, StandardFont};
use serde_json::Value;

/// Named source of one table row
#[derive(Debug, Clone)]
pub struct SectionGroup<'a> {
    pub label: String,
    pub data: &'a Value,
}

impl<'a> SectionGroup<'a> {
    pub fn new(label: impl Into<String>, data: &'a Value) -> Self {
        Self {
            label: label.into(),
            data,
        }
    }

    pub fn as_row(&self) -> Row<'_> {
        Row::new(&self.label, self.data)
    }
}

/// Render a titled section
///
/// Columns are discovered from the groups in order. When there are no
/// groups or no columns, nothing is drawn and the cursor does not move.
pub fn render_section<S: Surface>(
    ctx: &mut RenderContext<'_, S>,
    title: &str,
    color: Color,
    groups: &[SectionGroup<'_>],
    dollar_format: bool,
) -> Result<()> {
    if groups.is_empty() {
        return Ok(());
    }
    let columns = extract_columns(groups.iter().map(|group| group.data));
    if columns.is_empty() {
        log::debug!("section '{title}' has no columns, skipped");
        return Ok(());
    }

    let config = ctx.config();
    if ctx.cursor.y > ctx.cursor.content_bottom() - config.page_guard {
        ctx.new_page()?;
    } else {
        // bar, header row and first data row stay together
        let start = config.section_bar_height + config.section_gap + 2.0 * config.row_height;
        ctx.ensure_room(start)?;
    }

    let x = ctx.cursor.margins.left;
    let y = ctx.cursor.y;
    let width = ctx.cursor.usable_width();
    let bar_height = config.section_bar_height;
    let size = config.section_title_size;
    let baseline = y + bar_height / 2.0 + size as f64 * 0.35;

    let surface = ctx.surface();
    surface.draw_filled_rect(x, y, width, bar_height, color, Some(color))?;
    surface.set_font(StandardFont::HelveticaBold, size);
    surface.set_text_color(config.section_title_color.into());
    surface.draw_text(
        title,
        x + config.section_title_inset,
        baseline,
        Some(width - 2.0 * config.section_title_inset),
        Align::Left,
    )?;
    ctx.cursor.advance(bar_height + config.section_gap);

    let rows: Vec<Row> = groups.iter().map(SectionGroup::as_row).collect();
    render_table(ctx, &rows, &columns, dollar_format)
}
