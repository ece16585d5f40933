//! Bordered tables with alternating row shading and page breaks

use crate::columns::ColumnSet;
use crate::cursor::RenderContext;
use crate::labels::format_label;
use crate::surface::Surface;
use crate::values::value_to_string;
use crate::Result;
use pdf_core::{Align, Color, StandardFont};
use serde_json::Value;

/// One table row: a label cell followed by one cell per column
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    pub label: &'a str,
    /// Mapping of column key to cell value; missing keys render empty
    pub data: &'a Value,
}

impl<'a> Row<'a> {
    pub fn new(label: &'a str, data: &'a Value) -> Self {
        Self { label, data }
    }
}

/// Horizontal cell layout of a table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableGeometry {
    /// Left edge of the label column
    pub x: f64,
    pub label_width: f64,
    /// Width shared by every data column
    pub column_width: f64,
    pub row_height: f64,
    pub padding: f64,
}

impl TableGeometry {
    /// Split the usable width between the label column and `column_count` data columns
    pub fn new<S: Surface>(ctx: &RenderContext<'_, S>, column_count: usize) -> Self {
        let config = ctx.config();
        let label_width = config.label_column_width;
        let column_width = if column_count == 0 {
            0.0
        } else {
            (ctx.cursor.usable_width() - label_width) / column_count as f64
        };

        Self {
            x: ctx.cursor.margins.left,
            label_width,
            column_width,
            row_height: config.row_height,
            padding: config.cell_padding,
        }
    }

    /// Left edge of data column `index`
    pub fn column_x(&self, index: usize) -> f64 {
        self.x + self.label_width + self.column_width * index as f64
    }
}

/// Display text of one cell
///
/// Missing keys give an empty cell. With `dollar_format` a non-empty value
/// gets a literal `$` prefix.
pub fn cell_text(data: &Value, key: &str, dollar_format: bool) -> String {
    let text = data.get(key).map(value_to_string).unwrap_or_default();
    if dollar_format && !text.is_empty() {
        format!("${text}")
    } else {
        text
    }
}

/// Draw a header row and one row per entry in `rows`
///
/// Each row is checked against the bottom margin before it is drawn and
/// moved to a fresh page when it would overflow. The header is drawn once.
/// Nothing is drawn when `columns` is empty.
pub fn render_table<S: Surface>(
    ctx: &mut RenderContext<'_, S>,
    rows: &[Row<'_>],
    columns: &ColumnSet,
    dollar_format: bool,
) -> Result<()> {
    if columns.is_empty() {
        return Ok(());
    }

    let config = ctx.config();
    let geometry = TableGeometry::new(ctx, columns.len());
    let text_color: Color = config.text_color.into();

    ctx.ensure_room(geometry.row_height)?;
    let header: Vec<String> = columns.iter().map(|key| format_label(key)).collect();
    draw_row(
        ctx,
        &geometry,
        "",
        header.iter().map(String::as_str),
        config.header_row_fill.into(),
        StandardFont::HelveticaBold,
        text_color,
    )?;

    for (index, row) in rows.iter().enumerate() {
        if ctx.ensure_room(geometry.row_height)? {
            log::debug!("table row '{}' moved to a new page", row.label);
        }

        let fill = if index % 2 == 0 {
            config.even_row_fill
        } else {
            config.odd_row_fill
        };
        let cells: Vec<String> = columns
            .iter()
            .map(|key| cell_text(row.data, key, dollar_format))
            .collect();

        draw_row(
            ctx,
            &geometry,
            row.label,
            cells.iter().map(String::as_str),
            fill.into(),
            StandardFont::Helvetica,
            text_color,
        )?;
    }

    ctx.cursor.advance(config.table_gap);
    Ok(())
}

/// Draw one bordered row at the cursor and advance past it
fn draw_row<'c, S, I>(
    ctx: &mut RenderContext<'_, S>,
    geometry: &TableGeometry,
    label: &str,
    cells: I,
    fill: Color,
    font: StandardFont,
    text_color: Color,
) -> Result<()>
where
    S: Surface,
    I: IntoIterator<Item = &'c str>,
{
    let config = ctx.config();
    let border: Color = config.border_color.into();
    let size = config.table_font_size;
    let y = ctx.cursor.y;
    let h = geometry.row_height;
    let baseline = y + h / 2.0 + size as f64 * 0.35;
    let text_width = |w: f64| (w - 2.0 * geometry.padding).max(0.0);

    let surface = ctx.surface();
    surface.set_text_color(text_color);

    surface.draw_filled_rect(geometry.x, y, geometry.label_width, h, fill, Some(border))?;
    if !label.is_empty() {
        surface.set_font(StandardFont::HelveticaBold, size);
        surface.draw_text(
            label,
            geometry.x + geometry.padding,
            baseline,
            Some(text_width(geometry.label_width)),
            Align::Left,
        )?;
    }

    surface.set_font(font, size);
    for (index, text) in cells.into_iter().enumerate() {
        let x = geometry.column_x(index);
        surface.draw_filled_rect(x, y, geometry.column_width, h, fill, Some(border))?;
        if !text.is_empty() {
            surface.draw_text(
                text,
                x + geometry.padding,
                baseline,
                Some(text_width(geometry.column_width)),
                Align::Left,
            )?;
        }
    }

    ctx.cursor.advance(h);
    Ok(())
}
