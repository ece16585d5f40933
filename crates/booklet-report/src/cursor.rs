//! Vertical layout state for one generation

use crate::config::{LayoutConfig, Margins};
use crate::surface::Surface;
use crate::Result;

/// Current drawing position on the active page
///
/// `y` grows downward from the top edge of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderCursor {
    pub page_width: f64,
    pub page_height: f64,
    pub margins: Margins,
    pub y: f64,
}

impl RenderCursor {
    /// Cursor at the top margin of a page
    pub fn new(page_width: f64, page_height: f64, margins: Margins) -> Self {
        Self {
            page_width,
            page_height,
            margins,
            y: margins.top,
        }
    }

    pub fn from_config(config: &LayoutConfig) -> Self {
        Self::new(config.page_width, config.page_height, config.margins)
    }

    /// Width between the left and right margins
    pub fn usable_width(&self) -> f64 {
        self.page_width - self.margins.left - self.margins.right
    }

    /// Lowest `y` content may reach
    pub fn content_bottom(&self) -> f64 {
        self.page_height - self.margins.bottom
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    pub fn advance(&mut self, height: f64) {
        self.y += height;
    }

    /// Whether a block of `height` starting at `y` stays above the bottom margin
    pub fn fits(&self, height: f64) -> bool {
        self.y + height <= self.content_bottom()
    }

    pub fn reset_to_top(&mut self) {
        self.y = self.margins.top;
    }
}

/// Surface, cursor and configuration threaded through the renderers
pub struct RenderContext<'a, S: Surface> {
    surface: &'a mut S,
    pub cursor: RenderCursor,
    config: &'a LayoutConfig,
}

impl<'a, S: Surface> RenderContext<'a, S> {
    pub fn new(surface: &'a mut S, config: &'a LayoutConfig) -> Self {
        Self {
            surface,
            cursor: RenderCursor::from_config(config),
            config,
        }
    }

    pub fn surface(&mut self) -> &mut S {
        &mut *self.surface
    }

    pub fn config(&self) -> &'a LayoutConfig {
        self.config
    }

    /// Start a page and move the cursor to its top margin
    pub fn new_page(&mut self) -> Result<()> {
        self.surface.start_new_page()?;
        self.cursor.reset_to_top();
        log::debug!("page break, cursor reset to y={}", self.cursor.y);
        Ok(())
    }

    /// Break the page unless `height` still fits below the cursor
    ///
    /// Returns `true` when a new page was started.
    pub fn ensure_room(&mut self, height: f64) -> Result<bool> {
        if self.cursor.fits(height) {
            return Ok(false);
        }
        self.new_page()?;
        Ok(true)
    }
}
