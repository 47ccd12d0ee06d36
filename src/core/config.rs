//! Render-time graph parameters + fluent setters.

use crate::core::{constants::DEFAULT_TICK_WIDTH, format::TickFormat};

/// Parameters read by [`Graph::plot`](crate::Graph::plot).
///
/// Geometry is derived from these on every plot call, so changing a field
/// between two calls changes the second rendering only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphConfig {
    /// Plot height in rows; `0` derives it from the data range.
    pub height: usize,
    /// Tick labels are left-padded with spaces to this many characters.
    pub tick_width: usize,
    pub tick_format: TickFormat,
    /// Blank columns between the axis and the first plotted sample.
    pub offset: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            height: 0,
            tick_width: DEFAULT_TICK_WIDTH,
            tick_format: TickFormat::default(),
            offset: 0,
        }
    }
}

impl GraphConfig {
    #[inline]
    #[must_use]
    pub fn height(mut self, rows: usize) -> Self {
        self.height = rows;
        self
    }
    #[inline]
    #[must_use]
    pub fn tick_width(mut self, width: usize) -> Self {
        self.tick_width = width;
        self
    }
    #[inline]
    #[must_use]
    pub fn tick_format<F: Into<TickFormat>>(mut self, f: F) -> Self {
        self.tick_format = f.into();
        self
    }
    #[inline]
    #[must_use]
    pub fn offset(mut self, cols: usize) -> Self {
        self.offset = cols;
        self
    }
}
