//! Numeric series to a box-drawing line chart with a labelled y-axis.
//!
//! ### Layout
//! ```text
//!     1.00┤╭╮
//!     0.00┼╯╰
//! ^^^^^^^^ tick labels (tick_width)
//!         ^ axis
//!          ^^^ one column per sample, after `offset` blank columns
//! ```
//! Row 0 is the maximum, the last row the minimum.  Every adjacent pair of
//! samples is drawn in the column of the left sample: a flat run when both
//! land on the same row, otherwise a corner on each row joined by vertical
//! connectors.

use tracing::debug;

use crate::core::{
    bounds::min_and_max,
    config::GraphConfig,
    constants::{
        AXIS_GUTTER, AXIS_ORIGIN, AXIS_TICK, LINE_DOWN_FROM, LINE_DOWN_TO, LINE_HORIZONTAL,
        LINE_UP_FROM, LINE_UP_TO, LINE_VERTICAL,
    },
    error::InvalidInputError,
    format::TickFormat,
};

/// A series plus the parameters it is plotted with.
#[derive(Debug, Clone)]
pub struct Graph {
    series: Vec<f64>,
    min: f64,
    max: f64,
    config: GraphConfig,
}

/// Per-plot geometry, derived from the current config.
struct Geometry {
    rows: usize,
    cols: usize,
    range: f64,
    /// Column of the axis glyph.
    axis: usize,
    /// Column of the first sample.
    line: usize,
}

impl Graph {
    /// # Errors
    /// [`InvalidInputError::EmptySeries`] when `series` has no samples.
    pub fn from_series(series: impl Into<Vec<f64>>) -> Result<Self, InvalidInputError> {
        let series = series.into();
        let (min, max) = min_and_max(&series)?;
        Ok(Self {
            series,
            min,
            max,
            config: GraphConfig::default(),
        })
    }

    /// Plot height in rows; `0` derives it from the data range.
    #[inline]
    #[must_use]
    pub fn with_height(mut self, rows: usize) -> Self {
        self.config.height = rows;
        self
    }
    #[inline]
    #[must_use]
    pub fn with_tick_width(mut self, width: usize) -> Self {
        self.config.tick_width = width;
        self
    }
    #[inline]
    #[must_use]
    pub fn with_tick_format<F: Into<TickFormat>>(mut self, format: F) -> Self {
        self.config.tick_format = format.into();
        self
    }
    #[inline]
    #[must_use]
    pub fn with_offset(mut self, cols: usize) -> Self {
        self.config.offset = cols;
        self
    }
    #[inline]
    #[must_use]
    pub fn with_config(mut self, config: GraphConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn series(&self) -> &[f64] {
        &self.series
    }

    /// Series extrema as `(min, max)`.
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Render the chart, one `\n`-terminated line per row.
    #[must_use]
    pub fn plot(&self) -> String {
        let geo = self.geometry();
        debug!(
            rows = geo.rows,
            cols = geo.cols,
            min = self.min,
            max = self.max,
            "plotting series"
        );

        let mut grid = vec![vec![' '; geo.cols]; geo.rows];
        self.draw_ticks_and_axis(&mut grid, &geo);
        self.draw_line(&mut grid, &geo);

        let mut out = String::with_capacity(geo.rows * (geo.cols * 3 + 1));
        for row in &grid {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn geometry(&self) -> Geometry {
        let cfg = &self.config;
        let range = self.max - self.min;

        let rows = if cfg.height > 0 {
            cfg.height
        } else if range.is_finite() {
            (range.round() as usize).saturating_add(1)
        } else {
            1
        };
        let axis = cfg.tick_width;
        let line = axis + AXIS_GUTTER + cfg.offset;

        Geometry {
            rows,
            cols: line + self.series.len(),
            range,
            axis,
            line,
        }
    }

    /// y value represented by `row`, interpolated from max (top) to min.
    #[allow(clippy::cast_precision_loss)]
    fn value_at_row(&self, row: usize, geo: &Geometry) -> f64 {
        if geo.rows <= 1 {
            return self.max;
        }
        self.max - row as f64 * (geo.range / (geo.rows - 1) as f64)
    }

    /// Row closest to `value`, clamped into the grid.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn row_at_value(&self, value: f64, geo: &Geometry) -> usize {
        let last = geo.rows - 1;
        if geo.range == 0.0 || last == 0 {
            return last;
        }
        let depth = ((value - self.min) / geo.range * last as f64).round();
        if !depth.is_finite() || depth <= 0.0 {
            return last;
        }
        last - (depth as usize).min(last)
    }

    fn draw_ticks_and_axis(&self, grid: &mut [Vec<char>], geo: &Geometry) {
        let width = self.config.tick_width;
        for (row, cells) in grid.iter_mut().enumerate() {
            let y = self.value_at_row(row, geo);

            // Right-aligned, keeping the leftmost characters when too wide.
            let label: Vec<char> = self.config.tick_format.format(y).chars().collect();
            let shown = label.len().min(width);
            cells[width - shown..width].copy_from_slice(&label[..shown]);

            cells[geo.axis] = if y == 0.0 { AXIS_ORIGIN } else { AXIS_TICK };
        }
    }

    fn draw_line(&self, grid: &mut [Vec<char>], geo: &Geometry) {
        let first = self.row_at_value(self.series[0], geo);
        grid[first][geo.axis] = AXIS_ORIGIN;

        for (x, pair) in self.series.windows(2).enumerate() {
            let col = geo.line + x;
            let start = self.row_at_value(pair[0], geo);
            let end = self.row_at_value(pair[1], geo);

            if start == end {
                grid[start][col] = LINE_HORIZONTAL;
                continue;
            }

            // Rows grow downwards, so `start < end` means the value falls.
            let (from, to) = if start < end {
                (LINE_DOWN_FROM, LINE_DOWN_TO)
            } else {
                (LINE_UP_FROM, LINE_UP_TO)
            };
            grid[start][col] = from;
            grid[end][col] = to;

            for cells in &mut grid[start.min(end) + 1..start.max(end)] {
                cells[col] = LINE_VERTICAL;
            }
        }
    }
}

impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.plot())
    }
}
