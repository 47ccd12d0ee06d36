//! Bordered text tables.
//!
//! ### Layout
//! * Column width = longest single line (after splitting on line breaks)
//!   found in that column, header included.  Computed once at construction.
//! * Every cell line is framed by one space on each side, so a rendered
//!   cell is always `width + 2` characters.
//! * A row is as tall as its tallest cell; shorter cells are padded with
//!   blank lines.
//! * A table without rows shows [`EMPTY_TABLE_MESSAGE`] centred across the
//!   full width; the last column is widened up front if that message would
//!   not fit.

use tracing::{debug, warn};

use crate::{
    core::{
        constants::{CELL_PADDING, COLUMN_SEPARATOR_WIDTH, EMPTY_TABLE_MESSAGE},
        error::InvalidInputError,
    },
    render::border::{BorderStyle, Utf8Border},
};

/// Horizontal placement of body cells inside their column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Right,
}

/// Headers plus rows of optional cells, rendered with a [`BorderStyle`].
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
    column_widths: Vec<usize>,
    alignments: Vec<Alignment>,
    null_value: String,
    style: Box<dyn BorderStyle>,
}

// --- Helpers ---

/// Physical lines of a cell; an empty cell still occupies one line.
#[inline]
fn cell_lines(text: &str) -> Vec<&str> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.is_empty() { vec![""] } else { lines }
}

#[inline]
fn widest_line(text: &str) -> usize {
    cell_lines(text)
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
}

/// ` text ` padded to `width + 2` characters.
fn push_padded(buf: &mut String, text: &str, width: usize, align: Alignment) {
    let fill = width.saturating_sub(text.chars().count());
    buf.push_str(&" ".repeat(CELL_PADDING));
    match align {
        Alignment::Left => {
            buf.push_str(text);
            buf.push_str(&" ".repeat(fill));
        }
        Alignment::Right => {
            buf.push_str(&" ".repeat(fill));
            buf.push_str(text);
        }
    }
    buf.push_str(&" ".repeat(CELL_PADDING));
}

/// Glyphs making up one horizontal divider.
struct Divider {
    left: char,
    fill: char,
    middle: char,
    right: char,
}

impl Table {
    /// Build a table from headers and rows of optional cells.
    ///
    /// # Errors
    /// * [`InvalidInputError::EmptyHeaders`] when there are no headers.
    /// * [`InvalidInputError::ColumnCountMismatch`] when a row does not have
    ///   exactly one cell per header.
    pub fn from_data<H: Into<String>>(
        headers: impl IntoIterator<Item = H>,
        rows: Vec<Vec<Option<String>>>,
    ) -> Result<Self, InvalidInputError> {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        if headers.is_empty() {
            return Err(InvalidInputError::EmptyHeaders);
        }
        let columns = headers.len();

        let mut column_widths: Vec<usize> = headers.iter().map(|h| widest_line(h)).collect();
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(InvalidInputError::ColumnCountMismatch {
                    row: idx + 1,
                    found: row.len(),
                    expected: columns,
                });
            }
            for (width, cell) in column_widths.iter_mut().zip(row) {
                if let Some(text) = cell {
                    *width = (*width).max(widest_line(text));
                }
            }
        }

        // Make sure the empty-state message fits between the outer borders.
        if rows.is_empty() {
            let inner = inner_width(&column_widths);
            let want = EMPTY_TABLE_MESSAGE.chars().count() + 2 * CELL_PADDING;
            if inner < want {
                if let Some(last) = column_widths.last_mut() {
                    *last += want - inner;
                }
            }
        }

        Ok(Self {
            headers,
            rows,
            column_widths,
            alignments: vec![Alignment::default(); columns],
            null_value: String::new(),
            style: Box::new(Utf8Border),
        })
    }

    /// Build a table whose cells are all present.
    ///
    /// # Errors
    /// Same as [`Table::from_data`].
    pub fn from_rows<H, R, C>(
        headers: impl IntoIterator<Item = H>,
        rows: impl IntoIterator<Item = R>,
    ) -> Result<Self, InvalidInputError>
    where
        H: Into<String>,
        R: IntoIterator<Item = C>,
        C: Into<String>,
    {
        let rows: Vec<Vec<Option<String>>> = rows
            .into_iter()
            .map(|r| r.into_iter().map(|c| Some(c.into())).collect())
            .collect();
        Self::from_data(headers, rows)
    }

    /// Build a table with headers only; it renders the empty-state row.
    ///
    /// # Errors
    /// [`InvalidInputError::EmptyHeaders`] when there are no headers.
    pub fn from_headers<H: Into<String>>(
        headers: impl IntoIterator<Item = H>,
    ) -> Result<Self, InvalidInputError> {
        Self::from_data(headers, Vec::new())
    }

    #[inline]
    #[must_use]
    pub fn with_border_style<S: BorderStyle + 'static>(mut self, style: S) -> Self {
        self.style = Box::new(style);
        self
    }

    /// Text shown for absent cells.  Read at render time.
    #[inline]
    #[must_use]
    pub fn with_null_value(mut self, value: impl Into<String>) -> Self {
        self.null_value = value.into();
        self
    }

    /// Align the body cells of `column`.  Headers stay left-aligned.
    /// Out-of-range columns are ignored.
    #[must_use]
    pub fn with_column_alignment(mut self, column: usize, align: Alignment) -> Self {
        match self.alignments.get_mut(column) {
            Some(slot) => *slot = align,
            None => warn!(
                column,
                columns = self.headers.len(),
                "ignoring alignment for missing column"
            ),
        }
        self
    }

    #[inline]
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Widths derived at construction, padding excluded.
    #[inline]
    #[must_use]
    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }

    #[must_use]
    pub fn render(&self) -> String {
        let widths = self.layout_widths();
        debug!(?widths, rows = self.rows.len(), "rendering table");

        let s = &*self.style;
        let mut out = String::new();

        push_divider(
            &mut out,
            &widths,
            &Divider {
                left: s.top_left_corner(),
                fill: s.horizontal_fill(true, false),
                middle: s.top_edge_divider(),
                right: s.top_right_corner(),
            },
        );

        let headers: Vec<&str> = self.headers.iter().map(String::as_str).collect();
        self.push_row(&mut out, &widths, &headers, |_| Alignment::Left);

        if self.rows.is_empty() {
            push_divider(
                &mut out,
                &widths,
                &Divider {
                    left: s.left_edge_divider(true),
                    fill: s.horizontal_fill(false, true),
                    middle: s.cross(true, true),
                    right: s.right_edge_divider(true),
                },
            );
            self.push_empty_row(&mut out, &widths);
            // Nothing continues below the placeholder, so junctions are plain fill.
            push_divider(
                &mut out,
                &widths,
                &Divider {
                    left: s.bottom_left_corner(),
                    fill: s.horizontal_fill(true, false),
                    middle: s.horizontal_fill(true, false),
                    right: s.bottom_right_corner(),
                },
            );
            return out;
        }

        for (idx, row) in self.rows.iter().enumerate() {
            let under_headers = idx == 0;
            push_divider(
                &mut out,
                &widths,
                &Divider {
                    left: s.left_edge_divider(under_headers),
                    fill: s.horizontal_fill(false, under_headers),
                    middle: s.cross(under_headers, false),
                    right: s.right_edge_divider(under_headers),
                },
            );
            let cells: Vec<&str> = row
                .iter()
                .map(|c| c.as_deref().unwrap_or(&self.null_value))
                .collect();
            self.push_row(&mut out, &widths, &cells, |col| self.alignments[col]);
        }

        push_divider(
            &mut out,
            &widths,
            &Divider {
                left: s.bottom_left_corner(),
                fill: s.horizontal_fill(true, false),
                middle: s.bottom_edge_divider(),
                right: s.bottom_right_corner(),
            },
        );
        out
    }

    /// Construction widths, widened where the null placeholder would not fit.
    fn layout_widths(&self) -> Vec<usize> {
        let null_width = widest_line(&self.null_value);
        let mut widths = self.column_widths.clone();
        for (col, width) in widths.iter_mut().enumerate() {
            if self.rows.iter().any(|r| r[col].is_none()) {
                *width = (*width).max(null_width);
            }
        }
        widths
    }

    fn push_row(
        &self,
        buf: &mut String,
        widths: &[usize],
        cells: &[&str],
        align: impl Fn(usize) -> Alignment,
    ) {
        let lines: Vec<Vec<&str>> = cells.iter().map(|c| cell_lines(c)).collect();
        let height = lines.iter().map(Vec::len).max().unwrap_or(1);

        for line in 0..height {
            for (col, cell) in lines.iter().enumerate() {
                buf.push(self.style.vertical_fill(col == 0));
                let text = cell.get(line).copied().unwrap_or("");
                push_padded(buf, text, widths[col], align(col));
            }
            buf.push(self.style.vertical_fill(true));
            buf.push('\n');
        }
    }

    fn push_empty_row(&self, buf: &mut String, widths: &[usize]) {
        let inner = inner_width(widths);
        let len = EMPTY_TABLE_MESSAGE.chars().count();
        let left = inner.saturating_sub(len) / 2;
        let right = inner.saturating_sub(len + left);

        buf.push(self.style.vertical_fill(true));
        buf.push_str(&" ".repeat(left));
        buf.push_str(EMPTY_TABLE_MESSAGE);
        buf.push_str(&" ".repeat(right));
        buf.push(self.style.vertical_fill(true));
        buf.push('\n');
    }
}

fn push_divider(buf: &mut String, widths: &[usize], d: &Divider) {
    for (col, width) in widths.iter().enumerate() {
        buf.push(if col == 0 { d.left } else { d.middle });
        buf.extend(std::iter::repeat_n(d.fill, width + 2 * CELL_PADDING));
    }
    buf.push(d.right);
    buf.push('\n');
}

/// Characters between the outer left and right borders.
#[inline]
fn inner_width(widths: &[usize]) -> usize {
    widths.iter().sum::<usize>()
        + COLUMN_SEPARATOR_WIDTH * widths.len().saturating_sub(1)
        + 2 * CELL_PADDING
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
