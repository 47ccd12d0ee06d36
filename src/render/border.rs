//! Pluggable border glyphs for [`Table`](crate::Table).
//!
//! The table decides *where* a border goes and which context flags apply;
//! a [`BorderStyle`] only maps those flags to a glyph.

use std::fmt;

/// Glyph selection for every border position of a table.
pub trait BorderStyle: fmt::Debug + Send + Sync {
    fn top_left_corner(&self) -> char;
    fn top_right_corner(&self) -> char;
    fn bottom_left_corner(&self) -> char;
    fn bottom_right_corner(&self) -> char;

    /// Column junction on the top edge.
    fn top_edge_divider(&self) -> char;
    /// Column junction on the bottom edge.
    fn bottom_edge_divider(&self) -> char;

    /// Start of a horizontal divider; `under_headers` marks the one
    /// directly below the header row.
    fn left_edge_divider(&self, under_headers: bool) -> char;
    fn right_edge_divider(&self, under_headers: bool) -> char;

    /// `edge` is true for the top and bottom borders.
    fn horizontal_fill(&self, edge: bool, under_headers: bool) -> char;
    /// `edge` is true for the outer left and right borders.
    fn vertical_fill(&self, edge: bool) -> char;

    /// Junction of a horizontal divider and a column border.  `empty` is
    /// set when the table has no rows, so nothing continues below.
    fn cross(&self, under_headers: bool, empty: bool) -> char;
}

/// Double outer lines, single inner lines.  The default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf8Border;

impl BorderStyle for Utf8Border {
    fn top_left_corner(&self) -> char {
        '╔'
    }
    fn top_right_corner(&self) -> char {
        '╗'
    }
    fn bottom_left_corner(&self) -> char {
        '╚'
    }
    fn bottom_right_corner(&self) -> char {
        '╝'
    }
    fn top_edge_divider(&self) -> char {
        '╤'
    }
    fn bottom_edge_divider(&self) -> char {
        '╧'
    }
    fn left_edge_divider(&self, under_headers: bool) -> char {
        if under_headers { '╠' } else { '╟' }
    }
    fn right_edge_divider(&self, under_headers: bool) -> char {
        if under_headers { '╣' } else { '╢' }
    }
    fn horizontal_fill(&self, edge: bool, under_headers: bool) -> char {
        if edge || under_headers { '═' } else { '─' }
    }
    fn vertical_fill(&self, edge: bool) -> char {
        if edge { '║' } else { '│' }
    }
    fn cross(&self, under_headers: bool, empty: bool) -> char {
        match (under_headers, empty) {
            (true, true) => '╧',
            (true, false) => '╪',
            (false, _) => '┼',
        }
    }
}

/// Plain 7-bit ASCII.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AsciiBorder;

impl BorderStyle for AsciiBorder {
    fn top_left_corner(&self) -> char {
        '+'
    }
    fn top_right_corner(&self) -> char {
        '+'
    }
    fn bottom_left_corner(&self) -> char {
        '+'
    }
    fn bottom_right_corner(&self) -> char {
        '+'
    }
    fn top_edge_divider(&self) -> char {
        '+'
    }
    fn bottom_edge_divider(&self) -> char {
        '+'
    }
    fn left_edge_divider(&self, _under_headers: bool) -> char {
        '|'
    }
    fn right_edge_divider(&self, _under_headers: bool) -> char {
        '|'
    }
    fn horizontal_fill(&self, edge: bool, under_headers: bool) -> char {
        if edge || under_headers { '=' } else { '-' }
    }
    fn vertical_fill(&self, _edge: bool) -> char {
        '|'
    }
    fn cross(&self, _under_headers: bool, empty: bool) -> char {
        if empty { '=' } else { '|' }
    }
}
