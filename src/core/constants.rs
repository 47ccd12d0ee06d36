//! A collection of constants.

/// Default width of the y-axis tick labels.
pub const DEFAULT_TICK_WIDTH: usize = 8;
/// Default decimal pattern used for tick labels.
///
/// 14.832 becomes 14.83
pub const DEFAULT_TICK_FORMAT: &str = "###0.00";
/// The axis column between the tick labels and the plotted line
pub const AXIS_GUTTER: usize = 1;

/// Text shown in place of the body of a table without rows
pub const EMPTY_TABLE_MESSAGE: &str = "(empty)";
/// One space on each side of every cell
pub const CELL_PADDING: usize = 1;
/// Vertical border plus the padding on both sides of it
pub const COLUMN_SEPARATOR_WIDTH: usize = 2 * CELL_PADDING + 1;

// Graph glyphs
pub const AXIS_TICK: char = '┤';
pub const AXIS_ORIGIN: char = '┼';
pub const LINE_HORIZONTAL: char = '─';
pub const LINE_VERTICAL: char = '│';
/// Corner where the line leaves a row heading down.
pub const LINE_DOWN_FROM: char = '╮';
/// Corner where a falling line arrives.
pub const LINE_DOWN_TO: char = '╰';
/// Corner where the line leaves a row heading up.
pub const LINE_UP_FROM: char = '╯';
/// Corner where a rising line arrives.
pub const LINE_UP_TO: char = '╭';
