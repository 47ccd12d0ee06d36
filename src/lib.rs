//! Public-facing crate root – re-exports + one-shot helpers.
//!
//! ```
//! use ascii_data::{Graph, Table};
//!
//! let table = Table::from_rows(["ID", "Name"], [["1", "Ann"], ["2", "Bo"]]).unwrap();
//! assert!(table.render().starts_with("╔════╤══════╗\n"));
//!
//! let graph = Graph::from_series([0.0, 1.0, 0.0]).unwrap();
//! assert_eq!(graph.plot(), "    1.00┤╭╮ \n    0.00┼╯╰ \n");
//! ```

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    bounds::min_and_max,
    config::GraphConfig,
    error::{AppError, InvalidInputError},
    format::TickFormat,
};

pub use render::{Alignment, AsciiBorder, BorderStyle, Graph, Table, Utf8Border};

/// Render `headers` and fully-populated `rows` with the default style.
///
/// # Errors
/// See [`Table::from_data`].
pub fn render_table<H, R, C>(
    headers: impl IntoIterator<Item = H>,
    rows: impl IntoIterator<Item = R>,
) -> Result<String, InvalidInputError>
where
    H: Into<String>,
    R: IntoIterator<Item = C>,
    C: Into<String>,
{
    Ok(Table::from_rows(headers, rows)?.render())
}

/// Plot `series` with the default config.
///
/// # Errors
/// See [`Graph::from_series`].
pub fn plot_series(series: impl Into<Vec<f64>>) -> Result<String, InvalidInputError> {
    Ok(Graph::from_series(series)?.plot())
}
