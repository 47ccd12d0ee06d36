//! Aggregates the non-rendering layer: errors, config, formats, loaders.

pub mod bounds;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod format;

// re-export frequently-used items for convenience
pub use bounds::min_and_max;
pub use config::GraphConfig;
pub use constants::{DEFAULT_TICK_FORMAT, DEFAULT_TICK_WIDTH, EMPTY_TABLE_MESSAGE};
pub use data::{ParseInputError, TableData};
pub use error::{AppError, InvalidInputError};
pub use format::TickFormat;
