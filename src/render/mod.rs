pub mod border;
pub mod graph;
pub mod table;

pub use border::{AsciiBorder, BorderStyle, Utf8Border};
pub use graph::Graph;
pub use table::{Alignment, Table};
