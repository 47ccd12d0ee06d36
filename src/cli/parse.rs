use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::core::constants::DEFAULT_TICK_FORMAT;

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "ascii-data",
    about = "Box-drawing tables and line graphs as plain text"
)]
pub struct Cli {
    /// More log output on stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a delimited text file as a table
    Table(TableArgs),
    /// Plot a numeric series as a line graph
    Graph(GraphArgs),
    /// Print example invocations
    Examples,
}

/// Builtin border glyph sets.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum StyleArg {
    /// Double outer / single inner box drawing
    #[default]
    Utf8,
    /// `+`, `-`, `=` and `|` only
    Ascii,
}

/// `ascii-data table …`
#[derive(Parser, Debug)]
pub struct TableArgs {
    /// Input path (use `-` for stdin); first line is the header row
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Field separator
    #[arg(short, long, default_value_t = ',')]
    pub delimiter: char,

    /// Border glyphs
    #[arg(long, value_enum, default_value_t)]
    pub style: StyleArg,

    /// Text shown for empty fields
    #[arg(long)]
    pub null_value: Option<String>,

    /// Right-align this 0-based column (repeatable)
    #[arg(long, value_name = "COLUMN")]
    pub right: Vec<usize>,
}

/// `ascii-data graph …`
#[derive(Parser, Debug)]
pub struct GraphArgs {
    /// Input path (use `-` for stdin); samples separated by commas or whitespace
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Plot height in rows (derived from the data range if omitted)
    #[arg(long)]
    pub height: Option<usize>,

    /// Tick label width (sized to the widest label if omitted)
    #[arg(long)]
    pub tick_width: Option<usize>,

    /// Decimal pattern for tick labels
    #[arg(long, default_value = DEFAULT_TICK_FORMAT)]
    pub tick_format: String,

    /// Blank columns between the axis and the line
    #[arg(long, default_value_t = 0)]
    pub offset: usize,

    /// Use the terminal height when --height is omitted
    #[arg(long)]
    pub fit: bool,
}
