mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::AppError;

pub fn run() -> Result<(), AppError> {
    let cli = parse::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match cli.cmd {
        parse::Command::Table(a) => handlers::table(a),
        parse::Command::Graph(a) => handlers::graph(&a),
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}

/// Log to stderr so stdout carries only the rendering.
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}
