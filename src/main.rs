fn main() {
    if let Err(e) = ascii_data::cli::run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
