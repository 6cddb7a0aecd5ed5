//! Entry point for the opportunity map command-line interface.
#![forbid(unsafe_code)]

fn main() {
    oppmap_cli::init_logging();
    if let Err(err) = oppmap_cli::run() {
        eprintln!("oppmap: {err}");
        std::process::exit(1);
    }
}
