//! The `rolodex` binary: a thin CLI over the rolodex library.
//!
//! All the work happens in [`cli::run`]; `main` only turns an error into a
//! message on stderr and a non-zero exit code.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
