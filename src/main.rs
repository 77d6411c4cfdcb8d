use std::env;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use passpanel::{cli, exits, tui};

fn main() -> Result<()> {
    exits::reset_terminal();
    exits::install_handlers();
    // Keep generated passwords out of core dumps.
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };

    // RUST_LOG controls verbosity; default stays quiet so the panel is
    // not garbled by stderr output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => tui::run(),
        _ => cli::run(&args),
    }
}
