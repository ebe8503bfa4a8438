use favgrab_core::logging;

mod cli;
mod interrupt;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the
    // state dir is unwritable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    interrupt::install();

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("favgrab error: {:#}", err);
        std::process::exit(1);
    }
}
