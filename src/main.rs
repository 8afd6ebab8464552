use clap::Parser;
use columnize::cli::{failure_status, Cli};
use std::io;

fn main() {
    // Initialize the logger
    pretty_env_logger::init();

    if let Err(report) = Cli::parse().run() {
        std::process::exit(failure_status(&report, io::stderr()));
    }
}
