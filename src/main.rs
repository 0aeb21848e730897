//! quickdoc CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::{Builder, Env};
use log::{LevelFilter, debug};

use quickdoc::VERSION;
use quickdoc::cli::args::QuickdocArgs;
use quickdoc::cli::commands::execute_command;

/// Overrides the verbosity flags, e.g. `QUICKDOC_LOG=quickdoc::scope=trace`.
const LOG_ENV: &str = "QUICKDOC_LOG";

fn main() {
    let args = QuickdocArgs::parse();

    // -q, default, -v, -vv and beyond
    let log_level = match args.verbosity() {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    Builder::new()
        .filter_module("quickdoc", log_level)
        .parse_env(Env::default().filter(LOG_ENV))
        .format(|buf, record| {
            writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
        })
        .init();

    debug!("quickdoc {VERSION}, command: {:?}", args.command);

    if let Err(e) = execute_command(args) {
        eprintln!("quickdoc: {e}");
        process::exit(1);
    }
}
