mod cli;

use cli::commands::Command;
use cli::Explore;
use structopt::StructOpt;

fn main() {
    env_logger::init();
    start_instrumentation();

    Explore::from_args().execute();

    finish_instrumentation();
}

#[cfg(feature = "instrumentation")]
fn start_instrumentation() {
    if let Err(error) = explore::instrumentation::init_tracing() {
        eprintln!("failed to install span timing: {}", error);
    }
}

#[cfg(not(feature = "instrumentation"))]
fn start_instrumentation() {}

#[cfg(feature = "instrumentation")]
fn finish_instrumentation() {
    explore::instrumentation::print_timing_statistics();
}

#[cfg(not(feature = "instrumentation"))]
fn finish_instrumentation() {}
