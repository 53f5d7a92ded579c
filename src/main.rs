//! Binary entrypoint for the NeuraChat terminal client.

use std::process::ExitCode;

use neurachat::start_neurachat;

/// Load the saved conversation and chat on stdin/stdout.
fn main() -> ExitCode {
    start_neurachat::run()
}
