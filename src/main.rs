// Walks through convolution and max pooling on a fixed 4x4 image.
// Use the following command to run:
// cargo run --release

use std::{io, process::ExitCode};

use conv_pool::{demo::{run_demo, DemoConfig}, prettify::*};

fn main() -> ExitCode {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run_demo(&DemoConfig::default(), &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{BRIGHT_RED}{error}{RESET}");
            ExitCode::FAILURE
        }
    }
}
