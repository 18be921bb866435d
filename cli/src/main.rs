use std::io;
use std::process::ExitCode;

use clap::Parser;

use degrees_cli::{logging, run, Args};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    match run(&args, &mut input, &mut output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
