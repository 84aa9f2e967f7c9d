use std::process::ExitCode;

use dir_flatten::exit_code_for;
use dir_flatten::output as out;

mod app;
mod cli;
mod logging;

fn main() -> ExitCode {
    let args = cli::parse();
    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            out::print_error(&format!("Error: {e:#}"));
            ExitCode::from(exit_code_for(&e))
        }
    }
}
