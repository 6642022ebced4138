mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, convert};
use ipv4mix_common::config::Config;
use terminal::logging;

fn main() -> ExitCode {
    let commands = match CommandLine::parse_args() {
        Ok(commands) => commands,
        Err(usage) => {
            // usage problems are not reported through the exit status
            let _ = usage.print();
            return ExitCode::SUCCESS;
        }
    };

    let cfg = Config {
        quiet: commands.quiet,
        no_color: commands.no_color,
    };
    logging::init(&cfg);

    match convert::convert(&commands.address) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logging::report(&e);
            ExitCode::FAILURE
        }
    }
}
