use ccheck::cli::args::{Commands, Options};
use ccheck::cli::{check, info, tokens};
use ccheck::grammar;
use clap::Parser;
use std::process::ExitCode;

fn main() -> std::result::Result<ExitCode, Box<dyn std::error::Error>> {
    let options = Options::parse();

    env_logger::Builder::new()
        .filter_level(options.log_level())
        .parse_default_env()
        .init();

    if let Some(Commands::Info { symbols }) = options.command {
        info::output(grammar::table(), symbols);
        return Ok(ExitCode::SUCCESS);
    }

    let input = ccheck::cli::read_input(options.file.as_deref())?;

    match options.command {
        Some(Commands::Tokens) => {
            tokens::output(&input);
            Ok(ExitCode::SUCCESS)
        }
        _ => Ok(ExitCode::from(check::output(&input, options.config()))),
    }
}
