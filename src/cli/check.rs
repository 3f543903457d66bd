use crate::errors::Error;
use crate::parsers::{ParserConfig, Stderr};
use log::debug;

/// Checks the syntax of the program, writing each syntax error to standard
/// error and a confirmation to standard output if there were none. Returns
/// the exit status for the tool.
pub fn output(input: &str, config: ParserConfig) -> u8 {
    match crate::check(input, config, Stderr) {
        Ok(()) => {
            println!("Syntax valid.");
            0
        }
        Err(e) => {
            debug!("Check failed: {}", e);
            exit_status(&e)
        }
    }
}

/// Returns the exit status for a failed check
pub fn exit_status(e: &Error) -> u8 {
    match e {
        Error::StackOverflow(_) => 2,
        Error::Syntax(_) | Error::UnrecoverableSyntax(_) => 1,
    }
}
