use crate::parsers::config::{ParserConfig, DEFAULT_INITIAL_DEPTH, DEFAULT_MAX_DEPTH};
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Checks the syntax of programs in a C-like teaching language
pub struct Options {
    /// Program to check. Standard input is read if omitted.
    pub file: Option<String>,

    /// Number of entries the parser stack may grow to
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Number of entries the parser stack starts with
    #[arg(long, default_value_t = DEFAULT_INITIAL_DEPTH)]
    pub initial_depth: usize,

    /// Log more detail. Repeat for debug and trace output.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Options {
    /// Returns the parser configuration selected by the options
    pub fn config(&self) -> ParserConfig {
        ParserConfig {
            initial_depth: self.initial_depth,
            max_depth: self.max_depth,
        }
    }

    /// Returns the log level selected by the verbose flag
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand)]
/// Commands for the ccheck tool
pub enum Commands {
    /// Prints the tokens of the program
    Tokens,

    /// Prints information about the parse table
    Info {
        #[arg(short, long)]
        symbols: bool,
    },
}
