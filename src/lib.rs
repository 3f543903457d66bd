pub mod cli;
pub mod errors;
pub mod grammar;
pub mod lexer;
pub mod parsers;
pub mod position;

use errors::Result;
use lexer::Lexer;
use parsers::{ErrorSink, Parser, ParserConfig};

/// Checks the syntax of a program in the teaching language, reporting each
/// syntax error to the sink. Succeeds only if the program has no errors.
pub fn check<R: ErrorSink>(input: &str, config: ParserConfig, sink: R) -> Result<()> {
    Parser::new(grammar::table(), Lexer::new(input), sink)
        .with_config(config)
        .parse()
}
