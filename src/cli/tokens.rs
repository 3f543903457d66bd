use crate::grammar;
use crate::lexer::Lexer;
use crate::parsers::{PTable, Token};

/// Outputs the tokens of a program, one per line
pub fn output(input: &str) {
    let table = grammar::table();

    for token in Lexer::new(input).tokenize() {
        println!("{}", format_token(table, &token));
    }
}

/// Formats a token as its position, symbol name and text
fn format_token<T: PTable>(table: &T, token: &Token) -> String {
    let position = format!("{}:{}", token.position.line, token.position.position);

    format!(
        "{:8} {:16} {}",
        position,
        table.symbol_name(token.kind),
        token.text
    )
}
