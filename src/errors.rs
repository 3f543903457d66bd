use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Clone)]
/// The location and text of the token at which a syntax error was detected
pub struct SyntaxError {
    pub line: usize,
    pub text: String,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Error {
    StackOverflow(usize),
    Syntax(SyntaxError),
    UnrecoverableSyntax(SyntaxError),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::StackOverflow(n) => {
                write!(f, "parser stack exhausted (maximum depth {})", n)
            }
            Error::Syntax(e) => {
                write!(f, "Syntax error at line {}, token : '{}'", e.line, e.text)
            }
            Error::UnrecoverableSyntax(e) => write!(
                f,
                "unrecoverable syntax error at line {}, token : '{}'",
                e.line, e.text
            ),
        }
    }
}
