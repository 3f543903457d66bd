use super::table::END_OF_INPUT;
use crate::position::Position;
use std::collections::VecDeque;

#[derive(Debug, PartialEq, Eq, Clone)]
/// A token delivered to the parser: its terminal number, the text it was
/// read from, and where that text starts
pub struct Token {
    pub kind: usize,
    pub text: String,
    pub position: Position,
}

impl Token {
    /// Creates a new token
    pub fn new(kind: usize, text: &str, position: Position) -> Token {
        Token {
            kind,
            text: text.to_string(),
            position,
        }
    }

    /// Creates an end-of-input token at the given position
    pub fn end_of_input(position: Position) -> Token {
        Token::new(END_OF_INPUT, "", position)
    }

    /// Returns true if this is the end-of-input token
    pub fn is_end_of_input(&self) -> bool {
        self.kind == END_OF_INPUT
    }
}

/// A pull-based producer of tokens. Once input is exhausted, every call
/// must return an end-of-input token.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

impl<S: TokenSource + ?Sized> TokenSource for &mut S {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}

/// A token source over a prepared sequence of tokens
pub struct TokenStream {
    tokens: VecDeque<Token>,
    end: Position,
}

impl TokenStream {
    /// Returns a new stream yielding tokens in order, followed by end of
    /// input on the line of the last token
    pub fn new(tokens: Vec<Token>) -> TokenStream {
        let end = tokens
            .last()
            .map(|t| Position::at(t.position.line, t.position.position + t.text.chars().count()))
            .unwrap_or_default();

        TokenStream {
            tokens: VecDeque::from(tokens),
            end,
        }
    }

    /// Returns the number of tokens not yet delivered
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        self.tokens
            .pop_front()
            .unwrap_or_else(|| Token::end_of_input(self.end))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_stream() {
        let mut s = TokenStream::new(vec![
            Token::new(3, "x", Position::at(1, 1)),
            Token::new(4, ";", Position::at(2, 5)),
        ]);

        assert_eq!(s.remaining(), 2);
        assert_eq!(s.next_token().text, "x");
        assert_eq!(s.next_token().text, ";");
        assert_eq!(s.remaining(), 0);

        for _ in 0..3 {
            assert_eq!(s.next_token(), Token::end_of_input(Position::at(2, 6)));
        }
    }

    #[test]
    fn test_empty_stream() {
        let mut s = TokenStream::new(Vec::new());
        assert!(s.next_token().is_end_of_input());
        assert!(s.next_token().is_end_of_input());
    }

    #[test]
    fn test_end_counts_characters() {
        let mut s = TokenStream::new(vec![Token::new(2, "é→", Position::at(3, 4))]);

        s.next_token();
        assert_eq!(s.next_token(), Token::end_of_input(Position::at(3, 6)));
    }
}
