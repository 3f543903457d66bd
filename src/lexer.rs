mod token;
use crate::grammar::terminal::{ID, INVALID, NUM};
use crate::parsers::source::{Token, TokenSource};
use crate::position::Position;
use log::trace;

/// A lexer for the teaching language
pub struct Lexer {
    input: Vec<char>,
    cursor: usize,
    position: Position,
}

impl Lexer {
    /// Returns a new lexer for the given input string
    pub fn new(input: &str) -> Lexer {
        Lexer {
            input: input.chars().collect(),
            cursor: 0,
            position: Position::new(),
        }
    }

    /// Returns all the remaining tokens, not including end of input
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            if token.is_end_of_input() {
                return tokens;
            }
            tokens.push(token);
        }
    }

    /// Reads and discards a comment, returning true if there was one. A
    /// block comment with no end runs through to end of input.
    fn discard_comment(&mut self) -> bool {
        if self.lookahead() != Some('/') {
            return false;
        }

        match self.peek(1) {
            Some('/') => {
                while let Some(lookahead) = self.lookahead() {
                    if lookahead == '\n' {
                        break;
                    }
                    self.read();
                }
            }
            Some('*') => {
                self.read();
                self.read();

                let mut previous = None;
                while self.lookahead().is_some() {
                    let c = self.read();
                    if previous == Some('*') && c == '/' {
                        break;
                    }
                    previous = Some(c);
                }
            }
            _ => {
                return false;
            }
        }

        true
    }

    /// Reads and discards comments and whitespace characters, including
    /// newlines
    fn discard_comments_and_whitespace(&mut self) {
        self.discard_whitespace();
        while self.discard_comment() {
            self.discard_whitespace();
        }
    }

    /// Reads and discards any whitespace characters
    fn discard_whitespace(&mut self) {
        while let Some(lookahead) = self.lookahead() {
            if !lookahead.is_whitespace() {
                break;
            }
            self.read();
        }
    }

    /// Returns the lookahead character
    fn lookahead(&self) -> Option<char> {
        self.peek(0)
    }

    /// Returns the character n places beyond the lookahead character
    fn peek(&self, n: usize) -> Option<char> {
        self.input.get(self.cursor + n).copied()
    }

    /// Lexes a keyword or an identifier, which is a letter or underscore
    /// followed by any number of letters, digits and underscores
    fn lex_word(&mut self, start: Position) -> Token {
        let mut word = String::new();

        while let Some(lookahead) = self.lookahead() {
            if !(lookahead.is_ascii_alphanumeric() || lookahead == '_') {
                break;
            }
            word.push(self.read());
        }

        Token::new(token::keyword(&word).unwrap_or(ID), &word, start)
    }

    /// Lexes a number, which is a sequence of digits optionally followed by
    /// a decimal point and more digits
    fn lex_number(&mut self, start: Position) -> Token {
        let mut number = String::new();

        self.read_digits(&mut number);
        if self.lookahead() == Some('.') {
            number.push(self.read());
            self.read_digits(&mut number);
        }

        Token::new(NUM, &number, start)
    }

    /// Lexes an operator or a punctuator. Any other character is returned
    /// as an invalid token.
    fn lex_operator(&mut self, start: Position) -> Token {
        let first = self.read();

        if let Some(second) = self.lookahead() {
            if let Some(kind) = token::double_operator(first, second) {
                self.read();
                return Token::new(kind, &format!("{}{}", first, second), start);
            }
        }

        let kind = token::single_operator(first).unwrap_or(INVALID);
        Token::new(kind, &first.to_string(), start)
    }

    /// Reads any digits into s
    fn read_digits(&mut self, s: &mut String) {
        while let Some(lookahead) = self.lookahead() {
            if !lookahead.is_ascii_digit() {
                break;
            }
            s.push(self.read());
        }
    }

    /// Reads and returns the next input character without checking if we're
    /// at end of input. This will panic if end of input is reached, so the
    /// caller should ensure the lookahead is valid.
    fn read(&mut self) -> char {
        let c = self.input[self.cursor];
        self.position.advance(c);
        self.cursor += 1;

        c
    }
}

impl TokenSource for Lexer {
    /// Returns the next lexical token, or end of input once the input is
    /// exhausted
    fn next_token(&mut self) -> Token {
        self.discard_comments_and_whitespace();

        let start = self.position;
        let Some(lookahead) = self.lookahead() else {
            return Token::end_of_input(start);
        };

        let token = if lookahead.is_ascii_alphabetic() || lookahead == '_' {
            self.lex_word(start)
        } else if lookahead.is_ascii_digit() {
            self.lex_number(start)
        } else {
            self.lex_operator(start)
        };

        if token.kind == INVALID {
            trace!(
                "Invalid character '{}' at line {}, position {}",
                token.text,
                start.line,
                start.position
            );
        }

        token
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::grammar::terminal::*;

    /// Helper function to lex an entire input and return its token kinds
    fn kinds(input: &str) -> Vec<usize> {
        Lexer::new(input).tokenize().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_declaration() {
        let mut lex = Lexer::new("int a, b;");

        assert_eq!(lex.next_token(), Token::new(INT, "int", Position::at(1, 1)));
        assert_eq!(lex.next_token(), Token::new(ID, "a", Position::at(1, 5)));
        assert_eq!(lex.next_token(), Token::new(COMMA, ",", Position::at(1, 6)));
        assert_eq!(lex.next_token(), Token::new(ID, "b", Position::at(1, 8)));
        assert_eq!(lex.next_token(), Token::new(SEMICOLON, ";", Position::at(1, 9)));
        assert_eq!(lex.next_token(), Token::end_of_input(Position::at(1, 10)));

        // Call next again to verify we still get end of input
        assert_eq!(lex.next_token(), Token::end_of_input(Position::at(1, 10)));
    }

    #[test]
    fn test_keywords() {
        assert_eq!(
            kinds("int float char double if else do while for switch case default break"),
            vec![INT, FLOAT, CHAR, DOUBLE, IF, ELSE, DO, WHILE, FOR, SWITCH, CASE, DEFAULT, BREAK]
        );
        assert_eq!(kinds("int integer iff If _if"), vec![INT, ID, ID, ID, ID]);
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds("++ -- += -= == != <= >= && || < >"),
            vec![INC, DEC, ADD_ASSIGN, SUB_ASSIGN, EQ, NEQ, LE, GE, AND, OR, LT, GT]
        );
        assert_eq!(
            kinds("+ - * / % ; , = [ ] ( ) { } : !"),
            vec![
                PLUS, MINUS, STAR, SLASH, PERCENT, SEMICOLON, COMMA, ASSIGN, LBRACKET, RBRACKET,
                LPAREN, RPAREN, LBRACE, RBRACE, COLON, NOT
            ]
        );

        let tokens = Lexer::new("a+++b").tokenize();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "++", "+", "b"]);
        assert_eq!(kinds("a+++b"), vec![ID, INC, PLUS, ID]);
    }

    #[test]
    fn test_numbers() {
        let tokens = Lexer::new("10 3.14 7. x1 _y 1.2.3").tokenize();
        let got: Vec<(usize, &str)> = tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();

        assert_eq!(
            got,
            vec![
                (NUM, "10"),
                (NUM, "3.14"),
                (NUM, "7."),
                (ID, "x1"),
                (ID, "_y"),
                (NUM, "1.2"),
                (INVALID, "."),
                (NUM, "3"),
            ]
        );
    }

    #[test]
    fn test_comments() {
        let mut lex = Lexer::new("// c\nx /* a\n b */ y /*/ z */ w // end");

        assert_eq!(lex.next_token(), Token::new(ID, "x", Position::at(2, 1)));
        assert_eq!(lex.next_token(), Token::new(ID, "y", Position::at(3, 7)));
        assert_eq!(lex.next_token(), Token::new(ID, "w", Position::at(3, 18)));
        assert_eq!(lex.next_token(), Token::end_of_input(Position::at(3, 26)));
    }

    #[test]
    fn test_unterminated_comment() {
        assert_eq!(kinds("a /* b ;\n c"), vec![ID]);
        assert_eq!(kinds("a / b"), vec![ID, SLASH, ID]);
    }

    #[test]
    fn test_invalid_characters() {
        let tokens = Lexer::new("a $ b & c").tokenize();
        let got: Vec<(usize, &str)> = tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();

        assert_eq!(
            got,
            vec![(ID, "a"), (INVALID, "$"), (ID, "b"), (INVALID, "&"), (ID, "c")]
        );
    }

    #[test]
    fn test_lines() {
        let mut lex = Lexer::new("int a;\n\nint b\n");
        let tokens = lex.tokenize();

        assert_eq!(tokens[3], Token::new(INT, "int", Position::at(3, 1)));
        assert_eq!(tokens[4], Token::new(ID, "b", Position::at(3, 5)));
        assert_eq!(lex.next_token(), Token::end_of_input(Position::at(4, 1)));
    }

    #[test]
    fn test_empty() {
        let mut lex = Lexer::new(" \n\t ");
        assert!(lex.tokenize().is_empty());
        assert_eq!(lex.next_token(), Token::end_of_input(Position::at(2, 3)));
    }
}
