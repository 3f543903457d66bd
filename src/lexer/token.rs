use crate::grammar::terminal::*;

/// Returns the terminal for a keyword, or None if the word is an
/// identifier
pub fn keyword(word: &str) -> Option<usize> {
    let kind = match word {
        "int" => INT,
        "float" => FLOAT,
        "char" => CHAR,
        "double" => DOUBLE,
        "if" => IF,
        "else" => ELSE,
        "do" => DO,
        "while" => WHILE,
        "for" => FOR,
        "switch" => SWITCH,
        "case" => CASE,
        "default" => DEFAULT,
        "break" => BREAK,
        _ => return None,
    };

    Some(kind)
}

/// Returns the terminal for a two-character operator
pub fn double_operator(first: char, second: char) -> Option<usize> {
    let kind = match (first, second) {
        ('+', '+') => INC,
        ('-', '-') => DEC,
        ('+', '=') => ADD_ASSIGN,
        ('-', '=') => SUB_ASSIGN,
        ('=', '=') => EQ,
        ('!', '=') => NEQ,
        ('<', '=') => LE,
        ('>', '=') => GE,
        ('&', '&') => AND,
        ('|', '|') => OR,
        _ => return None,
    };

    Some(kind)
}

/// Returns the terminal for a single-character operator or punctuator
pub fn single_operator(c: char) -> Option<usize> {
    let kind = match c {
        '<' => LT,
        '>' => GT,
        '+' => PLUS,
        '-' => MINUS,
        '*' => STAR,
        '/' => SLASH,
        '%' => PERCENT,
        ';' => SEMICOLON,
        ',' => COMMA,
        '=' => ASSIGN,
        '[' => LBRACKET,
        ']' => RBRACKET,
        '(' => LPAREN,
        ')' => RPAREN,
        '{' => LBRACE,
        '}' => RBRACE,
        ':' => COLON,
        '!' => NOT,
        _ => return None,
    };

    Some(kind)
}
