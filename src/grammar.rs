//! The grammar of the teaching language: a C-like language with
//! declarations, arrays, `if`/`else`, `do`/`while`, `while`, `for` and
//! `switch` statements, blocks and expressions.
//!
//! The grammar is compiled offline into an LALR(1) table, which is
//! embedded here along with the numbers of its terminals.

mod tables;
use crate::parsers::compressed::CompressedTable;

/// Terminal numbers of the teaching language, as produced by the lexer
pub mod terminal {
    pub use crate::parsers::table::{
        END_OF_INPUT, ERROR_TERMINAL as ERROR, INVALID_TOKEN as INVALID,
    };

    pub const ID: usize = 3;
    pub const NUM: usize = 4;
    pub const INT: usize = 5;
    pub const FLOAT: usize = 6;
    pub const CHAR: usize = 7;
    pub const DOUBLE: usize = 8;
    pub const IF: usize = 9;
    pub const ELSE: usize = 10;
    pub const DO: usize = 11;
    pub const WHILE: usize = 12;
    pub const FOR: usize = 13;
    pub const SWITCH: usize = 14;
    pub const CASE: usize = 15;
    pub const DEFAULT: usize = 16;
    pub const BREAK: usize = 17;
    pub const INC: usize = 18;
    pub const DEC: usize = 19;
    pub const ADD_ASSIGN: usize = 20;
    pub const SUB_ASSIGN: usize = 21;
    pub const EQ: usize = 22;
    pub const NEQ: usize = 23;
    pub const LE: usize = 24;
    pub const GE: usize = 25;
    pub const LT: usize = 26;
    pub const GT: usize = 27;
    pub const AND: usize = 28;
    pub const OR: usize = 29;
    pub const PLUS: usize = 30;
    pub const MINUS: usize = 31;
    pub const STAR: usize = 32;
    pub const SLASH: usize = 33;
    pub const PERCENT: usize = 34;

    /// Precedence marker for unary minus. The lexer never produces it.
    pub const UMINUS: usize = 35;

    pub const SEMICOLON: usize = 36;
    pub const COMMA: usize = 37;
    pub const ASSIGN: usize = 38;
    pub const LBRACKET: usize = 39;
    pub const RBRACKET: usize = 40;
    pub const LPAREN: usize = 41;
    pub const RPAREN: usize = 42;
    pub const LBRACE: usize = 43;
    pub const RBRACE: usize = 44;
    pub const COLON: usize = 45;
    pub const NOT: usize = 46;
}

/// Returns the parse table for the teaching language
pub fn table() -> &'static CompressedTable {
    &tables::TABLE
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parsers::table::PTable;

    #[test]
    fn test_terminal_names() {
        let t = table();

        assert_eq!(t.symbol_name(terminal::END_OF_INPUT), "end of file");
        assert_eq!(t.symbol_name(terminal::INVALID), "invalid token");
        assert_eq!(t.symbol_name(terminal::ID), "ID");
        assert_eq!(t.symbol_name(terminal::SUB_ASSIGN), "SUBASSIGN");
        assert_eq!(t.symbol_name(terminal::UMINUS), "UMINUS");
        assert_eq!(t.symbol_name(terminal::SEMICOLON), "';'");
        assert_eq!(t.symbol_name(terminal::NOT), "'!'");
        assert_eq!(t.num_terminals(), terminal::NOT + 1);
    }
}
