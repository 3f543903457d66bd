use super::config::ParserConfig;
use super::report::ErrorSink;
use super::semantics::Semantics;
use super::source::{Token, TokenSource};
use super::stack::Stack;
use super::table::{Action, PTable, ERROR_TERMINAL};
use crate::errors::{Error, Result, SyntaxError};
use log::{debug, trace};

/// Number of tokens which must be shifted after a syntax error before
/// further errors are reported
const RECOVERY_SHIFTS: usize = 3;

/// An LALR(1) parsing automaton driven by a parse table.
///
/// The parser pulls tokens from its source one at a time, and reports
/// syntax errors to its sink as it finds them. After an error it recovers
/// by popping states until one can shift the error terminal, and discarding
/// tokens until parsing can continue.
pub struct Parser<'t, T: PTable, S: TokenSource, R: ErrorSink, V = ()> {
    table: &'t T,
    source: S,
    sink: R,
    semantics: Semantics<V>,
    config: ParserConfig,
    lookahead: Option<Token>,
    error_count: usize,
    first_error: Option<SyntaxError>,
}

impl<'t, T: PTable, S: TokenSource, R: ErrorSink> Parser<'t, T, S, R, ()> {
    /// Creates a new parser which checks syntax only
    pub fn new(table: &'t T, source: S, sink: R) -> Parser<'t, T, S, R, ()> {
        Parser::with_semantics(table, source, sink, Semantics::default())
    }
}

impl<'t, T: PTable, S: TokenSource, R: ErrorSink, V: Clone + Default> Parser<'t, T, S, R, V> {
    /// Creates a new parser which computes semantic values
    pub fn with_semantics(
        table: &'t T,
        source: S,
        sink: R,
        semantics: Semantics<V>,
    ) -> Parser<'t, T, S, R, V> {
        Parser {
            table,
            source,
            sink,
            semantics,
            config: ParserConfig::default(),
            lookahead: None,
            error_count: 0,
            first_error: None,
        }
    }

    /// Replaces the parser's configuration
    pub fn with_config(mut self, config: ParserConfig) -> Parser<'t, T, S, R, V> {
        self.config = config;
        self
    }

    /// Returns the number of syntax errors reported by the last parse
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Returns the error sink
    pub fn sink(&self) -> &R {
        &self.sink
    }

    /// Consumes the parser and returns its error sink
    pub fn into_sink(self) -> R {
        self.sink
    }

    /// Parses the input from the token source, and returns the semantic
    /// value of the program.
    ///
    /// Succeeds only if the input was accepted without any syntax errors.
    /// If it was accepted after recovering from errors, the first of those
    /// errors is returned.
    pub fn parse(&mut self) -> Result<V> {
        self.lookahead = None;
        self.error_count = 0;
        self.first_error = None;

        let mut stack: Stack<V> = Stack::new(&self.config);
        let mut recovering: usize = 0;

        trace!("Starting parse");

        loop {
            let state = stack.state();
            trace!("Entering state {}", state);

            if state == self.table.final_state() {
                return self.accept(stack);
            }

            let action = if self.table.needs_lookahead(state) {
                let terminal = self.peek().kind;
                self.table.decide(state, terminal)
            } else {
                self.table.default_action(state)
            };

            let result = match action {
                Action::Shift(next) => {
                    recovering = recovering.saturating_sub(1);
                    self.shift(&mut stack, next)
                }
                Action::Reduce(rule) => self.reduce(&mut stack, rule),
                Action::Accept => {
                    return self.accept(stack);
                }
                Action::Error => self.recover(&mut stack, &mut recovering),
            };

            if let Err(e) = result {
                if matches!(e, Error::StackOverflow(_)) {
                    self.sink.report(&e);
                }
                debug!("Aborting parse: {}", e);
                return Err(e);
            }
        }
    }

    /// Returns the lookahead token, reading it if there isn't one already
    fn peek(&mut self) -> &Token {
        let table = self.table;
        let source = &mut self.source;

        self.lookahead.get_or_insert_with(|| {
            let token = source.next_token();
            trace!(
                "Next token is {} '{}'",
                table.symbol_name(token.kind),
                token.text
            );
            token
        })
    }

    /// Shifts the lookahead token, entering state next
    fn shift(&mut self, stack: &mut Stack<V>, next: usize) -> Result<()> {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => self.source.next_token(),
        };

        trace!("Shifting {}", self.table.symbol_name(token.kind));
        stack.push(next, self.semantics.token_value(&token))
    }

    /// Reduces by the given rule, then enters the GOTO state for its
    /// left-hand side
    fn reduce(&mut self, stack: &mut Stack<V>, rule: usize) -> Result<()> {
        let r = self.table.rule(rule);
        trace!(
            "Reducing stack by rule {} to {}",
            rule,
            self.table.symbol_name(r.lhs)
        );

        let value = self.semantics.reduce(rule, stack.top_values(r.len));
        stack.pop(r.len);

        let next = self.table.goto(stack.state(), r.lhs);
        stack.push(next, value)
    }

    /// Finishes a parse which reached the accepting state
    fn accept(&mut self, stack: Stack<V>) -> Result<V> {
        trace!("Accepting with {} syntax errors", self.error_count);

        if let Some(e) = &self.first_error {
            return Err(Error::Syntax(e.clone()));
        }

        // The program's value sits just above the initial state
        Ok(stack.into_values().into_iter().nth(1).unwrap_or_default())
    }

    /// Recovers from a syntax error at the lookahead token
    fn recover(&mut self, stack: &mut Stack<V>, recovering: &mut usize) -> Result<()> {
        let token = self.peek().clone();
        let error = SyntaxError {
            line: token.position.line,
            text: token.text.clone(),
        };

        // Errors are reported only once the parser has shifted enough
        // tokens since the last one
        if *recovering == 0 {
            self.error_count += 1;
            self.sink.report(&Error::Syntax(error.clone()));
            if self.first_error.is_none() {
                self.first_error = Some(error.clone());
            }
        }

        // Recovery was just tried and failed to shift the lookahead
        if *recovering == RECOVERY_SHIFTS {
            if token.is_end_of_input() {
                return Err(Error::UnrecoverableSyntax(error));
            }

            debug!(
                "Error: discarding {} '{}'",
                self.table.symbol_name(token.kind),
                token.text
            );
            self.lookahead = None;
        }

        *recovering = RECOVERY_SHIFTS;

        loop {
            let state = stack.state();
            if let Some(Action::Shift(next)) = self.table.action(state, ERROR_TERMINAL) {
                debug!("Shifting error, entering state {}", next);
                return stack.push(next, V::default());
            }

            if !stack.pop_one() {
                return Err(Error::UnrecoverableSyntax(error));
            }
            debug!("Error: popping state {}", state);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parsers::dense::DenseTable;
    use crate::parsers::source::TokenStream;
    use crate::parsers::table::INVALID_TOKEN;
    use crate::position::Position;

    /// Returns a table for
    ///
    ///     list → ϵ | list item
    ///     item → 'x' ';' | error ';'
    ///
    /// which recovers from errors by skipping to the next ';'
    fn list_table() -> DenseTable {
        DenseTable::new(
            8,
            &["$end", "error", "invalid", "x", "';'", "y", "$accept", "list", "item"],
            6,
            2,
        )
        .add_rule(6, 0)
        .add_rule(6, 2)
        .add_rule(7, 0)
        .add_rule(7, 2)
        .add_rule(8, 2)
        .add_rule(8, 2)
        .default_reduce(0, 2)
        .add_goto(0, 7, 1)
        .shift(1, 0, 2)
        .shift(1, 1, 4)
        .shift(1, 3, 3)
        .add_goto(1, 8, 5)
        .shift(3, 4, 6)
        .shift(4, 4, 7)
        .default_reduce(5, 3)
        .default_reduce(6, 4)
        .default_reduce(7, 5)
    }

    /// Returns a table for  S → 'x', which has no error recovery
    fn single_table() -> DenseTable {
        DenseTable::new(
            4,
            &["$end", "error", "invalid", "x", "';'", "y", "$accept", "S"],
            6,
            3,
        )
        .add_rule(6, 0)
        .add_rule(6, 2)
        .add_rule(7, 1)
        .shift(0, 3, 1)
        .add_goto(0, 7, 2)
        .default_reduce(1, 2)
        .shift(2, 0, 3)
    }

    /// Returns a table for  E → E '+' 'n' | 'n'
    fn sum_table() -> DenseTable {
        DenseTable::new(
            6,
            &["$end", "error", "invalid", "n", "'+'", "$accept", "E"],
            5,
            3,
        )
        .add_rule(5, 0)
        .add_rule(5, 2)
        .add_rule(6, 3)
        .add_rule(6, 1)
        .shift(0, 3, 1)
        .add_goto(0, 6, 2)
        .default_reduce(1, 3)
        .shift(2, 0, 3)
        .shift(2, 4, 4)
        .shift(4, 3, 5)
        .default_reduce(5, 2)
    }

    /// Returns a table for  E → E '+' 'n' | 'n'  which reduces only on
    /// the terminals that can follow E
    fn explicit_sum_table() -> DenseTable {
        DenseTable::new(
            6,
            &["$end", "error", "invalid", "n", "'+'", "$accept", "E"],
            5,
            3,
        )
        .add_rule(5, 0)
        .add_rule(5, 2)
        .add_rule(6, 3)
        .add_rule(6, 1)
        .shift(0, 3, 1)
        .add_goto(0, 6, 2)
        .reduce(1, 0, 3)
        .reduce(1, 4, 3)
        .shift(2, 0, 3)
        .shift(2, 4, 4)
        .shift(4, 3, 5)
        .reduce(5, 0, 2)
        .reduce(5, 4, 2)
    }

    /// Splits input into whitespace-separated tokens
    fn tokens(input: &str) -> TokenStream {
        let mut v = Vec::new();
        for (n, line) in input.lines().enumerate() {
            for (i, word) in line.split_whitespace().enumerate() {
                let kind = match word {
                    "x" => 3,
                    ";" | "+" => 4,
                    "y" => 5,
                    _ if word.parse::<i64>().is_ok() => 3,
                    _ => INVALID_TOKEN,
                };
                v.push(Token::new(kind, word, Position::at(n + 1, i + 1)));
            }
        }
        TokenStream::new(v)
    }

    fn sink() -> Vec<Error> {
        Vec::new()
    }

    fn syntax(line: usize, text: &str) -> SyntaxError {
        SyntaxError {
            line,
            text: text.to_string(),
        }
    }

    fn number(token: &Token) -> i64 {
        token.text.parse().unwrap_or(0)
    }

    fn add(rhs: &[i64]) -> i64 {
        rhs[0] + rhs[2]
    }

    #[test]
    fn test_parse_valid() {
        let t = list_table();
        let mut errors = sink();
        let mut parser = Parser::new(&t, tokens("x ; x ;\nx ;"), &mut errors);

        assert_eq!(parser.parse(), Ok(()));
        assert_eq!(parser.error_count(), 0);

        drop(parser);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_parse_empty() {
        let t = list_table();
        let mut parser = Parser::new(&t, tokens(""), sink());

        assert_eq!(parser.parse(), Ok(()));
        assert!(parser.into_sink().is_empty());
    }

    #[test]
    fn test_discards_bad_tokens_one_at_a_time() {
        let t = list_table();
        let mut stream = tokens("y y y ; x ;");
        let mut parser = Parser::new(&t, &mut stream, sink());

        // Recovery reaches the accepting state, but the input still has
        // an error
        assert_eq!(parser.parse(), Err(Error::Syntax(syntax(1, "y"))));
        assert_eq!(parser.error_count(), 1);
        assert_eq!(parser.sink(), &vec![Error::Syntax(syntax(1, "y"))]);

        drop(parser);
        assert_eq!(stream.remaining(), 0);
    }

    #[test]
    fn test_errors_suppressed_until_three_shifts() {
        let t = list_table();
        let mut parser = Parser::new(&t, tokens("y ;\ny ;"), sink());

        assert_eq!(parser.parse(), Err(Error::Syntax(syntax(1, "y"))));
        assert_eq!(parser.error_count(), 1);
    }

    #[test]
    fn test_errors_reported_after_recovery() {
        let t = list_table();
        let mut parser = Parser::new(&t, tokens("y ; x ;\ny ;"), sink());

        assert_eq!(parser.parse(), Err(Error::Syntax(syntax(1, "y"))));
        assert_eq!(parser.error_count(), 2);
        assert_eq!(
            parser.into_sink(),
            vec![
                Error::Syntax(syntax(1, "y")),
                Error::Syntax(syntax(2, "y"))
            ]
        );
    }

    #[test]
    fn test_end_of_input_while_recovering() {
        let t = list_table();
        let mut parser = Parser::new(&t, tokens("x ; y"), sink());

        assert_eq!(
            parser.parse(),
            Err(Error::UnrecoverableSyntax(syntax(1, "")))
        );
        assert_eq!(parser.into_sink(), vec![Error::Syntax(syntax(1, "y"))]);
    }

    #[test]
    fn test_no_state_shifts_error() {
        let t = single_table();
        let mut parser = Parser::new(&t, tokens("y x"), sink());

        assert_eq!(
            parser.parse(),
            Err(Error::UnrecoverableSyntax(syntax(1, "y")))
        );
        assert_eq!(parser.error_count(), 1);

        let mut parser = Parser::new(&t, tokens("x"), sink());
        assert_eq!(parser.parse(), Ok(()));
    }

    #[test]
    fn test_semantic_values() {
        let t = sum_table();
        let semantics = Semantics::new(number).with_action(2, add);
        let mut parser = Parser::with_semantics(&t, tokens("1 + 2 + 39"), sink(), semantics);

        assert_eq!(parser.parse(), Ok(42));
    }

    #[test]
    fn test_explicit_reductions() {
        let t = explicit_sum_table();
        let semantics = Semantics::new(number).with_action(2, add);
        let mut parser = Parser::with_semantics(&t, tokens("1 + 2 + 39"), sink(), semantics);

        assert_eq!(parser.parse(), Ok(42));
        assert_eq!(parser.error_count(), 0);

        // No reduction is taken on a terminal which cannot follow E
        let mut parser = Parser::new(&t, tokens("1 2"), sink());

        assert_eq!(
            parser.parse(),
            Err(Error::UnrecoverableSyntax(syntax(1, "2")))
        );
        assert_eq!(parser.into_sink(), vec![Error::Syntax(syntax(1, "2"))]);
    }

    #[test]
    fn test_accept_action() {
        // Accept on end of input rather than by entering the final state
        let t = DenseTable::new(
            5,
            &["$end", "error", "invalid", "n", "'+'", "$accept", "E"],
            5,
            99,
        )
        .add_rule(5, 0)
        .add_rule(5, 2)
        .add_rule(6, 3)
        .add_rule(6, 1)
        .shift(0, 3, 1)
        .add_goto(0, 6, 2)
        .default_reduce(1, 3)
        .accept(2, 0)
        .shift(2, 4, 3)
        .shift(3, 3, 4)
        .default_reduce(4, 2);
        let semantics = Semantics::new(number).with_action(2, add);
        let mut parser = Parser::with_semantics(&t, tokens("10 + 5"), sink(), semantics);

        assert_eq!(parser.parse(), Ok(15));
    }

    #[test]
    fn test_stack_overflow() {
        let t = sum_table();
        let config = ParserConfig {
            initial_depth: 2,
            max_depth: 4,
        };
        let mut parser = Parser::new(&t, tokens("1 + 2"), sink()).with_config(config);

        assert_eq!(parser.parse(), Err(Error::StackOverflow(4)));
        assert_eq!(parser.into_sink(), vec![Error::StackOverflow(4)]);

        let mut parser = Parser::new(&t, tokens("1"), sink()).with_config(config);
        assert_eq!(parser.parse(), Ok(()));
    }
}
