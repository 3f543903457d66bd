/// Terminal number of the end-of-input marker
pub const END_OF_INPUT: usize = 0;

/// Terminal number of the special error terminal shifted during recovery
pub const ERROR_TERMINAL: usize = 1;

/// Terminal number given to input the lexer does not recognize
pub const INVALID_TOKEN: usize = 2;

#[derive(Debug, Eq, PartialEq, Clone, Copy)]
/// A parser action for a state and a terminal
pub enum Action {
    Shift(usize),
    Reduce(usize),
    Accept,
    Error,
}

#[derive(Debug, Eq, PartialEq, Clone, Copy)]
/// A grammar rule, as seen by the parser: the nonterminal it produces, and
/// the number of symbols on its right-hand side
pub struct Rule {
    pub lhs: usize,
    pub len: usize,
}

/// Trait which must be satisfied by a parse table used by the LALR driver.
///
/// Terminals are numbered from 0 and nonterminals follow them, starting at
/// `num_terminals()`. Terminals 0, 1 and 2 are reserved for end of input,
/// the error terminal and the invalid token.
pub trait PTable {
    /// Returns the state which accepts the input when entered
    fn final_state(&self) -> usize;

    /// Returns the number of terminals
    fn num_terminals(&self) -> usize;

    /// Returns false if the state's action does not depend on the
    /// lookahead, so none needs to be read
    fn needs_lookahead(&self, state: usize) -> bool;

    /// Returns the table entry for the state and terminal, or None if the
    /// table has no entry for them
    fn action(&self, state: usize, terminal: usize) -> Option<Action>;

    /// Returns the rule to reduce by when `action` has no entry
    fn default_reduction(&self, state: usize) -> Option<usize>;

    /// Returns the state to enter after reducing to `nonterminal` with
    /// `state` exposed at the top of the stack. Panics if the nonterminal
    /// is not in the table.
    fn goto(&self, state: usize, nonterminal: usize) -> usize;

    /// Returns the rule with the given number. Panics if there is no such
    /// rule.
    fn rule(&self, rule: usize) -> Rule;

    /// Returns a printable name for a terminal or nonterminal
    fn symbol_name(&self, symbol: usize) -> &str;

    /// Returns the action for the state on the lookahead terminal,
    /// falling back to the default reduction
    fn decide(&self, state: usize, terminal: usize) -> Action {
        match self.action(state, terminal) {
            Some(action) => action,
            None => self.default_action(state),
        }
    }

    /// Returns the action taken in the state regardless of lookahead
    fn default_action(&self, state: usize) -> Action {
        match self.default_reduction(state) {
            Some(rule) => Action::Reduce(rule),
            None => Action::Error,
        }
    }
}
