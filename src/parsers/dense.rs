use super::table::{Action, PTable, Rule};

/// An uncompressed parse table, with one row of actions and one row of
/// gotos per state. Built in code for small grammars.
pub struct DenseTable {
    actions: Vec<Vec<Option<Action>>>,
    defaults: Vec<Option<usize>>,
    gotos: Vec<Vec<Option<usize>>>,
    rules: Vec<Rule>,
    symbols: Vec<String>,
    num_terminals: usize,
    final_state: usize,
}

impl DenseTable {
    /// Creates a table with the given number of states and no entries. The
    /// first num_terminals symbols are terminals, and the rest are
    /// nonterminals.
    pub fn new(
        num_states: usize,
        symbols: &[&str],
        num_terminals: usize,
        final_state: usize,
    ) -> DenseTable {
        let num_non_terminals = symbols.len().saturating_sub(num_terminals);

        DenseTable {
            actions: vec![vec![None; num_terminals]; num_states],
            defaults: vec![None; num_states],
            gotos: vec![vec![None; num_non_terminals]; num_states],
            rules: Vec::new(),
            symbols: symbols.iter().map(|s| s.to_string()).collect(),
            num_terminals,
            final_state,
        }
    }

    /// Appends a rule. Rules are numbered in the order they are added.
    pub fn add_rule(mut self, lhs: usize, len: usize) -> DenseTable {
        self.rules.push(Rule { lhs, len });
        self
    }

    /// Sets the action for a state and terminal
    pub fn set(mut self, state: usize, terminal: usize, action: Action) -> DenseTable {
        self.actions[state][terminal] = Some(action);
        self
    }

    /// Shifts terminal in state from, entering state to
    pub fn shift(self, from: usize, terminal: usize, to: usize) -> DenseTable {
        self.set(from, terminal, Action::Shift(to))
    }

    /// Reduces by rule in state on terminal
    pub fn reduce(self, state: usize, terminal: usize, rule: usize) -> DenseTable {
        self.set(state, terminal, Action::Reduce(rule))
    }

    /// Accepts the input in state on terminal
    pub fn accept(self, state: usize, terminal: usize) -> DenseTable {
        self.set(state, terminal, Action::Accept)
    }

    /// Reduces by rule in state on any terminal without an entry
    pub fn default_reduce(mut self, state: usize, rule: usize) -> DenseTable {
        self.defaults[state] = Some(rule);
        self
    }

    /// Enters state to after reducing to nonterminal with state from exposed
    pub fn add_goto(mut self, from: usize, nonterminal: usize, to: usize) -> DenseTable {
        self.gotos[from][nonterminal - self.num_terminals] = Some(to);
        self
    }
}

impl PTable for DenseTable {
    fn final_state(&self) -> usize {
        self.final_state
    }

    fn num_terminals(&self) -> usize {
        self.num_terminals
    }

    fn needs_lookahead(&self, state: usize) -> bool {
        self.actions[state].iter().any(|a| a.is_some())
    }

    fn action(&self, state: usize, terminal: usize) -> Option<Action> {
        self.actions[state].get(terminal).copied().flatten()
    }

    fn default_reduction(&self, state: usize) -> Option<usize> {
        self.defaults[state]
    }

    fn goto(&self, state: usize, nonterminal: usize) -> usize {
        match self.gotos[state][nonterminal - self.num_terminals] {
            Some(next) => next,
            None => {
                // A missing GOTO means the table was built incorrectly
                panic!(
                    "no GOTO for state {} on '{}'",
                    state,
                    self.symbol_name(nonterminal)
                );
            }
        }
    }

    fn rule(&self, rule: usize) -> Rule {
        self.rules[rule]
    }

    fn symbol_name(&self, symbol: usize) -> &str {
        self.symbols.get(symbol).map(|s| s.as_str()).unwrap_or("?")
    }
}
