use super::table::{Action, PTable, Rule};

/// A parse table in the compressed layout written by the offline table
/// generator.
///
/// Each state's terminal row and each nonterminal's goto column is a window
/// into the shared `entries` array, starting at the row's base offset. Slot
/// `base + key` belongs to the row only if `check` holds `key` at the same
/// index. Rows which miss fall back to a default: the state's default
/// reduction, or the nonterminal's default goto.
#[derive(Debug)]
pub struct CompressedTable {
    pub final_state: usize,
    pub num_terminals: usize,
    /// Base value of a state whose only action is its default reduction
    pub base_default: i16,
    /// Entry value denoting an explicit error
    pub entry_error: i16,
    pub base: &'static [i16],
    pub default_reductions: &'static [u16],
    pub goto_base: &'static [i16],
    pub default_gotos: &'static [u16],
    pub entries: &'static [i16],
    pub check: &'static [i16],
    pub rules: &'static [Rule],
    pub symbols: &'static [&'static str],
}

impl CompressedTable {
    /// Returns the entry in the row starting at base for key, if the row
    /// owns that slot
    fn lookup(&self, base: i16, key: usize) -> Option<i16> {
        let i = usize::try_from(isize::from(base) + key as isize).ok()?;
        match self.check.get(i) {
            Some(&c) if usize::try_from(c).ok() == Some(key) => self.entries.get(i).copied(),
            _ => None,
        }
    }

    /// Returns the number of states
    pub fn num_states(&self) -> usize {
        self.base.len()
    }

    /// Returns the number of nonterminals
    pub fn num_non_terminals(&self) -> usize {
        self.goto_base.len()
    }

    /// Returns the number of rules, not counting the unused rule 0
    pub fn num_rules(&self) -> usize {
        self.rules.len().saturating_sub(1)
    }
}

impl PTable for CompressedTable {
    fn final_state(&self) -> usize {
        self.final_state
    }

    fn num_terminals(&self) -> usize {
        self.num_terminals
    }

    fn needs_lookahead(&self, state: usize) -> bool {
        self.base
            .get(state)
            .is_some_and(|&base| base != self.base_default)
    }

    fn action(&self, state: usize, terminal: usize) -> Option<Action> {
        let base = *self.base.get(state)?;
        if base == self.base_default {
            return None;
        }

        let entry = self.lookup(base, terminal)?;
        Some(if entry == self.entry_error || entry == 0 {
            Action::Error
        } else if entry > 0 {
            Action::Shift(entry as usize)
        } else {
            Action::Reduce(entry.unsigned_abs() as usize)
        })
    }

    fn default_reduction(&self, state: usize) -> Option<usize> {
        match self.default_reductions.get(state).copied() {
            None | Some(0) => None,
            Some(rule) => Some(rule as usize),
        }
    }

    fn goto(&self, state: usize, nonterminal: usize) -> usize {
        let i = nonterminal - self.num_terminals;
        match self.lookup(self.goto_base[i], state) {
            Some(next) => next as usize,
            None => self.default_gotos[i] as usize,
        }
    }

    fn rule(&self, rule: usize) -> Rule {
        self.rules[rule]
    }

    fn symbol_name(&self, symbol: usize) -> &str {
        self.symbols.get(symbol).copied().unwrap_or("?")
    }
}
