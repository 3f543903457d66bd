use super::source::Token;

/// A semantic action, computing the value of a rule's left-hand side from
/// the values of its right-hand-side symbols
pub type SemanticAction<V> = fn(&[V]) -> V;

/// The semantic values attached to tokens, and the actions run when rules
/// are reduced. Rules without an action take the value of their first
/// right-hand-side symbol.
pub struct Semantics<V> {
    token_value: fn(&Token) -> V,
    actions: Vec<Option<SemanticAction<V>>>,
}

fn default_value<V: Default>(_: &Token) -> V {
    V::default()
}

impl<V: Clone + Default> Semantics<V> {
    /// Creates semantics which compute token values with token_value and
    /// have no rule actions
    pub fn new(token_value: fn(&Token) -> V) -> Semantics<V> {
        Semantics {
            token_value,
            actions: Vec::new(),
        }
    }

    /// Attaches an action to a rule, replacing any previous action
    pub fn with_action(mut self, rule: usize, action: SemanticAction<V>) -> Semantics<V> {
        if self.actions.len() <= rule {
            self.actions.resize(rule + 1, None);
        }
        self.actions[rule] = Some(action);
        self
    }

    /// Returns the semantic value of a shifted token
    pub fn token_value(&self, token: &Token) -> V {
        (self.token_value)(token)
    }

    /// Returns the value of the left-hand side of rule, given the values of
    /// its right-hand side
    pub fn reduce(&self, rule: usize, rhs: &[V]) -> V {
        match self.actions.get(rule).copied().flatten() {
            Some(action) => action(rhs),
            None => rhs.first().cloned().unwrap_or_default(),
        }
    }
}

impl<V: Clone + Default> Default for Semantics<V> {
    fn default() -> Self {
        Semantics::new(default_value::<V>)
    }
}
