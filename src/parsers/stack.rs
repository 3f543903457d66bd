use super::config::ParserConfig;
use crate::errors::{Error, Result};
use log::debug;

/// The parallel state and value stacks of an LALR parser automaton
pub struct Stack<V> {
    states: Vec<usize>,
    values: Vec<V>,
    capacity: usize,
    max_depth: usize,
}

impl<V: Default> Stack<V> {
    /// Creates a new stack, prepopulated with an entry for the initial state
    pub fn new(config: &ParserConfig) -> Stack<V> {
        let max_depth = config.max_depth.max(1);
        let capacity = config.initial_depth.clamp(1, max_depth);

        let mut states = Vec::with_capacity(capacity);
        let mut values = Vec::with_capacity(capacity);

        // The entry for the initial state is never popped, so any value
        // will do
        states.push(0);
        values.push(V::default());

        Stack {
            states,
            values,
            capacity,
            max_depth,
        }
    }
}

impl<V> Stack<V> {
    /// Returns the state at the top of the stack
    pub fn state(&self) -> usize {
        self.states[self.states.len() - 1]
    }

    /// Returns the number of entries on the stack, including the initial
    /// state
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[cfg(test)]
    /// Returns the capacity the stack has grown to
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the values of the top n entries, deepest first
    pub fn top_values(&self, n: usize) -> &[V] {
        &self.values[self.values.len() - n.min(self.values.len() - 1)..]
    }

    /// Pushes a state and its value. Once the stack is full, it doubles in
    /// size, up to the maximum depth; filling it at the maximum depth is an
    /// error.
    pub fn push(&mut self, state: usize, value: V) -> Result<()> {
        self.states.push(state);
        self.values.push(value);

        if self.states.len() >= self.capacity {
            if self.capacity >= self.max_depth {
                return Err(Error::StackOverflow(self.max_depth));
            }

            self.capacity = (self.capacity * 2).min(self.max_depth);
            self.states.reserve_exact(self.capacity - self.states.len());
            self.values.reserve_exact(self.capacity - self.values.len());
            debug!("Stack size increased to {}", self.capacity);
        }

        Ok(())
    }

    /// Pops the top n entries, leaving the entry for the initial state in
    /// place
    pub fn pop(&mut self, n: usize) {
        let len = self.states.len().saturating_sub(n).max(1);
        self.states.truncate(len);
        self.values.truncate(len);
    }

    /// Pops the top entry. Returns false, leaving the stack unchanged, if
    /// only the entry for the initial state remains.
    pub fn pop_one(&mut self) -> bool {
        if self.states.len() == 1 {
            return false;
        }
        self.pop(1);
        true
    }

    #[cfg(test)]
    /// Returns the states on the stack, bottom first
    pub fn states(&self) -> &[usize] {
        &self.states
    }

    /// Consumes the stack and returns its values, bottom first
    pub fn into_values(self) -> Vec<V> {
        self.values
    }
}
