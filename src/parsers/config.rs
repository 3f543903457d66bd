/// Initial number of entries the parser stacks hold before growing
pub const DEFAULT_INITIAL_DEPTH: usize = 200;

/// Number of entries beyond which the parser stacks may not grow
pub const DEFAULT_MAX_DEPTH: usize = 10000;

/// Configuration for the LALR parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Capacity the stacks start with
    pub initial_depth: usize,

    /// Capacity the stacks may grow to, doubling each time they fill
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            initial_depth: DEFAULT_INITIAL_DEPTH,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
