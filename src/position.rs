#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// A reference to a line number within an input string, and the position of a
/// character within that line. All indexes begin at 1.
pub struct Position {
    pub line: usize,
    pub position: usize,
}

impl Position {
    /// Returns a new reference with all fields initialized to 1
    pub fn new() -> Position {
        Position {
            line: 1,
            position: 1,
        }
    }

    /// Returns a reference to the given line and position
    pub fn at(line: usize, position: usize) -> Position {
        Position { line, position }
    }

    /// Advances the position past character c, moving to the start of the
    /// next line if c is a newline
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.position = 1;
            self.line += 1;
        } else {
            self.position += 1;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}
