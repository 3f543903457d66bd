use std::io::Read;

pub const LINE_LENGTH: usize = 72;

/// Width of the labels in tabular output
pub const LABEL_WIDTH: usize = 24;

/// Reads the whole program from the named file, or from standard input if
/// there is no file
pub fn read_input(file: Option<&str>) -> std::io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}
