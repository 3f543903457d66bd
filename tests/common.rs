use ccheck::errors::{Error, Result, SyntaxError};
use ccheck::parsers::ParserConfig;

#[allow(dead_code)]
/// Helper function to read in an entire test data file
pub fn read_test_file(filename: &str) -> String {
    std::fs::read_to_string(test_file_path(filename)).expect("failed to read test file")
}

/// Helper function to get an valid path to a test file in the testdata directory
pub fn test_file_path(filename: &str) -> String {
    let mut p = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push(format!("tests/testdata/{}", filename));

    p.into_os_string()
        .into_string()
        .expect("failed to build filename")
}

#[allow(dead_code)]
/// Helper function to check a program with the given configuration and
/// return the result along with every reported error
pub fn check_with(input: &str, config: ParserConfig) -> (Result<()>, Vec<Error>) {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut errors = Vec::new();
    let result = ccheck::check(input, config, &mut errors);

    (result, errors)
}

#[allow(dead_code)]
/// Helper function to check a program with the default configuration
pub fn check(input: &str) -> (Result<()>, Vec<Error>) {
    check_with(input, ParserConfig::default())
}

#[allow(dead_code)]
/// Helper function to build a syntax error
pub fn syntax(line: usize, text: &str) -> SyntaxError {
    SyntaxError {
        line,
        text: text.to_string(),
    }
}
