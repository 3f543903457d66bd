pub mod args;
pub mod check;
mod common;
pub mod info;
pub mod tokens;

pub use common::read_input;
