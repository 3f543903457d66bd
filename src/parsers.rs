pub mod compressed;
pub mod config;
pub mod dense;
pub mod lr;
pub mod report;
pub mod semantics;
pub mod source;
mod stack;
pub mod table;

pub use compressed::CompressedTable;
pub use config::ParserConfig;
pub use dense::DenseTable;
pub use lr::Parser;
pub use report::{ErrorSink, Stderr};
pub use semantics::Semantics;
pub use source::{Token, TokenSource, TokenStream};
pub use table::{Action, PTable, Rule};
