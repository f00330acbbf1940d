//! Command-line tokenization.

pub mod parser;
pub mod types;

pub use parser::{parse, tokenize};
pub use types::CommandLine;
