mod error;
mod ini;

pub use error::ParseError;
pub use ini::{LineEnding, ParseOptions, UnrecognizedLines, WriteOptions, parse_ini, write_ini};
