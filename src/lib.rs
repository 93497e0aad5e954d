pub mod document;
pub mod error;
pub mod io;
pub mod section;
pub mod store;

pub use document::{Document, LookupError};
pub use error::Error;
pub use io::{
    LineEnding, ParseError, ParseOptions, UnrecognizedLines, WriteOptions, parse_ini, write_ini,
};
pub use section::Section;
pub use store::{
    StoreOptions, get_value, get_value_with, modify_key, modify_key_with, read, read_with,
    try_get_value, write, write_with,
};
