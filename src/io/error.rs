use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unrecognized line {line}: {content:?}")]
    UnrecognizedLine { line: usize, content: String },
}
