use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no input")]
    EmptyInput,
    #[error("invalid bit {found:?} in {line:?}")]
    InvalidBit { line: String, found: char },
    #[error("inconsistent string length: expected {expected}, found {found}")]
    InconsistentLength { expected: usize, found: usize },
    #[error("{0} bits do not fit in a u64")]
    BitsOverflow(usize),
    #[error("cannot parse {line:?}: {reason}")]
    Parse { line: String, reason: String },
    #[error("no board won")]
    NoWinner,
    #[error("no solution for day {0}")]
    UnknownDay(usize),
    #[error("part must be 1 or 2, got {0}")]
    UnknownPart(u8),
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn parse(line: &str, reason: impl Into<String>) -> Self {
        Error::Parse { line: line.to_string(), reason: reason.into() }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
