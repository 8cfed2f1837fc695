use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatmulError {
    #[error("shape mismatch: expected {expected}x{expected}, got {rows}x{cols}")]
    ShapeMismatch {
        expected: usize,
        rows: usize,
        cols: usize,
    },
    #[error("{len} values cannot fill a {side}x{side} matrix")]
    LengthMismatch { side: usize, len: usize },
    #[error("unsupported side length {side}: {reason}")]
    UnsupportedSize { side: usize, reason: &'static str },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("cannot parse {what} from {token:?}")]
    Parse { what: &'static str, token: String },
    #[error("unexpected end of input: expected {expected} values, got {got}")]
    UnexpectedEof { expected: usize, got: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MatmulError>;
