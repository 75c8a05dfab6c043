use thiserror::Error;

#[derive(Debug, Error)]
pub enum SapError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("structure error: {0}")]
    Structure(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl SapError {
    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        SapError::InvalidInput(msg.into())
    }

    pub fn parse<T: Into<String>>(line: usize, msg: T) -> Self {
        SapError::Parse {
            line,
            message: msg.into(),
        }
    }

    pub fn structure<T: Into<String>>(msg: T) -> Self {
        SapError::Structure(msg.into())
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SapError::InvalidInput(_))
    }
}
