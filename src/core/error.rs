//! Error types for the logging facility

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Destination directory or file could not be created or opened
    #[error("cannot open log destination '{path}': {source}")]
    Destination {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    Writer(String),
}

impl LoggerError {
    /// Create a destination error for a path that failed to open
    pub fn destination(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::Destination {
            path: path.into(),
            source,
        }
    }

    /// Create a generic writer error
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::Writer(msg.into())
    }
}
