use std::io;

use thiserror::Error;

/// Errors produced while writing the results report
#[derive(Error, Debug)]
pub enum IoError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_conversion() {
        let err = IoError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));

        match err {
            IoError::Io(_) => {}
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn error_display_mentions_cause() {
        let err = IoError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert!(err.to_string().contains("pipe closed"));
    }
}
