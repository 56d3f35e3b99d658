use thiserror::Error;

use std::io::Error as IoError;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("Invalid {field}")]
    InvalidHex {
        field: &'static str,
        #[source]
        source: hex::FromHexError,
    },
    #[error(
        "Invalid {field}: expected {expected} bytes, got {actual}"
    )]
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error(
        "{field} too long: at most {max} bytes allowed, got {actual}"
    )]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    #[error("I/O error")]
    Io(#[from] IoError),
}

/// Coarse classification of a [`SaveError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input could not be decoded (bad hex)
    InputFormat,
    /// Input decoded but has the wrong size
    InputLength,
    /// Opening or writing the output failed
    Io,
}

impl SaveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SaveError::InvalidHex { .. } => ErrorKind::InputFormat,
            SaveError::InvalidLength { .. }
            | SaveError::TooLong { .. } => ErrorKind::InputLength,
            SaveError::Io(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, SaveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        let err = SaveError::InvalidHex {
            field: "public key",
            source: hex::FromHexError::OddLength,
        };
        assert_eq!(err.kind(), ErrorKind::InputFormat);

        let err = SaveError::InvalidLength {
            field: "public key",
            expected: 32,
            actual: 31,
        };
        assert_eq!(err.kind(), ErrorKind::InputLength);

        let err = SaveError::TooLong {
            field: "name",
            max: 32,
            actual: 33,
        };
        assert_eq!(err.kind(), ErrorKind::InputLength);

        let err: SaveError =
            IoError::new(std::io::ErrorKind::Other, "boom").into();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn hex_error_is_the_source() {
        use std::error::Error as _;

        let err = SaveError::InvalidHex {
            field: "public key",
            source: hex::FromHexError::OddLength,
        };
        assert_eq!(err.to_string(), "Invalid public key");
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source, Some("Odd number of digits".to_string()));
    }

    #[test]
    fn messages_name_the_field() {
        let err = SaveError::InvalidLength {
            field: "private key",
            expected: 32,
            actual: 33,
        };
        assert_eq!(
            err.to_string(),
            "Invalid private key: expected 32 bytes, got 33"
        );

        let err = SaveError::TooLong {
            field: "name",
            max: 32,
            actual: 40,
        };
        assert_eq!(
            err.to_string(),
            "name too long: at most 32 bytes allowed, got 40"
        );
    }
}
