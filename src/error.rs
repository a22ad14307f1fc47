use std::process::ExitCode as StdExitCode;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidInput = 10,
    EmptyInput = 11,
    IoError = 12,
    InvalidDocument = 13,
}

impl From<ExitCode> for StdExitCode {
    fn from(code: ExitCode) -> Self {
        StdExitCode::from(code as u8)
    }
}

#[derive(Debug, Error)]
pub enum BinconvError {
    #[error("nothing to convert: {message}")]
    EmptyInput { message: String },

    #[error("invalid binary format: {message}")]
    InvalidBinaryFormat { message: String },

    #[error("malformed JSON document: {message}")]
    MalformedJson { message: String },

    #[error("unknown conversion type: {name}")]
    UnknownConversionType { name: String },

    #[error("unsupported file '{name}': expected a .json file")]
    UnsupportedFile { name: String },

    #[error("output mismatch: {message}")]
    Mismatch { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BinconvError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            BinconvError::EmptyInput { .. } => ExitCode::EmptyInput,
            BinconvError::InvalidBinaryFormat { .. } => ExitCode::InvalidInput,
            BinconvError::MalformedJson { .. }
            | BinconvError::UnknownConversionType { .. }
            | BinconvError::UnsupportedFile { .. } => ExitCode::InvalidDocument,
            BinconvError::Mismatch { .. } => ExitCode::GeneralError,
            BinconvError::Io(_) => ExitCode::IoError,
        }
    }

    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::EmptyInput {
            message: message.into(),
        }
    }

    pub fn invalid_binary(message: impl Into<String>) -> Self {
        Self::InvalidBinaryFormat {
            message: message.into(),
        }
    }

    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::MalformedJson {
            message: message.into(),
        }
    }

    pub fn unknown_conversion_type(name: impl Into<String>) -> Self {
        Self::UnknownConversionType { name: name.into() }
    }

    pub fn unsupported_file(name: impl Into<String>) -> Self {
        Self::UnsupportedFile { name: name.into() }
    }

    pub fn mismatch(message: impl Into<String>) -> Self {
        Self::Mismatch {
            message: message.into(),
        }
    }

    /// Document-level failures share one user-facing message.
    pub fn is_document_error(&self) -> bool {
        matches!(
            self,
            BinconvError::MalformedJson { .. } | BinconvError::UnknownConversionType { .. }
        )
    }
}

impl From<serde_json::Error> for BinconvError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedJson {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BinconvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(BinconvError::empty_input("x").exit_code(), ExitCode::EmptyInput);
        assert_eq!(BinconvError::invalid_binary("x").exit_code(), ExitCode::InvalidInput);
        assert_eq!(BinconvError::malformed_json("x").exit_code(), ExitCode::InvalidDocument);
        assert_eq!(
            BinconvError::unknown_conversion_type("x").exit_code(),
            ExitCode::InvalidDocument
        );
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(BinconvError::from(io).exit_code(), ExitCode::IoError);
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            BinconvError::unknown_conversion_type("hex-to-text").to_string(),
            "unknown conversion type: hex-to-text"
        );
        assert_eq!(
            BinconvError::unsupported_file("notes.txt").to_string(),
            "unsupported file 'notes.txt': expected a .json file"
        );
    }

    #[test]
    fn test_serde_error_is_malformed_json() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: BinconvError = err.into();
        assert!(err.is_document_error());
    }
}
