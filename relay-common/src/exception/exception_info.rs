use std::backtrace::Backtrace;
use std::num::{ParseFloatError, ParseIntError};
use std::str::ParseBoolError;
use std::sync::Arc;

use super::exception::ErrorCodeBacktrace;
use super::ErrorCode;

#[derive(thiserror::Error)]
enum OtherErrors {
    AnyHow { error: anyhow::Error },
}

impl std::fmt::Display for OtherErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OtherErrors::AnyHow { error } => write!(f, "{}", error),
        }
    }
}

impl std::fmt::Debug for OtherErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OtherErrors::AnyHow { error } => write!(f, "{:?}", error),
        }
    }
}

impl From<anyhow::Error> for ErrorCode {
    fn from(error: anyhow::Error) -> Self {
        ErrorCode::create(
            ErrorCode::UnknownExceptionCode(),
            format!("{}, source: {:?}", error, error.source()),
            Some(Box::new(OtherErrors::AnyHow { error })),
            Some(ErrorCodeBacktrace::Origin(Arc::new(Backtrace::capture()))),
        )
    }
}

impl From<serde_json::Error> for ErrorCode {
    fn from(error: serde_json::Error) -> Self {
        ErrorCode::Deserialization(error.to_string())
    }
}

impl From<ParseIntError> for ErrorCode {
    fn from(error: ParseIntError) -> Self {
        ErrorCode::IllegalArgument(error.to_string())
    }
}

impl From<ParseFloatError> for ErrorCode {
    fn from(error: ParseFloatError) -> Self {
        ErrorCode::IllegalArgument(error.to_string())
    }
}

impl From<ParseBoolError> for ErrorCode {
    fn from(error: ParseBoolError) -> Self {
        ErrorCode::IllegalArgument(error.to_string())
    }
}

impl From<std::io::Error> for ErrorCode {
    fn from(error: std::io::Error) -> Self {
        ErrorCode::from_std_error(error)
    }
}

impl<T> From<crossbeam_channel::SendError<T>> for ErrorCode {
    fn from(error: crossbeam_channel::SendError<T>) -> Self {
        ErrorCode::SendEventFailed(format!("{:?}", error))
    }
}
