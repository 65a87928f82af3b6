//! Error exit codes for the co-occurrence pipeline.
//!
//! Follows Unix sysexits.h convention for exit code numbers.

use anyhow::Error;
use clap::error::ErrorKind as ClapErrorKind;
use std::fmt::{Debug, Display};
use std::io;

use crate::error::Error as PipelineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    Failure = 1,
    Usage = 64,
    DataError = 65,
    NoInput = 66,
    CannotCreate = 73,
    IoError = 74,
    Config = 78,
}

impl ExitCode {
    /// Converts an error to an appropriate exit code.
    pub fn from_error(err: &Error) -> Self {
        if let Some(clap_err) = err.downcast_ref::<clap::Error>() {
            return match clap_err.kind() {
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => Self::Success,
                _ => Self::Usage,
            };
        }

        if let Some(io_err) = err.downcast_ref::<io::Error>() {
            return match io_err.kind() {
                io::ErrorKind::NotFound => Self::NoInput,
                io::ErrorKind::AlreadyExists => Self::CannotCreate,
                _ => Self::IoError,
            };
        }

        if let Some(pipeline_err) = err.downcast_ref::<PipelineError>() {
            return match pipeline_err {
                PipelineError::MissingVocab { .. } => Self::NoInput,
                PipelineError::MalformedVocabLine { .. } | PipelineError::UnkInCorpus => {
                    Self::DataError
                }
                PipelineError::Config(_) => Self::Config,
                PipelineError::Io { .. }
                | PipelineError::ShortRead { .. }
                | PipelineError::ShortWrite { .. }
                | PipelineError::RunFileOpen { .. } => Self::IoError,
                PipelineError::DuplicateVocabWord { .. } | PipelineError::Internal(_) => {
                    Self::DataError
                }
            };
        }

        if is_error_any_of::<serde_json::Error>(err) {
            return Self::DataError;
        }

        Self::Failure
    }

    /// Returns the numeric exit code value.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.code()
    }
}

/// Helper function to check if an error is one of multiple types.
fn is_error_any_of<T: Debug + Display + Send + Sync + 'static>(err: &Error) -> bool {
    err.downcast_ref::<T>().is_some()
}
