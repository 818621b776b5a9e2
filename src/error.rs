//! Structured error type returned by every fallible operation in this crate.

use std::fmt;

/// Tag identifying the category of a failure, per the error taxonomy.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    InvalidArgument,
    InvalidDtype,
    InvalidSize,
    OutOfRange,
    CompileError,
    LinkError,
    FramebufferIncomplete,
    GlObjectCreationFailed,
    MapFailed,
    Unsupported,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::InvalidArgument => "INVALID_ARGUMENT",
            ErrorKind::InvalidDtype => "INVALID_DTYPE",
            ErrorKind::InvalidSize => "INVALID_SIZE",
            ErrorKind::OutOfRange => "OUT_OF_RANGE",
            ErrorKind::CompileError => "COMPILE_ERROR",
            ErrorKind::LinkError => "LINK_ERROR",
            ErrorKind::FramebufferIncomplete => "FRAMEBUFFER_INCOMPLETE",
            ErrorKind::GlObjectCreationFailed => "GL_OBJECT_CREATION_FAILED",
            ErrorKind::MapFailed => "MAP_FAILED",
            ErrorKind::Unsupported => "UNSUPPORTED",
        };
        f.write_str(s)
    }
}

/// A single structured error: a [`ErrorKind`] tag plus a human-readable detail.
#[derive(Debug, Clone)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Error {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::new(ErrorKind::InvalidArgument, message)
    }

    pub fn invalid_dtype(code: impl fmt::Display) -> Self {
        Error::new(ErrorKind::InvalidDtype, format!("unknown dtype code `{code}`"))
    }

    pub fn invalid_size(message: impl Into<String>) -> Self {
        Error::new(ErrorKind::InvalidSize, message)
    }

    pub fn out_of_range(message: impl Into<String>) -> Self {
        Error::new(ErrorKind::OutOfRange, message)
    }

    pub fn compile_error(stage: &str, log: impl Into<String>) -> Self {
        Error::new(ErrorKind::CompileError, format!("{stage}: {}", log.into()))
    }

    pub fn link_error(log: impl Into<String>) -> Self {
        Error::new(ErrorKind::LinkError, log)
    }

    pub fn framebuffer_incomplete(status_name: &str) -> Self {
        Error::new(ErrorKind::FramebufferIncomplete, status_name.to_string())
    }

    pub fn object_creation_failed(kind_name: &str) -> Self {
        Error::new(
            ErrorKind::GlObjectCreationFailed,
            format!("glGen{kind_name} returned name 0"),
        )
    }

    pub fn map_failed(message: impl Into<String>) -> Self {
        Error::new(ErrorKind::MapFailed, message)
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        Error::new(ErrorKind::Unsupported, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
