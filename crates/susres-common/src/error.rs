//! Error types for susres

use thiserror::Error;

/// An OS error code together with its decoded, human readable text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (code {code:#x})")]
pub struct OsError {
    pub code: u32,
    pub message: String,
}

impl OsError {
    pub fn new(code: u32, message: impl Into<String>) -> Self {
        let message = message.into();
        // FormatMessage output carries a trailing CRLF
        let message = message.trim_end().to_string();
        Self { code, message }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    BadUsage(String),

    #[error("Failed to GetProcAddress({name}): {source}")]
    PrimitiveUnavailable {
        name: &'static str,
        source: OsError,
    },

    #[error("Failed to OpenProcess({pid}): no such process: {source}")]
    ProcessNotFound { pid: u32, source: OsError },

    #[error("Failed to OpenProcess({pid}): access denied: {source}")]
    AccessDenied { pid: u32, source: OsError },

    #[error("Failed to OpenProcess({pid}): {source}")]
    ProcessOpenFailed { pid: u32, source: OsError },

    #[error("Failed to OpenThread({tid}): {source}")]
    ThreadOpenFailed { tid: u32, source: OsError },

    #[error("Failed to CreateToolhelp32Snapshot: {source}")]
    SnapshotFailed { source: OsError },

    #[error("{name}({pid}) returns {:x}: {}", .source.code, .source.message)]
    PrimitiveInvocationFailed {
        name: &'static str,
        pid: u32,
        source: OsError,
    },

    #[error("{call}({tid}) failed: {source}")]
    ThreadProbeFailed {
        call: &'static str,
        tid: u32,
        source: OsError,
    },

    #[error("No threads found for pid {0}")]
    NoThreadsFound(u32),

    #[error("Unsupported platform: {0}")]
    Unsupported(String),
}

impl Error {
    /// Process exit status reported for this error.
    ///
    /// Every failure is terminal for the invocation and maps to the same
    /// status; callers cannot distinguish failures by exit code alone.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// The underlying OS error, if this failure came from an OS call.
    pub fn os_error(&self) -> Option<&OsError> {
        match self {
            Error::PrimitiveUnavailable { source, .. }
            | Error::ProcessNotFound { source, .. }
            | Error::AccessDenied { source, .. }
            | Error::ProcessOpenFailed { source, .. }
            | Error::ThreadOpenFailed { source, .. }
            | Error::SnapshotFailed { source }
            | Error::PrimitiveInvocationFailed { source, .. }
            | Error::ThreadProbeFailed { source, .. } => Some(source),
            Error::BadUsage(_) | Error::NoThreadsFound(_) | Error::Unsupported(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
