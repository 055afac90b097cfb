//! Decoding of Win32 error codes and NTSTATUS values

use susres_common::OsError;
use windows::core::HRESULT;
use windows::Win32::Foundation::{GetLastError, RtlNtStatusToDosError, NTSTATUS};

/// Capture the calling thread's last Win32 error.
pub fn last_error() -> OsError {
    let code = unsafe { GetLastError() };
    describe_win32(code.0)
}

/// Decode a Win32 error code using the system message table.
pub fn describe_win32(code: u32) -> OsError {
    OsError::new(code, HRESULT::from_win32(code).message())
}

/// Decode an NTSTATUS returned by an ntdll call.
///
/// The reported code stays the raw NTSTATUS; the text comes from the Win32
/// error it maps to.
pub fn describe_ntstatus(status: u32) -> OsError {
    let win32 = unsafe { RtlNtStatusToDosError(NTSTATUS(status as i32)) };
    OsError::new(status, HRESULT::from_win32(win32).message())
}

/// Convert an error returned by a `windows` crate wrapper.
pub(crate) fn from_windows(err: &windows::core::Error) -> OsError {
    OsError::new(err.code().0 as u32, err.message())
}
