//! Owned process and thread handles

use super::error::from_windows;
use crate::traits::ThreadControl;
use susres_common::{Error, Result};
use windows::Win32::Foundation::{
    CloseHandle, ERROR_ACCESS_DENIED, ERROR_INVALID_PARAMETER, HANDLE,
};
use windows::core::HRESULT;
use windows::Win32::System::Threading::{
    OpenProcess, OpenThread, ResumeThread, SuspendThread, PROCESS_ALL_ACCESS,
    THREAD_SUSPEND_RESUME,
};

/// Process handle opened with `PROCESS_ALL_ACCESS`, closed on drop
#[derive(Debug)]
pub struct ProcessHandle {
    handle: HANDLE,
    pid: u32,
}

impl ProcessHandle {
    pub fn open(pid: u32) -> Result<Self> {
        let handle = unsafe { OpenProcess(PROCESS_ALL_ACCESS, false, pid) }.map_err(|e| {
            let source = from_windows(&e);
            if e.code() == HRESULT::from_win32(ERROR_INVALID_PARAMETER.0) {
                Error::ProcessNotFound { pid, source }
            } else if e.code() == HRESULT::from_win32(ERROR_ACCESS_DENIED.0) {
                Error::AccessDenied { pid, source }
            } else {
                Error::ProcessOpenFailed { pid, source }
            }
        })?;

        Ok(Self { handle, pid })
    }

    pub fn raw(&self) -> HANDLE {
        self.handle
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }
}

impl Drop for ProcessHandle {
    fn drop(&mut self) {
        if !self.handle.is_invalid() {
            unsafe {
                let _ = CloseHandle(self.handle);
            }
        }
    }
}

/// Thread handle with `THREAD_SUSPEND_RESUME` only, closed on drop
#[derive(Debug)]
pub struct ThreadHandle {
    handle: HANDLE,
}

impl ThreadHandle {
    pub fn open(tid: u32) -> Result<Self> {
        let handle = unsafe { OpenThread(THREAD_SUSPEND_RESUME, false, tid) }.map_err(|e| {
            Error::ThreadOpenFailed {
                tid,
                source: from_windows(&e),
            }
        })?;

        Ok(Self { handle })
    }
}

impl ThreadControl for ThreadHandle {
    fn suspend(&mut self) -> u32 {
        unsafe { SuspendThread(self.handle) }
    }

    fn resume(&mut self) -> u32 {
        unsafe { ResumeThread(self.handle) }
    }
}

impl Drop for ThreadHandle {
    fn drop(&mut self) {
        if !self.handle.is_invalid() {
            unsafe {
                let _ = CloseHandle(self.handle);
            }
        }
    }
}
