//! System-wide thread snapshot

use super::error::from_windows;
use susres_common::{Error, Result, ThreadEntry};
use windows::Win32::Foundation::{CloseHandle, HANDLE};
use windows::Win32::System::Diagnostics::ToolHelp::{
    CreateToolhelp32Snapshot, Thread32First, Thread32Next, TH32CS_SNAPTHREAD, THREADENTRY32,
};

/// Iterator over a `TH32CS_SNAPTHREAD` snapshot in OS order.
///
/// The snapshot handle is closed when the iterator is dropped, including when
/// iteration stops early.
pub struct ThreadSnapshot {
    handle: HANDLE,
    entry: THREADENTRY32,
    started: bool,
    done: bool,
}

impl ThreadSnapshot {
    pub fn take() -> Result<Self> {
        let handle = unsafe { CreateToolhelp32Snapshot(TH32CS_SNAPTHREAD, 0) }.map_err(|e| {
            Error::SnapshotFailed {
                source: from_windows(&e),
            }
        })?;

        Ok(Self {
            handle,
            entry: THREADENTRY32 {
                dwSize: std::mem::size_of::<THREADENTRY32>() as u32,
                ..Default::default()
            },
            started: false,
            done: false,
        })
    }
}

impl Iterator for ThreadSnapshot {
    type Item = ThreadEntry;

    fn next(&mut self) -> Option<ThreadEntry> {
        if self.done {
            return None;
        }

        self.entry.dwSize = std::mem::size_of::<THREADENTRY32>() as u32;
        let result = unsafe {
            if self.started {
                Thread32Next(self.handle, &mut self.entry)
            } else {
                Thread32First(self.handle, &mut self.entry)
            }
        };
        self.started = true;

        // ERROR_NO_MORE_FILES and real failures both end the enumeration
        if result.is_err() {
            self.done = true;
            return None;
        }

        Some(ThreadEntry {
            owner_pid: self.entry.th32OwnerProcessID,
            tid: self.entry.th32ThreadID,
        })
    }
}

impl Drop for ThreadSnapshot {
    fn drop(&mut self) {
        if !self.handle.is_invalid() {
            unsafe {
                let _ = CloseHandle(self.handle);
            }
        }
    }
}
