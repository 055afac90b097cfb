//! Win32 implementation of [`ProcessApi`]

mod error;
mod handle;
mod ntdll;
mod snapshot;

pub use error::{describe_ntstatus, describe_win32, last_error};
pub use handle::{ProcessHandle, ThreadHandle};
pub use ntdll::NtFreezeFn;
pub use snapshot::ThreadSnapshot;

use crate::traits::ProcessApi;
use susres_common::{FreezeDirection, OsError, Result};

/// The live Windows system.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Api;

impl Win32Api {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessApi for Win32Api {
    type Process = ProcessHandle;
    type Primitive = NtFreezeFn;
    type Thread = ThreadHandle;
    type Snapshot = ThreadSnapshot;

    fn open_process(&self, pid: u32) -> Result<ProcessHandle> {
        ProcessHandle::open(pid)
    }

    fn resolve_primitive(&self, direction: FreezeDirection) -> Option<NtFreezeFn> {
        NtFreezeFn::resolve(direction)
    }

    fn thread_snapshot(&self) -> Result<ThreadSnapshot> {
        ThreadSnapshot::take()
    }

    fn open_thread(&self, tid: u32) -> Result<ThreadHandle> {
        ThreadHandle::open(tid)
    }

    fn last_os_error(&self) -> OsError {
        last_error()
    }

    fn describe_status(&self, status: u32) -> OsError {
        describe_ntstatus(status)
    }
}
