//! Core trait definitions for susres
//!
//! These traits are the seam between the suspend/resume/status logic and the
//! operating system. The Windows backend implements them over Win32 and
//! ntdll; tests implement them over an in-memory thread table.

use susres_common::{FreezeDirection, OsError, Result, ThreadEntry};

/// Value returned by `SuspendThread`/`ResumeThread` when the call failed.
pub const SUSPEND_COUNT_FAILED: u32 = u32::MAX;

/// Access to processes and threads of the running system.
///
/// Every associated resource type owns its OS object and releases it on
/// drop, so early returns never leak handles.
pub trait ProcessApi {
    /// Exclusively owned handle to a process opened with full access
    type Process;

    /// A resolved whole-process freeze primitive
    type Primitive: FreezePrimitive<Self::Process>;

    /// Transient handle to one thread with suspend/resume rights
    type Thread: ThreadControl;

    /// Point-in-time, system-wide thread enumeration in OS order
    type Snapshot: Iterator<Item = ThreadEntry>;

    /// Open a process by identifier
    fn open_process(&self, pid: u32) -> Result<Self::Process>;

    /// Look up the freeze primitive for `direction`.
    ///
    /// Returns `None` when the running OS build does not export it; the
    /// cause is then available from [`ProcessApi::last_os_error`].
    fn resolve_primitive(&self, direction: FreezeDirection) -> Option<Self::Primitive>;

    /// Take a snapshot of every thread in the system
    fn thread_snapshot(&self) -> Result<Self::Snapshot>;

    /// Open a thread for suspend/resume
    fn open_thread(&self, tid: u32) -> Result<Self::Thread>;

    /// Error left behind by the most recent failed OS call on this thread
    fn last_os_error(&self) -> OsError;

    /// Decode a status returned by a freeze primitive
    fn describe_status(&self, status: u32) -> OsError;
}

/// A whole-process freeze or unfreeze primitive.
pub trait FreezePrimitive<P> {
    /// Invoke the primitive once. Zero means success.
    fn invoke(&self, process: &P) -> u32;
}

/// Raw per-thread suspend count manipulation.
///
/// Both calls return the suspend count as it was before the call, or
/// [`SUSPEND_COUNT_FAILED`] on failure.
pub trait ThreadControl {
    fn suspend(&mut self) -> u32;

    fn resume(&mut self) -> u32;
}
