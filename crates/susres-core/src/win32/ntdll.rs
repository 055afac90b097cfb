//! Run-time lookup of `NtSuspendProcess` / `NtResumeProcess`
//!
//! Neither export is documented, so they are never linked statically.

use super::handle::ProcessHandle;
use crate::traits::FreezePrimitive;
use susres_common::FreezeDirection;
use tracing::debug;
use windows::core::{s, PCSTR};
use windows::Win32::Foundation::{HANDLE, NTSTATUS};
use windows::Win32::System::LibraryLoader::{GetModuleHandleA, GetProcAddress};

type RawFreezeFn = unsafe extern "system" fn(HANDLE) -> NTSTATUS;

/// A resolved ntdll freeze primitive
#[derive(Clone, Copy)]
pub struct NtFreezeFn {
    func: RawFreezeFn,
    name: &'static str,
}

impl NtFreezeFn {
    /// Look up the export for `direction` in the already-loaded ntdll.
    ///
    /// On `None` the reason is left in the thread's last error.
    pub fn resolve(direction: FreezeDirection) -> Option<Self> {
        let name = direction.primitive_name();
        let symbol = match direction {
            FreezeDirection::Suspend => s!("NtSuspendProcess"),
            FreezeDirection::Resume => s!("NtResumeProcess"),
        };

        let func = unsafe { lookup(symbol) }?;
        debug!(primitive = name, "resolved ntdll export");
        Some(Self { func, name })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

unsafe fn lookup(symbol: PCSTR) -> Option<RawFreezeFn> {
    let ntdll = GetModuleHandleA(s!("ntdll.dll")).ok()?;
    let proc = GetProcAddress(ntdll, symbol)?;
    Some(std::mem::transmute::<
        unsafe extern "system" fn() -> isize,
        RawFreezeFn,
    >(proc))
}

impl FreezePrimitive<ProcessHandle> for NtFreezeFn {
    fn invoke(&self, process: &ProcessHandle) -> u32 {
        let status = unsafe { (self.func)(process.raw()) };
        status.0 as u32
    }
}
