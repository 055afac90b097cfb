//! Whole-process suspend and resume
//!
//! Delegates entirely to the OS primitive; no per-thread work happens here.
//! Threads the target creates after the call are not affected by it.

use crate::traits::{FreezePrimitive, ProcessApi};
use susres_common::{Error, FreezeDirection, Result};
use tracing::{debug, info};

/// Resolve the primitive for `direction` and invoke it once against `pid`.
///
/// The primitive is looked up on every call. A missing primitive is fatal;
/// a non-zero status is reported and never retried.
pub fn apply<A: ProcessApi>(api: &A, direction: FreezeDirection, pid: u32) -> Result<()> {
    let name = direction.primitive_name();

    let primitive = api
        .resolve_primitive(direction)
        .ok_or_else(|| Error::PrimitiveUnavailable {
            name,
            source: api.last_os_error(),
        })?;

    let process = api.open_process(pid)?;
    debug!(pid, primitive = name, "invoking freeze primitive");

    let status = primitive.invoke(&process);
    if status != 0 {
        return Err(Error::PrimitiveInvocationFailed {
            name,
            pid,
            source: api.describe_status(status),
        });
    }

    info!(pid, primitive = name, "freeze primitive succeeded");
    Ok(())
}

pub fn suspend<A: ProcessApi>(api: &A, pid: u32) -> Result<()> {
    apply(api, FreezeDirection::Suspend, pid)
}

pub fn resume<A: ProcessApi>(api: &A, pid: u32) -> Result<()> {
    apply(api, FreezeDirection::Resume, pid)
}
