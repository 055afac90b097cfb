//! Whole-process suspension status
//!
//! No OS call reports whether an entire process is suspended, so the state is
//! rebuilt thread by thread. Each thread of the target is suspended and then
//! immediately resumed; the count returned by the suspend tells whether a
//! suspend was already pending. Every probed thread ends with the count it
//! started with.
//!
//! The first thread found running ends the probe, so threads enumerated after
//! it are never touched. A thread that cannot be opened or probed fails the
//! whole query rather than producing a partial answer.

use crate::traits::{ProcessApi, ThreadControl, SUSPEND_COUNT_FAILED};
use susres_common::{AggregateStatus, Error, Result};
use tracing::debug;

/// Report whether every thread of `pid` is currently suspended.
///
/// The answer is a point-in-time estimate: the target keeps running (or not)
/// and may create or destroy threads while it is being probed.
pub fn process_status<A: ProcessApi>(api: &A, pid: u32) -> Result<AggregateStatus> {
    let snapshot = api.thread_snapshot()?;

    let mut found_thread = false;
    let mut status = AggregateStatus::Suspended;

    for entry in snapshot.filter(|entry| entry.owner_pid == pid) {
        found_thread = true;

        let mut thread = api.open_thread(entry.tid)?;
        let previous = probe_suspend_count(api, &mut thread, entry.tid)?;
        debug!(pid, tid = entry.tid, previous, "probed thread");

        if previous == 0 {
            debug!(pid, tid = entry.tid, "thread running, stopping probe");
            status = AggregateStatus::Running;
            break;
        }
    }

    if !found_thread {
        return Err(Error::NoThreadsFound(pid));
    }

    Ok(status)
}

/// Suspend then resume `thread`, returning the count observed by the suspend.
///
/// The resume is issued whatever count the suspend reported. It is skipped
/// only when the suspend itself failed, since nothing was added then.
pub fn probe_suspend_count<A: ProcessApi>(
    api: &A,
    thread: &mut A::Thread,
    tid: u32,
) -> Result<u32> {
    let previous = thread.suspend();
    if previous == SUSPEND_COUNT_FAILED {
        return Err(Error::ThreadProbeFailed {
            call: "SuspendThread",
            tid,
            source: api.last_os_error(),
        });
    }

    if thread.resume() == SUSPEND_COUNT_FAILED {
        return Err(Error::ThreadProbeFailed {
            call: "ResumeThread",
            tid,
            source: api.last_os_error(),
        });
    }

    Ok(previous)
}
