//! susres Core Library
//!
//! Suspends or resumes every thread of a running process through the OS
//! whole-process primitives, and reconstructs whether a process is fully
//! suspended by probing each of its threads.
//!
//! Each call is independent: handles are acquired, used and released within
//! it and nothing is cached between calls.

pub mod freeze;
pub mod probe;
pub mod traits;

#[cfg(windows)]
pub mod win32;

#[cfg(test)]
mod fake;

pub use susres_common::{AggregateStatus, Error, FreezeDirection, Result};
pub use traits::*;

#[cfg(windows)]
pub use win32::Win32Api;

/// Operation requested for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Suspend,
    Resume,
    Status,
}

/// Successful result of [`execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A whole-process suspend or resume completed
    Applied,
    /// The status probe completed with this answer
    Status(AggregateStatus),
}

/// Run `verb` against `pid`.
pub fn execute<A: ProcessApi>(api: &A, verb: Verb, pid: u32) -> Result<Outcome> {
    match verb {
        Verb::Suspend => freeze::suspend(api, pid).map(|()| Outcome::Applied),
        Verb::Resume => freeze::resume(api, pid).map(|()| Outcome::Applied),
        Verb::Status => probe::process_status(api, pid).map(Outcome::Status),
    }
}
