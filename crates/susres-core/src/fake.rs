//! In-memory process table used by unit tests

use crate::traits::{FreezePrimitive, ProcessApi, ThreadControl, SUSPEND_COUNT_FAILED};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use susres_common::{Error, FreezeDirection, OsError, Result, ThreadEntry};

const ERROR_ACCESS_DENIED: u32 = 5;
const ERROR_INVALID_PARAMETER: u32 = 87;
const ERROR_PROC_NOT_FOUND: u32 = 127;
const STATUS_ACCESS_DENIED: u32 = 0xC000_0022;

#[derive(Debug, Clone)]
struct Thread {
    owner_pid: u32,
    tid: u32,
    count: u32,
}

#[derive(Default)]
struct State {
    threads: Vec<Thread>,
    denied_pids: HashSet<u32>,
    unopenable_tids: HashSet<u32>,
    failing_suspend_tids: HashSet<u32>,
    failing_resume_tids: HashSet<u32>,
    missing_primitives: bool,
    primitive_status: u32,
    snapshot_fails: bool,
    live_handles: i32,
    suspend_calls: Vec<u32>,
    resume_calls: Vec<u32>,
    last_error: u32,
}

/// Shared handle to a fake system; clones observe the same state.
#[derive(Clone, Default)]
pub(crate) struct FakeSystem {
    state: Rc<RefCell<State>>,
}

impl FakeSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a thread to the end of the enumeration order
    pub fn with_thread(self, owner_pid: u32, tid: u32, count: u32) -> Self {
        self.state.borrow_mut().threads.push(Thread {
            owner_pid,
            tid,
            count,
        });
        self
    }

    pub fn deny_process(self, pid: u32) -> Self {
        self.state.borrow_mut().denied_pids.insert(pid);
        self
    }

    pub fn unopenable_thread(self, tid: u32) -> Self {
        self.state.borrow_mut().unopenable_tids.insert(tid);
        self
    }

    pub fn failing_suspend(self, tid: u32) -> Self {
        self.state.borrow_mut().failing_suspend_tids.insert(tid);
        self
    }

    pub fn failing_resume(self, tid: u32) -> Self {
        self.state.borrow_mut().failing_resume_tids.insert(tid);
        self
    }

    pub fn without_primitives(self) -> Self {
        self.state.borrow_mut().missing_primitives = true;
        self
    }

    pub fn primitive_status(self, status: u32) -> Self {
        self.state.borrow_mut().primitive_status = status;
        self
    }

    pub fn failing_snapshot(self) -> Self {
        self.state.borrow_mut().snapshot_fails = true;
        self
    }

    /// Remove a thread as if it exited
    pub fn exit_thread(&self, tid: u32) {
        self.state.borrow_mut().threads.retain(|t| t.tid != tid);
    }

    pub fn count(&self, tid: u32) -> Option<u32> {
        self.state
            .borrow()
            .threads
            .iter()
            .find(|t| t.tid == tid)
            .map(|t| t.count)
    }

    pub fn counts(&self) -> Vec<(u32, u32)> {
        self.state
            .borrow()
            .threads
            .iter()
            .map(|t| (t.tid, t.count))
            .collect()
    }

    pub fn live_handles(&self) -> i32 {
        self.state.borrow().live_handles
    }

    pub fn suspend_calls(&self) -> Vec<u32> {
        self.state.borrow().suspend_calls.clone()
    }

    pub fn resume_calls(&self) -> Vec<u32> {
        self.state.borrow().resume_calls.clone()
    }

    fn acquire(&self) {
        self.state.borrow_mut().live_handles += 1;
    }

    fn fail(&self, code: u32) -> OsError {
        self.state.borrow_mut().last_error = code;
        describe(code)
    }
}

fn describe(code: u32) -> OsError {
    let message = match code {
        0 => "The operation completed successfully.",
        ERROR_ACCESS_DENIED => "Access is denied.",
        ERROR_INVALID_PARAMETER => "The parameter is incorrect.",
        ERROR_PROC_NOT_FOUND => "The specified procedure could not be found.",
        _ => "Unknown error.",
    };
    OsError::new(code, message)
}

pub(crate) struct FakeProcess {
    pub pid: u32,
    system: FakeSystem,
}

impl Drop for FakeProcess {
    fn drop(&mut self) {
        self.system.state.borrow_mut().live_handles -= 1;
    }
}

pub(crate) struct FakePrimitive {
    direction: FreezeDirection,
    system: FakeSystem,
}

impl FreezePrimitive<FakeProcess> for FakePrimitive {
    fn invoke(&self, process: &FakeProcess) -> u32 {
        let mut state = self.system.state.borrow_mut();
        if state.primitive_status != 0 {
            return state.primitive_status;
        }
        for thread in state
            .threads
            .iter_mut()
            .filter(|t| t.owner_pid == process.pid)
        {
            thread.count = match self.direction {
                FreezeDirection::Suspend => thread.count + 1,
                FreezeDirection::Resume => thread.count.saturating_sub(1),
            };
        }
        0
    }
}

pub(crate) struct FakeThread {
    tid: u32,
    system: FakeSystem,
}

impl FakeThread {
    fn adjust(&mut self, failing: bool, delta: i64) -> u32 {
        if failing {
            self.system.state.borrow_mut().last_error = ERROR_ACCESS_DENIED;
            return SUSPEND_COUNT_FAILED;
        }
        let mut state = self.system.state.borrow_mut();
        let Some(index) = state.threads.iter().position(|t| t.tid == self.tid) else {
            state.last_error = ERROR_INVALID_PARAMETER;
            return SUSPEND_COUNT_FAILED;
        };
        let thread = &mut state.threads[index];
        let previous = thread.count;
        thread.count = (i64::from(previous) + delta).max(0) as u32;
        previous
    }
}

impl ThreadControl for FakeThread {
    fn suspend(&mut self) -> u32 {
        let failing = {
            let mut state = self.system.state.borrow_mut();
            state.suspend_calls.push(self.tid);
            state.failing_suspend_tids.contains(&self.tid)
        };
        self.adjust(failing, 1)
    }

    fn resume(&mut self) -> u32 {
        let failing = {
            let mut state = self.system.state.borrow_mut();
            state.resume_calls.push(self.tid);
            state.failing_resume_tids.contains(&self.tid)
        };
        self.adjust(failing, -1)
    }
}

impl Drop for FakeThread {
    fn drop(&mut self) {
        self.system.state.borrow_mut().live_handles -= 1;
    }
}

pub(crate) struct FakeSnapshot {
    entries: std::vec::IntoIter<ThreadEntry>,
    system: FakeSystem,
}

impl Iterator for FakeSnapshot {
    type Item = ThreadEntry;

    fn next(&mut self) -> Option<ThreadEntry> {
        self.entries.next()
    }
}

impl Drop for FakeSnapshot {
    fn drop(&mut self) {
        self.system.state.borrow_mut().live_handles -= 1;
    }
}

impl ProcessApi for FakeSystem {
    type Process = FakeProcess;
    type Primitive = FakePrimitive;
    type Thread = FakeThread;
    type Snapshot = FakeSnapshot;

    fn open_process(&self, pid: u32) -> Result<FakeProcess> {
        let (denied, exists) = {
            let state = self.state.borrow();
            (
                state.denied_pids.contains(&pid),
                state.threads.iter().any(|t| t.owner_pid == pid),
            )
        };
        if denied {
            return Err(Error::AccessDenied {
                pid,
                source: self.fail(ERROR_ACCESS_DENIED),
            });
        }
        if !exists {
            return Err(Error::ProcessNotFound {
                pid,
                source: self.fail(ERROR_INVALID_PARAMETER),
            });
        }
        self.acquire();
        Ok(FakeProcess {
            pid,
            system: self.clone(),
        })
    }

    fn resolve_primitive(&self, direction: FreezeDirection) -> Option<FakePrimitive> {
        if self.state.borrow().missing_primitives {
            self.fail(ERROR_PROC_NOT_FOUND);
            return None;
        }
        Some(FakePrimitive {
            direction,
            system: self.clone(),
        })
    }

    fn thread_snapshot(&self) -> Result<FakeSnapshot> {
        if self.state.borrow().snapshot_fails {
            return Err(Error::SnapshotFailed {
                source: self.fail(ERROR_ACCESS_DENIED),
            });
        }
        let entries: Vec<ThreadEntry> = self
            .state
            .borrow()
            .threads
            .iter()
            .map(|t| ThreadEntry {
                owner_pid: t.owner_pid,
                tid: t.tid,
            })
            .collect();
        self.acquire();
        Ok(FakeSnapshot {
            entries: entries.into_iter(),
            system: self.clone(),
        })
    }

    fn open_thread(&self, tid: u32) -> Result<FakeThread> {
        let openable = {
            let state = self.state.borrow();
            !state.unopenable_tids.contains(&tid) && state.threads.iter().any(|t| t.tid == tid)
        };
        if !openable {
            return Err(Error::ThreadOpenFailed {
                tid,
                source: self.fail(ERROR_INVALID_PARAMETER),
            });
        }
        self.acquire();
        Ok(FakeThread {
            tid,
            system: self.clone(),
        })
    }

    fn last_os_error(&self) -> OsError {
        describe(self.state.borrow().last_error)
    }

    fn describe_status(&self, status: u32) -> OsError {
        match status {
            STATUS_ACCESS_DENIED => OsError::new(status, "Access is denied."),
            _ => describe(status),
        }
    }
}
