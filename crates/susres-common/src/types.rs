//! Plain data types shared across susres

use std::fmt;

/// Direction of a whole-process freeze operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreezeDirection {
    Suspend,
    Resume,
}

impl FreezeDirection {
    /// Name of the ntdll export implementing this direction.
    pub fn primitive_name(self) -> &'static str {
        match self {
            FreezeDirection::Suspend => "NtSuspendProcess",
            FreezeDirection::Resume => "NtResumeProcess",
        }
    }
}

/// Derived suspension state of a whole process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateStatus {
    /// Every thread already had at least one pending suspend
    Suspended,
    /// At least one thread was found running
    Running,
}

impl AggregateStatus {
    /// Single-letter code printed by `susres status`.
    pub fn code(self) -> char {
        match self {
            AggregateStatus::Suspended => 'T',
            AggregateStatus::Running => 'R',
        }
    }
}

impl fmt::Display for AggregateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One row of a system-wide thread snapshot.
///
/// The thread may already have exited by the time this is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadEntry {
    pub owner_pid: u32,
    pub tid: u32,
}
