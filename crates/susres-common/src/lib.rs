//! susres Common Types
//!
//! Error taxonomy, logging setup and plain data types shared by the core
//! library and the `susres` binary.

pub mod error;
pub mod logging;
pub mod types;

pub use error::{Error, OsError, Result};
pub use logging::{init_cli_logging, init_debug_logging, init_logging, LogConfig};
pub use types::*;

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, trace, warn};
