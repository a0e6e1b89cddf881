//! Process identifier allocation over a fixed, closed range.
//!
//! [`PidAllocator`] is a round-robin bitmap allocator modeled after the
//! classic OS pid table: allocation scans forward from a cursor so freshly
//! freed ids are not handed out again immediately, except that releasing a
//! pid below the cursor pulls the cursor back to favor reuse of the lower
//! id. The [`pid`] module layers the usual single-authority pattern on top:
//! one global allocator behind a lock, with RAII handles that release their
//! pid on drop.
//!
//! ```
//! use pid_allocator::PidAllocator;
//!
//! let mut pids = PidAllocator::new(1, 3).unwrap();
//! pids.init().unwrap();
//! assert_eq!(pids.alloc_raw(), 1);
//! assert_eq!(pids.alloc_raw(), 2);
//! pids.dealloc(1);
//! assert_eq!(pids.alloc_raw(), 1);
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[macro_use]
extern crate log;

mod allocator;
mod config;
mod error;
pub mod pid;

pub use allocator::{PidAllocator, PID_FAILED};
pub use config::{DEFAULT_MAX_PID, DEFAULT_MIN_PID};
pub use error::{AllocError, AllocResult};
