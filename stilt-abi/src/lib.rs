//! Kernel ABI data shared between the stilt runtime and its tests.
//!
//! This crate contains the per-architecture calling-convention
//! descriptors, syscall-number tables, errno codes and the data types
//! the runtime needs to agree on with the kernel. Everything here is
//! pure data and pure functions: nothing in this crate traps into the
//! kernel, so all of it can be exercised on any host.

#![no_std]

pub mod convention;
pub mod errno;
pub mod flags;
pub mod nr;
pub mod signal;
pub mod types;

pub use convention::{CONVENTIONS, Convention};
pub use errno::{Errno, MAX_ERRNO};
pub use types::{FdSet, Pollfd, Rusage, Stat, Timespec, Timespec64, Timeval, WaitStatus};
