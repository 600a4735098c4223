//! A freestanding Linux runtime: syscall invocation primitives, an
//! errno layer and a process bootstrap, with no libc underneath.
//!
//! The crate is split in three layers. [`arch`] holds the per-variant
//! inline-asm trap primitives and the `_start` trampoline. [`sys`]
//! wraps each primitive into a raw call that returns the kernel's
//! result verbatim, `-errno` on failure. The surface modules ([`fd`],
//! [`fs`], [`process`], [`time`], [`signal`]) convert that into the
//! familiar convention: `-1` with the error code parked in the errno
//! cell.
//!
//! With default features the crate builds as an ordinary library and
//! its tests run on a hosted target. The `start` feature adds the
//! pieces only a freestanding binary wants: the `_start` symbol, the
//! panic handler and the global allocator.

#![no_std]
#![cfg_attr(target_arch = "mips", feature(asm_experimental_arch))]

#[cfg(test)]
extern crate std;

pub use stilt_abi as abi;
pub use stilt_abi::errno::Errno;

pub mod arch;
pub mod crt;
pub mod env;
pub mod errno;
pub mod fd;
pub mod fs;
pub mod heap;
pub mod print;
pub mod process;
pub mod signal;
pub mod sys;
pub mod time;

#[cfg(all(feature = "start", not(test)))]
mod panic;

/// Kernel-facing tests share the process-wide errno cell, so they hold
/// this lock to keep the harness's parallel threads off each other.
#[cfg(test)]
pub(crate) fn serial_guard() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(|e| e.into_inner())
}
