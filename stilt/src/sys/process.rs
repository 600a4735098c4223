//! Raw process calls.

use stilt_abi::Rusage;
use stilt_abi::nr;

#[allow(unused_imports)]
use crate::arch::{syscall0, syscall1, syscall2, syscall3, syscall4, syscall5};

/// Terminate the process. The status is passed through unmasked; the
/// surface wrapper owns the low-8-bit truncation. Should the trap
/// somehow return, spinning here is the only sane option left.
pub fn exit(status: i32) -> ! {
    loop {
        syscall1(nr::EXIT, status as usize);
    }
}

pub fn getpid() -> isize {
    syscall0(nr::GETPID)
}

#[cfg(not(any(target_arch = "aarch64", target_arch = "riscv32", target_arch = "riscv64")))]
pub fn fork() -> isize {
    syscall0(nr::FORK)
}

// The modern table spells fork as a clone with no shared state and
// SIGCHLD delivered on exit. All other clone arguments are zero, which
// sidesteps the per-architecture argument-order differences.
#[cfg(any(target_arch = "aarch64", target_arch = "riscv32", target_arch = "riscv64"))]
pub fn fork() -> isize {
    syscall5(nr::CLONE, stilt_abi::signal::SIGCHLD as usize, 0, 0, 0, 0)
}

pub unsafe fn execve(path: *const u8, argv: *const *const u8, envp: *const *const u8) -> isize {
    syscall3(nr::EXECVE, path as usize, argv as usize, envp as usize)
}

pub unsafe fn wait4(pid: i32, status: *mut i32, options: i32, rusage: *mut Rusage) -> isize {
    syscall4(
        nr::WAIT4,
        pid as usize,
        status as usize,
        options as usize,
        rusage as usize,
    )
}

pub fn kill(pid: i32, sig: i32) -> isize {
    syscall2(nr::KILL, pid as usize, sig as usize)
}

pub fn sched_yield() -> isize {
    syscall0(nr::SCHED_YIELD)
}

pub fn setpgid(pid: i32, pgid: i32) -> isize {
    syscall2(nr::SETPGID, pid as usize, pgid as usize)
}

#[cfg(not(any(target_arch = "aarch64", target_arch = "riscv32", target_arch = "riscv64")))]
pub fn getpgrp() -> isize {
    syscall0(nr::GETPGRP)
}

// No getpgrp in the modern table; getpgid(0) asks the same question.
#[cfg(any(target_arch = "aarch64", target_arch = "riscv32", target_arch = "riscv64"))]
pub fn getpgrp() -> isize {
    syscall1(nr::GETPGID, 0)
}

pub fn setsid() -> isize {
    syscall0(nr::SETSID)
}

/// Set the program break, or query it with `addr == 0`. Returns the
/// resulting break; the kernel reports failure by leaving it where it
/// was, never through an errno.
pub fn brk(addr: usize) -> isize {
    syscall1(nr::BRK, addr)
}
