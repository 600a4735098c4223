//! Raw descriptor calls.

use stilt_abi::nr;
use stilt_abi::{FdSet, Pollfd, Timeval};

#[allow(unused_imports)]
use crate::arch::{syscall1, syscall2, syscall3, syscall5, syscall6};

#[cfg(any(target_arch = "aarch64", target_arch = "riscv64"))]
use stilt_abi::Timespec;
// rv32's table is time64-only: ppoll/pselect6 exist solely in their
// wide-timespec forms there.
#[cfg(target_arch = "riscv32")]
use stilt_abi::Timespec64;

pub unsafe fn read(fd: i32, buf: *mut u8, count: usize) -> isize {
    syscall3(nr::READ, fd as usize, buf as usize, count)
}

pub unsafe fn write(fd: i32, buf: *const u8, count: usize) -> isize {
    syscall3(nr::WRITE, fd as usize, buf as usize, count)
}

pub fn close(fd: i32) -> isize {
    syscall1(nr::CLOSE, fd as usize)
}

pub fn dup(fd: i32) -> isize {
    syscall1(nr::DUP, fd as usize)
}

#[cfg(not(any(target_arch = "aarch64", target_arch = "riscv32", target_arch = "riscv64")))]
pub fn dup2(oldfd: i32, newfd: i32) -> isize {
    syscall2(nr::DUP2, oldfd as usize, newfd as usize)
}

// The modern table only has dup3, which unlike dup2 rejects
// oldfd == newfd, so that case short-circuits through dup's own
// validity check on oldfd.
#[cfg(any(target_arch = "aarch64", target_arch = "riscv32", target_arch = "riscv64"))]
pub fn dup2(oldfd: i32, newfd: i32) -> isize {
    if oldfd == newfd {
        let probe = syscall1(nr::DUP, oldfd as usize);
        if probe < 0 {
            return probe;
        }
        close(probe as i32);
        return newfd as isize;
    }
    syscall3(nr::DUP3, oldfd as usize, newfd as usize, 0)
}

pub fn dup3(oldfd: i32, newfd: i32, flags: u32) -> isize {
    syscall3(nr::DUP3, oldfd as usize, newfd as usize, flags as usize)
}

pub unsafe fn ioctl(fd: i32, request: usize, arg: usize) -> isize {
    syscall3(nr::IOCTL, fd as usize, request, arg)
}

#[cfg(not(any(target_arch = "aarch64", target_arch = "riscv32", target_arch = "riscv64")))]
pub unsafe fn poll(fds: *mut Pollfd, nfds: usize, timeout_ms: i32) -> isize {
    syscall3(nr::POLL, fds as usize, nfds, timeout_ms as usize)
}

#[cfg(any(target_arch = "aarch64", target_arch = "riscv64"))]
pub unsafe fn poll(fds: *mut Pollfd, nfds: usize, timeout_ms: i32) -> isize {
    let mut ts = Timespec {
        tv_sec: (timeout_ms / 1000) as isize,
        tv_nsec: ((timeout_ms % 1000) * 1_000_000) as isize,
    };
    // A negative timeout means block forever, which ppoll spells as a
    // null timespec.
    let tsp = if timeout_ms < 0 {
        core::ptr::null_mut()
    } else {
        &mut ts as *mut Timespec
    };
    syscall5(nr::PPOLL, fds as usize, nfds, tsp as usize, 0, 0)
}

#[cfg(target_arch = "riscv32")]
pub unsafe fn poll(fds: *mut Pollfd, nfds: usize, timeout_ms: i32) -> isize {
    let mut ts = Timespec64 {
        tv_sec: (timeout_ms / 1000) as i64,
        tv_nsec: ((timeout_ms % 1000) * 1_000_000) as i64,
    };
    let tsp = if timeout_ms < 0 {
        core::ptr::null_mut()
    } else {
        &mut ts as *mut Timespec64
    };
    syscall5(nr::PPOLL_TIME64, fds as usize, nfds, tsp as usize, 0, 0)
}

#[cfg(not(any(target_arch = "aarch64", target_arch = "riscv32", target_arch = "riscv64")))]
pub unsafe fn select(
    nfds: i32,
    readfds: *mut FdSet,
    writefds: *mut FdSet,
    exceptfds: *mut FdSet,
    timeout: *mut Timeval,
) -> isize {
    syscall5(
        nr::SELECT,
        nfds as usize,
        readfds as usize,
        writefds as usize,
        exceptfds as usize,
        timeout as usize,
    )
}

#[cfg(any(target_arch = "aarch64", target_arch = "riscv64"))]
pub unsafe fn select(
    nfds: i32,
    readfds: *mut FdSet,
    writefds: *mut FdSet,
    exceptfds: *mut FdSet,
    timeout: *mut Timeval,
) -> isize {
    unsafe {
        let mut ts = Timespec::default();
        let tsp = if timeout.is_null() {
            core::ptr::null_mut()
        } else {
            ts = (*timeout).into();
            &mut ts as *mut Timespec
        };
        let ret = syscall6(
            nr::PSELECT6,
            nfds as usize,
            readfds as usize,
            writefds as usize,
            exceptfds as usize,
            tsp as usize,
            0,
        );
        // The kernel writes the unslept remainder back through the
        // timespec; mirror it into the caller's timeval.
        if !timeout.is_null() {
            *timeout = ts.into();
        }
        ret
    }
}

#[cfg(target_arch = "riscv32")]
pub unsafe fn select(
    nfds: i32,
    readfds: *mut FdSet,
    writefds: *mut FdSet,
    exceptfds: *mut FdSet,
    timeout: *mut Timeval,
) -> isize {
    unsafe {
        let mut ts = Timespec64::default();
        let tsp = if timeout.is_null() {
            core::ptr::null_mut()
        } else {
            ts = (*timeout).into();
            &mut ts as *mut Timespec64
        };
        let ret = syscall6(
            nr::PSELECT6_TIME64,
            nfds as usize,
            readfds as usize,
            writefds as usize,
            exceptfds as usize,
            tsp as usize,
            0,
        );
        // Same remainder copy-back as the 64-bit path, through the
        // wide timespec.
        if !timeout.is_null() {
            *timeout = ts.into();
        }
        ret
    }
}
