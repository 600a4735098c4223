//! Process operations, libc convention.

use core::ffi::CStr;

use stilt_abi::flags::WaitFlags;
use stilt_abi::{Rusage, WaitStatus};

use crate::errno::cvt;
use crate::sys;

/// Terminate the process with the low 8 bits of `status`, the only
/// part a waiting parent can observe.
pub fn exit(status: i32) -> ! {
    sys::process::exit(status & 0xff)
}

/// This call cannot fail.
pub fn getpid() -> i32 {
    sys::process::getpid() as i32
}

/// Returns the child's pid in the parent, 0 in the child, -1 on
/// failure.
pub fn fork() -> isize {
    cvt(sys::process::fork())
}

/// # Safety
/// `argv` and `envp` must be null-terminated vectors of pointers to
/// NUL-terminated strings.
pub unsafe fn execve(path: &CStr, argv: *const *const u8, envp: *const *const u8) -> isize {
    cvt(unsafe { sys::process::execve(path.as_ptr() as *const u8, argv, envp) })
}

pub fn wait4(
    pid: i32,
    status: Option<&mut WaitStatus>,
    options: WaitFlags,
    rusage: Option<&mut Rusage>,
) -> isize {
    let mut raw_status = 0i32;
    let statusp = match &status {
        Some(_) => &mut raw_status as *mut i32,
        None => core::ptr::null_mut(),
    };
    let rusagep = match rusage {
        Some(ru) => ru as *mut Rusage,
        None => core::ptr::null_mut(),
    };
    let ret = cvt(unsafe { sys::process::wait4(pid, statusp, options.bits(), rusagep) });
    if ret > 0
        && let Some(out) = status
    {
        *out = WaitStatus(raw_status);
    }
    ret
}

pub fn waitpid(pid: i32, status: Option<&mut WaitStatus>, options: WaitFlags) -> isize {
    wait4(pid, status, options, None)
}

/// Wait for any child.
pub fn wait(status: Option<&mut WaitStatus>) -> isize {
    waitpid(-1, status, WaitFlags::empty())
}

pub fn kill(pid: i32, sig: i32) -> isize {
    cvt(sys::process::kill(pid, sig))
}

pub fn sched_yield() -> isize {
    cvt(sys::process::sched_yield())
}

pub fn setpgid(pid: i32, pgid: i32) -> isize {
    cvt(sys::process::setpgid(pid, pgid))
}

/// This call cannot fail.
pub fn getpgrp() -> i32 {
    sys::process::getpgrp() as i32
}

pub fn setsid() -> isize {
    cvt(sys::process::setsid())
}

#[cfg(all(test, target_arch = "x86_64", target_os = "linux"))]
mod tests {
    use super::*;

    use crate::Errno;
    use crate::errno::{errno, set_errno};

    #[test]
    fn getpid_agrees_with_the_standard_library() {
        let _guard = crate::serial_guard();
        assert_eq!(getpid() as u32, std::process::id());
    }

    #[test]
    fn signal_zero_probes_existence() {
        let _guard = crate::serial_guard();
        assert_eq!(kill(getpid(), 0), 0);
        set_errno(0);
        // Pid 0x7fffffff should not exist.
        assert_eq!(kill(i32::MAX, 0), -1);
        assert_eq!(errno(), Errno::ESRCH.raw());
    }

    #[test]
    fn yielding_always_succeeds() {
        let _guard = crate::serial_guard();
        assert_eq!(sched_yield(), 0);
    }

    #[test]
    fn the_process_group_is_real() {
        let _guard = crate::serial_guard();
        assert!(getpgrp() > 0);
    }

    #[test]
    fn waiting_with_no_children_sets_echild() {
        let _guard = crate::serial_guard();
        set_errno(0);
        assert_eq!(waitpid(-1, None, WaitFlags::WNOHANG), -1);
        assert_eq!(errno(), Errno::ECHILD.raw());
    }

    #[test]
    fn fork_exit_wait_round_trip() {
        let _guard = crate::serial_guard();
        match fork() {
            0 => {
                // Child: leave immediately with a recognizable status.
                // Nothing but the raw exit is safe here.
                exit(42);
            }
            -1 => panic!("fork failed: errno {}", errno()),
            child => {
                let mut status = WaitStatus(0);
                let mut usage = Rusage::default();
                let reaped = wait4(
                    child as i32,
                    Some(&mut status),
                    WaitFlags::empty(),
                    Some(&mut usage),
                );
                assert_eq!(reaped, child);
                assert!(status.exited());
                assert_eq!(status.exit_status(), 42);
            }
        }
    }
}
