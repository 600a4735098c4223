//! Descriptor operations, libc convention: `-1` on failure with the
//! code in the errno cell.

use stilt_abi::{FdSet, Pollfd, Timeval};

use crate::errno::cvt;
use crate::sys;

pub fn read(fd: i32, buf: &mut [u8]) -> isize {
    cvt(unsafe { sys::fd::read(fd, buf.as_mut_ptr(), buf.len()) })
}

pub fn write(fd: i32, buf: &[u8]) -> isize {
    cvt(unsafe { sys::fd::write(fd, buf.as_ptr(), buf.len()) })
}

pub fn close(fd: i32) -> isize {
    cvt(sys::fd::close(fd))
}

pub fn dup(fd: i32) -> isize {
    cvt(sys::fd::dup(fd))
}

pub fn dup2(oldfd: i32, newfd: i32) -> isize {
    cvt(sys::fd::dup2(oldfd, newfd))
}

pub fn dup3(oldfd: i32, newfd: i32, flags: u32) -> isize {
    cvt(sys::fd::dup3(oldfd, newfd, flags))
}

/// # Safety
/// `arg` is whatever the request says it is, often a pointer the
/// kernel writes through.
pub unsafe fn ioctl(fd: i32, request: usize, arg: usize) -> isize {
    cvt(unsafe { sys::fd::ioctl(fd, request, arg) })
}

pub fn poll(fds: &mut [Pollfd], timeout_ms: i32) -> isize {
    cvt(unsafe { sys::fd::poll(fds.as_mut_ptr(), fds.len(), timeout_ms) })
}

fn set_ptr(set: Option<&mut FdSet>) -> *mut FdSet {
    match set {
        Some(s) => s,
        None => core::ptr::null_mut(),
    }
}

/// Wait for readiness on the given sets. On return the sets hold only
/// the ready descriptors and the timeout, if any, holds the unslept
/// remainder.
pub fn select(
    nfds: i32,
    readfds: Option<&mut FdSet>,
    writefds: Option<&mut FdSet>,
    exceptfds: Option<&mut FdSet>,
    timeout: Option<&mut Timeval>,
) -> isize {
    let tvp = match timeout {
        Some(tv) => tv as *mut Timeval,
        None => core::ptr::null_mut(),
    };
    cvt(unsafe {
        sys::fd::select(
            nfds,
            set_ptr(readfds),
            set_ptr(writefds),
            set_ptr(exceptfds),
            tvp,
        )
    })
}

/// Hand the terminal on `fd` to process group `pgrp`.
pub fn tcsetpgrp(fd: i32, pgrp: i32) -> isize {
    cvt(unsafe { sys::fd::ioctl(fd, stilt_abi::nr::TIOCSPGRP, &pgrp as *const i32 as usize) })
}

#[cfg(all(test, target_arch = "x86_64", target_os = "linux"))]
mod tests {
    use super::*;
    use stilt_abi::flags::OpenFlags;

    use crate::errno::{errno, set_errno};
    use crate::{Errno, fs};

    #[test]
    fn write_to_a_bad_descriptor_sets_ebadf() {
        let _guard = crate::serial_guard();
        set_errno(0);
        assert_eq!(write(-1, b"hello"), -1);
        assert_eq!(errno(), Errno::EBADF.raw());
        // A second failure overwrites cleanly.
        assert_eq!(close(-1), -1);
        assert_eq!(errno(), Errno::EBADF.raw());
    }

    #[test]
    fn writes_land_on_dev_null() {
        let _guard = crate::serial_guard();
        let fd = fs::open(c"/dev/null", OpenFlags::WRONLY, 0) as i32;
        assert!(fd >= 0);
        assert_eq!(write(fd, b"hello"), 5);
        assert_eq!(write(fd, b""), 0);
        assert_eq!(close(fd), 0);
    }

    #[test]
    fn dup_clones_and_dup2_targets() {
        let _guard = crate::serial_guard();
        let fd = fs::open(c"/dev/null", OpenFlags::WRONLY, 0) as i32;
        assert!(fd >= 0);
        let copy = dup(fd) as i32;
        assert!(copy >= 0);
        assert_ne!(copy, fd);
        assert_eq!(write(copy, b"x"), 1);
        // Retarget the copy at the original.
        assert_eq!(dup2(fd, copy), copy as isize);
        assert_eq!(close(copy), 0);
        assert_eq!(close(fd), 0);
    }

    #[test]
    fn select_with_a_zero_timeout_returns_immediately() {
        let _guard = crate::serial_guard();
        let mut tv = Timeval::default();
        assert_eq!(select(0, None, None, None, Some(&mut tv)), 0);
        assert_eq!(tv, Timeval::default());
    }

    #[test]
    fn select_reports_a_writable_descriptor() {
        let _guard = crate::serial_guard();
        let fd = fs::open(c"/dev/null", OpenFlags::WRONLY, 0) as i32;
        assert!(fd >= 0);
        let mut wfds = FdSet::new();
        wfds.set(fd);
        let mut tv = Timeval::from_secs(1);
        assert_eq!(select(fd + 1, None, Some(&mut wfds), None, Some(&mut tv)), 1);
        assert!(wfds.contains(fd));
        assert_eq!(close(fd), 0);
    }

    #[test]
    fn poll_sees_dev_null_always_ready() {
        let _guard = crate::serial_guard();
        let fd = fs::open(c"/dev/null", OpenFlags::WRONLY, 0) as i32;
        assert!(fd >= 0);
        let mut fds = [Pollfd {
            fd,
            events: stilt_abi::flags::PollEvents::OUT.bits(),
            revents: 0,
        }];
        assert_eq!(poll(&mut fds, 0), 1);
        assert_ne!(fds[0].revents & stilt_abi::flags::PollEvents::OUT.bits(), 0);
        assert_eq!(close(fd), 0);
    }

    #[test]
    fn tcsetpgrp_rejects_a_non_terminal() {
        let _guard = crate::serial_guard();
        set_errno(0);
        let fd = fs::open(c"/dev/null", OpenFlags::WRONLY, 0) as i32;
        assert!(fd >= 0);
        assert_eq!(tcsetpgrp(fd, crate::process::getpgrp()), -1);
        assert_eq!(errno(), Errno::ENOTTY.raw());
        assert_eq!(close(fd), 0);
    }
}
