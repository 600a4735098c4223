//! Errno codes and the raw-result demultiplexer.
//!
//! The kernel reports failure by returning `-errno` in the result
//! register. Error codes are small positive integers bounded by
//! [`MAX_ERRNO`], which corresponds to the highest unmapped page of the
//! address space; this guarantees an error can never be mistaken for a
//! valid pointer returned by an address-yielding call.

use core::fmt;

/// Largest errno the kernel will ever encode in a negative result.
pub const MAX_ERRNO: isize = 4095;

/// A kernel error code, always a small positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Errno(pub i32);

impl Errno {
    pub const EPERM: Errno = Errno(1);
    pub const ENOENT: Errno = Errno(2);
    pub const ESRCH: Errno = Errno(3);
    pub const EINTR: Errno = Errno(4);
    pub const EIO: Errno = Errno(5);
    pub const ENXIO: Errno = Errno(6);
    pub const E2BIG: Errno = Errno(7);
    pub const ENOEXEC: Errno = Errno(8);
    pub const EBADF: Errno = Errno(9);
    pub const ECHILD: Errno = Errno(10);
    pub const EAGAIN: Errno = Errno(11);
    pub const ENOMEM: Errno = Errno(12);
    pub const EACCES: Errno = Errno(13);
    pub const EFAULT: Errno = Errno(14);
    pub const EBUSY: Errno = Errno(16);
    pub const EEXIST: Errno = Errno(17);
    pub const EXDEV: Errno = Errno(18);
    pub const ENODEV: Errno = Errno(19);
    pub const ENOTDIR: Errno = Errno(20);
    pub const EISDIR: Errno = Errno(21);
    pub const EINVAL: Errno = Errno(22);
    pub const ENFILE: Errno = Errno(23);
    pub const EMFILE: Errno = Errno(24);
    pub const ENOTTY: Errno = Errno(25);
    pub const ENOSPC: Errno = Errno(28);
    pub const ESPIPE: Errno = Errno(29);
    pub const EROFS: Errno = Errno(30);
    pub const EPIPE: Errno = Errno(32);
    pub const ERANGE: Errno = Errno(34);
    // The numbering is shared up to ERANGE; above it MIPS goes its own
    // way.
    #[cfg(not(target_arch = "mips"))]
    pub const ENOSYS: Errno = Errno(38);
    #[cfg(target_arch = "mips")]
    pub const ENOSYS: Errno = Errno(89);
    #[cfg(not(target_arch = "mips"))]
    pub const ENOTEMPTY: Errno = Errno(39);
    #[cfg(target_arch = "mips")]
    pub const ENOTEMPTY: Errno = Errno(93);

    /// The raw positive code.
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Demultiplex a raw syscall result. A value in `[-MAX_ERRNO, -1]`
    /// is a failure carrying the error code; anything else is success.
    #[inline]
    pub const fn demux(raw: isize) -> core::result::Result<usize, Errno> {
        if raw < 0 && raw >= -MAX_ERRNO {
            Err(Errno(-raw as i32))
        } else {
            Ok(raw as usize)
        }
    }

    /// Short symbolic name, for diagnostics without allocation.
    pub const fn name(self) -> &'static str {
        match self.0 {
            1 => "EPERM",
            2 => "ENOENT",
            3 => "ESRCH",
            4 => "EINTR",
            5 => "EIO",
            6 => "ENXIO",
            7 => "E2BIG",
            8 => "ENOEXEC",
            9 => "EBADF",
            10 => "ECHILD",
            11 => "EAGAIN",
            12 => "ENOMEM",
            13 => "EACCES",
            14 => "EFAULT",
            16 => "EBUSY",
            17 => "EEXIST",
            18 => "EXDEV",
            19 => "ENODEV",
            20 => "ENOTDIR",
            21 => "EISDIR",
            22 => "EINVAL",
            23 => "ENFILE",
            24 => "EMFILE",
            25 => "ENOTTY",
            28 => "ENOSPC",
            29 => "ESPIPE",
            30 => "EROFS",
            32 => "EPIPE",
            34 => "ERANGE",
            #[cfg(not(target_arch = "mips"))]
            38 => "ENOSYS",
            #[cfg(target_arch = "mips")]
            89 => "ENOSYS",
            #[cfg(not(target_arch = "mips"))]
            39 => "ENOTEMPTY",
            #[cfg(target_arch = "mips")]
            93 => "ENOTEMPTY",
            _ => "EUNKNOWN",
        }
    }
}

impl fmt::Display for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.0)
    }
}

impl core::error::Error for Errno {}

/// Result type for the raw syscall layer.
pub type Result<T> = core::result::Result<T, Errno>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_results_pass_through() {
        assert_eq!(Errno::demux(0), Ok(0));
        assert_eq!(Errno::demux(5), Ok(5));
        assert_eq!(Errno::demux(isize::MAX), Ok(isize::MAX as usize));
    }

    #[test]
    fn negative_results_carry_the_code() {
        assert_eq!(Errno::demux(-1), Err(Errno::EPERM));
        assert_eq!(Errno::demux(-9), Err(Errno::EBADF));
        assert_eq!(Errno::demux(-4095), Err(Errno(4095)));
    }

    #[test]
    fn values_below_the_errno_window_are_not_errors() {
        // A pointer-like value with the sign bit set must not be
        // misread as a failure.
        assert_eq!(Errno::demux(-4096), Ok(-4096isize as usize));
        assert_eq!(Errno::demux(isize::MIN), Ok(isize::MIN as usize));
    }

    #[test]
    fn names_are_stable() {
        assert_eq!(Errno::EBADF.name(), "EBADF");
        assert_eq!(Errno::ENOENT.name(), "ENOENT");
        assert_eq!(Errno(4000).name(), "EUNKNOWN");
    }
}
