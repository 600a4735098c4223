//! Kernel data types shared across the syscall surface.
//!
//! Layouts mirror what the kernel reads and writes; field types use
//! `isize`/`usize` where the kernel ABI says `long`, so the same
//! definitions hold on 32-bit and 64-bit variants.

use core::fmt;

/// Microsecond-resolution interval, as consumed by `select` and
/// `gettimeofday`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timeval {
    pub tv_sec: isize,
    pub tv_usec: isize,
}

impl Timeval {
    #[inline]
    pub const fn from_secs(secs: u32) -> Timeval {
        Timeval {
            tv_sec: secs as isize,
            tv_usec: 0,
        }
    }

    #[inline]
    pub const fn from_msecs(msecs: u32) -> Timeval {
        Timeval {
            tv_sec: (msecs / 1000) as isize,
            tv_usec: ((msecs % 1000) * 1000) as isize,
        }
    }

    #[inline]
    pub const fn from_usecs(usecs: u32) -> Timeval {
        Timeval {
            tv_sec: (usecs / 1_000_000) as isize,
            tv_usec: (usecs % 1_000_000) as isize,
        }
    }

    /// Remaining whole seconds after an interrupted wait, rounding any
    /// leftover microseconds up so the caller never undersleeps.
    #[inline]
    pub const fn remaining_secs(&self) -> u32 {
        self.tv_sec as u32 + (self.tv_usec != 0) as u32
    }

    /// Remaining milliseconds after an interrupted wait, rounding
    /// leftover microseconds up.
    #[inline]
    pub const fn remaining_msecs(&self) -> u32 {
        (self.tv_sec as u32) * 1000
            + (self.tv_usec as u32) / 1000
            + ((self.tv_usec as u32) % 1000 != 0) as u32
    }
}

/// Nanosecond-resolution interval, as consumed by `pselect6`/`ppoll`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timespec {
    pub tv_sec: isize,
    pub tv_nsec: isize,
}

impl From<Timeval> for Timespec {
    #[inline]
    fn from(tv: Timeval) -> Timespec {
        Timespec {
            tv_sec: tv.tv_sec,
            tv_nsec: tv.tv_usec * 1000,
        }
    }
}

impl From<Timespec> for Timeval {
    #[inline]
    fn from(ts: Timespec) -> Timeval {
        Timeval {
            tv_sec: ts.tv_sec,
            tv_usec: ts.tv_nsec / 1000,
        }
    }
}

/// Nanosecond-resolution interval with 64-bit fields on every word
/// size, as consumed by the `*_time64` calls the 32-bit asm-generic
/// ports use in place of `pselect6`/`ppoll`/`gettimeofday`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timespec64 {
    pub tv_sec: i64,
    pub tv_nsec: i64,
}

impl From<Timeval> for Timespec64 {
    #[inline]
    fn from(tv: Timeval) -> Timespec64 {
        Timespec64 {
            tv_sec: tv.tv_sec as i64,
            tv_nsec: tv.tv_usec as i64 * 1000,
        }
    }
}

impl From<Timespec64> for Timeval {
    #[inline]
    fn from(ts: Timespec64) -> Timeval {
        Timeval {
            tv_sec: ts.tv_sec as isize,
            tv_usec: (ts.tv_nsec / 1000) as isize,
        }
    }
}

/// One descriptor's interest set for `poll`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pollfd {
    pub fd: i32,
    pub events: i16,
    pub revents: i16,
}

/// Number of descriptors an [`FdSet`] can track.
pub const FD_SETSIZE: usize = 256;

const FD_WORD_BITS: usize = usize::BITS as usize;

/// Fixed-size descriptor bitmap for `select`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FdSet {
    bits: [usize; FD_SETSIZE / FD_WORD_BITS],
}

impl FdSet {
    #[inline]
    pub const fn new() -> FdSet {
        FdSet {
            bits: [0; FD_SETSIZE / FD_WORD_BITS],
        }
    }

    /// Clear every descriptor.
    pub fn zero(&mut self) {
        self.bits = [0; FD_SETSIZE / FD_WORD_BITS];
    }

    /// Add `fd` to the set. Out-of-range descriptors are ignored.
    pub fn set(&mut self, fd: i32) {
        if (0..FD_SETSIZE as i32).contains(&fd) {
            self.bits[fd as usize / FD_WORD_BITS] |= 1 << (fd as usize % FD_WORD_BITS);
        }
    }

    /// Remove `fd` from the set.
    pub fn clear(&mut self, fd: i32) {
        if (0..FD_SETSIZE as i32).contains(&fd) {
            self.bits[fd as usize / FD_WORD_BITS] &= !(1 << (fd as usize % FD_WORD_BITS));
        }
    }

    /// Whether `fd` is in the set.
    pub fn contains(&self, fd: i32) -> bool {
        if (0..FD_SETSIZE as i32).contains(&fd) {
            self.bits[fd as usize / FD_WORD_BITS] & (1 << (fd as usize % FD_WORD_BITS)) != 0
        } else {
            false
        }
    }
}

impl Default for FdSet {
    fn default() -> FdSet {
        FdSet::new()
    }
}

/// Resource usage accounting filled in by `wait4`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Rusage {
    pub ru_utime: Timeval,
    pub ru_stime: Timeval,
    pub ru_maxrss: isize,
    pub ru_ixrss: isize,
    pub ru_idrss: isize,
    pub ru_isrss: isize,
    pub ru_minflt: isize,
    pub ru_majflt: isize,
    pub ru_nswap: isize,
    pub ru_inblock: isize,
    pub ru_oublock: isize,
    pub ru_msgsnd: isize,
    pub ru_msgrcv: isize,
    pub ru_nsignals: isize,
    pub ru_nvcsw: isize,
    pub ru_nivcsw: isize,
}

// File-type bits of st_mode. Octal, as the kernel defines them.
pub const S_IFMT: u32 = 0o170000;
pub const S_IFSOCK: u32 = 0o140000;
pub const S_IFLNK: u32 = 0o120000;
pub const S_IFREG: u32 = 0o100000;
pub const S_IFBLK: u32 = 0o060000;
pub const S_IFDIR: u32 = 0o040000;
pub const S_IFCHR: u32 = 0o020000;
pub const S_IFIFO: u32 = 0o010000;

/// Architecture-independent file metadata. The raw layer converts the
/// kernel's per-architecture stat layout into this.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Stat {
    pub st_dev: u64,
    pub st_ino: u64,
    pub st_mode: u32,
    pub st_nlink: u32,
    pub st_uid: u32,
    pub st_gid: u32,
    pub st_rdev: u64,
    pub st_size: i64,
    pub st_blksize: i64,
    pub st_blocks: i64,
    pub st_atime: i64,
    pub st_mtime: i64,
    pub st_ctime: i64,
}

impl Stat {
    #[inline]
    pub const fn is_dir(&self) -> bool {
        self.st_mode & S_IFMT == S_IFDIR
    }

    #[inline]
    pub const fn is_reg(&self) -> bool {
        self.st_mode & S_IFMT == S_IFREG
    }

    #[inline]
    pub const fn is_chr(&self) -> bool {
        self.st_mode & S_IFMT == S_IFCHR
    }

    #[inline]
    pub const fn is_lnk(&self) -> bool {
        self.st_mode & S_IFMT == S_IFLNK
    }
}

/// Status word reported by `wait4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitStatus(pub i32);

impl WaitStatus {
    /// Whether the child terminated by calling exit.
    #[inline]
    pub const fn exited(self) -> bool {
        self.0 & 0x7f == 0
    }

    /// The low 8 bits the child passed to exit. Only meaningful when
    /// [`exited`](Self::exited) is true.
    #[inline]
    pub const fn exit_status(self) -> i32 {
        (self.0 & 0xff00) >> 8
    }

    /// The signal that terminated the child, if any.
    #[inline]
    pub const fn term_signal(self) -> Option<i32> {
        if self.exited() { None } else { Some(self.0 & 0x7f) }
    }
}

impl fmt::Display for WaitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exited() {
            write!(f, "exited with {}", self.exit_status())
        } else {
            write!(f, "killed by signal {}", self.0 & 0x7f)
        }
    }
}

/// Pack a major/minor pair into a device number. Only the first 4096
/// majors and 256 minors are representable.
#[inline]
pub const fn makedev(major: u32, minor: u32) -> u64 {
    (((major & 0xfff) << 8) | (minor & 0xff)) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fd_set_tracks_membership() {
        let mut set = FdSet::new();
        assert!(!set.contains(0));
        set.set(0);
        set.set(63);
        set.set(64);
        set.set(255);
        assert!(set.contains(0));
        assert!(set.contains(63));
        assert!(set.contains(64));
        assert!(set.contains(255));
        set.clear(63);
        assert!(!set.contains(63));
        // Out of range is a no-op on both sides.
        set.set(-1);
        set.set(256);
        assert!(!set.contains(-1));
        assert!(!set.contains(256));
        set.zero();
        assert!(!set.contains(0));
        assert!(!set.contains(255));
    }

    #[test]
    fn remaining_time_rounds_leftovers_up() {
        let tv = Timeval {
            tv_sec: 2,
            tv_usec: 1,
        };
        assert_eq!(tv.remaining_secs(), 3);
        assert_eq!(tv.remaining_msecs(), 2001);

        let tv = Timeval {
            tv_sec: 2,
            tv_usec: 0,
        };
        assert_eq!(tv.remaining_secs(), 2);
        assert_eq!(tv.remaining_msecs(), 2000);

        let tv = Timeval {
            tv_sec: 0,
            tv_usec: 1500,
        };
        assert_eq!(tv.remaining_msecs(), 2);
    }

    #[test]
    fn timeval_timespec_round_trip() {
        let tv = Timeval {
            tv_sec: 3,
            tv_usec: 250_000,
        };
        let ts = Timespec::from(tv);
        assert_eq!(ts.tv_nsec, 250_000_000);
        assert_eq!(Timeval::from(ts), tv);
    }

    #[test]
    fn the_wide_timespec_stays_wide_on_32_bit_hosts() {
        // The kernel's time64 layout is two i64 fields regardless of
        // the word size; the conversion must not narrow through isize.
        assert_eq!(core::mem::size_of::<Timespec64>(), 16);
        let tv = Timeval {
            tv_sec: 7,
            tv_usec: 250_000,
        };
        let ts = Timespec64::from(tv);
        assert_eq!(ts.tv_sec, 7);
        assert_eq!(ts.tv_nsec, 250_000_000);
        assert_eq!(Timeval::from(ts), tv);
    }

    #[test]
    fn wait_status_decodes_both_outcomes() {
        let clean = WaitStatus(0x2a00);
        assert!(clean.exited());
        assert_eq!(clean.exit_status(), 42);
        assert_eq!(clean.term_signal(), None);

        let killed = WaitStatus(0x0009);
        assert!(!killed.exited());
        assert_eq!(killed.term_signal(), Some(9));
    }

    #[test]
    fn makedev_packs_major_minor() {
        assert_eq!(makedev(1, 3), 0x103); // /dev/null
        assert_eq!(makedev(0xfff, 0xff), 0xfffff);
        assert_eq!(makedev(0x1fff, 0x1ff), 0xfffff); // truncated
    }

    #[test]
    fn mode_helpers_match_the_ifmt_bits() {
        let dir = Stat {
            st_mode: S_IFDIR | 0o755,
            ..Stat::default()
        };
        assert!(dir.is_dir());
        assert!(!dir.is_reg());
        let chr = Stat {
            st_mode: S_IFCHR | 0o666,
            ..Stat::default()
        };
        assert!(chr.is_chr());
    }
}
