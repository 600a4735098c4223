//! Flag words the kernel interprets bit-by-bit.
//!
//! `open` flag values are one of the few places the architectures
//! disagree: MIPS assigned different bits to the historical flags, so
//! the `OpenFlags` table is selected per target.

use bitflags::bitflags;

bitflags! {
    /// Flags for `open`/`openat`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct OpenFlags: u32 {
        const RDONLY = 0x0000;
        const WRONLY = 0x0001;
        const RDWR = 0x0002;
        #[cfg(not(target_arch = "mips"))]
        const CREAT = 0x0040;
        #[cfg(not(target_arch = "mips"))]
        const EXCL = 0x0080;
        #[cfg(not(target_arch = "mips"))]
        const NOCTTY = 0x0100;
        #[cfg(not(target_arch = "mips"))]
        const TRUNC = 0x0200;
        #[cfg(not(target_arch = "mips"))]
        const APPEND = 0x0400;
        #[cfg(not(target_arch = "mips"))]
        const NONBLOCK = 0x0800;
        #[cfg(target_arch = "mips")]
        const APPEND = 0x0008;
        #[cfg(target_arch = "mips")]
        const NONBLOCK = 0x0080;
        #[cfg(target_arch = "mips")]
        const CREAT = 0x0100;
        #[cfg(target_arch = "mips")]
        const TRUNC = 0x0200;
        #[cfg(target_arch = "mips")]
        const EXCL = 0x0400;
        #[cfg(target_arch = "mips")]
        const NOCTTY = 0x0800;
        const DIRECTORY = 0x1_0000;
    }
}

bitflags! {
    /// Options for `wait4`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct WaitFlags: i32 {
        const WNOHANG = 1;
        const WUNTRACED = 2;
    }
}

bitflags! {
    /// Mount-time behavior flags for `mount`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MountFlags: usize {
        const RDONLY = 0x0001;
        const NOSUID = 0x0002;
        const NODEV = 0x0004;
        const NOEXEC = 0x0008;
        const SYNCHRONOUS = 0x0010;
        const REMOUNT = 0x0020;
        const NOATIME = 0x0400;
        const BIND = 0x1000;
        const MOVE = 0x2000;
    }
}

bitflags! {
    /// Event bits for `poll`/`ppoll`, both requested and returned.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PollEvents: i16 {
        const IN = 0x0001;
        const PRI = 0x0002;
        const OUT = 0x0004;
        const ERR = 0x0008;
        const HUP = 0x0010;
        const NVAL = 0x0020;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_modes_occupy_the_low_bits() {
        assert_eq!(OpenFlags::RDONLY.bits(), 0);
        assert_eq!(
            (OpenFlags::WRONLY | OpenFlags::RDWR).bits() & !0x3,
            0,
            "access modes must stay in the low two bits"
        );
    }

    #[cfg(not(target_arch = "mips"))]
    #[test]
    fn creat_trunc_combo_matches_the_kernel_header() {
        let flags = OpenFlags::WRONLY | OpenFlags::CREAT | OpenFlags::TRUNC;
        assert_eq!(flags.bits(), 0x241);
    }

    #[test]
    fn poll_error_bits_are_distinct_from_readiness() {
        let readiness = PollEvents::IN | PollEvents::OUT;
        let errors = PollEvents::ERR | PollEvents::HUP | PollEvents::NVAL;
        assert!(readiness.intersection(errors).is_empty());
    }
}
