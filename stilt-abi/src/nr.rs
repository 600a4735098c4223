//! Per-architecture syscall-number tables.
//!
//! The numbers are owned by the kernel's ABI headers; these modules
//! transcribe the subset this runtime invokes. Architectures that use
//! the modern asm-generic table (AArch64, RISC-V) never had the legacy
//! calls (`open`, `fork`, `select`, ...); for those the raw layer
//! substitutes the `*at`/`clone`/`pselect6` equivalents, so the two
//! table shapes differ deliberately.

/// Special descriptor meaning "relative to the current directory" for
/// the `*at` family.
pub const AT_FDCWD: isize = -100;

/// Legacy table: x86_64.
pub mod x86_64 {
    pub const READ: usize = 0;
    pub const WRITE: usize = 1;
    pub const OPEN: usize = 2;
    pub const CLOSE: usize = 3;
    pub const STAT: usize = 4;
    pub const POLL: usize = 7;
    pub const BRK: usize = 12;
    pub const IOCTL: usize = 16;
    pub const SELECT: usize = 23;
    pub const SCHED_YIELD: usize = 24;
    pub const DUP: usize = 32;
    pub const DUP2: usize = 33;
    pub const GETPID: usize = 39;
    pub const FORK: usize = 57;
    pub const EXECVE: usize = 59;
    pub const EXIT: usize = 60;
    pub const WAIT4: usize = 61;
    pub const KILL: usize = 62;
    pub const CHDIR: usize = 80;
    pub const MKDIR: usize = 83;
    pub const LINK: usize = 86;
    pub const UNLINK: usize = 87;
    pub const SYMLINK: usize = 88;
    pub const CHMOD: usize = 90;
    pub const CHOWN: usize = 92;
    pub const UMASK: usize = 95;
    pub const GETTIMEOFDAY: usize = 96;
    pub const SETPGID: usize = 109;
    pub const GETPGRP: usize = 111;
    pub const SETSID: usize = 112;
    pub const MKNOD: usize = 133;
    pub const PIVOT_ROOT: usize = 155;
    pub const CHROOT: usize = 161;
    pub const MOUNT: usize = 165;
    pub const UMOUNT2: usize = 166;
    pub const DUP3: usize = 292;

    pub const TIOCSPGRP: usize = 0x5410;
}

/// Legacy table: i386.
pub mod x86 {
    pub const EXIT: usize = 1;
    pub const FORK: usize = 2;
    pub const READ: usize = 3;
    pub const WRITE: usize = 4;
    pub const OPEN: usize = 5;
    pub const CLOSE: usize = 6;
    pub const LINK: usize = 9;
    pub const UNLINK: usize = 10;
    pub const EXECVE: usize = 11;
    pub const CHDIR: usize = 12;
    pub const MKNOD: usize = 14;
    pub const CHMOD: usize = 15;
    pub const MOUNT: usize = 21;
    pub const KILL: usize = 37;
    pub const MKDIR: usize = 39;
    pub const DUP: usize = 41;
    pub const BRK: usize = 45;
    pub const UMOUNT2: usize = 52;
    pub const IOCTL: usize = 54;
    pub const SETPGID: usize = 57;
    pub const UMASK: usize = 60;
    pub const CHROOT: usize = 61;
    pub const DUP2: usize = 63;
    pub const GETPGRP: usize = 65;
    pub const SETSID: usize = 66;
    pub const GETTIMEOFDAY: usize = 78;
    pub const SYMLINK: usize = 83;
    pub const STAT: usize = 106; // newstat
    pub const WAIT4: usize = 114;
    pub const SELECT: usize = 142; // _newselect
    pub const SCHED_YIELD: usize = 158;
    pub const POLL: usize = 168;
    pub const CHOWN: usize = 182;
    pub const PIVOT_ROOT: usize = 217;
    pub const GETPID: usize = 20;
    pub const DUP3: usize = 330;

    pub const TIOCSPGRP: usize = 0x5410;
}

/// Legacy table: ARM EABI. Same historical numbering as i386 except
/// where noted.
pub mod arm_eabi {
    pub const EXIT: usize = 1;
    pub const FORK: usize = 2;
    pub const READ: usize = 3;
    pub const WRITE: usize = 4;
    pub const OPEN: usize = 5;
    pub const CLOSE: usize = 6;
    pub const LINK: usize = 9;
    pub const UNLINK: usize = 10;
    pub const EXECVE: usize = 11;
    pub const CHDIR: usize = 12;
    pub const MKNOD: usize = 14;
    pub const CHMOD: usize = 15;
    pub const GETPID: usize = 20;
    pub const MOUNT: usize = 21;
    pub const KILL: usize = 37;
    pub const MKDIR: usize = 39;
    pub const DUP: usize = 41;
    pub const BRK: usize = 45;
    pub const UMOUNT2: usize = 52;
    pub const IOCTL: usize = 54;
    pub const SETPGID: usize = 57;
    pub const UMASK: usize = 60;
    pub const CHROOT: usize = 61;
    pub const DUP2: usize = 63;
    pub const GETPGRP: usize = 65;
    pub const SETSID: usize = 66;
    pub const GETTIMEOFDAY: usize = 78;
    pub const SYMLINK: usize = 83;
    pub const STAT: usize = 106; // newstat
    pub const WAIT4: usize = 114;
    pub const SELECT: usize = 142; // _newselect
    pub const SCHED_YIELD: usize = 158;
    pub const POLL: usize = 168;
    pub const CHOWN: usize = 182;
    pub const PIVOT_ROOT: usize = 218;
    pub const DUP3: usize = 358;

    pub const TIOCSPGRP: usize = 0x5410;
}

/// Legacy table: MIPS-O32. The historical numbers offset by 4000.
pub mod mips_o32 {
    pub const EXIT: usize = 4001;
    pub const FORK: usize = 4002;
    pub const READ: usize = 4003;
    pub const WRITE: usize = 4004;
    pub const OPEN: usize = 4005;
    pub const CLOSE: usize = 4006;
    pub const LINK: usize = 4009;
    pub const UNLINK: usize = 4010;
    pub const EXECVE: usize = 4011;
    pub const CHDIR: usize = 4012;
    pub const MKNOD: usize = 4014;
    pub const CHMOD: usize = 4015;
    pub const GETPID: usize = 4020;
    pub const MOUNT: usize = 4021;
    pub const KILL: usize = 4037;
    pub const MKDIR: usize = 4039;
    pub const DUP: usize = 4041;
    pub const BRK: usize = 4045;
    pub const UMOUNT2: usize = 4052;
    pub const IOCTL: usize = 4054;
    pub const SETPGID: usize = 4057;
    pub const UMASK: usize = 4060;
    pub const CHROOT: usize = 4061;
    pub const DUP2: usize = 4063;
    pub const GETPGRP: usize = 4065;
    pub const SETSID: usize = 4066;
    pub const GETTIMEOFDAY: usize = 4078;
    pub const SYMLINK: usize = 4083;
    pub const STAT: usize = 4106; // newstat
    pub const WAIT4: usize = 4114;
    pub const SELECT: usize = 4142; // _newselect
    pub const SCHED_YIELD: usize = 4162;
    pub const POLL: usize = 4188;
    pub const CHOWN: usize = 4202;
    pub const PIVOT_ROOT: usize = 4216;
    pub const DUP3: usize = 4327;

    pub const TIOCSPGRP: usize = 0x8004_7476;
}

/// Modern asm-generic table: AArch64 and RISC-V share it.
pub mod asm_generic {
    pub const DUP: usize = 23;
    pub const DUP3: usize = 24;
    pub const IOCTL: usize = 29;
    pub const MKNODAT: usize = 33;
    pub const MKDIRAT: usize = 34;
    pub const UNLINKAT: usize = 35;
    pub const SYMLINKAT: usize = 36;
    pub const LINKAT: usize = 37;
    pub const UMOUNT2: usize = 39;
    pub const MOUNT: usize = 40;
    pub const PIVOT_ROOT: usize = 41;
    pub const CHDIR: usize = 49;
    pub const CHROOT: usize = 51;
    pub const FCHMODAT: usize = 53;
    pub const FCHOWNAT: usize = 54;
    pub const OPENAT: usize = 56;
    pub const CLOSE: usize = 57;
    pub const READ: usize = 63;
    pub const WRITE: usize = 64;
    pub const PSELECT6: usize = 72;
    pub const PPOLL: usize = 73;
    pub const NEWFSTATAT: usize = 79;
    pub const EXIT: usize = 93;
    pub const SCHED_YIELD: usize = 124;
    pub const KILL: usize = 129;
    pub const SETPGID: usize = 154;
    pub const GETPGID: usize = 155;
    pub const SETSID: usize = 157;
    pub const UMASK: usize = 166;
    pub const GETTIMEOFDAY: usize = 169;
    pub const GETPID: usize = 172;
    pub const BRK: usize = 214;
    pub const CLONE: usize = 220;
    pub const EXECVE: usize = 221;
    pub const WAIT4: usize = 260;

    // The 32-bit ports of this table (rv32) are time64-only: they
    // never got gettimeofday/pselect6/ppoll, so the raw layer invokes
    // these wide-timespec replacements there.
    pub const CLOCK_GETTIME64: usize = 403;
    pub const PSELECT6_TIME64: usize = 413;
    pub const PPOLL_TIME64: usize = 414;

    pub const TIOCSPGRP: usize = 0x5410;
}

#[cfg(target_arch = "x86_64")]
pub use x86_64::*;

#[cfg(target_arch = "x86")]
pub use x86::*;

#[cfg(target_arch = "arm")]
pub use arm_eabi::*;

#[cfg(target_arch = "mips")]
pub use mips_o32::*;

#[cfg(any(target_arch = "aarch64", target_arch = "riscv32", target_arch = "riscv64"))]
pub use asm_generic::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_tables_agree_on_the_historical_block() {
        // i386, ARM EABI and MIPS-O32 (offset by 4000) inherited the
        // same early-Unix numbering for the oldest calls.
        assert_eq!(x86::EXIT, arm_eabi::EXIT);
        assert_eq!(x86::OPEN, arm_eabi::OPEN);
        assert_eq!(x86::WAIT4, arm_eabi::WAIT4);
        assert_eq!(x86::EXIT + 4000, mips_o32::EXIT);
        assert_eq!(x86::OPEN + 4000, mips_o32::OPEN);
        assert_eq!(x86::SELECT + 4000, mips_o32::SELECT);
    }

    #[test]
    fn time64_replacements_live_in_the_shared_tail() {
        // The wide-timespec calls were appended above 402 on every
        // architecture at once; they never collide with the time32
        // numbers they replace.
        assert_eq!(asm_generic::CLOCK_GETTIME64, 403);
        assert_eq!(asm_generic::PSELECT6_TIME64, 413);
        assert_eq!(asm_generic::PPOLL_TIME64, 414);
        assert_ne!(asm_generic::PSELECT6_TIME64, asm_generic::PSELECT6);
        assert_ne!(asm_generic::PPOLL_TIME64, asm_generic::PPOLL);
    }
}
