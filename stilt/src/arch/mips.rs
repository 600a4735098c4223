//! MIPS-O32: `syscall`, number in v0, the first four arguments in a0
//! through a3, arguments five and six on the stack at offsets 16 and
//! 20 of a 32-byte reservation. Failure is signalled out of band: a3
//! comes back non-zero and v0 carries the positive error magnitude,
//! which gets folded into the uniform-negative form right here so
//! nothing above this module ever sees the flag.
//!
//! Register numbers in the operand lists: $2 v0, $3 v1, $4..$7 a0..a3,
//! $8..$15 t0..t7, $24 t8, $25 t9.

use core::arch::asm;
#[cfg(feature = "start")]
use core::arch::global_asm;

use stilt_abi::Stat;
use stilt_abi::convention::{self, Convention, normalize_flagged};

pub const CONVENTION: &Convention = &convention::MIPS_O32;

#[inline(always)]
pub fn syscall0(nr: usize) -> isize {
    let ret: usize;
    let flag: usize;
    unsafe {
        asm!(
            "syscall",
            inlateout("$2") nr => ret,
            lateout("$7") flag,
            lateout("$3") _,
            lateout("$8") _,
            lateout("$9") _,
            lateout("$10") _,
            lateout("$11") _,
            lateout("$12") _,
            lateout("$13") _,
            lateout("$14") _,
            lateout("$15") _,
            lateout("$24") _,
            lateout("$25") _,
            options(nostack),
        );
    }
    normalize_flagged(flag, ret)
}

#[inline(always)]
pub fn syscall1(nr: usize, a1: usize) -> isize {
    let ret: usize;
    let flag: usize;
    unsafe {
        asm!(
            "syscall",
            inlateout("$2") nr => ret,
            in("$4") a1,
            lateout("$7") flag,
            lateout("$3") _,
            lateout("$8") _,
            lateout("$9") _,
            lateout("$10") _,
            lateout("$11") _,
            lateout("$12") _,
            lateout("$13") _,
            lateout("$14") _,
            lateout("$15") _,
            lateout("$24") _,
            lateout("$25") _,
            options(nostack),
        );
    }
    normalize_flagged(flag, ret)
}

#[inline(always)]
pub fn syscall2(nr: usize, a1: usize, a2: usize) -> isize {
    let ret: usize;
    let flag: usize;
    unsafe {
        asm!(
            "syscall",
            inlateout("$2") nr => ret,
            in("$4") a1,
            in("$5") a2,
            lateout("$7") flag,
            lateout("$3") _,
            lateout("$8") _,
            lateout("$9") _,
            lateout("$10") _,
            lateout("$11") _,
            lateout("$12") _,
            lateout("$13") _,
            lateout("$14") _,
            lateout("$15") _,
            lateout("$24") _,
            lateout("$25") _,
            options(nostack),
        );
    }
    normalize_flagged(flag, ret)
}

#[inline(always)]
pub fn syscall3(nr: usize, a1: usize, a2: usize, a3: usize) -> isize {
    let ret: usize;
    let flag: usize;
    unsafe {
        asm!(
            "syscall",
            inlateout("$2") nr => ret,
            in("$4") a1,
            in("$5") a2,
            in("$6") a3,
            lateout("$7") flag,
            lateout("$3") _,
            lateout("$8") _,
            lateout("$9") _,
            lateout("$10") _,
            lateout("$11") _,
            lateout("$12") _,
            lateout("$13") _,
            lateout("$14") _,
            lateout("$15") _,
            lateout("$24") _,
            lateout("$25") _,
            options(nostack),
        );
    }
    normalize_flagged(flag, ret)
}

#[inline(always)]
pub fn syscall4(nr: usize, a1: usize, a2: usize, a3: usize, a4: usize) -> isize {
    let ret: usize;
    let flag: usize;
    unsafe {
        asm!(
            "syscall",
            inlateout("$2") nr => ret,
            in("$4") a1,
            in("$5") a2,
            in("$6") a3,
            inlateout("$7") a4 => flag,
            lateout("$3") _,
            lateout("$8") _,
            lateout("$9") _,
            lateout("$10") _,
            lateout("$11") _,
            lateout("$12") _,
            lateout("$13") _,
            lateout("$14") _,
            lateout("$15") _,
            lateout("$24") _,
            lateout("$25") _,
            options(nostack),
        );
    }
    normalize_flagged(flag, ret)
}

#[inline(always)]
pub fn syscall5(nr: usize, a1: usize, a2: usize, a3: usize, a4: usize, a5: usize) -> isize {
    let ret: usize;
    let flag: usize;
    unsafe {
        asm!(
            "addiu $sp, $sp, -32",
            "sw {a5}, 16($sp)",
            "syscall",
            "addiu $sp, $sp, 32",
            a5 = in(reg) a5,
            inlateout("$2") nr => ret,
            in("$4") a1,
            in("$5") a2,
            in("$6") a3,
            inlateout("$7") a4 => flag,
            lateout("$3") _,
            lateout("$8") _,
            lateout("$9") _,
            lateout("$10") _,
            lateout("$11") _,
            lateout("$12") _,
            lateout("$13") _,
            lateout("$14") _,
            lateout("$15") _,
            lateout("$24") _,
            lateout("$25") _,
        );
    }
    normalize_flagged(flag, ret)
}

#[inline(always)]
pub fn syscall6(
    nr: usize,
    a1: usize,
    a2: usize,
    a3: usize,
    a4: usize,
    a5: usize,
    a6: usize,
) -> isize {
    let ret: usize;
    let flag: usize;
    unsafe {
        asm!(
            "addiu $sp, $sp, -32",
            "sw {a5}, 16($sp)",
            "sw {a6}, 20($sp)",
            "syscall",
            "addiu $sp, $sp, 32",
            a5 = in(reg) a5,
            a6 = in(reg) a6,
            inlateout("$2") nr => ret,
            in("$4") a1,
            in("$5") a2,
            in("$6") a3,
            inlateout("$7") a4 => flag,
            lateout("$3") _,
            lateout("$8") _,
            lateout("$9") _,
            lateout("$10") _,
            lateout("$11") _,
            lateout("$12") _,
            lateout("$13") _,
            lateout("$14") _,
            lateout("$15") _,
            lateout("$24") _,
            lateout("$25") _,
        );
    }
    normalize_flagged(flag, ret)
}

/// The kernel's stat layout for this variant. Heavy on padding; the
/// field order does not match any other port.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct RawStat {
    pub st_dev: u32,
    __pad1: [i32; 3],
    pub st_ino: u32,
    pub st_mode: u32,
    pub st_nlink: u32,
    pub st_uid: u32,
    pub st_gid: u32,
    pub st_rdev: u32,
    __pad2: [i32; 2],
    pub st_size: i32,
    __pad3: i32,
    pub st_atime: i32,
    pub st_atime_nsec: i32,
    pub st_mtime: i32,
    pub st_mtime_nsec: i32,
    pub st_ctime: i32,
    pub st_ctime_nsec: i32,
    pub st_blksize: i32,
    pub st_blocks: i32,
    __pad4: [i32; 14],
}

impl RawStat {
    pub fn widen(&self) -> Stat {
        Stat {
            st_dev: self.st_dev as u64,
            st_ino: self.st_ino as u64,
            st_mode: self.st_mode,
            st_nlink: self.st_nlink,
            st_uid: self.st_uid,
            st_gid: self.st_gid,
            st_rdev: self.st_rdev as u64,
            st_size: self.st_size as i64,
            st_blksize: self.st_blksize as i64,
            st_blocks: self.st_blocks as i64,
            st_atime: self.st_atime as i64,
            st_mtime: self.st_mtime as i64,
            st_ctime: self.st_ctime as i64,
        }
    }
}

// Entry point, symbol `__start` on this port. The bal trick puts the
// address of label 1 in $ra so .cpload can materialize $gp before any
// global access; .cprestore then parks $gp in the 32-byte reservation
// the O32 ABI wants callers to keep below $sp. Delay slots after the
// branches are filled explicitly under noreorder.
#[cfg(feature = "start")]
global_asm!(
    r#"
    .section .text
    .global __start
    .set nomips16
    .type __start, @function
    __start:
        .set push
        .set noreorder
        bal 1f
         nop
    1:
        .cpload $31
        move $a0, $sp
        li $t0, -8
        and $sp, $sp, $t0
        addiu $sp, $sp, -32
        .cprestore 16
        jal {start}
         nop
        .set pop
    "#,
    start = sym crate::crt::start,
);
