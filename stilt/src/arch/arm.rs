//! ARM EABI: `svc 0`, number in r7, arguments in r0 through r5,
//! result back in r0.

use core::arch::asm;
#[cfg(feature = "start")]
use core::arch::global_asm;

use stilt_abi::Stat;
use stilt_abi::convention::{self, Convention};

pub const CONVENTION: &Convention = &convention::ARM_EABI;

#[inline(always)]
pub fn syscall0(nr: usize) -> isize {
    let ret;
    unsafe {
        asm!(
            "svc 0",
            in("r7") nr,
            lateout("r0") ret,
            options(nostack),
        );
    }
    ret
}

#[inline(always)]
pub fn syscall1(nr: usize, a1: usize) -> isize {
    let ret;
    unsafe {
        asm!(
            "svc 0",
            in("r7") nr,
            inlateout("r0") a1 => ret,
            options(nostack),
        );
    }
    ret
}

#[inline(always)]
pub fn syscall2(nr: usize, a1: usize, a2: usize) -> isize {
    let ret;
    unsafe {
        asm!(
            "svc 0",
            in("r7") nr,
            inlateout("r0") a1 => ret,
            in("r1") a2,
            options(nostack),
        );
    }
    ret
}

#[inline(always)]
pub fn syscall3(nr: usize, a1: usize, a2: usize, a3: usize) -> isize {
    let ret;
    unsafe {
        asm!(
            "svc 0",
            in("r7") nr,
            inlateout("r0") a1 => ret,
            in("r1") a2,
            in("r2") a3,
            options(nostack),
        );
    }
    ret
}

#[inline(always)]
pub fn syscall4(nr: usize, a1: usize, a2: usize, a3: usize, a4: usize) -> isize {
    let ret;
    unsafe {
        asm!(
            "svc 0",
            in("r7") nr,
            inlateout("r0") a1 => ret,
            in("r1") a2,
            in("r2") a3,
            in("r3") a4,
            options(nostack),
        );
    }
    ret
}

#[inline(always)]
pub fn syscall5(nr: usize, a1: usize, a2: usize, a3: usize, a4: usize, a5: usize) -> isize {
    let ret;
    unsafe {
        asm!(
            "svc 0",
            in("r7") nr,
            inlateout("r0") a1 => ret,
            in("r1") a2,
            in("r2") a3,
            in("r3") a4,
            in("r4") a5,
            options(nostack),
        );
    }
    ret
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
    let ret;
    unsafe {
        asm!(
            "svc 0",
            in("r7") nr,
            inlateout("r0") a1 => ret,
            in("r1") a2,
            in("r2") a3,
            in("r3") a4,
            in("r4") a5,
            in("r5") a6,
            options(nostack),
        );
    }
    ret
}

/// The kernel's stat layout for this variant (the `newstat` shape,
/// shared with i386).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct RawStat {
    pub st_dev: u32,
    pub st_ino: u32,
    pub st_mode: u16,
    pub st_nlink: u16,
    pub st_uid: u16,
    pub st_gid: u16,
    pub st_rdev: u32,
    pub st_size: u32,
    pub st_blksize: u32,
    pub st_blocks: u32,
    pub st_atime: u32,
    pub st_atime_nsec: u32,
    pub st_mtime: u32,
    pub st_mtime_nsec: u32,
    pub st_ctime: u32,
    pub st_ctime_nsec: u32,
    __unused4: u32,
    __unused5: u32,
}

impl RawStat {
    pub fn widen(&self) -> Stat {
        Stat {
            st_dev: self.st_dev as u64,
            st_ino: self.st_ino as u64,
            st_mode: self.st_mode as u32,
            st_nlink: self.st_nlink as u32,
            st_uid: self.st_uid as u32,
            st_gid: self.st_gid as u32,
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

// Entry point. Zero the frame pointer and link register so backtraces
// stop here, capture the image pointer, then force the 8-byte stack
// alignment AAPCS requires at public interfaces.
#[cfg(feature = "start")]
global_asm!(
    r#"
    .section .text
    .global _start
    _start:
        mov fp, #0
        mov lr, #0
        mov r0, sp
        bic r3, r0, #7
        mov sp, r3
        bl {start}
    "#,
    start = sym crate::crt::start,
);
