//! AArch64: `svc 0`, number in x8, arguments in x0 through x5,
//! result back in x0.

use core::arch::asm;
#[cfg(feature = "start")]
use core::arch::global_asm;

use stilt_abi::Stat;
use stilt_abi::convention::{self, Convention};

pub const CONVENTION: &Convention = &convention::AARCH64;

#[inline(always)]
pub fn syscall0(nr: usize) -> isize {
    let ret;
    unsafe {
        asm!(
            "svc 0",
            in("x8") nr,
            lateout("x0") ret,
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
            in("x8") nr,
            inlateout("x0") a1 => ret,
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
            in("x8") nr,
            inlateout("x0") a1 => ret,
            in("x1") a2,
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
            in("x8") nr,
            inlateout("x0") a1 => ret,
            in("x1") a2,
            in("x2") a3,
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
            in("x8") nr,
            inlateout("x0") a1 => ret,
            in("x1") a2,
            in("x2") a3,
            in("x3") a4,
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
            in("x8") nr,
            inlateout("x0") a1 => ret,
            in("x1") a2,
            in("x2") a3,
            in("x3") a4,
            in("x4") a5,
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
            in("x8") nr,
            inlateout("x0") a1 => ret,
            in("x1") a2,
            in("x2") a3,
            in("x3") a4,
            in("x4") a5,
            in("x5") a6,
            options(nostack),
        );
    }
    ret
}

/// The kernel's stat layout for this variant (the asm-generic shape).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct RawStat {
    pub st_dev: usize,
    pub st_ino: usize,
    pub st_mode: u32,
    pub st_nlink: u32,
    pub st_uid: u32,
    pub st_gid: u32,
    pub st_rdev: usize,
    __pad1: usize,
    pub st_size: isize,
    pub st_blksize: i32,
    __pad2: i32,
    pub st_blocks: isize,
    pub st_atime: isize,
    pub st_atime_nsec: usize,
    pub st_mtime: isize,
    pub st_mtime_nsec: usize,
    pub st_ctime: isize,
    pub st_ctime_nsec: usize,
    __unused: [u32; 2],
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

// Entry point. Zero the frame pointer and link register, capture the
// image pointer, then re-establish the 16-byte alignment the AAPCS64
// demands of sp at all times.
#[cfg(feature = "start")]
global_asm!(
    r#"
    .section .text
    .global _start
    _start:
        mov x29, xzr
        mov x30, xzr
        mov x0, sp
        and sp, x0, -16
        bl {start}
    "#,
    start = sym crate::crt::start,
);
