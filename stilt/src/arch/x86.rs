//! i386: `int 0x80`, number in eax, arguments in
//! ebx/ecx/edx/esi/edi/ebp, result back in eax.
//!
//! ebx and ebp are reserved by the code generator, so they cannot be
//! named as asm operands. For up to four arguments a scratch register
//! is swapped into ebx around the trap; the five and six argument
//! forms run out of registers entirely and instead load ebx (and ebp)
//! from a small argument block whose address travels in eax.

use core::arch::asm;
#[cfg(feature = "start")]
use core::arch::global_asm;

use stilt_abi::Stat;
use stilt_abi::convention::{self, Convention};

pub const CONVENTION: &Convention = &convention::X86;

#[inline(always)]
pub fn syscall0(nr: usize) -> isize {
    let ret;
    unsafe {
        asm!(
            "int 0x80",
            inlateout("eax") nr => ret,
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
            "xchg {a1}, ebx",
            "int 0x80",
            "xchg {a1}, ebx",
            a1 = inout(reg) a1 => _,
            inlateout("eax") nr => ret,
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
            "xchg {a1}, ebx",
            "int 0x80",
            "xchg {a1}, ebx",
            a1 = inout(reg) a1 => _,
            inlateout("eax") nr => ret,
            in("ecx") a2,
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
            "xchg {a1}, ebx",
            "int 0x80",
            "xchg {a1}, ebx",
            a1 = inout(reg) a1 => _,
            inlateout("eax") nr => ret,
            in("ecx") a2,
            in("edx") a3,
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
            "xchg {a1}, ebx",
            "int 0x80",
            "xchg {a1}, ebx",
            a1 = inout(reg) a1 => _,
            inlateout("eax") nr => ret,
            in("ecx") a2,
            in("edx") a3,
            in("esi") a4,
            options(nostack),
        );
    }
    ret
}

#[inline(always)]
pub fn syscall5(nr: usize, a1: usize, a2: usize, a3: usize, a4: usize, a5: usize) -> isize {
    let ret;
    let block = [a1, nr];
    unsafe {
        asm!(
            "push ebx",
            "mov ebx, dword ptr [eax]",
            "mov eax, dword ptr [eax + 4]",
            "int 0x80",
            "pop ebx",
            inlateout("eax") block.as_ptr() => ret,
            in("ecx") a2,
            in("edx") a3,
            in("esi") a4,
            in("edi") a5,
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
    let block = [a1, a6, nr];
    unsafe {
        asm!(
            "push ebp",
            "push ebx",
            "mov ebx, dword ptr [eax]",
            "mov ebp, dword ptr [eax + 4]",
            "mov eax, dword ptr [eax + 8]",
            "int 0x80",
            "pop ebx",
            "pop ebp",
            inlateout("eax") block.as_ptr() => ret,
            in("ecx") a2,
            in("edx") a3,
            in("esi") a4,
            in("edi") a5,
        );
    }
    ret
}

/// The kernel's stat layout for this variant (the `newstat` shape).
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

// Entry point. The image pointer is captured before alignment, then
// pushed as the single stack argument; the sub keeps the stack
// 16-byte aligned at the call as the psABI requires.
#[cfg(feature = "start")]
global_asm!(
    r#"
    .section .text
    .global _start
    _start:
        xor ebp, ebp
        mov eax, esp
        and esp, -16
        sub esp, 12
        push eax
        call {start}
        hlt
    "#,
    start = sym crate::crt::start,
);
