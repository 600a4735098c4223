//! Raw filesystem calls. Paths are NUL-terminated byte pointers.

use stilt_abi::nr;

#[allow(unused_imports)]
use crate::arch::{RawStat, syscall1, syscall2, syscall3, syscall4, syscall5};

#[cfg(not(any(target_arch = "aarch64", target_arch = "riscv32", target_arch = "riscv64")))]
pub unsafe fn open(path: *const u8, flags: u32, mode: u32) -> isize {
    syscall3(nr::OPEN, path as usize, flags as usize, mode as usize)
}

#[cfg(any(target_arch = "aarch64", target_arch = "riscv32", target_arch = "riscv64"))]
pub unsafe fn open(path: *const u8, flags: u32, mode: u32) -> isize {
    syscall4(
        nr::OPENAT,
        nr::AT_FDCWD as usize,
        path as usize,
        flags as usize,
        mode as usize,
    )
}

#[cfg(not(any(target_arch = "aarch64", target_arch = "riscv32", target_arch = "riscv64")))]
pub unsafe fn stat(path: *const u8, buf: *mut RawStat) -> isize {
    syscall2(nr::STAT, path as usize, buf as usize)
}

#[cfg(any(target_arch = "aarch64", target_arch = "riscv32", target_arch = "riscv64"))]
pub unsafe fn stat(path: *const u8, buf: *mut RawStat) -> isize {
    syscall4(
        nr::NEWFSTATAT,
        nr::AT_FDCWD as usize,
        path as usize,
        buf as usize,
        0,
    )
}

#[cfg(not(any(target_arch = "aarch64", target_arch = "riscv32", target_arch = "riscv64")))]
pub unsafe fn mkdir(path: *const u8, mode: u32) -> isize {
    syscall2(nr::MKDIR, path as usize, mode as usize)
}

#[cfg(any(target_arch = "aarch64", target_arch = "riscv32", target_arch = "riscv64"))]
pub unsafe fn mkdir(path: *const u8, mode: u32) -> isize {
    syscall3(nr::MKDIRAT, nr::AT_FDCWD as usize, path as usize, mode as usize)
}

#[cfg(not(any(target_arch = "aarch64", target_arch = "riscv32", target_arch = "riscv64")))]
pub unsafe fn mknod(path: *const u8, mode: u32, dev: usize) -> isize {
    syscall3(nr::MKNOD, path as usize, mode as usize, dev)
}

#[cfg(any(target_arch = "aarch64", target_arch = "riscv32", target_arch = "riscv64"))]
pub unsafe fn mknod(path: *const u8, mode: u32, dev: usize) -> isize {
    syscall4(
        nr::MKNODAT,
        nr::AT_FDCWD as usize,
        path as usize,
        mode as usize,
        dev,
    )
}

#[cfg(not(any(target_arch = "aarch64", target_arch = "riscv32", target_arch = "riscv64")))]
pub unsafe fn link(oldpath: *const u8, newpath: *const u8) -> isize {
    syscall2(nr::LINK, oldpath as usize, newpath as usize)
}

#[cfg(any(target_arch = "aarch64", target_arch = "riscv32", target_arch = "riscv64"))]
pub unsafe fn link(oldpath: *const u8, newpath: *const u8) -> isize {
    syscall5(
        nr::LINKAT,
        nr::AT_FDCWD as usize,
        oldpath as usize,
        nr::AT_FDCWD as usize,
        newpath as usize,
        0,
    )
}

#[cfg(not(any(target_arch = "aarch64", target_arch = "riscv32", target_arch = "riscv64")))]
pub unsafe fn symlink(target: *const u8, linkpath: *const u8) -> isize {
    syscall2(nr::SYMLINK, target as usize, linkpath as usize)
}

#[cfg(any(target_arch = "aarch64", target_arch = "riscv32", target_arch = "riscv64"))]
pub unsafe fn symlink(target: *const u8, linkpath: *const u8) -> isize {
    syscall3(
        nr::SYMLINKAT,
        target as usize,
        nr::AT_FDCWD as usize,
        linkpath as usize,
    )
}

#[cfg(not(any(target_arch = "aarch64", target_arch = "riscv32", target_arch = "riscv64")))]
pub unsafe fn unlink(path: *const u8) -> isize {
    syscall1(nr::UNLINK, path as usize)
}

#[cfg(any(target_arch = "aarch64", target_arch = "riscv32", target_arch = "riscv64"))]
pub unsafe fn unlink(path: *const u8) -> isize {
    syscall3(nr::UNLINKAT, nr::AT_FDCWD as usize, path as usize, 0)
}

#[cfg(not(any(target_arch = "aarch64", target_arch = "riscv32", target_arch = "riscv64")))]
pub unsafe fn chmod(path: *const u8, mode: u32) -> isize {
    syscall2(nr::CHMOD, path as usize, mode as usize)
}

#[cfg(any(target_arch = "aarch64", target_arch = "riscv32", target_arch = "riscv64"))]
pub unsafe fn chmod(path: *const u8, mode: u32) -> isize {
    syscall3(nr::FCHMODAT, nr::AT_FDCWD as usize, path as usize, mode as usize)
}

#[cfg(not(any(target_arch = "aarch64", target_arch = "riscv32", target_arch = "riscv64")))]
pub unsafe fn chown(path: *const u8, owner: u32, group: u32) -> isize {
    syscall3(nr::CHOWN, path as usize, owner as usize, group as usize)
}

#[cfg(any(target_arch = "aarch64", target_arch = "riscv32", target_arch = "riscv64"))]
pub unsafe fn chown(path: *const u8, owner: u32, group: u32) -> isize {
    syscall5(
        nr::FCHOWNAT,
        nr::AT_FDCWD as usize,
        path as usize,
        owner as usize,
        group as usize,
        0,
    )
}

pub unsafe fn chdir(path: *const u8) -> isize {
    syscall1(nr::CHDIR, path as usize)
}

pub unsafe fn chroot(path: *const u8) -> isize {
    syscall1(nr::CHROOT, path as usize)
}

pub unsafe fn mount(
    source: *const u8,
    target: *const u8,
    fstype: *const u8,
    flags: usize,
    data: *const u8,
) -> isize {
    syscall5(
        nr::MOUNT,
        source as usize,
        target as usize,
        fstype as usize,
        flags,
        data as usize,
    )
}

pub unsafe fn umount2(target: *const u8, flags: i32) -> isize {
    syscall2(nr::UMOUNT2, target as usize, flags as usize)
}

pub unsafe fn pivot_root(new_root: *const u8, put_old: *const u8) -> isize {
    syscall2(nr::PIVOT_ROOT, new_root as usize, put_old as usize)
}

pub fn umask(mode: u32) -> isize {
    syscall1(nr::UMASK, mode as usize)
}
