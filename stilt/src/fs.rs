//! Filesystem operations, libc convention. Paths are `&CStr` so the
//! NUL terminator the kernel needs is part of the type.

use core::ffi::CStr;

use stilt_abi::Stat;
use stilt_abi::flags::{MountFlags, OpenFlags};

use crate::arch::RawStat;
use crate::errno::cvt;
use crate::sys;

fn p(path: &CStr) -> *const u8 {
    path.as_ptr() as *const u8
}

pub fn open(path: &CStr, flags: OpenFlags, mode: u32) -> isize {
    cvt(unsafe { sys::fs::open(p(path), flags.bits(), mode) })
}

/// Stat `path` into the architecture-independent [`Stat`]. The
/// kernel's per-variant layout never escapes this function.
pub fn stat(path: &CStr, out: &mut Stat) -> isize {
    let mut raw = RawStat::default();
    let ret = cvt(unsafe { sys::fs::stat(p(path), &mut raw) });
    if ret == 0 {
        *out = raw.widen();
    }
    ret
}

pub fn mkdir(path: &CStr, mode: u32) -> isize {
    cvt(unsafe { sys::fs::mkdir(p(path), mode) })
}

pub fn mknod(path: &CStr, mode: u32, dev: u64) -> isize {
    cvt(unsafe { sys::fs::mknod(p(path), mode, dev as usize) })
}

pub fn link(oldpath: &CStr, newpath: &CStr) -> isize {
    cvt(unsafe { sys::fs::link(p(oldpath), p(newpath)) })
}

pub fn symlink(target: &CStr, linkpath: &CStr) -> isize {
    cvt(unsafe { sys::fs::symlink(p(target), p(linkpath)) })
}

pub fn unlink(path: &CStr) -> isize {
    cvt(unsafe { sys::fs::unlink(p(path)) })
}

pub fn chmod(path: &CStr, mode: u32) -> isize {
    cvt(unsafe { sys::fs::chmod(p(path), mode) })
}

pub fn chown(path: &CStr, owner: u32, group: u32) -> isize {
    cvt(unsafe { sys::fs::chown(p(path), owner, group) })
}

pub fn chdir(path: &CStr) -> isize {
    cvt(unsafe { sys::fs::chdir(p(path)) })
}

pub fn chroot(path: &CStr) -> isize {
    cvt(unsafe { sys::fs::chroot(p(path)) })
}

pub fn mount(
    source: &CStr,
    target: &CStr,
    fstype: &CStr,
    flags: MountFlags,
    data: Option<&CStr>,
) -> isize {
    let data = data.map_or(core::ptr::null(), |d| p(d));
    cvt(unsafe { sys::fs::mount(p(source), p(target), p(fstype), flags.bits(), data) })
}

pub fn umount2(target: &CStr, flags: i32) -> isize {
    cvt(unsafe { sys::fs::umount2(p(target), flags) })
}

pub fn pivot_root(new_root: &CStr, put_old: &CStr) -> isize {
    cvt(unsafe { sys::fs::pivot_root(p(new_root), p(put_old)) })
}

/// Set the file-mode creation mask, returning the previous one. This
/// call cannot fail.
pub fn umask(mode: u32) -> u32 {
    sys::fs::umask(mode) as u32
}

#[cfg(all(test, target_arch = "x86_64", target_os = "linux"))]
mod tests {
    use super::*;
    use std::ffi::CString;
    use std::format;

    use crate::errno::{errno, set_errno};
    use crate::{Errno, fd};

    fn scratch_path(tag: &str) -> CString {
        CString::new(format!("/tmp/stilt-{}-{}", tag, crate::process::getpid())).unwrap()
    }

    #[test]
    fn stat_sees_the_root_directory() {
        let _guard = crate::serial_guard();
        let mut st = Stat::default();
        assert_eq!(stat(c"/", &mut st), 0);
        assert!(st.is_dir());
        assert!(st.st_nlink >= 1);
    }

    #[test]
    fn stat_classifies_a_character_device() {
        let _guard = crate::serial_guard();
        let mut st = Stat::default();
        assert_eq!(stat(c"/dev/null", &mut st), 0);
        assert!(st.is_chr());
        assert_eq!(st.st_rdev, stilt_abi::types::makedev(1, 3));
    }

    #[test]
    fn create_write_stat_unlink_round_trip() {
        let _guard = crate::serial_guard();
        let path = scratch_path("file");
        let fd = open(
            &path,
            OpenFlags::WRONLY | OpenFlags::CREAT | OpenFlags::TRUNC,
            0o644,
        ) as i32;
        assert!(fd >= 0);
        assert_eq!(fd::write(fd, b"payload"), 7);
        assert_eq!(fd::close(fd), 0);

        let mut st = Stat::default();
        assert_eq!(stat(&path, &mut st), 0);
        assert!(st.is_reg());
        assert_eq!(st.st_size, 7);

        assert_eq!(unlink(&path), 0);
        set_errno(0);
        assert_eq!(stat(&path, &mut st), -1);
        assert_eq!(errno(), Errno::ENOENT.raw());
    }

    #[test]
    fn exclusive_create_refuses_a_second_time() {
        let _guard = crate::serial_guard();
        let path = scratch_path("excl");
        let flags = OpenFlags::WRONLY | OpenFlags::CREAT | OpenFlags::EXCL;
        let fd = open(&path, flags, 0o600) as i32;
        assert!(fd >= 0);
        assert_eq!(fd::close(fd), 0);

        set_errno(0);
        assert_eq!(open(&path, flags, 0o600), -1);
        assert_eq!(errno(), Errno::EEXIST.raw());
        assert_eq!(unlink(&path), 0);
    }

    #[test]
    fn symlink_stats_through_to_its_target() {
        let _guard = crate::serial_guard();
        let path = scratch_path("link");
        assert_eq!(symlink(c"/dev/null", &path), 0);
        let mut st = Stat::default();
        // stat follows the link; the target is the device node.
        assert_eq!(stat(&path, &mut st), 0);
        assert!(st.is_chr());
        assert_eq!(unlink(&path), 0);
    }

    #[test]
    fn chdir_to_a_missing_directory_sets_enoent() {
        let _guard = crate::serial_guard();
        set_errno(0);
        assert_eq!(chdir(c"/stilt-no-such-directory"), -1);
        assert_eq!(errno(), Errno::ENOENT.raw());
    }

    #[test]
    fn umask_returns_the_previous_mask() {
        let _guard = crate::serial_guard();
        let old = umask(0o027);
        assert_eq!(umask(old), 0o027);
    }
}
