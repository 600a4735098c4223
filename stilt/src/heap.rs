//! Freestanding heap: a bump allocator grown with `brk`.
//!
//! The allocator learns the initial program break from the kernel on
//! first use and bumps from there, growing the break a page at a time.
//! Nothing is ever returned; memory comes back when the process exits.
//! With the `start` feature it is installed as the global allocator.

use core::alloc::{GlobalAlloc, Layout};
use core::ptr;
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::errno::set_errno;
use crate::sys;
use crate::Errno;

pub struct BumpAllocator {
    /// Next free address, 0 until the break has been discovered.
    next: AtomicUsize,
    /// Cached program break.
    brk: AtomicUsize,
}

impl BumpAllocator {
    pub const fn new() -> Self {
        Self {
            next: AtomicUsize::new(0),
            brk: AtomicUsize::new(0),
        }
    }

    /// Ask the kernel where the break currently is and seed both
    /// counters with it.
    fn discover_base(&self) -> bool {
        let base = sys::process::brk(0) as usize;
        if base == 0 {
            return false;
        }
        let _ = self
            .next
            .compare_exchange(0, base, Ordering::AcqRel, Ordering::Acquire);
        let _ = self
            .brk
            .compare_exchange(0, base, Ordering::AcqRel, Ordering::Acquire);
        true
    }

    /// Grow the break until it covers `needed_end`.
    fn ensure_capacity(&self, needed_end: usize) -> bool {
        loop {
            let current = self.brk.load(Ordering::Acquire);
            if current == 0 {
                if !self.discover_base() {
                    return false;
                }
                continue;
            }
            if needed_end <= current {
                return true;
            }
            let wanted = (needed_end + 0xfff) & !0xfff;
            if (sys::process::brk(wanted) as usize) < wanted {
                return false;
            }
            match self
                .brk
                .compare_exchange(current, wanted, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return true,
                Err(_) => continue,
            }
        }
    }
}

impl Default for BumpAllocator {
    fn default() -> Self {
        Self::new()
    }
}

unsafe impl GlobalAlloc for BumpAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let size = layout.size();
        let align = layout.align();

        loop {
            let current = self.next.load(Ordering::Acquire);
            if current == 0 {
                if !self.discover_base() {
                    return ptr::null_mut();
                }
                continue;
            }

            let aligned = (current + align - 1) & !(align - 1);
            let end = match aligned.checked_add(size) {
                Some(end) => end,
                None => return ptr::null_mut(),
            };
            if !self.ensure_capacity(end) {
                return ptr::null_mut();
            }

            match self
                .next
                .compare_exchange(current, end, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return aligned as *mut u8,
                Err(_) => continue,
            }
        }
    }

    unsafe fn dealloc(&self, _ptr: *mut u8, _layout: Layout) {
        // Bump allocation only; the region lives until exit.
    }
}

#[cfg(feature = "start")]
#[global_allocator]
static ALLOCATOR: BumpAllocator = BumpAllocator::new();

/// Move the break by `delta` bytes, returning its previous position,
/// or -1 with errno set to ENOMEM when the kernel refuses.
pub fn sbrk(delta: isize) -> isize {
    let current = sys::process::brk(0);
    if delta == 0 {
        return current;
    }
    let wanted = current.wrapping_add(delta);
    if sys::process::brk(wanted as usize) == wanted {
        current
    } else {
        set_errno(Errno::ENOMEM.raw());
        -1
    }
}

/// Set the break to `addr`. Returns 0, or -1 with errno set to ENOMEM.
pub fn brk(addr: usize) -> isize {
    if sys::process::brk(addr) as usize >= addr {
        0
    } else {
        set_errno(Errno::ENOMEM.raw());
        -1
    }
}

#[cfg(all(test, target_arch = "x86_64", target_os = "linux"))]
mod tests {
    use super::*;

    #[test]
    fn the_break_exists() {
        let _guard = crate::serial_guard();
        // Query only; the host allocator owns the break in this
        // process, so moving it here would be rude.
        assert!(sbrk(0) > 0);
    }
}
