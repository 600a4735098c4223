//! The errno cell and result normalization.
//!
//! The raw layer in [`crate::sys`] returns kernel results verbatim,
//! `-errno` on failure. The surface wrappers feed every such result
//! through [`cvt`] exactly once, which parks the error code in the
//! process-wide cell and collapses the result to `-1`.

use core::sync::atomic::{AtomicI32, Ordering};

use stilt_abi::MAX_ERRNO;

// Relaxed throughout: the cell is plain per-process state with no
// ordering obligation toward any other memory.
static ERRNO: AtomicI32 = AtomicI32::new(0);

/// Error code left behind by the last failed surface call.
#[inline]
pub fn errno() -> i32 {
    ERRNO.load(Ordering::Relaxed)
}

#[inline]
pub fn set_errno(code: i32) {
    ERRNO.store(code, Ordering::Relaxed);
}

/// Normalize a raw kernel result. A value in `[-MAX_ERRNO, -1]` stores
/// its magnitude in the cell and becomes `-1`; everything else passes
/// through untouched, the cell left as it was.
#[inline]
pub(crate) fn cvt(raw: isize) -> isize {
    if raw < 0 && raw >= -MAX_ERRNO {
        set_errno(-raw as i32);
        -1
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_park_the_code_and_collapse() {
        let _guard = crate::serial_guard();
        set_errno(0);
        assert_eq!(cvt(-9), -1);
        assert_eq!(errno(), 9);
        // Repeated failures keep overwriting.
        assert_eq!(cvt(-2), -1);
        assert_eq!(errno(), 2);
    }

    #[test]
    fn successes_leave_the_cell_alone() {
        let _guard = crate::serial_guard();
        set_errno(7);
        assert_eq!(cvt(0), 0);
        assert_eq!(cvt(42), 42);
        assert_eq!(errno(), 7);
    }

    #[test]
    fn pointer_like_negatives_pass_through() {
        let _guard = crate::serial_guard();
        set_errno(0);
        assert_eq!(cvt(-4096), -4096);
        assert_eq!(cvt(isize::MIN), isize::MIN);
        assert_eq!(errno(), 0);
    }
}
