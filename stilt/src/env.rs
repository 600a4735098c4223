//! Environment access.
//!
//! The bootstrap captures envp once at process entry; lookups walk the
//! captured vector in place. Nothing is copied and nothing mutates, so
//! `getenv` stays allocation-free.

use core::ffi::{CStr, c_char};
use core::ptr;
use core::sync::atomic::{AtomicPtr, Ordering};

static ENVIRON: AtomicPtr<*const u8> = AtomicPtr::new(ptr::null_mut());

/// Record the environment vector. Called once from the bootstrap.
pub(crate) fn capture(envp: *const *const u8) {
    ENVIRON.store(envp as *mut _, Ordering::Release);
}

/// The raw environment vector, null if the runtime did not boot this
/// process.
pub fn environ() -> *const *const u8 {
    ENVIRON.load(Ordering::Acquire) as *const _
}

fn matches_key(entry: *const u8, name: &[u8]) -> bool {
    // A short entry terminates in '=' or NUL, neither of which can
    // match a name byte, so this never reads past the entry.
    unsafe {
        for (i, &b) in name.iter().enumerate() {
            if *entry.add(i) != b {
                return false;
            }
        }
        *entry.add(name.len()) == b'='
    }
}

/// Look up `name` in the captured environment. The match is exact:
/// `"PA"` does not match a `PATH=` entry.
pub fn getenv(name: &str) -> Option<&'static CStr> {
    let envp = environ();
    if envp.is_null() || name.is_empty() {
        return None;
    }
    let key = name.as_bytes();
    let mut i = 0;
    loop {
        let entry = unsafe { *envp.add(i) };
        if entry.is_null() {
            return None;
        }
        if matches_key(entry, key) {
            return Some(unsafe { CStr::from_ptr(entry.add(key.len() + 1) as *const c_char) });
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn getenv_walks_the_captured_vector() {
        let _guard = crate::serial_guard();
        let e0 = b"PATH=/bin:/usr/bin\0";
        let e1 = b"EMPTY=\0";
        let e2 = b"HOME=/root\0";
        let vector: [*const u8; 4] = [e0.as_ptr(), e1.as_ptr(), e2.as_ptr(), ptr::null()];

        capture(vector.as_ptr());
        assert_eq!(getenv("PATH").unwrap().to_bytes(), b"/bin:/usr/bin");
        assert_eq!(getenv("EMPTY").unwrap().to_bytes(), b"");
        assert_eq!(getenv("HOME").unwrap().to_bytes(), b"/root");
        // Prefixes and absent keys miss.
        assert!(getenv("PA").is_none());
        assert!(getenv("TERM").is_none());
        assert!(getenv("").is_none());
        // The vector is stack-allocated here, so drop the capture
        // before it goes out of scope.
        capture(ptr::null());
        assert!(getenv("PATH").is_none());
    }
}
