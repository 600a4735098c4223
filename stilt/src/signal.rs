//! Signal delivery to the current process.

pub use stilt_abi::signal::*;

use crate::process;

/// Deliver `sig` to the calling process.
pub fn raise(sig: i32) -> isize {
    process::kill(process::getpid(), sig)
}

/// Abnormal termination: raise SIGABRT and never come back. Should the
/// signal be blocked or handled, spin until something else kills us.
pub fn abort() -> ! {
    raise(SIGABRT);
    loop {
        core::hint::spin_loop();
    }
}

#[cfg(all(test, target_arch = "x86_64", target_os = "linux"))]
mod tests {
    use super::*;

    #[test]
    fn raising_signal_zero_is_a_self_probe() {
        let _guard = crate::serial_guard();
        assert_eq!(raise(0), 0);
    }
}
