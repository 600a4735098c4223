//! Clock reads and interval sleeps.
//!
//! Sleeping rides on `select` with empty descriptor sets. The kernel
//! rewrites the timeout with the unslept remainder, so an interrupted
//! sleep can report how much was left without a second clock read.

use stilt_abi::Timeval;

use crate::errno::cvt;
use crate::fd;
use crate::sys;

pub fn gettimeofday(tv: &mut Timeval) -> isize {
    cvt(unsafe { sys::time::gettimeofday(tv) })
}

/// Seconds since the epoch, or -1 with errno set.
pub fn time() -> isize {
    let mut tv = Timeval::default();
    if gettimeofday(&mut tv) < 0 {
        -1
    } else {
        tv.tv_sec
    }
}

/// Sleep for `seconds`. Returns 0 on a full sleep, or the whole
/// seconds still owed when a signal cut it short.
pub fn sleep(seconds: u32) -> u32 {
    let mut tv = Timeval::from_secs(seconds);
    if fd::select(0, None, None, None, Some(&mut tv)) < 0 {
        tv.remaining_secs()
    } else {
        0
    }
}

/// Sleep for `msecs` milliseconds. Returns 0 on a full sleep, or the
/// milliseconds still owed when interrupted.
pub fn msleep(msecs: u32) -> u32 {
    let mut tv = Timeval::from_msecs(msecs);
    if fd::select(0, None, None, None, Some(&mut tv)) < 0 {
        tv.remaining_msecs()
    } else {
        0
    }
}

/// Sleep for `usecs` microseconds. Returns 0, or -1 with errno set
/// when interrupted.
pub fn usleep(usecs: u32) -> isize {
    let mut tv = Timeval::from_usecs(usecs);
    fd::select(0, None, None, None, Some(&mut tv))
}

#[cfg(all(test, target_arch = "x86_64", target_os = "linux"))]
mod tests {
    use super::*;

    #[test]
    fn the_clock_is_past_the_epoch_of_this_code() {
        let _guard = crate::serial_guard();
        let mut tv = Timeval::default();
        assert_eq!(gettimeofday(&mut tv), 0);
        // Written in 2026; any sane clock reads later than 2023.
        assert!(tv.tv_sec > 1_672_531_200);
        assert!((0..1_000_000).contains(&tv.tv_usec));
        assert!(time() >= tv.tv_sec);
    }

    #[test]
    fn msleep_actually_sleeps() {
        let _guard = crate::serial_guard();
        let before = std::time::Instant::now();
        assert_eq!(msleep(20), 0);
        assert!(before.elapsed() >= std::time::Duration::from_millis(20));
    }

    #[test]
    fn zero_sleeps_return_at_once() {
        let _guard = crate::serial_guard();
        assert_eq!(sleep(0), 0);
        assert_eq!(usleep(0), 0);
    }
}
