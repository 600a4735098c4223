//! Raw time calls.

use stilt_abi::Timeval;
use stilt_abi::nr;

use crate::arch::syscall2;

// The timezone argument survives only for ABI compatibility; the
// kernel wants it null.
#[cfg(not(target_arch = "riscv32"))]
pub unsafe fn gettimeofday(tv: *mut Timeval) -> isize {
    syscall2(nr::GETTIMEOFDAY, tv as usize, 0)
}

// rv32's table is time64-only and never had gettimeofday; read the
// realtime clock through its wide-timespec call and narrow.
#[cfg(target_arch = "riscv32")]
pub unsafe fn gettimeofday(tv: *mut Timeval) -> isize {
    use stilt_abi::Timespec64;

    const CLOCK_REALTIME: usize = 0;

    let mut ts = Timespec64::default();
    let ret = syscall2(
        nr::CLOCK_GETTIME64,
        CLOCK_REALTIME,
        &mut ts as *mut Timespec64 as usize,
    );
    if ret == 0 {
        unsafe { *tv = ts.into() };
    }
    ret
}
