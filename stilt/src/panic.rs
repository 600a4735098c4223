//! Freestanding panic behavior: report on stderr, then abort.

use core::fmt::Write;
use core::panic::PanicInfo;

use crate::print::{FdWriter, STDERR};
use crate::signal;

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    let mut out = FdWriter::new(STDERR);
    if let Some(location) = info.location() {
        let _ = write!(out, "panic at {}:{}: ", location.file(), location.line());
    } else {
        let _ = write!(out, "panic: ");
    }
    let _ = writeln!(out, "{}", info.message());
    signal::abort()
}
