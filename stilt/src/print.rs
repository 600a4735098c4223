//! Formatted output over raw descriptor writes.
//!
//! Provides `print!`/`println!` on stdout and `eprint!`/`eprintln!` on
//! stderr. No buffering: each formatting fragment goes straight to the
//! descriptor, with short writes resumed and EINTR retried.

use core::fmt::{self, Write};

use crate::errno::errno;
use crate::fd;
use crate::Errno;

pub const STDIN: i32 = 0;
pub const STDOUT: i32 = 1;
pub const STDERR: i32 = 2;

/// A `fmt::Write` over a file descriptor.
pub struct FdWriter {
    fd: i32,
}

impl FdWriter {
    pub const fn new(fd: i32) -> Self {
        Self { fd }
    }
}

impl Write for FdWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut bytes = s.as_bytes();
        while !bytes.is_empty() {
            match fd::write(self.fd, bytes) {
                n if n > 0 => bytes = &bytes[n as usize..],
                -1 if errno() == Errno::EINTR.raw() => continue,
                _ => return Err(fmt::Error),
            }
        }
        Ok(())
    }
}

#[doc(hidden)]
pub fn _print(fd: i32, args: fmt::Arguments) {
    let _ = FdWriter::new(fd).write_fmt(args);
}

/// Prints to stdout.
#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => {
        $crate::print::_print($crate::print::STDOUT, format_args!($($arg)*))
    };
}

/// Prints to stdout, with a newline.
#[macro_export]
macro_rules! println {
    () => {
        $crate::print!("\n")
    };
    ($($arg:tt)*) => {
        $crate::print!("{}\n", format_args!($($arg)*))
    };
}

/// Prints to stderr.
#[macro_export]
macro_rules! eprint {
    ($($arg:tt)*) => {
        $crate::print::_print($crate::print::STDERR, format_args!($($arg)*))
    };
}

/// Prints to stderr, with a newline.
#[macro_export]
macro_rules! eprintln {
    () => {
        $crate::eprint!("\n")
    };
    ($($arg:tt)*) => {
        $crate::eprint!("{}\n", format_args!($($arg)*))
    };
}

#[cfg(all(test, target_arch = "x86_64", target_os = "linux"))]
mod tests {
    use super::*;
    use stilt_abi::flags::OpenFlags;

    use crate::fs;

    #[test]
    fn formatting_lands_on_the_descriptor() {
        let _guard = crate::serial_guard();
        let devnull = fs::open(c"/dev/null", OpenFlags::WRONLY, 0) as i32;
        assert!(devnull >= 0);
        let mut w = FdWriter::new(devnull);
        assert!(write!(w, "status={} name={}", 7, "stilt").is_ok());
        assert_eq!(fd::close(devnull), 0);
    }

    #[test]
    fn a_closed_descriptor_reports_an_error() {
        let _guard = crate::serial_guard();
        let mut w = FdWriter::new(-1);
        assert!(write!(w, "nope").is_err());
    }
}
