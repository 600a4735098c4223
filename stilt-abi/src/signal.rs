//! Signal numbers.
//!
//! The classic numbering is shared by every variant except MIPS, which
//! kept the IRIX layout: SIGEMT occupies 7 so SIGBUS moves to 10,
//! SIGSYS occupies 12, and SIGUSR1/SIGUSR2/SIGCHLD shift to 16/17/18.

pub const SIGHUP: i32 = 1;
pub const SIGINT: i32 = 2;
pub const SIGQUIT: i32 = 3;
pub const SIGILL: i32 = 4;
pub const SIGTRAP: i32 = 5;
pub const SIGABRT: i32 = 6;
#[cfg(not(target_arch = "mips"))]
pub const SIGBUS: i32 = 7;
#[cfg(target_arch = "mips")]
pub const SIGBUS: i32 = 10;
pub const SIGFPE: i32 = 8;
pub const SIGKILL: i32 = 9;
#[cfg(not(target_arch = "mips"))]
pub const SIGUSR1: i32 = 10;
#[cfg(target_arch = "mips")]
pub const SIGUSR1: i32 = 16;
pub const SIGSEGV: i32 = 11;
#[cfg(not(target_arch = "mips"))]
pub const SIGUSR2: i32 = 12;
#[cfg(target_arch = "mips")]
pub const SIGUSR2: i32 = 17;
pub const SIGPIPE: i32 = 13;
pub const SIGALRM: i32 = 14;
pub const SIGTERM: i32 = 15;
#[cfg(not(target_arch = "mips"))]
pub const SIGCHLD: i32 = 17;
#[cfg(target_arch = "mips")]
pub const SIGCHLD: i32 = 18;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_shared_block_holds_on_every_variant() {
        assert_eq!(SIGHUP, 1);
        assert_eq!(SIGABRT, 6);
        assert_eq!(SIGFPE, 8);
        assert_eq!(SIGKILL, 9);
        assert_eq!(SIGSEGV, 11);
        assert_eq!(SIGPIPE, 13);
        assert_eq!(SIGTERM, 15);
    }

    #[cfg(not(target_arch = "mips"))]
    #[test]
    fn classic_numbering_for_the_signals_mips_moves() {
        assert_eq!(SIGBUS, 7);
        assert_eq!(SIGUSR1, 10);
        assert_eq!(SIGUSR2, 12);
        assert_eq!(SIGCHLD, 17);
    }
}
