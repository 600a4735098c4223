//! The raw syscall layer.
//!
//! One thin wrapper per kernel operation, grouped the way the surface
//! modules group them. Results come back exactly as the kernel (or the
//! MIPS normalization in [`crate::arch`]) produced them: `-errno` on
//! failure, never `-1`-with-a-cell. Pointer-taking wrappers are
//! `unsafe`; everything else is safe to call.
//!
//! The asm-generic ports (AArch64, RISC-V) never had the legacy calls,
//! so the wrappers substitute the modern equivalents there: `openat`
//! for `open`, `clone` for `fork`, `pselect6` for `select`, and the
//! rest of the `*at` family for the path calls. The substitution is
//! invisible to callers.

pub mod fd;
pub mod fs;
pub mod process;
pub mod time;
