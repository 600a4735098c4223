//! Per-architecture trap primitives.
//!
//! Each variant module exports the same surface: `CONVENTION`, the
//! descriptor for its kernel trap ABI, `syscall0` through `syscall6`,
//! and (with the `start` feature) the `_start` trampoline. Exactly one
//! module is compiled per target, so the rest of the crate uses
//! `arch::syscallN` without caring which variant it landed on.
//!
//! Every primitive already returns the uniform-negative result form:
//! the MIPS module folds its flagged convention into `-errno` before
//! returning, so callers never see a boundary register.

#[cfg(target_arch = "x86_64")]
mod x86_64;
#[cfg(target_arch = "x86_64")]
pub use x86_64::*;

#[cfg(target_arch = "x86")]
mod x86;
#[cfg(target_arch = "x86")]
pub use x86::*;

#[cfg(target_arch = "arm")]
mod arm;
#[cfg(target_arch = "arm")]
pub use arm::*;

#[cfg(target_arch = "aarch64")]
mod aarch64;
#[cfg(target_arch = "aarch64")]
pub use aarch64::*;

#[cfg(target_arch = "mips")]
mod mips;
#[cfg(target_arch = "mips")]
pub use mips::*;

#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
mod riscv;
#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
pub use riscv::*;

#[cfg(not(any(
    target_arch = "x86_64",
    target_arch = "x86",
    target_arch = "arm",
    target_arch = "aarch64",
    target_arch = "mips",
    target_arch = "riscv32",
    target_arch = "riscv64",
)))]
compile_error!("no trap primitives for this architecture");

#[cfg(test)]
mod tests {
    use super::*;
    use stilt_abi::convention::CURRENT;

    #[test]
    fn compiled_variant_matches_the_descriptor() {
        assert_eq!(CONVENTION, CURRENT);
    }
}
