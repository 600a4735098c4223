//! Per-architecture syscall calling conventions.
//!
//! One [`Convention`] per supported variant, fixed by the kernel's trap
//! ABI. The runtime selects exactly one of these at build time and its
//! inline-asm primitives must bind registers exactly as described here;
//! a wrong register or a wrong alignment is silently catastrophic, so
//! the descriptor doubles as the checkable source of truth for tests.
//!
//! Two result conventions exist. Most architectures return `-errno` in
//! the result register on failure. MIPS-O32 instead sets a boundary
//! register (`a3`) to non-zero and leaves the positive error magnitude
//! in `v0`; [`normalize_flagged`] folds that into the uniform-negative
//! form before anything above the invocation primitive can see it.

/// Everything the invocation primitive and the bootstrap trampoline
/// must know about one architecture's kernel trap ABI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Convention {
    /// Human-readable variant name.
    pub name: &'static str,
    /// The instruction that transfers control to the kernel.
    pub trap: &'static str,
    /// Register carrying the syscall number.
    pub nr_reg: &'static str,
    /// Argument registers, in order. Never more than six.
    pub arg_regs: &'static [&'static str],
    /// Register carrying the result.
    pub ret_reg: &'static str,
    /// Boundary register that signals failure, if the variant uses the
    /// flagged convention instead of negative results. MIPS-O32 only.
    pub error_flag_reg: Option<&'static str>,
    /// Stack alignment the ABI requires immediately before the trap
    /// and on function entry. Either 8 or 16 bytes.
    pub stack_align: usize,
    /// How many arguments travel in registers before spilling to the
    /// stack. 6 everywhere except MIPS-O32, where arguments 5 and 6 go
    /// on the stack.
    pub reg_args: usize,
    /// Bytes of stack the caller must reserve around the trap so the
    /// callee can spill its argument registers. MIPS-O32 only.
    pub spill_reserve: usize,
    /// Registers the trap clobbers beyond the number/result registers.
    pub clobbers: &'static [&'static str],
    /// Whether the instruction after a branch executes unconditionally
    /// (a delay slot), requiring explicit `nop` sequencing.
    pub delayed_branch: bool,
    /// One-time position-independent-code fixup the entry point must
    /// run before any global data is touched.
    pub pic_bootstrap: Option<&'static str>,
}

pub const X86_64: Convention = Convention {
    name: "x86_64",
    trap: "syscall",
    nr_reg: "rax",
    arg_regs: &["rdi", "rsi", "rdx", "r10", "r8", "r9"],
    ret_reg: "rax",
    error_flag_reg: None,
    stack_align: 16,
    reg_args: 6,
    spill_reserve: 0,
    clobbers: &["rcx", "r11"],
    delayed_branch: false,
    pic_bootstrap: None,
};

pub const X86: Convention = Convention {
    name: "x86",
    trap: "int 0x80",
    nr_reg: "eax",
    arg_regs: &["ebx", "ecx", "edx", "esi", "edi", "ebp"],
    ret_reg: "eax",
    error_flag_reg: None,
    stack_align: 16,
    reg_args: 6,
    spill_reserve: 0,
    clobbers: &[],
    delayed_branch: false,
    pic_bootstrap: None,
};

pub const ARM_EABI: Convention = Convention {
    name: "arm-eabi",
    trap: "svc 0",
    nr_reg: "r7",
    arg_regs: &["r0", "r1", "r2", "r3", "r4", "r5"],
    ret_reg: "r0",
    error_flag_reg: None,
    stack_align: 8,
    reg_args: 6,
    spill_reserve: 0,
    clobbers: &[],
    delayed_branch: false,
    pic_bootstrap: None,
};

pub const AARCH64: Convention = Convention {
    name: "aarch64",
    trap: "svc 0",
    nr_reg: "x8",
    arg_regs: &["x0", "x1", "x2", "x3", "x4", "x5"],
    ret_reg: "x0",
    error_flag_reg: None,
    stack_align: 16,
    reg_args: 6,
    spill_reserve: 0,
    clobbers: &[],
    delayed_branch: false,
    pic_bootstrap: None,
};

/// MIPS-O32: the odd one out. Arguments 5 and 6 go on the stack at
/// offsets 16 and 20 of a 32-byte reservation, `a3` flags failure with
/// the magnitude left in `v0`, and every branch has a delay slot.
pub const MIPS_O32: Convention = Convention {
    name: "mips-o32",
    trap: "syscall",
    nr_reg: "v0",
    arg_regs: &["a0", "a1", "a2", "a3", "sp+16", "sp+20"],
    ret_reg: "v0",
    error_flag_reg: Some("a3"),
    stack_align: 8,
    reg_args: 4,
    spill_reserve: 32,
    clobbers: &[
        "at", "v1", "hi", "lo", "t0", "t1", "t2", "t3", "t4", "t5", "t6", "t7", "t8", "t9",
    ],
    delayed_branch: true,
    pic_bootstrap: Some(".cpload/.cprestore"),
};

pub const RISCV: Convention = Convention {
    name: "riscv",
    trap: "ecall",
    nr_reg: "a7",
    arg_regs: &["a0", "a1", "a2", "a3", "a4", "a5"],
    ret_reg: "a0",
    error_flag_reg: None,
    stack_align: 16,
    reg_args: 6,
    spill_reserve: 0,
    clobbers: &[],
    delayed_branch: false,
    pic_bootstrap: Some("__global_pointer$"),
};

/// Every supported variant, for validation independent of the build
/// target.
pub const CONVENTIONS: &[&Convention] = &[&X86_64, &X86, &ARM_EABI, &AARCH64, &MIPS_O32, &RISCV];

/// The variant the current build targets.
#[cfg(target_arch = "x86_64")]
pub const CURRENT: &Convention = &X86_64;
#[cfg(target_arch = "x86")]
pub const CURRENT: &Convention = &X86;
#[cfg(target_arch = "arm")]
pub const CURRENT: &Convention = &ARM_EABI;
#[cfg(target_arch = "aarch64")]
pub const CURRENT: &Convention = &AARCH64;
#[cfg(target_arch = "mips")]
pub const CURRENT: &Convention = &MIPS_O32;
#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
pub const CURRENT: &Convention = &RISCV;

/// Fold a flagged-convention result into the uniform-negative form:
/// a non-zero boundary flag means `value` is the error magnitude.
#[inline]
pub const fn normalize_flagged(flag: usize, value: usize) -> isize {
    if flag != 0 {
        -(value as isize)
    } else {
        value as isize
    }
}

/// Round a stack pointer down to `align` bytes. `align` must be a
/// power of two.
#[inline]
pub const fn align_down(sp: usize, align: usize) -> usize {
    sp & !(align - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_registers_never_exceed_six() {
        for conv in CONVENTIONS {
            assert!(conv.arg_regs.len() <= 6, "{}", conv.name);
            assert!(conv.reg_args <= conv.arg_regs.len(), "{}", conv.name);
        }
    }

    #[test]
    fn stack_alignment_is_eight_or_sixteen() {
        for conv in CONVENTIONS {
            assert!(
                conv.stack_align == 8 || conv.stack_align == 16,
                "{}",
                conv.name
            );
            assert!(conv.stack_align.is_power_of_two());
        }
    }

    #[test]
    fn align_down_satisfies_every_variant() {
        // Worst-case odd pointers still land on the boundary.
        for conv in CONVENTIONS {
            for sp in [0usize, 1, 7, 8, 15, 16, 17, 0x7fff_f3a1, usize::MAX] {
                let aligned = align_down(sp, conv.stack_align);
                assert_eq!(aligned % conv.stack_align, 0, "{}", conv.name);
                assert!(aligned <= sp);
                assert!(sp - aligned < conv.stack_align);
            }
        }
    }

    #[test]
    fn only_mips_uses_the_flagged_convention() {
        for conv in CONVENTIONS {
            let flagged = conv.error_flag_reg.is_some();
            assert_eq!(flagged, conv.name == "mips-o32");
            // The flagged variant is also the only one with delay slots
            // and stack-spilled arguments.
            assert_eq!(conv.delayed_branch, flagged, "{}", conv.name);
            assert_eq!(conv.spill_reserve > 0, flagged, "{}", conv.name);
            assert_eq!(conv.reg_args < 6, flagged, "{}", conv.name);
        }
    }

    #[test]
    fn flagged_normalization_negates_the_magnitude() {
        assert_eq!(normalize_flagged(1, 2), -2);
        assert_eq!(normalize_flagged(0, 2), 2);
        assert_eq!(normalize_flagged(0, 0), 0);
        assert_eq!(normalize_flagged(usize::MAX, 9), -9);
    }

    #[test]
    fn pic_bootstrap_only_where_mandated() {
        for conv in CONVENTIONS {
            let wants = matches!(conv.name, "riscv" | "mips-o32");
            assert_eq!(conv.pic_bootstrap.is_some(), wants, "{}", conv.name);
        }
    }
}
