//! Process bootstrap.
//!
//! The kernel starts a static binary with nothing but a stack image:
//! the argument count at the stack pointer, argv's pointers above it,
//! a null, then envp's pointers and another null. The `_start`
//! trampoline in [`crate::arch`] hands the image pointer to [`start`],
//! which carves it up, captures the environment and calls `main`.

/// The pieces of the kernel's startup stack image.
#[derive(Debug, Clone, Copy)]
pub struct StackImage {
    pub argc: usize,
    pub argv: *const *const u8,
    pub envp: *const *const u8,
}

/// Carve the stack image into its parts.
///
/// The count is recomputed by scanning argv for its null terminator
/// instead of trusting the image's count slot, so a corrupted count
/// can never push envp out of step with the actual vector.
///
/// # Safety
/// `sp` must point at a well-formed image: a count slot followed by a
/// null-terminated argv and a null-terminated envp.
pub unsafe fn split_stack_image(sp: *const usize) -> StackImage {
    unsafe {
        let argv = sp.add(1) as *const *const u8;
        let mut argc = 0usize;
        while !(*argv.add(argc)).is_null() {
            argc += 1;
        }
        StackImage {
            argc,
            argv,
            envp: argv.add(argc + 1),
        }
    }
}

/// First Rust code to run in a freestanding binary. Reached from the
/// `_start` trampoline with the stack already aligned.
#[cfg(feature = "start")]
pub(crate) extern "C" fn start(sp: *const usize) -> ! {
    unsafe extern "C" {
        fn main(argc: i32, argv: *const *const u8, envp: *const *const u8) -> i32;
    }

    let image = unsafe { split_stack_image(sp) };
    crate::env::capture(image.envp);
    let status = unsafe { main(image.argc as i32, image.argv, image.envp) };
    crate::process::exit(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::ptr;

    #[test]
    fn splits_a_three_argument_image() {
        let a0 = b"prog\0";
        let a1 = b"-v\0";
        let a2 = b"input\0";
        let e0 = b"PATH=/bin\0";
        let image: [usize; 8] = [
            3,
            a0.as_ptr() as usize,
            a1.as_ptr() as usize,
            a2.as_ptr() as usize,
            0,
            e0.as_ptr() as usize,
            0,
            0,
        ];
        let split = unsafe { split_stack_image(image.as_ptr()) };
        assert_eq!(split.argc, 3);
        assert_eq!(split.argv, unsafe { image.as_ptr().add(1) } as *const _);
        // envp sits one past argv's terminator.
        assert_eq!(split.envp, unsafe { image.as_ptr().add(5) } as *const _);
        unsafe {
            assert_eq!(*split.envp, e0.as_ptr());
            assert_eq!(*split.envp.add(1), ptr::null());
        }
    }

    #[test]
    fn ignores_a_lying_count_slot() {
        let a0 = b"prog\0";
        let image: [usize; 5] = [99, a0.as_ptr() as usize, 0, 0, 0];
        let split = unsafe { split_stack_image(image.as_ptr()) };
        assert_eq!(split.argc, 1);
        assert_eq!(split.envp, unsafe { image.as_ptr().add(3) } as *const _);
    }

    #[test]
    fn handles_an_empty_argv() {
        let image: [usize; 3] = [0, 0, 0];
        let split = unsafe { split_stack_image(image.as_ptr()) };
        assert_eq!(split.argc, 0);
        assert_eq!(split.envp, unsafe { image.as_ptr().add(2) } as *const _);
    }
}
