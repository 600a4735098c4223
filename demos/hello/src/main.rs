//! Smallest useful program on the runtime: prints its argument count,
//! peeks at the environment and exits cleanly.

#![no_std]
#![no_main]

use stilt::{env, println};

#[unsafe(no_mangle)]
extern "C" fn main(argc: i32, argv: *const *const u8, _envp: *const *const u8) -> i32 {
    println!("hello from stilt, {} argument(s)", argc);

    let mut i = 0;
    while i < argc as usize {
        let arg = unsafe { core::ffi::CStr::from_ptr(*argv.add(i) as *const core::ffi::c_char) };
        println!("  argv[{}] = {}", i, arg.to_str().unwrap_or("<non-utf8>"));
        i += 1;
    }

    match env::getenv("HOME") {
        Some(home) => println!("HOME = {}", home.to_str().unwrap_or("<non-utf8>")),
        None => println!("no HOME in the environment"),
    }

    0
}
