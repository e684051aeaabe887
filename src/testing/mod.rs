mod logger;

#[used]
#[doc(hidden)]
#[cfg_attr(
    any(target_os = "linux", target_os = "android"),
    link_section = ".init_array"
)]
#[cfg_attr(target_os = "freebsd", link_section = ".init_array")]
#[cfg_attr(target_os = "netbsd", link_section = ".init_array")]
#[cfg_attr(target_os = "openbsd", link_section = ".init_array")]
#[cfg_attr(target_os = "illumos", link_section = ".init_array")]
#[cfg_attr(
    any(target_os = "macos", target_os = "ios"),
    link_section = "__DATA_CONST,__mod_init_func"
)]
#[cfg_attr(target_os = "windows", link_section = ".CRT$XCU")]
static INIT_LOGGER_STARTUP: unsafe extern "C" fn() -> usize = {
    #[cfg_attr(
        any(target_os = "linux", target_os = "android"),
        link_section = ".text.startup"
    )]
    unsafe extern "C" fn init_logger_startup() -> usize {
        logger::init_with_env().unwrap();
        0
    }
    init_logger_startup
};

use crate::cpu::Cpu;

/// Builds a CPU over a blank 64 KiB image with `program` loaded at `at` and
/// the reset vector pointed at it, for tests and doctests that need more
/// than a couple of bytes poked in by hand.
#[must_use]
pub fn cpu_with_program(at: u16, program: &[u8]) -> Cpu {
    let mut image = [0u8; 0x1_0000];
    let start = usize::from(at);
    image[start..start + program.len()].copy_from_slice(program);
    let [lo, hi] = at.to_le_bytes();
    image[0xFFFC] = lo;
    image[0xFFFD] = hi;
    Cpu::new(image)
}
