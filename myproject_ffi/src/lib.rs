//! myproject — C ABI exports
//!
//! Builds as a shared library (`cdylib`) exporting the arithmetic with
//! C linkage. `#[no_mangle] extern "C"` keeps the symbols visible from the
//! shared object / DLL on every platform; C and C++ consumers declare them
//! through `include/myproject.h`.
//!
//! C has no namespaces, so every symbol carries the `myproject_` prefix.
//!
//! Overflow is not checked. A debug build of the library aborts the host
//! on overflow; a release build wraps to two's complement.

use std::ffi::c_char;

/// Returns `a + b`.
///
/// # Panics
///
/// Overflow panics in debug builds. A panic cannot unwind across
/// `extern "C"`, so the host process aborts. Release builds wrap.
#[no_mangle]
pub extern "C" fn myproject_add(a: i32, b: i32) -> i32 {
    myproject::add(a, b)
}

/// Returns `a * b`.
///
/// # Panics
///
/// Overflow panics in debug builds, aborting the host process.
/// Release builds wrap.
#[no_mangle]
pub extern "C" fn myproject_multiply(a: i32, b: i32) -> i32 {
    myproject::multiply(a, b)
}

static VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");

/// Version of the loaded library as a static NUL-terminated string.
/// The caller must not free it.
#[no_mangle]
pub extern "C" fn myproject_version() -> *const c_char {
    VERSION.as_ptr().cast()
}
