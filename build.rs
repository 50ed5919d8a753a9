//! Build script - adds the esp-hal linker script for firmware builds.
//!
//! Host builds (`cargo test --lib`) do not enable the `embedded` feature and
//! must link against the native toolchain, so nothing is emitted for them.

use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    if env::var_os("CARGO_FEATURE_EMBEDDED").is_none() {
        return;
    }

    // linkall.x pulls in the memory layout and the ROM symbol tables.
    println!("cargo:rustc-link-arg-bins=-Tlinkall.x");
}
