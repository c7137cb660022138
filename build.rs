//! Build script for joystick-pico
//!
//! Copies memory.x next to the build output so the cortex-m-rt linker script
//! can find it, and adds the linker scripts for the embedded target only.

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");

    // Host builds (library tests, simulator) do not link firmware sections
    if env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default() != "arm" {
        return;
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(include_bytes!("memory.x")).unwrap();
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
}
