//! Build script for digit-matrix.

use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rustc-check-cfg=cfg(rust_analyzer)");
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("cargo sets OUT_DIR"));
    let target = env::var("TARGET").expect("cargo sets TARGET");

    // Host builds (tests, docs) need no linker script.
    let memory_file = if target.starts_with("thumbv8m") {
        "memory-pico2.x"
    } else if target.starts_with("thumbv6m") {
        "memory-pico1.x"
    } else {
        return;
    };

    let memory_x = fs::read_to_string(memory_file)
        .unwrap_or_else(|err| panic!("Failed to read {memory_file}: {err}"));
    fs::write(out_dir.join("memory.x"), memory_x).expect("Failed to write memory.x");
    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed={memory_file}");
}
