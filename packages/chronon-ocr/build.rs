use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

const SWIFT_SHIM: &str = "src/swift/VisionOCR.swift";

fn run(cmd: &mut Command, what: &str) {
    let status = cmd
        .status()
        .unwrap_or_else(|e| panic!("failed to run {what}: {e}"));
    assert!(status.success(), "{what} failed");
}

fn capture(args: &[&str]) -> String {
    let out = Command::new("xcrun")
        .args(args)
        .output()
        .expect("failed to run xcrun");
    String::from_utf8(out.stdout)
        .expect("xcrun printed non-utf8 output")
        .trim()
        .to_string()
}

fn compile_shim(out_dir: &Path) {
    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap();
    let object_file = out_dir.join("chronon_vision.o");
    run(
        Command::new("swiftc")
            .args(["-emit-object", "-O", "-parse-as-library", "-target"])
            .arg(format!("{arch}-apple-macosx13.0"))
            .arg("-o")
            .arg(&object_file)
            .arg(SWIFT_SHIM),
        "swiftc",
    );
    run(
        Command::new("ar")
            .arg("rcs")
            .arg(out_dir.join("libchronon_vision.a"))
            .arg(&object_file),
        "ar",
    );
}

fn main() {
    if env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() != "macos" {
        return;
    }

    println!("cargo:rerun-if-changed={SWIFT_SHIM}");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    compile_shim(&out_dir);

    println!("cargo:rustc-link-search=native={}", out_dir.display());
    println!("cargo:rustc-link-lib=static=chronon_vision");

    for framework in ["Vision", "Foundation", "CoreImage", "CoreGraphics", "AppKit"] {
        println!("cargo:rustc-link-lib=framework={framework}");
    }

    // Swift runtime from the SDK and from the active toolchain.
    let sdk = capture(&["--show-sdk-path"]);
    let swift = PathBuf::from(capture(&["--toolchain", "default", "--find", "swift"]));
    let toolchain_lib = swift
        .parent()
        .and_then(Path::parent)
        .expect("unexpected swift location")
        .join("lib/swift/macosx");

    println!("cargo:rustc-link-search=native={sdk}/usr/lib/swift");
    println!("cargo:rustc-link-search=native={}", toolchain_lib.display());
    println!("cargo:rustc-link-lib=dylib=swiftCore");
}
