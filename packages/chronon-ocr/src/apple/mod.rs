//! Apple Vision backend. The wire frame decoder builds everywhere; the FFI
//! bridge and recognizer exist only on macOS.
pub mod frame;

#[cfg(target_os = "macos")]
mod ffi;

#[cfg(target_os = "macos")]
mod engine;

#[cfg(target_os = "macos")]
pub use engine::AppleVisionRecognizer;
