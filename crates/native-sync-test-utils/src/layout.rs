//! Expected on-disk layout of the ONNX Runtime sync, written out literally so
//! tests check the manifest instead of re-deriving it.

/// Canonical DLL location relative to the root.
pub const SOURCE: &str = "src-tauri/resources/onnxruntime/onnxruntime.dll";

/// Target locations relative to the root, in declared order.
pub const TARGETS: [&str; 5] = [
    "src-tauri/onnxruntime.dll",
    "src-tauri/target/debug/onnxruntime.dll",
    "src-tauri/target/release/onnxruntime.dll",
    "src-tauri/target/debug/resources/onnxruntime/onnxruntime.dll",
    "src-tauri/target/release/resources/onnxruntime/onnxruntime.dll",
];

/// Sample DLL payload.
pub const PAYLOAD: &[u8] = b"MZ\x90\x00onnxruntime test payload";
