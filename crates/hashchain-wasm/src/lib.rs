//! WebAssembly bindings for hashchain.
//!
//! This crate provides JavaScript-accessible APIs for:
//! - Digesting hex-encoded fields and computing Merkle roots
//! - Assembling transactions into sealed blocks
//! - Probing block hashes for leading zero bytes

use wasm_bindgen::prelude::*;

pub mod assembler;
pub mod convert;
pub mod state;

// Re-export main types for JS access
pub use assembler::BlockAssembler;

/// Initialize the WASM module with better panic messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
