pub mod config;
pub mod content;
pub mod error;
pub mod interaction;
pub mod logging;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(target_arch = "wasm32")]
pub use frontend::run;
