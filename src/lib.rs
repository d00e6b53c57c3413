//! LCD HAT launcher library: everything except process startup.
//!
//! Navigation, rendering and command execution are plain Rust and tested on
//! any host. Only [`hardware`] touches the Pi, and only [`simulator`] needs SDL.
//!
//! # Testing
//!
//! ```bash
//! cargo test                       # host tests, no hardware needed
//! cargo run --features simulator   # desktop window instead of the HAT
//! ```

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Configuration
pub mod config;

// Drawing
pub mod colors;
pub mod framebuffer;
pub mod render;
pub mod screens;
pub mod styles;
pub mod widgets;

// State and input
pub mod input;
pub mod shell;
pub mod state;

// Main loop and its backends
pub mod app;
pub mod display;
pub mod error;
pub mod logging;
pub mod st7789;

#[cfg(target_os = "linux")]
pub mod hardware;

#[cfg(feature = "simulator")]
pub mod simulator;

pub use app::App;
pub use error::Error;
