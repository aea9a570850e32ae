//! Spirit OS phone simulator library - testable modules for the phone shell.
//!
//! This library contains the state machines and drawing code. The binary
//! (`main.rs`) owns the SDL window, translates keyboard and mouse events into
//! controller commands and paints each frame with [`render::draw_frame`].
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib
//! ```
//!
//! Drawing tests render into an in-memory frame buffer, so no window or SDL
//! installation is needed for the library tests.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// === Pure logic ===

// Configuration
pub mod config;

// State machines and timing
pub mod animations;
pub mod clock;
pub mod pages;
pub mod profiling;
pub mod state;

// === Rendering ===

pub mod colors;
pub mod render;
pub mod screens;
pub mod styles;
pub mod widgets;

#[cfg(test)]
mod test_display;
