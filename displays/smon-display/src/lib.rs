//! Canvas abstraction and dashboard renderer for SMON
//!
//! This crate provides:
//! - `Canvas` trait, the drawing primitives the renderer needs
//! - `FrameComposer`, which paints the dashboard and the waiting screen
//! - `GraphicsCanvas`, a `Canvas` over any `embedded-graphics` draw target
//!
//! # Architecture
//!
//! The composer only reads state from `smon-core` and issues primitive
//! calls. It never touches hardware; the panel driver owns the framebuffer
//! and decides when to flush it.

#![cfg_attr(not(test), no_std)]

pub mod canvas;
pub mod composer;
pub mod graphics;

// Re-export key types
pub use canvas::{Canvas, Ink};
pub use composer::FrameComposer;
pub use graphics::{GraphicsCanvas, FONT};
