//! Neopix - a minimal pixel art editor
//!
//! A fixed 32x32 grid of colored cells painted one click at a time,
//! shown on screen at 20 points per cell and exported as a 32x32 PNG.

pub mod config;
pub mod export;
pub mod grid;
pub mod handlers;
pub mod mapper;
pub mod render;

pub use config::NeopixConfig;
pub use grid::{Color, Grid, PaintModel};
