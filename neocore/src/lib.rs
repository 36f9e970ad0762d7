//! neocore — shared UI plumbing for the Neopix editor

pub mod storage;
pub mod theme;
pub mod widgets;

pub use theme::NeoTheme;
