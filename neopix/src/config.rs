//! Application configuration
//!
//! Everything here is compiled in; Neopix reads no settings files.

use crate::mapper::canvas_size;
use neocore::NeoTheme;

/// Room above the canvas for the toolbar.
const TOOLBAR_HEIGHT: f32 = 50.0;
/// Room below the canvas for the status bar.
const STATUS_HEIGHT: f32 = 28.0;

#[derive(Debug, Clone, PartialEq)]
pub struct NeopixConfig {
    pub title: String,
    pub app_id: String,
    /// Name pre-filled in the save dialog.
    pub initial_file_name: String,
    /// Extensions listed in the save dialog besides directories.
    pub export_extensions: Vec<String>,
    pub window_size: [f32; 2],
    pub theme: NeoTheme,
}

impl Default for NeopixConfig {
    fn default() -> Self {
        let (w, h) = canvas_size();
        Self {
            title: "Neopix Pixel Art Editor".to_string(),
            app_id: "com.morsoft.neopix".to_string(),
            initial_file_name: "untitled.png".to_string(),
            export_extensions: vec!["png".to_string()],
            window_size: [w, h + TOOLBAR_HEIGHT + STATUS_HEIGHT],
            theme: NeoTheme::default(),
        }
    }
}
