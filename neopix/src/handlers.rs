//! Input event handlers
//!
//! The shell forwards each input event here with the model and the event
//! payload. Handlers that can change the grid return `true` when the
//! canvas needs a redraw.

use crate::export::{export_png, ExportError};
use crate::grid::{Color, PaintModel};
use crate::mapper::screen_to_cell;
use std::path::PathBuf;

/// Host-side destination picker. `request_destination` only starts the
/// selection; the result arrives later through [`on_save_destination`].
pub trait DestinationPicker {
    fn request_destination(&mut self, suggested_name: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Cancelled,
    Saved(PathBuf),
}

/// Paint the cell under a pointer press at (sx, sy), relative to the
/// canvas origin. Presses outside the grid are ignored.
pub fn on_click(model: &mut PaintModel, sx: f32, sy: f32) -> bool {
    match screen_to_cell(sx, sy) {
        Some((x, y)) => {
            model.paint(x, y);
            log::debug!("painted cell ({x}, {y})");
            true
        }
        None => false,
    }
}

/// Color for an sRGB, unmultiplied picker value. The stored components
/// are the picker's bytes over 255, so the exported pixel matches the
/// swatch the user saw.
pub fn picked_color(srgba: [u8; 4]) -> Color {
    Color::from_rgba8(srgba)
}

pub fn on_color_change(model: &mut PaintModel, color: Color) {
    log::debug!("paint color set to {:?}", color.to_rgba8());
    model.set_current_color(color);
}

pub fn on_clear(model: &mut PaintModel) -> bool {
    model.grid.clear();
    log::debug!("canvas cleared");
    true
}

/// First half of a save: ask the host for a destination.
pub fn on_save(picker: &mut impl DestinationPicker, suggested_name: &str) {
    picker.request_destination(suggested_name);
}

/// Second half of a save: export to the chosen path, or do nothing if
/// the picker was dismissed.
pub fn on_save_destination(
    model: &PaintModel,
    destination: Option<PathBuf>,
) -> Result<SaveOutcome, ExportError> {
    let Some(path) = destination else {
        log::debug!("save cancelled");
        return Ok(SaveOutcome::Cancelled);
    };
    export_png(&model.grid, &path)?;
    log::info!("exported {}", path.display());
    Ok(SaveOutcome::Saved(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[derive(Default)]
    struct FakePicker {
        requests: Vec<String>,
    }

    impl DestinationPicker for FakePicker {
        fn request_destination(&mut self, suggested_name: &str) {
            self.requests.push(suggested_name.to_string());
        }
    }

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("neopix-handlers-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_click_paints_and_requests_redraw() {
        let mut model = PaintModel::new();
        assert!(on_click(&mut model, 25.0, 25.0));
        assert_eq!(model.grid.get_cell(1, 1), Color::BLACK);
        assert_eq!(model.grid.count_not(Color::WHITE), 1);
    }

    #[test]
    fn test_click_outside_is_ignored() {
        let mut model = PaintModel::new();
        assert!(!on_click(&mut model, 640.0, 10.0));
        assert!(!on_click(&mut model, -1.0, 10.0));
        assert!(!on_click(&mut model, 10.0, -5.0));
        assert_eq!(model.grid.count_not(Color::WHITE), 0);
    }

    #[test]
    fn test_color_change_applies_to_next_click() {
        let mut model = PaintModel::new();
        let green = Color::new(0.0, 1.0, 0.0, 1.0);
        on_color_change(&mut model, green);
        on_click(&mut model, 0.0, 0.0);
        assert_eq!(model.grid.get_cell(0, 0), green);
    }

    #[test]
    fn test_clear() {
        let mut model = PaintModel::new();
        on_click(&mut model, 100.0, 100.0);
        assert!(on_clear(&mut model));
        assert_eq!(model.grid.count_not(Color::WHITE), 0);
        // clearing keeps the chosen color
        assert_eq!(model.current_color(), Color::BLACK);
    }

    #[test]
    fn test_save_asks_picker_only() {
        let model = PaintModel::new();
        let mut picker = FakePicker::default();
        on_save(&mut picker, "untitled.png");
        assert_eq!(picker.requests, vec!["untitled.png".to_string()]);
        assert_eq!(model.grid.count_not(Color::WHITE), 0);
    }

    /// Picker that completes on the spot with a fixed answer.
    struct AnsweringPicker {
        answer: Option<PathBuf>,
        result: Option<Option<PathBuf>>,
    }

    impl DestinationPicker for AnsweringPicker {
        fn request_destination(&mut self, _suggested_name: &str) {
            self.result = Some(self.answer.clone());
        }
    }

    #[test]
    fn test_cancelled_save_writes_nothing() {
        let dir = scratch_dir("cancel");
        let existing = dir.join("untitled.png");
        fs::write(&existing, b"previous contents").unwrap();

        let mut model = PaintModel::new();
        on_click(&mut model, 25.0, 25.0);

        let mut picker = AnsweringPicker { answer: None, result: None };
        on_save(&mut picker, "untitled.png");
        let destination = picker.result.take().expect("picker completed");
        assert_eq!(on_save_destination(&model, destination).unwrap(), SaveOutcome::Cancelled);

        assert_eq!(fs::read(&existing).unwrap(), b"previous contents");
        let names: Vec<_> = fs::read_dir(&dir).unwrap().flatten().map(|e| e.file_name()).collect();
        assert_eq!(names, vec![std::ffi::OsString::from("untitled.png")]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_picked_color_exports_as_shown() {
        let dir = scratch_dir("gray");
        let path = dir.join("gray.png");

        let mut model = PaintModel::new();
        on_color_change(&mut model, picked_color([128, 128, 128, 255]));
        on_click(&mut model, 0.0, 0.0);
        on_color_change(&mut model, picked_color([200, 40, 90, 128]));
        on_click(&mut model, 20.0, 0.0);
        on_save_destination(&model, Some(path.clone())).unwrap();

        let image = image::open(&path).unwrap().to_rgba8();
        assert_eq!(image.get_pixel(0, 0).0, [128, 128, 128, 255]);
        assert_eq!(image.get_pixel(1, 0).0, [200, 40, 90, 128]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_click_then_export_scenario() {
        let dir = scratch_dir("scenario");
        let path = dir.join("untitled.png");

        let mut model = PaintModel::new();
        on_clear(&mut model);
        on_click(&mut model, 25.0, 25.0);
        let outcome = on_save_destination(&model, Some(path.clone())).unwrap();
        assert_eq!(outcome, SaveOutcome::Saved(path.clone()));

        let image = image::open(&path).unwrap().to_rgba8();
        let non_white: Vec<(u32, u32)> = image
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0 != [255, 255, 255, 255])
            .map(|(x, y, _)| (x, y))
            .collect();
        assert_eq!(non_white, vec![(1, 1)]);
        assert_eq!(image.get_pixel(1, 1).0, [0, 0, 0, 255]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_failed_save_reports_error() {
        let dir = scratch_dir("fail");
        let model = PaintModel::new();
        let path = dir.join("missing").join("art.png");
        assert!(on_save_destination(&model, Some(path.clone())).is_err());
        assert!(!path.exists());
        fs::remove_dir_all(&dir).unwrap();
    }
}
