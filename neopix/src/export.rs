//! Exporter - writes the grid to a PNG, one image pixel per cell

use crate::grid::Grid;
use image::{ImageFormat, Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("cannot write image: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot encode image: {0}")]
    Encode(#[from] image::ImageError),
    #[error("not a file path: {0}")]
    InvalidPath(PathBuf),
}

/// Convert the grid to a `width × height` RGBA image.
pub fn grid_to_image(grid: &Grid) -> RgbaImage {
    let mut image = RgbaImage::new(grid.width() as u32, grid.height() as u32);
    for (x, y, color) in grid.cells() {
        image.put_pixel(x as u32, y as u32, Rgba(color.to_rgba8()));
    }
    image
}

/// Write the grid to `path` as a PNG.
///
/// The image is encoded into a hidden sibling file first and renamed
/// into place, so `path` either holds the complete new image or is left
/// as it was.
pub fn export_png(grid: &Grid, path: &Path) -> Result<(), ExportError> {
    let tmp = temp_sibling(path)?;
    let image = grid_to_image(grid);

    let written = image
        .save_with_format(&tmp, ImageFormat::Png)
        .map_err(ExportError::from)
        .and_then(|()| fs::rename(&tmp, path).map_err(ExportError::from));

    if written.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    written
}

fn temp_sibling(path: &Path) -> Result<PathBuf, ExportError> {
    let name = path
        .file_name()
        .ok_or_else(|| ExportError::InvalidPath(path.to_path_buf()))?;
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(name);
    tmp_name.push(".partial");
    Ok(path.with_file_name(tmp_name))
}
