//! Screen <-> cell coordinate mapping

use crate::grid::{GRID_HEIGHT, GRID_WIDTH};

/// Size of one cell on screen, in points.
pub const CELL_SIZE: f32 = 20.0;

/// Canvas size on screen: grid dimensions times cell size.
pub fn canvas_size() -> (f32, f32) {
    (GRID_WIDTH as f32 * CELL_SIZE, GRID_HEIGHT as f32 * CELL_SIZE)
}

/// Map a position relative to the canvas origin to a cell.
///
/// Uses floor division, so anything left of or above the canvas lands on
/// a negative index and is rejected rather than snapping onto row or
/// column 0. Returns `None` for positions outside the grid.
pub fn screen_to_cell(sx: f32, sy: f32) -> Option<(usize, usize)> {
    let cx = (sx / CELL_SIZE).floor();
    let cy = (sy / CELL_SIZE).floor();
    // NaN fails both comparisons
    if !(cx >= 0.0 && cx < GRID_WIDTH as f32 && cy >= 0.0 && cy < GRID_HEIGHT as f32) {
        return None;
    }
    Some((cx as usize, cy as usize))
}

/// Top-left corner of a cell relative to the canvas origin.
pub fn cell_origin(x: usize, y: usize) -> (f32, f32) {
    (x as f32 * CELL_SIZE, y as f32 * CELL_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_and_cell_edges() {
        assert_eq!(screen_to_cell(0.0, 0.0), Some((0, 0)));
        assert_eq!(screen_to_cell(19.9, 0.0), Some((0, 0)));
        assert_eq!(screen_to_cell(20.0, 0.0), Some((1, 0)));
        assert_eq!(screen_to_cell(25.0, 25.0), Some((1, 1)));
        assert_eq!(screen_to_cell(639.9, 639.9), Some((31, 31)));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        assert_eq!(screen_to_cell(640.0, 0.0), None);
        assert_eq!(screen_to_cell(0.0, 640.0), None);
        assert_eq!(screen_to_cell(-1.0, 0.0), None);
        assert_eq!(screen_to_cell(0.0, -0.01), None);
        assert_eq!(screen_to_cell(f32::NAN, 0.0), None);
        assert_eq!(screen_to_cell(f32::INFINITY, 0.0), None);
    }

    #[test]
    fn test_canvas_geometry() {
        assert_eq!(canvas_size(), (640.0, 640.0));
        assert_eq!(cell_origin(0, 0), (0.0, 0.0));
        assert_eq!(cell_origin(5, 2), (100.0, 40.0));
        let (ox, oy) = cell_origin(7, 9);
        assert_eq!(screen_to_cell(ox, oy), Some((7, 9)));
    }
}
