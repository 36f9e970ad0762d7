//! Grid model - the 32x32 cells and the current paint color

/// Grid width in cells
pub const GRID_WIDTH: usize = 32;
/// Grid height in cells
pub const GRID_HEIGHT: usize = 32;

/// An RGBA color with normalized components in [0.0, 1.0].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Components are clamped into [0.0, 1.0]; NaN becomes 0.0.
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: unit(r),
            g: unit(g),
            b: unit(b),
            a: unit(a),
        }
    }

    /// From 8-bit sRGB components, as produced by the color picker.
    pub fn from_rgba8(rgba: [u8; 4]) -> Self {
        let [r, g, b, a] = rgba.map(|c| c as f32 / 255.0);
        Self { r, g, b, a }
    }

    /// 8-bit straight (non-premultiplied) components, rounded to nearest.
    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a].map(|c| (unit(c) * 255.0).round() as u8)
    }

    pub fn to_color32(self) -> egui::Color32 {
        let [r, g, b, a] = self.to_rgba8();
        egui::Color32::from_rgba_unmultiplied(r, g, b, a)
    }
}

fn unit(c: f32) -> f32 {
    if c.is_nan() { 0.0 } else { c.clamp(0.0, 1.0) }
}

/// Fixed-size row-major grid of cell colors.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    cells: Vec<Color>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// A grid with every cell opaque white.
    pub fn new() -> Self {
        Self {
            cells: vec![Color::WHITE; GRID_WIDTH * GRID_HEIGHT],
        }
    }

    pub fn width(&self) -> usize {
        GRID_WIDTH
    }

    pub fn height(&self) -> usize {
        GRID_HEIGHT
    }

    /// Bounds are the caller's job; the coordinate mapper never hands
    /// out an index outside the grid.
    pub fn set_cell(&mut self, x: usize, y: usize, color: Color) {
        debug_assert!(x < GRID_WIDTH && y < GRID_HEIGHT, "cell ({x}, {y}) out of bounds");
        self.cells[y * GRID_WIDTH + x] = color;
    }

    pub fn get_cell(&self, x: usize, y: usize) -> Color {
        debug_assert!(x < GRID_WIDTH && y < GRID_HEIGHT, "cell ({x}, {y}) out of bounds");
        self.cells[y * GRID_WIDTH + x]
    }

    pub fn clear(&mut self) {
        self.cells.fill(Color::WHITE);
    }

    /// Every cell as `(x, y, color)`, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Color)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, c)| (i % GRID_WIDTH, i / GRID_WIDTH, *c))
    }

    /// Number of cells whose color differs from `color`.
    pub fn count_not(&self, color: Color) -> usize {
        self.cells.iter().filter(|c| **c != color).count()
    }
}

/// The editor's document: the grid plus the color clicks paint with.
#[derive(Clone, Debug)]
pub struct PaintModel {
    pub grid: Grid,
    current_color: Color,
}

impl Default for PaintModel {
    fn default() -> Self {
        Self::new()
    }
}

impl PaintModel {
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            current_color: Color::BLACK,
        }
    }

    pub fn current_color(&self) -> Color {
        self.current_color
    }

    pub fn set_current_color(&mut self, color: Color) {
        self.current_color = color;
    }

    /// Write the current color into cell (x, y).
    pub fn paint(&mut self, x: usize, y: usize) {
        self.grid.set_cell(x, y, self.current_color);
    }
}
