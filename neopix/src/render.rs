//! Renderer - draws the grid cell by cell onto a surface

use crate::grid::{Color, Grid};
use crate::mapper::{canvas_size, cell_origin, CELL_SIZE};

/// Width of the black outline around each cell.
pub const BORDER_WIDTH: f32 = 1.0;

/// Axis-aligned rectangle relative to the canvas origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Something the grid can be drawn onto.
pub trait Surface {
    /// Called once before any cell is drawn.
    fn begin(&mut self) {}
    fn fill_rect(&mut self, rect: CellRect, color: Color);
    fn stroke_rect(&mut self, rect: CellRect, color: Color, width: f32);
}

/// Draw every cell in row-major order: fill first, then the border, so
/// the outline is never painted over by its own cell.
pub fn render(grid: &Grid, surface: &mut impl Surface) {
    surface.begin();
    for (x, y, color) in grid.cells() {
        let (ox, oy) = cell_origin(x, y);
        let rect = CellRect { x: ox, y: oy, w: CELL_SIZE, h: CELL_SIZE };
        surface.fill_rect(rect, color);
        surface.stroke_rect(rect, Color::BLACK, BORDER_WIDTH);
    }
}

/// On-screen surface backed by an egui painter.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a egui::Painter, origin: egui::Pos2) -> Self {
        Self { painter, origin }
    }

    fn to_screen(&self, rect: CellRect) -> egui::Rect {
        egui::Rect::from_min_size(
            self.origin + egui::vec2(rect.x, rect.y),
            egui::vec2(rect.w, rect.h),
        )
    }
}

impl Surface for PainterSurface<'_> {
    fn fill_rect(&mut self, rect: CellRect, color: Color) {
        self.painter.rect_filled(self.to_screen(rect), 0.0, color.to_color32());
    }

    fn stroke_rect(&mut self, rect: CellRect, color: Color, width: f32) {
        self.painter.rect_stroke(
            self.to_screen(rect),
            0.0,
            egui::Stroke::new(width, color.to_color32()),
        );
    }
}

/// Offscreen surface: a canvas-sized tiny-skia pixmap.
pub struct PixmapSurface {
    pixmap: tiny_skia::Pixmap,
}

impl PixmapSurface {
    /// A transparent pixmap the size of the canvas.
    pub fn new() -> Option<Self> {
        let (w, h) = canvas_size();
        tiny_skia::Pixmap::new(w as u32, h as u32).map(|pixmap| Self { pixmap })
    }

    pub fn pixmap(&self) -> &tiny_skia::Pixmap {
        &self.pixmap
    }

    fn paint(color: Color) -> tiny_skia::Paint<'static> {
        let [r, g, b, a] = color.to_rgba8();
        let mut paint = tiny_skia::Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint
    }
}

impl Surface for PixmapSurface {
    fn begin(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    fn fill_rect(&mut self, rect: CellRect, color: Color) {
        if let Some(r) = tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.w, rect.h) {
            self.pixmap.fill_rect(r, &Self::paint(color), tiny_skia::Transform::identity(), None);
        }
    }

    fn stroke_rect(&mut self, rect: CellRect, color: Color, width: f32) {
        let Some(r) = tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.w, rect.h) else {
            return;
        };
        let path = tiny_skia::PathBuilder::from_rect(r);
        let stroke = tiny_skia::Stroke { width, ..Default::default() };
        self.pixmap.stroke_path(
            &path,
            &Self::paint(color),
            &stroke,
            tiny_skia::Transform::identity(),
            None,
        );
    }
}
