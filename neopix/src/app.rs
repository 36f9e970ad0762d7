//! Neopix application shell
//!
//! Owns the paint model, lays out the toolbar, canvas and status bar,
//! and forwards input to the handlers.

use egui::{Context, Key, Modifiers, Sense};
use neocore::storage::{documents_dir, resolve_save_path, FileBrowser};
use neocore::theme::NeoColors;
use neocore::widgets::{status_bar, toolbar_separator, FileListItem};
use neopix::handlers::{
    on_clear, on_click, on_color_change, on_save, on_save_destination, picked_color,
    DestinationPicker, SaveOutcome,
};
use neopix::mapper::{canvas_size, screen_to_cell};
use neopix::render::{render, PainterSurface};
use neopix::{Color, NeopixConfig, PaintModel};
use std::path::PathBuf;

/// How the save dialog was closed.
enum Picked {
    Path(PathBuf),
    Cancelled,
}

/// In-app "save as" window. Stays open across frames until the user
/// picks a path or dismisses it.
struct SaveDialog {
    open: bool,
    browser: FileBrowser,
    file_name: String,
    start_dir: PathBuf,
    extensions: Vec<String>,
    error: Option<String>,
}

impl SaveDialog {
    fn new(start_dir: PathBuf, extensions: Vec<String>) -> Self {
        Self {
            open: false,
            browser: FileBrowser::new(start_dir.clone()).with_filter(extensions.clone()),
            file_name: String::new(),
            start_dir,
            extensions,
            error: None,
        }
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn show(&mut self, ctx: &Context) -> Option<Picked> {
        if !self.open {
            return None;
        }

        let mut picked = None;
        let mut window_open = true;
        egui::Window::new("save as")
            .open(&mut window_open)
            .collapsible(false)
            .resizable(false)
            .default_width(380.0)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("location:");
                    ui.label(self.browser.current_dir.to_string_lossy().to_string());
                });
                ui.separator();

                egui::ScrollArea::vertical().max_height(220.0).show(ui, |ui| {
                    let entries = self.browser.entries.clone();
                    for (idx, entry) in entries.iter().enumerate() {
                        let selected = self.browser.selected_index == Some(idx);
                        let response = ui.add(
                            FileListItem::new(&entry.name, entry.is_directory).selected(selected),
                        );
                        if response.clicked() {
                            self.browser.selected_index = Some(idx);
                            if !entry.is_directory {
                                self.file_name = entry.name.clone();
                            }
                        }
                        if response.double_clicked() && entry.is_directory {
                            self.browser.navigate_to(entry.path.clone());
                        }
                    }
                });

                ui.separator();
                ui.horizontal(|ui| {
                    ui.label("filename:");
                    if ui.text_edit_singleline(&mut self.file_name).changed() {
                        self.error = None;
                    }
                });
                if let Some(ref error) = self.error {
                    ui.label(error.as_str());
                }

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("cancel").clicked() {
                        picked = Some(Picked::Cancelled);
                    }
                    let can_save = !self.file_name.trim().is_empty();
                    if ui.add_enabled(can_save, egui::Button::new("save")).clicked() {
                        match resolve_save_path(&self.browser.save_directory(), &self.file_name) {
                            Ok(path) => picked = Some(Picked::Path(path)),
                            Err(e) => self.error = Some(e.to_string()),
                        }
                    }
                });
            });

        if !window_open {
            picked = Some(Picked::Cancelled);
        }
        if picked.is_some() {
            self.open = false;
        }
        picked
    }
}

impl DestinationPicker for SaveDialog {
    fn request_destination(&mut self, suggested_name: &str) {
        self.browser = FileBrowser::new(self.start_dir.clone()).with_filter(self.extensions.clone());
        self.browser.select_by_name(suggested_name);
        self.file_name = suggested_name.to_string();
        self.error = None;
        self.open = true;
    }
}

pub struct NeopixApp {
    model: PaintModel,
    config: NeopixConfig,
    /// Mirror of the current paint color for the color picker, in sRGB.
    color_edit: [u8; 4],
    save_dialog: SaveDialog,
    last_export: Option<PathBuf>,
    export_error: Option<String>,
    hover_cell: Option<(usize, usize)>,
}

impl NeopixApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: NeopixConfig) -> Self {
        let model = PaintModel::new();
        Self {
            color_edit: model.current_color().to_rgba8(),
            model,
            save_dialog: SaveDialog::new(documents_dir(), config.export_extensions.clone()),
            config,
            last_export: None,
            export_error: None,
            hover_cell: None,
        }
    }

    fn save(&mut self) {
        let suggested = self.last_export
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.config.initial_file_name.clone());
        on_save(&mut self.save_dialog, &suggested);
    }

    fn finish_save(&mut self, destination: Option<PathBuf>) {
        match on_save_destination(&self.model, destination) {
            Ok(SaveOutcome::Saved(path)) => {
                if let Some(dir) = path.parent() {
                    self.save_dialog.start_dir = dir.to_path_buf();
                }
                self.last_export = Some(path);
            }
            Ok(SaveOutcome::Cancelled) => {}
            Err(e) => {
                log::warn!("export failed: {}", e);
                self.export_error = Some(e.to_string());
            }
        }
    }

    fn handle_keyboard(&mut self, ctx: &Context) {
        if self.save_dialog.is_open() {
            return;
        }
        if ctx.input_mut(|i| i.consume_key(Modifiers::COMMAND, Key::S)) {
            self.save();
        }
    }

    fn render_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.color_edit_button_srgba_unmultiplied(&mut self.color_edit).changed() {
                on_color_change(&mut self.model, picked_color(self.color_edit));
            }
            toolbar_separator(ui);
            if ui.button("clear").clicked() && on_clear(&mut self.model) {
                ui.ctx().request_repaint();
            }
            if ui.button("save").clicked() {
                self.save();
            }
        });
    }

    fn render_canvas(&mut self, ui: &mut egui::Ui) {
        let (w, h) = canvas_size();
        let (rect, response) = ui.allocate_exact_size(egui::vec2(w, h), Sense::click());

        self.hover_cell = response
            .hover_pos()
            .and_then(|pos| screen_to_cell(pos.x - rect.min.x, pos.y - rect.min.y));

        let pressed = !self.save_dialog.is_open()
            && response.hovered()
            && ui.input(|i| i.pointer.primary_pressed());
        if pressed {
            if let Some(pos) = ui.input(|i| i.pointer.press_origin()) {
                let rel = pos - rect.min;
                if on_click(&mut self.model, rel.x, rel.y) {
                    ui.ctx().request_repaint();
                }
            }
        }

        let painter = ui.painter_at(rect.expand(1.0));
        render(&self.model.grid, &mut PainterSurface::new(&painter, rect.min));
    }

    fn status_text(&self) -> String {
        let name = self.last_export
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "not exported".into());
        let cell = match self.hover_cell {
            Some((x, y)) => format!("{}, {}", x, y),
            None => "-".into(),
        };
        let [r, g, b, a] = self.model.current_color().to_rgba8();
        format!(
            "{}  |  {}×{}  |  cell: {}  |  painted: {}  |  color: #{:02x}{:02x}{:02x}{:02x}",
            name,
            self.model.grid.width(),
            self.model.grid.height(),
            cell,
            self.model.grid.count_not(Color::WHITE),
            r, g, b, a,
        )
    }

    fn render_export_error(&mut self, ctx: &Context) {
        let Some(message) = self.export_error.clone() else { return };
        egui::Window::new("export failed")
            .collapsible(false)
            .resizable(false)
            .default_width(300.0)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("the image could not be saved.");
                ui.label(message);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.export_error = None;
                    }
                });
            });
    }
}

impl eframe::App for NeopixApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard(ctx);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_toolbar(ui);
            ui.add_space(4.0);
        });
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            status_bar(ui, &self.status_text());
        });
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(NeoColors::PAPER))
            .show(ctx, |ui| { self.render_canvas(ui); });

        if let Some(picked) = self.save_dialog.show(ctx) {
            let destination = match picked {
                Picked::Path(path) => Some(path),
                Picked::Cancelled => None,
            };
            self.finish_save(destination);
        }
        self.render_export_error(ctx);
    }
}
