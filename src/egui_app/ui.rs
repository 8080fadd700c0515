//! egui renderer for the practice form.

use eframe::egui::{self, Color32, Frame, RichText, Ui};

use crate::catalog::PracticeCategory;
use crate::egui_app::controller::TrackerController;

pub mod style;

/// Smallest window that still fits the whole form.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(380.0, 420.0);
const FIELD_WIDTH: f32 = 240.0;

/// Renders the egui UI using the controller's state.
pub struct EguiApp {
    controller: TrackerController,
    visuals_set: bool,
}

impl EguiApp {
    pub fn new(controller: TrackerController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .frame(Frame::new().fill(style::palette().bg_window))
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.painter().circle_filled(
                        ui.cursor().min + egui::vec2(6.0, 9.0),
                        6.0,
                        status.badge_color,
                    );
                    ui.add_space(16.0);
                    ui.label(RichText::new(&status.badge_label).color(Color32::WHITE));
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(style::palette().text_muted));
                });
            });
    }

    fn render_form(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.label("Category");
            self.render_category_picker(ui);
            ui.add_space(6.0);
            ui.label("Step / Item");
            self.render_movement_picker(ui);
            ui.add_space(6.0);
            ui.label("Duration (minutes)");
            ui.add(
                egui::TextEdit::singleline(&mut self.controller.ui.duration)
                    .desired_width(FIELD_WIDTH),
            );
            ui.add_space(6.0);
            ui.label("Notes (optional)");
            ui.add(
                egui::TextEdit::singleline(&mut self.controller.ui.notes)
                    .desired_width(FIELD_WIDTH),
            );
            ui.add_space(12.0);
            self.render_actions(ui);
            ui.add_space(10.0);
            let now_playing = &self.controller.ui.now_playing;
            if !now_playing.is_empty() {
                ui.label(RichText::new(now_playing).color(style::palette().playing));
            }
        });
    }

    fn render_category_picker(&mut self, ui: &mut Ui) {
        let mut category = self.controller.ui.category;
        egui::ComboBox::from_id_salt("category_picker")
            .width(FIELD_WIDTH)
            .selected_text(category.label())
            .show_ui(ui, |ui| {
                for option in PracticeCategory::ALL {
                    ui.selectable_value(&mut category, option, option.label());
                }
            });
        self.controller.select_category(category);
    }

    fn render_movement_picker(&mut self, ui: &mut Ui) {
        let category = self.controller.ui.category;
        let mut movement = self.controller.ui.movement.clone();
        egui::ComboBox::from_id_salt(("movement_picker", category.label()))
            .width(FIELD_WIDTH)
            .selected_text(movement.as_str())
            .show_ui(ui, |ui| {
                for name in category.movements() {
                    ui.selectable_value(&mut movement, (*name).to_string(), *name);
                }
            });
        if movement != self.controller.ui.movement {
            self.controller.select_movement(movement);
        }
    }

    fn render_actions(&mut self, ui: &mut Ui) {
        if ui.button("Play Music").clicked() {
            self.controller.play_selected();
        }
        ui.add_space(2.0);
        if ui.button("Stop Music").clicked() {
            self.controller.stop();
        }
        ui.add_space(6.0);
        if ui.button("Save Practice").clicked() {
            self.controller.save_practice();
        }
    }

    fn render_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.controller.ui.dialog.clone() else {
            return;
        };
        let modal = egui::Modal::new(egui::Id::new("notice_dialog")).show(ctx, |ui| {
            ui.set_max_width(360.0);
            ui.label(
                RichText::new(&dialog.title)
                    .strong()
                    .color(style::dialog_title_color(dialog.kind)),
            );
            ui.add_space(6.0);
            ui.label(&dialog.message);
            ui.add_space(10.0);
            ui.vertical_centered(|ui| ui.button("OK").clicked()).inner
        });
        if modal.inner || modal.should_close() {
            self.controller.dismiss_dialog();
        }
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_form(ui);
        });
        self.render_dialog(ctx);
    }
}
