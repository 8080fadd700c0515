use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

use crate::egui_app::state::DialogKind;

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_window: Color32,
    pub bg_panel: Color32,
    pub bg_widget: Color32,
    pub outline: Color32,
    pub text: Color32,
    pub text_muted: Color32,
    pub accent_saffron: Color32,
    pub danger: Color32,
    pub playing: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_window: Color32::from_rgb(18, 14, 12),
        bg_panel: Color32::from_rgb(30, 24, 20),
        bg_widget: Color32::from_rgb(48, 38, 32),
        outline: Color32::from_rgb(72, 56, 44),
        text: Color32::from_rgb(226, 214, 198),
        text_muted: Color32::from_rgb(160, 146, 130),
        accent_saffron: Color32::from_rgb(236, 152, 48),
        danger: Color32::from_rgb(206, 84, 64),
        playing: Color32::from_rgb(96, 184, 112),
    }
}

/// Dark, square-cornered theme with a saffron selection accent.
pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_window;
    visuals.panel_fill = palette.bg_panel;
    visuals.override_text_color = Some(palette.text);
    visuals.extreme_bg_color = palette.bg_window;
    visuals.error_fg_color = palette.danger;
    visuals.warn_fg_color = palette.accent_saffron;
    visuals.selection.bg_fill = palette.outline;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent_saffron);
    for widget in [
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
        &mut visuals.widgets.open,
    ] {
        square_widget(widget, palette);
    }
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, palette.accent_saffron);
    visuals.window_corner_radius = CornerRadius::ZERO;
    visuals.menu_corner_radius = CornerRadius::ZERO;
    visuals.popup_shadow = Shadow::NONE;
}

fn square_widget(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::ZERO;
    vis.bg_fill = palette.bg_widget;
    vis.weak_bg_fill = palette.bg_widget;
    vis.bg_stroke = Stroke::new(1.0, palette.outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text);
}

pub fn dialog_title_color(kind: DialogKind) -> Color32 {
    match kind {
        DialogKind::Error => palette().danger,
        DialogKind::Info => palette().playing,
    }
}
