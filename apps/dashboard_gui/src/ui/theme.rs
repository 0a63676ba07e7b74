use std::collections::BTreeMap;

use dashboard_core::presenter::Tone;
use eframe::egui;

pub const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(10, 12, 14);
pub const PANEL: egui::Color32 = egui::Color32::from_rgb(17, 20, 23);
pub const CARD: egui::Color32 = egui::Color32::from_rgb(22, 26, 30);
pub const BORDER: egui::Color32 = egui::Color32::from_rgb(44, 52, 58);
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(0, 214, 120);
pub const MUTED_TEXT: egui::Color32 = egui::Color32::from_rgb(128, 138, 146);
pub const GOOD: egui::Color32 = egui::Color32::from_rgb(0, 214, 120);
pub const CAUTION: egui::Color32 = egui::Color32::from_rgb(240, 190, 60);
pub const DANGER: egui::Color32 = egui::Color32::from_rgb(235, 80, 80);

pub const CORNER_RADIUS: u8 = 6;

pub fn tone_color(tone: Tone) -> egui::Color32 {
    match tone {
        Tone::Good => GOOD,
        Tone::Caution => CAUTION,
        Tone::Danger => DANGER,
        Tone::Neutral => egui::Color32::from_rgb(220, 224, 228),
    }
}

fn dashboard_visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();
    visuals.override_text_color = Some(egui::Color32::from_rgb(206, 212, 218));
    visuals.window_fill = PANEL;
    visuals.panel_fill = BACKGROUND;
    visuals.extreme_bg_color = egui::Color32::from_rgb(6, 8, 9);
    visuals.faint_bg_color = CARD;
    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = ACCENT.gamma_multiply(0.6);
    visuals.widgets.active.bg_fill = ACCENT.gamma_multiply(0.8);
    visuals.widgets.hovered.bg_fill = ACCENT.gamma_multiply(0.35);
    visuals.window_corner_radius = egui::CornerRadius::same(CORNER_RADIUS + 2);
    visuals.menu_corner_radius = egui::CornerRadius::same(CORNER_RADIUS);
    visuals.window_stroke = egui::Stroke::new(1.0, BORDER);
    visuals
}

fn monospace_text_styles() -> BTreeMap<egui::TextStyle, egui::FontId> {
    let mut styles = egui::Style::default().text_styles;
    for (style, font) in styles.iter_mut() {
        if *style != egui::TextStyle::Heading {
            font.family = egui::FontFamily::Monospace;
        }
    }
    styles
}

pub fn apply(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = dashboard_visuals();
    style.text_styles = monospace_text_styles();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);
    ctx.set_style(style);
}
