use dashboard_core::{
    monitoring::Gauge,
    presenter::{ChartPoint, StatCard, Tone},
};
use eframe::egui;

use super::theme;

pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(theme::CARD)
        .stroke(egui::Stroke::new(1.0, theme::BORDER))
        .corner_radius(theme::CORNER_RADIUS)
        .inner_margin(egui::Margin::same(12))
}

pub fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(4.0);
    ui.label(egui::RichText::new(text).strong().color(theme::ACCENT));
    ui.add_space(2.0);
}

pub fn muted(text: impl Into<String>) -> egui::RichText {
    egui::RichText::new(text.into()).color(theme::MUTED_TEXT)
}

pub fn badge(ui: &mut egui::Ui, label: &str, tone: Tone) {
    let color = theme::tone_color(tone);
    egui::Frame::new()
        .stroke(egui::Stroke::new(1.0, color))
        .corner_radius(3u8)
        .inner_margin(egui::Margin::symmetric(6, 1))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(label).small().color(color));
        });
}

pub fn primary_button(label: &str) -> egui::Button<'static> {
    let text = egui::RichText::new(label.to_string())
        .strong()
        .color(theme::BACKGROUND);
    egui::Button::new(text)
        .fill(theme::ACCENT)
        .min_size(egui::vec2(0.0, 30.0))
}

pub fn stat_card(ui: &mut egui::Ui, card: &StatCard) {
    card_frame().show(ui, |ui| {
        ui.set_min_width(160.0);
        ui.label(muted(card.label).small());
        ui.label(
            egui::RichText::new(&card.value)
                .size(26.0)
                .strong()
                .color(theme::tone_color(card.tone)),
        );
    });
}

/// Horizontal meter with the gauge's label and rounded percentage.
pub fn gauge_meter(ui: &mut egui::Ui, gauge: &Gauge) {
    let tone = if gauge.value >= 80.0 {
        Tone::Danger
    } else if gauge.value >= 60.0 {
        Tone::Caution
    } else {
        Tone::Good
    };
    ui.horizontal(|ui| {
        ui.label(muted(gauge.label));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format!("{}%", gauge.percent()));
        });
    });
    ui.add(
        egui::ProgressBar::new(gauge.fraction())
            .fill(theme::tone_color(tone))
            .desired_height(8.0),
    );
}

/// Line chart of recent scores. Points are in 0..=100 on both axes.
pub fn score_chart(ui: &mut egui::Ui, points: &[ChartPoint]) {
    let desired = egui::vec2(ui.available_width(), 140.0);
    let (response, painter) = ui.allocate_painter(desired, egui::Sense::hover());
    let rect = response.rect.shrink(8.0);
    painter.rect_stroke(
        response.rect,
        egui::CornerRadius::same(theme::CORNER_RADIUS),
        egui::Stroke::new(1.0, theme::BORDER),
        egui::StrokeKind::Inside,
    );

    for guide in [20.0_f32, 40.0, 60.0, 80.0] {
        let y = rect.top() + rect.height() * (100.0 - guide) / 100.0;
        painter.line_segment(
            [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
            egui::Stroke::new(0.5, theme::BORDER),
        );
    }

    let to_screen = |point: &ChartPoint| {
        egui::pos2(
            rect.left() + rect.width() * point.x / 100.0,
            rect.top() + rect.height() * point.y / 100.0,
        )
    };
    let line: Vec<egui::Pos2> = points.iter().map(to_screen).collect();
    painter.add(egui::Shape::line(
        line.clone(),
        egui::Stroke::new(2.0, theme::ACCENT),
    ));
    for (pos, point) in line.into_iter().zip(points) {
        let color = theme::tone_color(dashboard_core::presenter::score_tone(point.score));
        painter.circle_filled(pos, 3.5, color);
    }
}
