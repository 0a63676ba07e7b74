use std::time::Duration;

use dashboard_core::navigation::{Route, Section};
use eframe::egui;

use super::{modals, pages, theme, widgets};
use crate::controller::{
    events::{Modal, UiEvent},
    session::DashboardSession,
};

const IDLE_REPAINT: Duration = Duration::from_secs(1);

pub struct DashboardApp {
    session: DashboardSession,
    theme_applied: bool,
}

impl DashboardApp {
    pub fn new(session: DashboardSession) -> Self {
        Self {
            session,
            theme_applied: false,
        }
    }

    fn show_sidebar(&self, ctx: &egui::Context, events: &mut Vec<UiEvent>) {
        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(220.0)
            .frame(
                egui::Frame::new()
                    .fill(theme::PANEL)
                    .inner_margin(egui::Margin::same(12)),
            )
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new("AUDIT//DASH")
                        .size(20.0)
                        .strong()
                        .color(theme::ACCENT),
                );
                ui.label(widgets::muted("security operations").small());
                ui.separator();

                let active = self.session.route().section();
                for section in Section::ALL {
                    let selected = active == Some(section);
                    let response = ui.add_sized(
                        egui::vec2(ui.available_width(), 30.0),
                        egui::Button::new(section.label()).selected(selected),
                    );
                    if response.clicked() && !selected {
                        events.push(UiEvent::Navigate(section.route()));
                    }
                }
                ui.add_space(8.0);
                let new_audit = ui.add_sized(
                    egui::vec2(ui.available_width(), 32.0),
                    widgets::primary_button("+ NEW AUDIT"),
                );
                if new_audit.clicked() {
                    events.push(UiEvent::OpenModal(Modal::InitiateAudit));
                }

                ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                    if ui.button("UPGRADE TO PRO").clicked() {
                        events.push(UiEvent::OpenModal(Modal::Upgrade));
                    }
                    modals::wallet_summary(ui, &self.session.state().wallet, events);
                });
            });
    }

    fn show_status_bar(&self, ctx: &egui::Context, events: &mut Vec<UiEvent>) {
        let Some(status) = self.session.status() else {
            return;
        };
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(status);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✕").clicked() {
                        events.push(UiEvent::DismissStatus);
                    }
                });
            });
        });
    }

    fn show_page(&mut self, ctx: &egui::Context, events: &mut Vec<UiEvent>) {
        let now = self.session.wall_clock();
        let route = self.session.route().clone();
        let status = self.session.status().map(str::to_owned);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match &route {
                    Route::Dashboard => pages::dashboard(ui, self.session.state(), now, events),
                    Route::NewAudit(_) => pages::new_audit(ui, self.session.audit_run(), events),
                    Route::Report(id) => pages::report(ui, self.session.state(), id, events),
                    Route::Monitoring => {
                        pages::monitoring(ui, self.session.monitoring(), now, events)
                    }
                    Route::Settings => pages::settings(
                        ui,
                        self.session.settings_form_mut(),
                        status.as_deref(),
                        events,
                    ),
                });
        });
    }

    fn show_modals(&mut self, ctx: &egui::Context, events: &mut Vec<UiEvent>) {
        let state = self.session.state();
        let (audit_open, wallet_open, upgrade_open) = (
            state.is_audit_modal_open,
            state.is_wallet_modal_open,
            state.is_upgrade_modal_open,
        );
        let wallet = state.wallet.clone();

        if upgrade_open {
            modals::upgrade(ctx, events);
        }
        if wallet_open {
            let connecting = self.session.pending_wallet_provider();
            modals::wallet(ctx, &wallet, connecting, events);
        }
        if audit_open {
            modals::initiate_audit(ctx, self.session.audit_form_mut(), events);
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            theme::apply(ctx);
            self.theme_applied = true;
        }

        let changes = self.session.tick();

        let mut events = Vec::new();
        self.show_sidebar(ctx, &mut events);
        self.show_status_bar(ctx, &mut events);
        self.show_page(ctx, &mut events);
        self.show_modals(ctx, &mut events);

        let handled = events.len();
        for event in events {
            self.session.handle(event);
        }

        if changes > 0 || handled > 0 {
            ctx.request_repaint();
        } else {
            let wakeup = self
                .session
                .next_wakeup()
                .map_or(IDLE_REPAINT, |wait| wait.min(IDLE_REPAINT));
            ctx.request_repaint_after(wakeup);
        }
    }
}
