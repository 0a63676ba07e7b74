use dashboard_core::{forms::InitiateAuditForm, wallet::abbreviate_address};
use eframe::egui;
use shared::{
    domain::{AuditType, ProviderType},
    state::WalletState,
};

use super::{theme, widgets};
use crate::controller::events::{Modal, UiEvent};

const UPGRADE_FEATURES: [&str; 6] = [
    "Unlimited audits per month",
    "Advanced AI-powered analysis",
    "Real-time monitoring alerts",
    "Priority support 24/7",
    "Custom report branding",
    "API access for integrations",
];
const UPGRADE_PRICE: &str = "$99";

fn modal_window<'open>(title: &'static str) -> egui::Window<'open> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .frame(
            egui::Frame::window(&egui::Style::default())
                .fill(theme::PANEL)
                .stroke(egui::Stroke::new(1.0, theme::ACCENT.gamma_multiply(0.6)))
                .inner_margin(egui::Margin::same(16)),
        )
}

pub fn initiate_audit(
    ctx: &egui::Context,
    form: &mut InitiateAuditForm,
    events: &mut Vec<UiEvent>,
) {
    let mut open = true;
    modal_window("INITIATE AUDIT")
        .open(&mut open)
        .show(ctx, |ui| {
            ui.set_min_width(420.0);
            ui.label(widgets::muted("TARGET"));
            let response = ui.add(
                egui::TextEdit::singleline(&mut form.target)
                    .hint_text("URL, contract address or API endpoint")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            ui.label(widgets::muted("AUDIT TYPE"));
            ui.horizontal(|ui| {
                for audit_type in AuditType::ALL {
                    let selected = form.audit_type == audit_type;
                    let text = format!("{}\n{}", audit_type.label(), audit_type.description());
                    if ui.selectable_label(selected, text).clicked() {
                        form.audit_type = audit_type;
                    }
                }
            });
            ui.add_space(12.0);

            let submit_on_enter =
                response.lost_focus() && ui.input(|input| input.key_pressed(egui::Key::Enter));
            ui.horizontal(|ui| {
                let submit =
                    ui.add_enabled(form.can_submit(), widgets::primary_button("START AUDIT"));
                if submit.clicked() || (submit_on_enter && form.can_submit()) {
                    events.push(UiEvent::SubmitAudit);
                }
                if ui.button("CANCEL").clicked() {
                    events.push(UiEvent::CloseModal(Modal::InitiateAudit));
                }
            });
        });
    if !open {
        events.push(UiEvent::CloseModal(Modal::InitiateAudit));
    }
}

pub fn wallet(
    ctx: &egui::Context,
    wallet: &WalletState,
    connecting: Option<ProviderType>,
    events: &mut Vec<UiEvent>,
) {
    let mut open = true;
    modal_window("WALLET")
        .open(&mut open)
        .show(ctx, |ui| {
            ui.set_min_width(360.0);
            if wallet.is_connected {
                let address = wallet.address.as_deref().unwrap_or_default();
                ui.label(widgets::muted("CONNECTED"));
                ui.monospace(address);
                ui.label(format!("Balance: {} ETH", wallet.balance));
                if let Some(provider) = wallet.provider {
                    ui.label(widgets::muted(format!("via {}", provider.display_name())));
                }
                ui.add_space(8.0);
                if ui.button("DISCONNECT").clicked() {
                    events.push(UiEvent::DisconnectWallet);
                }
                return;
            }

            ui.label(widgets::muted("Choose a provider"));
            for provider in ProviderType::SELECTABLE {
                let label = if connecting == Some(provider) {
                    format!("{}  (connecting...)", provider.display_name())
                } else {
                    provider.display_name().to_string()
                };
                let button =
                    egui::Button::new(label).min_size(egui::vec2(ui.available_width(), 34.0));
                let response = ui
                    .add_enabled(connecting.is_none(), button)
                    .on_hover_text(provider.description());
                if response.clicked() {
                    events.push(UiEvent::ConnectWallet(provider));
                }
            }
            if connecting.is_some() {
                ui.add(egui::Spinner::new());
            }
        });
    if !open {
        events.push(UiEvent::CloseModal(Modal::Wallet));
    }
}

pub fn upgrade(ctx: &egui::Context, events: &mut Vec<UiEvent>) {
    let mut open = true;
    modal_window("UPGRADE TO PRO")
        .open(&mut open)
        .show(ctx, |ui| {
            ui.set_min_width(360.0);
            ui.label(widgets::muted("Unlock unlimited power"));
            ui.add_space(8.0);
            for feature in UPGRADE_FEATURES {
                ui.label(format!("✓ {feature}"));
            }
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(UPGRADE_PRICE)
                    .size(24.0)
                    .strong()
                    .color(theme::ACCENT),
            );
            ui.label(widgets::muted("per month"));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.add(widgets::primary_button("UPGRADE NOW")).clicked() {
                    events.push(UiEvent::CloseModal(Modal::Upgrade));
                }
                if ui.button("LATER").clicked() {
                    events.push(UiEvent::CloseModal(Modal::Upgrade));
                }
            });
            ui.label(widgets::muted("30-day money-back guarantee · Cancel anytime").small());
        });
    if !open {
        events.push(UiEvent::CloseModal(Modal::Upgrade));
    }
}

/// Sidebar wallet summary; clicking opens the wallet modal.
pub fn wallet_summary(ui: &mut egui::Ui, wallet: &WalletState, events: &mut Vec<UiEvent>) {
    let text = match (wallet.is_connected, wallet.address.as_deref()) {
        (true, Some(address)) => {
            format!("{}\n{} ETH", abbreviate_address(address), wallet.balance)
        }
        _ => "CONNECT WALLET".to_string(),
    };
    let button = egui::Button::new(text).min_size(egui::vec2(ui.available_width(), 36.0));
    if ui.add(button).clicked() {
        events.push(UiEvent::OpenModal(Modal::Wallet));
    }
}
