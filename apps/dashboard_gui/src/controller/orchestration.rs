//! Translation helpers from UI events to store actions.

use dashboard_core::Dispatch;
use shared::protocol::Action;

use super::events::Modal;

pub fn modal_action(modal: Modal, open: bool) -> Action {
    match (modal, open) {
        (Modal::InitiateAudit, true) => Action::OpenAuditModal,
        (Modal::InitiateAudit, false) => Action::CloseAuditModal,
        (Modal::Wallet, true) => Action::OpenWalletModal,
        (Modal::Wallet, false) => Action::CloseWalletModal,
        (Modal::Upgrade, true) => Action::OpenUpgradeModal,
        (Modal::Upgrade, false) => Action::CloseUpgradeModal,
    }
}

pub fn dispatch_ui_action(dispatcher: &mut dyn Dispatch, action: Action, source: &'static str) {
    tracing::trace!(action = action.name(), source, "ui->store action");
    dispatcher.dispatch(action);
}
