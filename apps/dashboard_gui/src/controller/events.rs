//! Events raised by the views. The session turns them into store actions and
//! timer starts; views never touch the store directly.

use dashboard_core::navigation::Route;
use shared::domain::{AuditId, ProviderType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    InitiateAudit,
    Wallet,
    Upgrade,
}

impl Modal {
    pub fn label(self) -> &'static str {
        match self {
            Self::InitiateAudit => "initiate_audit",
            Self::Wallet => "wallet",
            Self::Upgrade => "upgrade",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Navigate(Route),
    OpenReport(AuditId),
    OpenModal(Modal),
    CloseModal(Modal),
    SubmitAudit,
    ConnectWallet(ProviderType),
    DisconnectWallet,
    DismissAlert(u32),
    SaveSettings,
    DismissStatus,
}

/// Dashboard shortcut buttons in display order. The first is drawn as the
/// primary action.
pub fn quick_actions() -> [(&'static str, UiEvent); 3] {
    [
        ("NEW AUDIT", UiEvent::OpenModal(Modal::InitiateAudit)),
        ("LIVE MONITORING", UiEvent::Navigate(Route::Monitoring)),
        ("UPGRADE TO PRO", UiEvent::OpenModal(Modal::Upgrade)),
    ]
}
