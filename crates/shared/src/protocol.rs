use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::state::{AuditLog, StatsPatch, WalletState};

/// Every state change the dashboard can request. Scripts serialize as
/// `{"type": "ADD_AUDIT", "payload": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "SCREAMING_SNAKE_CASE",
    try_from = "ActionEnvelope"
)]
pub enum Action {
    AddAudit(Box<AuditLog>),
    UpdateStats(StatsPatch),
    ConnectWallet(WalletState),
    DisconnectWallet,
    OpenUpgradeModal,
    CloseUpgradeModal,
    OpenAuditModal,
    CloseAuditModal,
    OpenWalletModal,
    CloseWalletModal,
    /// Any tag not listed above, whatever its payload. Applying it leaves
    /// state untouched.
    Unrecognized,
}

impl Action {
    pub fn add_audit(audit: AuditLog) -> Self {
        Self::AddAudit(Box::new(audit))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AddAudit(_) => "ADD_AUDIT",
            Self::UpdateStats(_) => "UPDATE_STATS",
            Self::ConnectWallet(_) => "CONNECT_WALLET",
            Self::DisconnectWallet => "DISCONNECT_WALLET",
            Self::OpenUpgradeModal => "OPEN_UPGRADE_MODAL",
            Self::CloseUpgradeModal => "CLOSE_UPGRADE_MODAL",
            Self::OpenAuditModal => "OPEN_AUDIT_MODAL",
            Self::CloseAuditModal => "CLOSE_AUDIT_MODAL",
            Self::OpenWalletModal => "OPEN_WALLET_MODAL",
            Self::CloseWalletModal => "CLOSE_WALLET_MODAL",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }
}

/// Wire shape of an action before its tag is resolved.
#[derive(Debug, Deserialize)]
pub struct ActionEnvelope {
    #[serde(rename = "type")]
    pub tag: String,
    #[serde(default)]
    pub payload: Value,
}

impl TryFrom<ActionEnvelope> for Action {
    type Error = serde_json::Error;

    fn try_from(envelope: ActionEnvelope) -> Result<Self, Self::Error> {
        let payload = envelope.payload;
        Ok(match envelope.tag.as_str() {
            "ADD_AUDIT" => Self::AddAudit(serde_json::from_value(payload)?),
            "UPDATE_STATS" => Self::UpdateStats(serde_json::from_value(payload)?),
            "CONNECT_WALLET" => Self::ConnectWallet(serde_json::from_value(payload)?),
            "DISCONNECT_WALLET" => Self::DisconnectWallet,
            "OPEN_UPGRADE_MODAL" => Self::OpenUpgradeModal,
            "CLOSE_UPGRADE_MODAL" => Self::CloseUpgradeModal,
            "OPEN_AUDIT_MODAL" => Self::OpenAuditModal,
            "CLOSE_AUDIT_MODAL" => Self::CloseAuditModal,
            "OPEN_WALLET_MODAL" => Self::OpenWalletModal,
            "CLOSE_WALLET_MODAL" => Self::CloseWalletModal,
            _ => Self::Unrecognized,
        })
    }
}
