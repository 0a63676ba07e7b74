use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{AuditId, AuditStatus, AuditType, CheckpointStatus, ProviderType, Severity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub id: u32,
    pub category: String,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub status: CheckpointStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub score: u8,
    pub passed_count: u32,
    pub failed_count: u32,
    /// Raw count of passing checkpoints per category, not a per-category percentage.
    pub category_scores: BTreeMap<String, u32>,
    pub checkpoints: Vec<Checkpoint>,
}

impl AuditReport {
    pub fn total_checks(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn warned_count(&self) -> u32 {
        self.checkpoints
            .iter()
            .filter(|checkpoint| checkpoint.status == CheckpointStatus::Warn)
            .count() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: AuditId,
    pub target: String,
    #[serde(rename = "type")]
    pub audit_type: AuditType,
    pub score: u8,
    pub status: AuditStatus,
    pub timestamp: DateTime<Utc>,
    pub details: String,
    pub report: AuditReport,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletState {
    pub is_connected: bool,
    #[serde(default)]
    pub address: Option<String>,
    pub balance: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderType>,
}

impl WalletState {
    pub const DISCONNECTED_BALANCE: &'static str = "0.0";

    pub fn disconnected() -> Self {
        Self {
            is_connected: false,
            address: None,
            balance: Self::DISCONNECTED_BALANCE.to_string(),
            provider: None,
        }
    }

    pub fn connected(
        address: impl Into<String>,
        balance: impl Into<String>,
        provider: ProviderType,
    ) -> Self {
        Self {
            is_connected: true,
            address: Some(address.into()),
            balance: balance.into(),
            provider: Some(provider),
        }
    }
}

impl Default for WalletState {
    fn default() -> Self {
        Self::disconnected()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total_audits: u32,
    pub system_health: u8,
    pub active_alerts: u32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            total_audits: 0,
            system_health: 98,
            active_alerts: 3,
        }
    }
}

/// Partial stats merged by `UPDATE_STATS`. `total_audits` is not patchable; only
/// `ADD_AUDIT` moves it, so a payload naming it fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_health: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_alerts: Option<u32>,
}

impl StatsPatch {
    pub fn is_empty(&self) -> bool {
        self.system_health.is_none() && self.active_alerts.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppState {
    /// Newest first.
    pub audits: Vec<AuditLog>,
    pub stats: Stats,
    pub wallet: WalletState,
    pub is_upgrade_modal_open: bool,
    pub is_audit_modal_open: bool,
    pub is_wallet_modal_open: bool,
}

impl AppState {
    pub fn with_stats(stats: Stats) -> Self {
        Self {
            stats,
            ..Self::default()
        }
    }

    pub fn find_audit(&self, id: &AuditId) -> Option<&AuditLog> {
        self.audits.iter().find(|audit| &audit.id == id)
    }

    pub fn open_modal_count(&self) -> usize {
        [
            self.is_upgrade_modal_open,
            self.is_audit_modal_open,
            self.is_wallet_modal_open,
        ]
        .into_iter()
        .filter(|open| *open)
        .count()
    }
}
