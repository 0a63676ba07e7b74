use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditId(pub String);

impl AuditId {
    /// Builds `audit_<unix-millis>_<8 hex chars>` for a run completing at `completed_at`.
    pub fn generate(completed_at: DateTime<Utc>) -> Self {
        let suffix = Uuid::new_v4().simple().to_string();
        Self(format!(
            "audit_{}_{}",
            completed_at.timestamp_millis(),
            &suffix[..8]
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuditId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AuditId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuditType {
    #[default]
    MiniApp,
    AiAgent,
    Blockchain,
}

impl AuditType {
    pub const ALL: [AuditType; 3] = [Self::MiniApp, Self::AiAgent, Self::Blockchain];

    pub fn slug(self) -> &'static str {
        match self {
            Self::MiniApp => "mini-app",
            Self::AiAgent => "ai-agent",
            Self::Blockchain => "blockchain",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::MiniApp => "MINI APP",
            Self::AiAgent => "AI AGENT",
            Self::Blockchain => "BLOCKCHAIN",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::MiniApp => "Telegram Mini Apps",
            Self::AiAgent => "AI Systems",
            Self::Blockchain => "Smart Contracts",
        }
    }
}

impl fmt::Display for AuditType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for AuditType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mini-app" | "mini_app" | "miniapp" => Ok(Self::MiniApp),
            "ai-agent" | "ai_agent" | "aiagent" => Ok(Self::AiAgent),
            "blockchain" => Ok(Self::Blockchain),
            _ => Err(DomainError::UnknownAuditType(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckpointStatus {
    Pass,
    Fail,
    Warn,
}

impl CheckpointStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Warn => "WARN",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditStatus {
    Pass,
    Warning,
    Fail,
}

impl AuditStatus {
    pub const PASS_THRESHOLD: u8 = 80;
    pub const WARNING_THRESHOLD: u8 = 60;

    /// Both thresholds are inclusive: 80 is a pass, 60 is a warning.
    pub fn from_score(score: u8) -> Self {
        if score >= Self::PASS_THRESHOLD {
            Self::Pass
        } else if score >= Self::WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::Fail
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Warning => "WARNING",
            Self::Fail => "FAIL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProviderType {
    Metamask,
    Coinbase,
    WalletConnect,
    Simulation,
}

impl ProviderType {
    /// Providers offered in the connect dialog.
    pub const SELECTABLE: [ProviderType; 3] =
        [Self::Metamask, Self::Coinbase, Self::WalletConnect];

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Metamask => "MetaMask",
            Self::Coinbase => "Coinbase Wallet",
            Self::WalletConnect => "WalletConnect",
            Self::Simulation => "Simulation",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Metamask => "Connect with MetaMask",
            Self::Coinbase => "Connect with Coinbase",
            Self::WalletConnect => "Scan with mobile",
            Self::Simulation => "Simulated provider",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanFrequency {
    Daily,
    #[default]
    Weekly,
    Monthly,
}

impl ScanFrequency {
    pub const ALL: [ScanFrequency; 3] = [Self::Daily, Self::Weekly, Self::Monthly];

    pub fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }
}
