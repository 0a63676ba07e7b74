//! Ephemeral per-view form state. Never stored in `AppState`, never persisted.

use shared::{
    domain::{AuditType, ScanFrequency},
    error::DomainError,
};

use crate::simulation::AuditRequest;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitiateAuditForm {
    pub target: String,
    pub audit_type: AuditType,
}

impl InitiateAuditForm {
    pub fn can_submit(&self) -> bool {
        !self.target.trim().is_empty()
    }

    pub fn validate(&self) -> Result<AuditRequest, DomainError> {
        if !self.can_submit() {
            return Err(DomainError::EmptyTarget);
        }
        Ok(AuditRequest::new(self.target.clone(), self.audit_type))
    }

    /// Takes the request and clears the form; empty targets are rejected.
    pub fn submit(&mut self) -> Result<AuditRequest, DomainError> {
        let request = self.validate()?;
        self.reset();
        Ok(request)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

pub const SETTINGS_SAVED_MESSAGE: &str = "Settings saved successfully!";
pub const DEFAULT_API_KEY: &str = "sk_live_...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub auto_scan: bool,
    pub scan_frequency: ScanFrequency,
    pub api_key: String,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self {
            email_notifications: true,
            push_notifications: true,
            auto_scan: false,
            scan_frequency: ScanFrequency::Weekly,
            api_key: DEFAULT_API_KEY.to_string(),
        }
    }
}

impl SettingsForm {
    /// Frequency only matters while auto-scan is on.
    pub fn effective_scan_frequency(&self) -> Option<ScanFrequency> {
        self.auto_scan.then_some(self.scan_frequency)
    }

    pub fn masked_api_key(&self) -> String {
        "•".repeat(self.api_key.chars().count())
    }

    /// Nothing is written anywhere; the caller shows the returned status.
    pub fn save(&self) -> &'static str {
        tracing::debug!(
            email = self.email_notifications,
            push = self.push_notifications,
            auto_scan = self.auto_scan,
            "settings saved locally"
        );
        SETTINGS_SAVED_MESSAGE
    }
}
