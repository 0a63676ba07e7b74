use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use serde::Deserialize;
use shared::state::{AppState, Stats};

pub const DEFAULT_CONFIG_FILE: &str = "dashboard.toml";
pub const ENV_PREFIX: &str = "AUDIT_DASHBOARD__";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    pub rng_seed: Option<u64>,
    pub progress_tick_ms: u64,
    pub wallet_connect_delay_ms: u64,
    pub monitoring_tick_ms: u64,
    pub initial_system_health: u8,
    pub initial_active_alerts: u32,
    pub log_filter: String,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            rng_seed: None,
            progress_tick_ms: 800,
            wallet_connect_delay_ms: 1500,
            monitoring_tick_ms: 2000,
            initial_system_health: 98,
            initial_active_alerts: 3,
            log_filter: "info".into(),
        }
    }
}

impl DashboardSettings {
    pub fn progress_tick(&self) -> Duration {
        Duration::from_millis(self.progress_tick_ms.max(1))
    }

    pub fn wallet_connect_delay(&self) -> Duration {
        Duration::from_millis(self.wallet_connect_delay_ms)
    }

    pub fn monitoring_tick(&self) -> Duration {
        Duration::from_millis(self.monitoring_tick_ms.max(1))
    }

    pub fn initial_state(&self) -> AppState {
        AppState::with_stats(Stats {
            total_audits: 0,
            system_health: self.initial_system_health.min(100),
            active_alerts: self.initial_active_alerts,
        })
    }
}

/// Defaults, then `dashboard.toml` in the working directory, then environment.
/// A malformed file falls back to defaults plus environment; the error is
/// handed back so it can be logged once tracing is up.
pub fn load_settings() -> (DashboardSettings, Option<anyhow::Error>) {
    load_settings_with(&config_path(), env_var)
}

pub fn load_settings_with(
    path: &Path,
    lookup: impl Fn(&str) -> Option<String>,
) -> (DashboardSettings, Option<anyhow::Error>) {
    match load_settings_from(path) {
        Ok(settings) => (apply_env_overrides(settings, lookup), None),
        Err(err) => (
            apply_env_overrides(DashboardSettings::default(), lookup),
            Some(err),
        ),
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn config_path() -> PathBuf {
    std::env::var(format!("{ENV_PREFIX}CONFIG"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// A missing file yields defaults; unreadable or malformed files are errors.
pub fn load_settings_from(path: &Path) -> anyhow::Result<DashboardSettings> {
    if !path.exists() {
        return Ok(DashboardSettings::default());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;
    toml::from_str::<DashboardSettings>(&raw)
        .with_context(|| format!("failed to parse config file '{}'", path.display()))
}

pub fn apply_env_overrides(
    mut settings: DashboardSettings,
    lookup: impl Fn(&str) -> Option<String>,
) -> DashboardSettings {
    let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));

    if let Some(v) = var("RNG_SEED").and_then(|v| v.parse().ok()) {
        settings.rng_seed = Some(v);
    }
    if let Some(v) = var("PROGRESS_TICK_MS").and_then(|v| v.parse().ok()) {
        settings.progress_tick_ms = v;
    }
    if let Some(v) = var("WALLET_CONNECT_DELAY_MS").and_then(|v| v.parse().ok()) {
        settings.wallet_connect_delay_ms = v;
    }
    if let Some(v) = var("MONITORING_TICK_MS").and_then(|v| v.parse().ok()) {
        settings.monitoring_tick_ms = v;
    }
    if let Some(v) = var("INITIAL_SYSTEM_HEALTH").and_then(|v| v.parse().ok()) {
        settings.initial_system_health = v;
    }
    if let Some(v) = var("INITIAL_ACTIVE_ALERTS").and_then(|v| v.parse().ok()) {
        settings.initial_active_alerts = v;
    }
    if let Some(v) = var("LOG_FILTER") {
        settings.log_filter = v;
    }

    settings
}
