//! View-model helpers shared by the GUI and the CLI. Everything here is a pure
//! read of `AppState`.

use chrono::{DateTime, Utc};
use shared::{
    domain::AuditStatus,
    state::{AppState, AuditLog},
};

pub const RECENT_AUDIT_LIMIT: usize = 5;
pub const SCORE_HISTORY_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Good,
    Caution,
    Danger,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub tone: Tone,
}

pub fn stat_cards(state: &AppState) -> [StatCard; 3] {
    [
        StatCard {
            label: "TOTAL AUDITS",
            value: state.stats.total_audits.to_string(),
            tone: Tone::Neutral,
        },
        StatCard {
            label: "SYSTEM HEALTH",
            value: format!("{}%", state.stats.system_health),
            tone: Tone::Good,
        },
        StatCard {
            label: "ACTIVE ALERTS",
            value: state.stats.active_alerts.to_string(),
            tone: Tone::Caution,
        },
    ]
}

pub fn recent_audits(state: &AppState) -> &[AuditLog] {
    let end = state.audits.len().min(RECENT_AUDIT_LIMIT);
    &state.audits[..end]
}

pub fn status_tone(status: AuditStatus) -> Tone {
    match status {
        AuditStatus::Pass => Tone::Good,
        AuditStatus::Warning => Tone::Caution,
        AuditStatus::Fail => Tone::Danger,
    }
}

/// Tone for the report's headline score; same bands as the audit status.
pub fn score_tone(score: u8) -> Tone {
    status_tone(AuditStatus::from_score(score))
}

/// Tone for the log table, which uses its own wider bands.
pub fn integrity_tone(score: u8) -> Tone {
    if score >= 90 {
        Tone::Good
    } else if score >= 50 {
        Tone::Caution
    } else {
        Tone::Danger
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    /// 0..=100, left to right.
    pub x: f32,
    /// 0..=100, top to bottom (a score of 100 sits at 0).
    pub y: f32,
    pub score: u8,
}

/// The last ten audits by timestamp, oldest first, as chart coordinates.
/// `None` when there are fewer than two points to draw a line through.
pub fn score_history(audits: &[AuditLog]) -> Option<Vec<ChartPoint>> {
    let mut ordered: Vec<&AuditLog> = audits.iter().collect();
    ordered.sort_by_key(|audit| audit.timestamp);
    let skip = ordered.len().saturating_sub(SCORE_HISTORY_LIMIT);
    let window = &ordered[skip..];
    if window.len() < 2 {
        return None;
    }
    let last = (window.len() - 1) as f32;
    Some(
        window
            .iter()
            .enumerate()
            .map(|(index, audit)| ChartPoint {
                x: index as f32 / last * 100.0,
                y: 100.0 - f32::from(audit.score),
                score: audit.score,
            })
            .collect(),
    )
}

/// Compact age such as `42s`, `5m`, `3H`, `2D`, `4M`, `1Y`.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0) as f64;
    const UNITS: [(f64, &str); 5] = [
        (31_536_000.0, "Y"),
        (2_592_000.0, "M"),
        (86_400.0, "D"),
        (3_600.0, "H"),
        (60.0, "m"),
    ];
    for (unit_secs, suffix) in UNITS {
        let interval = seconds / unit_secs;
        if interval > 1.0 {
            return format!("{}{suffix}", interval.floor() as u64);
        }
    }
    format!("{}s", seconds.floor() as u64)
}
