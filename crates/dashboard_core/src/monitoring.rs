//! Monitoring page feed. The gauges are a clamped random walk; alerts,
//! endpoints and scans are fixed fixtures.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use shared::domain::{CheckpointStatus, Severity};

use crate::{random::RandomSource, timer::IntervalTimer};

pub const DEFAULT_MONITORING_INTERVAL: Duration = Duration::from_millis(2000);
pub const HEALTH_LOG_LINES: usize = 20;
pub const HEALTH_LOG_SPACING_SECS: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gauge {
    pub label: &'static str,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    /// Full width of one random step; each tick moves by `(draw - 0.5) * span`.
    pub span: f64,
}

impl Gauge {
    pub fn step(&mut self, draw: f64) {
        self.value = (self.value + (draw - 0.5) * self.span).clamp(self.min, self.max);
    }

    pub fn percent(&self) -> u8 {
        self.value.round().clamp(0.0, 100.0) as u8
    }

    pub fn fraction(&self) -> f32 {
        (self.value / 100.0).clamp(0.0, 1.0) as f32
    }
}

pub fn default_gauges() -> [Gauge; 3] {
    [
        Gauge {
            label: "CPU USAGE",
            value: 45.0,
            min: 20.0,
            max: 90.0,
            span: 10.0,
        },
        Gauge {
            label: "MEMORY",
            value: 62.0,
            min: 30.0,
            max: 85.0,
            span: 8.0,
        },
        Gauge {
            label: "NETWORK",
            value: 78.0,
            min: 40.0,
            max: 95.0,
            span: 15.0,
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct SecurityAlert {
    pub id: u32,
    pub severity: Severity,
    pub title: &'static str,
    pub description: &'static str,
    pub raised_at: DateTime<Utc>,
}

pub fn sample_alerts(now: DateTime<Utc>) -> Vec<SecurityAlert> {
    vec![
        SecurityAlert {
            id: 1,
            severity: Severity::High,
            title: "Unusual API Request Pattern",
            description: "Detected 300% increase in API calls from IP 192.168.1.105",
            raised_at: now - chrono::Duration::minutes(5),
        },
        SecurityAlert {
            id: 2,
            severity: Severity::Medium,
            title: "Failed Authentication Attempts",
            description: "15 failed login attempts in the last hour",
            raised_at: now - chrono::Duration::minutes(30),
        },
        SecurityAlert {
            id: 3,
            severity: Severity::Low,
            title: "SSL Certificate Expiring Soon",
            description: "SSL certificate for api.example.com expires in 30 days",
            raised_at: now - chrono::Duration::minutes(60),
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointHealth {
    Online,
    Degraded,
}

impl EndpointHealth {
    pub fn label(self) -> &'static str {
        match self {
            Self::Online => "ONLINE",
            Self::Degraded => "DEGRADED",
        }
    }
}

pub const ENDPOINTS: [(&str, EndpointHealth); 4] = [
    ("API Gateway", EndpointHealth::Online),
    ("Auth Service", EndpointHealth::Online),
    ("Database", EndpointHealth::Online),
    ("Cache Layer", EndpointHealth::Degraded),
];

pub const RECENT_SCANS: [(&str, &str, CheckpointStatus); 4] = [
    ("api.example.com", "2m ago", CheckpointStatus::Pass),
    ("app.example.com", "15m ago", CheckpointStatus::Warn),
    ("cdn.example.com", "1h ago", CheckpointStatus::Pass),
    ("db.example.com", "3h ago", CheckpointStatus::Pass),
];

/// Timestamps for the rolling health-check log, newest first.
pub fn health_log_times(now: DateTime<Utc>) -> Vec<DateTime<Utc>> {
    (0..HEALTH_LOG_LINES as i64)
        .map(|i| now - chrono::Duration::seconds(i * HEALTH_LOG_SPACING_SECS))
        .collect()
}

/// Per-view state for the monitoring page. Created on entry, dropped on exit.
pub struct MonitoringFeed {
    gauges: [Gauge; 3],
    alerts: Vec<SecurityAlert>,
    timer: IntervalTimer,
}

impl MonitoringFeed {
    pub fn start(interval: Duration, now: Instant, wall_now: DateTime<Utc>) -> Self {
        Self {
            gauges: default_gauges(),
            alerts: sample_alerts(wall_now),
            timer: IntervalTimer::start(interval, now),
        }
    }

    pub fn gauges(&self) -> &[Gauge; 3] {
        &self.gauges
    }

    pub fn alerts(&self) -> &[SecurityAlert] {
        &self.alerts
    }

    /// Applies one random-walk step per elapsed period. Returns the number of steps.
    pub fn poll(&mut self, now: Instant, rng: &mut dyn RandomSource) -> u32 {
        let due = self.timer.poll(now);
        for _ in 0..due {
            for gauge in &mut self.gauges {
                gauge.step(rng.next_unit());
            }
        }
        due
    }

    pub fn dismiss_alert(&mut self, id: u32) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|alert| alert.id != id);
        self.alerts.len() != before
    }

    pub fn time_until_next_update(&self, now: Instant) -> Option<Duration> {
        self.timer.time_until_next(now)
    }
}
