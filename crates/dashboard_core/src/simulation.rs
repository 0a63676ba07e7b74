//! Fabricated audit outcomes. No target is inspected; every result comes from
//! the checkpoint catalog and the injected random source.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use shared::{
    domain::{AuditId, AuditStatus, AuditType, CheckpointStatus, Severity},
    state::{AuditLog, AuditReport, Checkpoint},
};

use crate::random::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckpointTemplate {
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub severity: Severity,
    pub pass_probability: f64,
    pub miss_status: CheckpointStatus,
    pub remediation: &'static str,
}

pub const CHECKPOINT_CATALOG: [CheckpointTemplate; 5] = [
    CheckpointTemplate {
        category: "Authentication",
        title: "Secure Authentication Flow",
        description: "Validates proper authentication implementation",
        severity: Severity::Critical,
        pass_probability: 0.7,
        miss_status: CheckpointStatus::Fail,
        remediation: "Implement OAuth 2.0 with proper token validation",
    },
    CheckpointTemplate {
        category: "Data Protection",
        title: "Data Encryption",
        description: "Checks if sensitive data is encrypted",
        severity: Severity::High,
        pass_probability: 0.8,
        miss_status: CheckpointStatus::Warn,
        remediation: "Use AES-256 encryption for sensitive data",
    },
    CheckpointTemplate {
        category: "Input Validation",
        title: "Input Sanitization",
        description: "Verifies all user inputs are properly sanitized",
        severity: Severity::High,
        pass_probability: 0.75,
        miss_status: CheckpointStatus::Fail,
        remediation: "Implement input validation and sanitization library",
    },
    CheckpointTemplate {
        category: "API Security",
        title: "Rate Limiting",
        description: "Checks for proper API rate limiting",
        severity: Severity::Medium,
        pass_probability: 0.7,
        miss_status: CheckpointStatus::Warn,
        remediation: "Implement rate limiting middleware",
    },
    CheckpointTemplate {
        category: "Error Handling",
        title: "Secure Error Messages",
        description: "Ensures errors don't leak sensitive information",
        severity: Severity::Medium,
        pass_probability: 0.6,
        miss_status: CheckpointStatus::Fail,
        remediation: "Use generic error messages for production",
    },
];

pub const RECOMMENDATIONS: [&str; 4] = [
    "Address all critical and high severity issues immediately",
    "Implement regular security audits (monthly recommended)",
    "Keep all dependencies and frameworks up to date",
    "Enable real-time monitoring for continuous protection",
];

impl CheckpointTemplate {
    /// `draw` is uniform in `[0, 1)`; the check passes when it exceeds the miss band.
    pub fn resolve(&self, id: u32, draw: f64) -> Checkpoint {
        let status = if draw > 1.0 - self.pass_probability {
            CheckpointStatus::Pass
        } else {
            self.miss_status
        };
        Checkpoint {
            id,
            category: self.category.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            severity: self.severity,
            status,
            remediation: (status != CheckpointStatus::Pass)
                .then(|| self.remediation.to_string()),
        }
    }
}

/// One draw per catalog entry, ids assigned from 1. The audit type does not
/// change the catalog.
pub fn generate_checkpoints(
    _audit_type: AuditType,
    rng: &mut dyn RandomSource,
) -> Vec<Checkpoint> {
    CHECKPOINT_CATALOG
        .iter()
        .zip(1u32..)
        .map(|(template, id)| template.resolve(id, rng.next_unit()))
        .collect()
}

pub fn build_report(checkpoints: Vec<Checkpoint>) -> AuditReport {
    let passed_count = count_status(&checkpoints, CheckpointStatus::Pass);
    let failed_count = count_status(&checkpoints, CheckpointStatus::Fail);
    let score = score_for(passed_count, checkpoints.len());

    let mut category_scores: BTreeMap<String, u32> = BTreeMap::new();
    for checkpoint in &checkpoints {
        let entry = category_scores.entry(checkpoint.category.clone()).or_insert(0);
        if checkpoint.status == CheckpointStatus::Pass {
            *entry += 1;
        }
    }

    AuditReport {
        score,
        passed_count,
        failed_count,
        category_scores,
        checkpoints,
    }
}

/// `round(100 * passed / total)`, zero for an empty list.
pub fn score_for(passed: u32, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (f64::from(passed) / total as f64) * 100.0;
    pct.round().clamp(0.0, 100.0) as u8
}

fn count_status(checkpoints: &[Checkpoint], status: CheckpointStatus) -> u32 {
    checkpoints
        .iter()
        .filter(|checkpoint| checkpoint.status == status)
        .count() as u32
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRequest {
    pub target: String,
    pub audit_type: AuditType,
}

impl AuditRequest {
    pub const UNKNOWN_TARGET: &'static str = "Unknown Target";

    pub fn new(target: impl Into<String>, audit_type: AuditType) -> Self {
        Self {
            target: target.into(),
            audit_type,
        }
    }

    /// Fills in the defaults used when a run is opened without navigation parameters.
    pub fn from_transient(target: Option<String>, audit_type: Option<AuditType>) -> Self {
        Self {
            target: target
                .filter(|target| !target.trim().is_empty())
                .unwrap_or_else(|| Self::UNKNOWN_TARGET.to_string()),
            audit_type: audit_type.unwrap_or_default(),
        }
    }
}

pub fn audit_details(audit_type: AuditType) -> String {
    format!("Comprehensive {audit_type} security audit completed")
}

pub fn assemble_audit_log(
    id: AuditId,
    request: &AuditRequest,
    report: AuditReport,
    completed_at: DateTime<Utc>,
) -> AuditLog {
    AuditLog {
        id,
        target: request.target.clone(),
        audit_type: request.audit_type,
        score: report.score,
        status: AuditStatus::from_score(report.score),
        timestamp: completed_at,
        details: audit_details(request.audit_type),
        report,
    }
}

/// Runs the whole routine once: checkpoints, report, and the log entry that
/// `ADD_AUDIT` will carry.
pub fn simulate_audit(
    request: &AuditRequest,
    rng: &mut dyn RandomSource,
    completed_at: DateTime<Utc>,
) -> AuditLog {
    let checkpoints = generate_checkpoints(request.audit_type, rng);
    let report = build_report(checkpoints);
    assemble_audit_log(AuditId::generate(completed_at), request, report, completed_at)
}
