//! Plain-text rendering of a finished audit for terminal output.

use std::fmt::Write as _;

use dashboard_core::{presenter::score_history, simulation::RECOMMENDATIONS};
use shared::state::{AppState, AuditLog};

pub fn render_report(audit: &AuditLog) -> String {
    let report = &audit.report;
    let mut out = String::new();

    let _ = writeln!(out, "AUDIT {}", audit.id);
    let _ = writeln!(out, "target     {}", audit.target);
    let _ = writeln!(out, "type       {}", audit.audit_type.label());
    let _ = writeln!(out, "completed  {}", audit.timestamp.to_rfc3339());
    let _ = writeln!(out, "score      {} ({})", audit.score, audit.status.label());
    let _ = writeln!(
        out,
        "checks     {} passed / {} warned / {} failed / {} total",
        report.passed_count,
        report.warned_count(),
        report.failed_count,
        report.total_checks()
    );
    let _ = writeln!(out, "{}", audit.details);

    let _ = writeln!(out, "\nCATEGORIES");
    for (category, passed) in &report.category_scores {
        let _ = writeln!(out, "  {category:<20} {passed}");
    }

    let _ = writeln!(out, "\nCHECKPOINTS");
    for checkpoint in &report.checkpoints {
        let _ = writeln!(
            out,
            "  [{:<4}] {} ({})",
            checkpoint.status.label(),
            checkpoint.title,
            checkpoint.severity.label()
        );
        if let Some(remediation) = &checkpoint.remediation {
            let _ = writeln!(out, "         remediation: {remediation}");
        }
    }

    let _ = writeln!(out, "\nRECOMMENDATIONS");
    for recommendation in RECOMMENDATIONS {
        let _ = writeln!(out, "  - {recommendation}");
    }
    out
}

/// One-screen summary of a replayed state.
pub fn render_summary(state: &AppState) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "audits {} | health {}% | alerts {} | wallet {}",
        state.stats.total_audits,
        state.stats.system_health,
        state.stats.active_alerts,
        if state.wallet.is_connected {
            state.wallet.address.as_deref().unwrap_or("connected")
        } else {
            "disconnected"
        }
    );
    if let Some(points) = score_history(&state.audits) {
        let scores: Vec<String> = points.iter().map(|p| p.score.to_string()).collect();
        let _ = writeln!(out, "score trend {}", scores.join(" -> "));
    }
    out
}
