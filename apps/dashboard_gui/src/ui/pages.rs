//! One function per route. Pages read state and push [`UiEvent`]s; none of
//! them mutates the store.

use chrono::{DateTime, Local, Utc};
use dashboard_core::{
    forms::SettingsForm,
    monitoring::{health_log_times, EndpointHealth, MonitoringFeed, ENDPOINTS, RECENT_SCANS},
    navigation::{lookup_report, ReportLookup, Route},
    presenter::{
        integrity_tone, recent_audits, score_history, score_tone, stat_cards, status_tone,
        time_ago, Tone,
    },
    progress::AuditPhase,
    simulation::RECOMMENDATIONS,
    AuditRun,
};
use eframe::egui;
use shared::{
    domain::{AuditId, CheckpointStatus, ScanFrequency, Severity},
    state::{AppState, AuditLog},
};

use super::{theme, widgets};
use crate::controller::events::{quick_actions, Modal, UiEvent};

fn severity_tone(severity: Severity) -> Tone {
    match severity {
        Severity::Critical | Severity::High => Tone::Danger,
        Severity::Medium => Tone::Caution,
        Severity::Low => Tone::Neutral,
    }
}

fn checkpoint_tone(status: CheckpointStatus) -> Tone {
    match status {
        CheckpointStatus::Pass => Tone::Good,
        CheckpointStatus::Warn => Tone::Caution,
        CheckpointStatus::Fail => Tone::Danger,
    }
}

fn local_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn dashboard(
    ui: &mut egui::Ui,
    state: &AppState,
    now: DateTime<Utc>,
    events: &mut Vec<UiEvent>,
) {
    ui.heading("SECURITY OVERVIEW");
    ui.add_space(8.0);

    ui.horizontal_wrapped(|ui| {
        for card in stat_cards(state) {
            widgets::stat_card(ui, &card);
        }
    });
    ui.add_space(12.0);

    ui.columns(2, |columns| {
        widgets::card_frame().show(&mut columns[0], |ui| {
            widgets::section_heading(ui, "RECENT AUDITS");
            let recent = recent_audits(state);
            if recent.is_empty() {
                ui.label(widgets::muted("No audits yet."));
                if ui.add(widgets::primary_button("RUN FIRST AUDIT")).clicked() {
                    events.push(UiEvent::OpenModal(Modal::InitiateAudit));
                }
            }
            for audit in recent {
                recent_audit_row(ui, audit, events);
            }
        });

        widgets::card_frame().show(&mut columns[1], |ui| {
            widgets::section_heading(ui, "QUICK ACTIONS");
            for (index, (label, event)) in quick_actions().into_iter().enumerate() {
                let clicked = if index == 0 {
                    ui.add(widgets::primary_button(label)).clicked()
                } else {
                    ui.button(label).clicked()
                };
                if clicked {
                    events.push(event);
                }
            }
        });
    });
    ui.add_space(12.0);

    widgets::card_frame().show(ui, |ui| {
        widgets::section_heading(ui, "SCORE HISTORY");
        match score_history(&state.audits) {
            Some(points) => widgets::score_chart(ui, &points),
            None => {
                ui.label(widgets::muted("Run at least two audits to see a trend."));
            }
        }
    });
    ui.add_space(12.0);

    widgets::card_frame().show(ui, |ui| {
        widgets::section_heading(ui, "AUDIT LOG");
        audit_log_table(ui, &state.audits, now, events);
    });
}

fn recent_audit_row(ui: &mut egui::Ui, audit: &AuditLog, events: &mut Vec<UiEvent>) {
    ui.horizontal(|ui| {
        let clicked = ui
            .add(egui::Button::new(audit.target.as_str()).frame(false))
            .on_hover_text(audit.id.as_str())
            .clicked();
        if clicked {
            events.push(UiEvent::OpenReport(audit.id.clone()));
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            widgets::badge(ui, audit.status.label(), status_tone(audit.status));
            ui.label(
                egui::RichText::new(audit.score.to_string())
                    .color(theme::tone_color(score_tone(audit.score))),
            );
        });
    });
}

fn audit_log_table(
    ui: &mut egui::Ui,
    audits: &[AuditLog],
    now: DateTime<Utc>,
    events: &mut Vec<UiEvent>,
) {
    if audits.is_empty() {
        ui.label(widgets::muted("The log is empty."));
        return;
    }
    egui::Grid::new("audit_log_table")
        .num_columns(5)
        .striped(true)
        .spacing(egui::vec2(16.0, 6.0))
        .show(ui, |ui| {
            for header in ["AGE", "TARGET", "TYPE", "INTEGRITY", ""] {
                ui.label(widgets::muted(header).small());
            }
            ui.end_row();

            for audit in audits {
                ui.label(time_ago(audit.timestamp, now));
                ui.label(&audit.target);
                ui.label(audit.audit_type.label());
                ui.label(
                    egui::RichText::new(format!("{}%", audit.score))
                        .color(theme::tone_color(integrity_tone(audit.score))),
                );
                if ui.small_button("VIEW").clicked() {
                    events.push(UiEvent::OpenReport(audit.id.clone()));
                }
                ui.end_row();
            }
        });
}

pub fn new_audit(ui: &mut egui::Ui, run: Option<&AuditRun>, events: &mut Vec<UiEvent>) {
    let Some(run) = run else {
        ui.label(widgets::muted("No audit in progress."));
        return;
    };
    let request = run.request();

    ui.heading("AUDIT IN PROGRESS");
    ui.label(widgets::muted(format!(
        "{} · {}",
        request.target,
        request.audit_type.label()
    )));
    ui.add_space(12.0);

    widgets::card_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            let tone = match run.phase() {
                AuditPhase::Complete => Tone::Good,
                AuditPhase::Running => Tone::Caution,
                AuditPhase::Initializing => Tone::Neutral,
            };
            widgets::badge(ui, run.phase().label(), tone);
            ui.label(run.current_step());
        });
        ui.add(
            egui::ProgressBar::new((run.progress() / 100.0) as f32)
                .fill(theme::ACCENT)
                .text(format!("{}%", run.progress_percent())),
        );
    });
    ui.add_space(8.0);

    widgets::card_frame().show(ui, |ui| {
        widgets::section_heading(ui, "ANALYSIS LOG");
        if run.phase() == AuditPhase::Initializing {
            ui.label(widgets::muted("> waiting for engine..."));
        } else {
            for line in run.log_lines() {
                ui.label(format!("> {line}"));
            }
        }
    });
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        if let Some(id) = run.audit_id() {
            if ui.add(widgets::primary_button("VIEW FULL REPORT")).clicked() {
                events.push(UiEvent::OpenReport(id.clone()));
            }
        }
        if ui.button("BACK TO DASHBOARD").clicked() {
            events.push(UiEvent::Navigate(Route::Dashboard));
        }
    });
}

pub fn report(ui: &mut egui::Ui, state: &AppState, id: &AuditId, events: &mut Vec<UiEvent>) {
    let audit = match lookup_report(state, id) {
        ReportLookup::Found(audit) => audit,
        ReportLookup::NotFound => {
            ui.heading("AUDIT NOT FOUND");
            ui.label(widgets::muted(format!("No audit with id {id} exists.")));
            if ui.add(widgets::primary_button("BACK TO DASHBOARD")).clicked() {
                events.push(UiEvent::Navigate(Route::Dashboard));
            }
            return;
        }
    };
    let report = &audit.report;

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading("AUDIT REPORT");
            ui.label(widgets::muted(audit.id.as_str()));
            ui.label(format!("Target: {}", audit.target));
            ui.label(format!("Type: {}", audit.audit_type.label()));
            ui.label(widgets::muted(local_time(audit.timestamp)));
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(audit.score.to_string())
                        .size(48.0)
                        .strong()
                        .color(theme::tone_color(status_tone(audit.status))),
                );
                widgets::badge(ui, audit.status.label(), status_tone(audit.status));
            });
        });
    });
    ui.add_space(12.0);

    ui.horizontal_wrapped(|ui| {
        for (label, value, tone) in [
            ("PASSED", report.passed_count as usize, Tone::Good),
            ("WARNINGS", report.warned_count() as usize, Tone::Caution),
            ("FAILED", report.failed_count as usize, Tone::Danger),
            ("TOTAL CHECKS", report.total_checks(), Tone::Neutral),
        ] {
            widgets::stat_card(
                ui,
                &dashboard_core::presenter::StatCard {
                    label,
                    value: value.to_string(),
                    tone,
                },
            );
        }
    });
    ui.add_space(12.0);

    widgets::card_frame().show(ui, |ui| {
        widgets::section_heading(ui, "CHECKPOINTS");
        for checkpoint in &report.checkpoints {
            ui.horizontal(|ui| {
                widgets::badge(
                    ui,
                    checkpoint.status.label(),
                    checkpoint_tone(checkpoint.status),
                );
                ui.label(egui::RichText::new(&checkpoint.title).strong());
                ui.label(widgets::muted(&checkpoint.category));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    widgets::badge(
                        ui,
                        checkpoint.severity.label(),
                        severity_tone(checkpoint.severity),
                    );
                });
            });
            ui.label(widgets::muted(&checkpoint.description));
            if let Some(remediation) = &checkpoint.remediation {
                ui.label(
                    egui::RichText::new(format!("Remediation: {remediation}"))
                        .color(theme::CAUTION),
                );
            }
            ui.separator();
        }
    });
    ui.add_space(8.0);

    widgets::card_frame().show(ui, |ui| {
        widgets::section_heading(ui, "RECOMMENDATIONS");
        for recommendation in RECOMMENDATIONS {
            ui.label(format!("• {recommendation}"));
        }
    });
    ui.add_space(8.0);

    if ui.button("BACK TO DASHBOARD").clicked() {
        events.push(UiEvent::Navigate(Route::Dashboard));
    }
}

pub fn monitoring(
    ui: &mut egui::Ui,
    feed: Option<&MonitoringFeed>,
    now: DateTime<Utc>,
    events: &mut Vec<UiEvent>,
) {
    ui.heading("LIVE MONITORING");
    ui.add_space(8.0);
    let Some(feed) = feed else {
        ui.label(widgets::muted("Monitoring feed is not running."));
        return;
    };

    widgets::card_frame().show(ui, |ui| {
        widgets::section_heading(ui, "SYSTEM RESOURCES");
        for gauge in feed.gauges() {
            widgets::gauge_meter(ui, gauge);
        }
    });
    ui.add_space(8.0);

    widgets::card_frame().show(ui, |ui| {
        widgets::section_heading(ui, "SECURITY ALERTS");
        if feed.alerts().is_empty() {
            ui.label(widgets::muted("No active alerts."));
        }
        for alert in feed.alerts() {
            ui.horizontal(|ui| {
                widgets::badge(ui, alert.severity.label(), severity_tone(alert.severity));
                ui.label(egui::RichText::new(alert.title).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("DISMISS").clicked() {
                        events.push(UiEvent::DismissAlert(alert.id));
                    }
                    ui.label(widgets::muted(time_ago(alert.raised_at, now)));
                });
            });
            ui.label(widgets::muted(alert.description));
            ui.separator();
        }
    });
    ui.add_space(8.0);

    ui.columns(2, |columns| {
        widgets::card_frame().show(&mut columns[0], |ui| {
            widgets::section_heading(ui, "ENDPOINTS");
            for (name, health) in ENDPOINTS {
                ui.horizontal(|ui| {
                    ui.label(name);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let tone = match health {
                            EndpointHealth::Online => Tone::Good,
                            EndpointHealth::Degraded => Tone::Caution,
                        };
                        widgets::badge(ui, health.label(), tone);
                    });
                });
            }
        });
        widgets::card_frame().show(&mut columns[1], |ui| {
            widgets::section_heading(ui, "RECENT SCANS");
            for (host, age, status) in RECENT_SCANS {
                ui.horizontal(|ui| {
                    ui.label(host);
                    ui.label(widgets::muted(age));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        widgets::badge(ui, status.label(), checkpoint_tone(status));
                    });
                });
            }
        });
    });
    ui.add_space(8.0);

    widgets::card_frame().show(ui, |ui| {
        widgets::section_heading(ui, "HEALTH CHECK LOG");
        egui::ScrollArea::vertical()
            .id_salt("health_log")
            .max_height(160.0)
            .show(ui, |ui| {
                for at in health_log_times(now) {
                    ui.label(
                        egui::RichText::new(format!(
                            "[{}] health check OK",
                            at.with_timezone(&Local).format("%H:%M:%S")
                        ))
                        .small()
                        .color(theme::MUTED_TEXT),
                    );
                }
            });
    });
}

pub fn settings(
    ui: &mut egui::Ui,
    form: &mut SettingsForm,
    status: Option<&str>,
    events: &mut Vec<UiEvent>,
) {
    ui.heading("SETTINGS");
    ui.add_space(8.0);

    widgets::card_frame().show(ui, |ui| {
        widgets::section_heading(ui, "NOTIFICATIONS");
        ui.checkbox(&mut form.email_notifications, "Email notifications");
        ui.checkbox(&mut form.push_notifications, "Push notifications");
    });
    ui.add_space(8.0);

    widgets::card_frame().show(ui, |ui| {
        widgets::section_heading(ui, "AUTOMATION");
        ui.checkbox(&mut form.auto_scan, "Automatic scanning");
        if form.auto_scan {
            egui::ComboBox::from_id_salt("scan_frequency")
                .selected_text(form.scan_frequency.label())
                .show_ui(ui, |ui| {
                    for frequency in ScanFrequency::ALL {
                        ui.selectable_value(&mut form.scan_frequency, frequency, frequency.label());
                    }
                });
        }
    });
    ui.add_space(8.0);

    widgets::card_frame().show(ui, |ui| {
        widgets::section_heading(ui, "API ACCESS");
        ui.horizontal(|ui| {
            ui.label("API key");
            ui.monospace(form.masked_api_key());
        });
    });
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        if ui.add(widgets::primary_button("SAVE SETTINGS")).clicked() {
            events.push(UiEvent::SaveSettings);
        }
        if let Some(status) = status {
            ui.label(egui::RichText::new(status).color(theme::GOOD));
        }
    });
}
