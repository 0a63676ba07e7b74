use std::time::Duration;

use chrono::{Duration as ChronoDuration, TimeZone, Utc};
use shared::{
    domain::{AuditId, AuditType, ProviderType, ScanFrequency},
    error::DomainError,
    protocol::Action,
    state::AppState,
};

use crate::{
    forms::{InitiateAuditForm, SettingsForm, SETTINGS_SAVED_MESSAGE},
    monitoring::{default_gauges, health_log_times, MonitoringFeed},
    navigation::{lookup_report, Navigator, ReportLookup, Route, Section},
    presenter::{integrity_tone, score_history, stat_cards, time_ago, Tone},
    random::{ScriptedRandom, SeededRandom},
    simulation::{simulate_audit, AuditRequest},
    store::Store,
    timer::{Clock, ManualClock},
    wallet::{abbreviate_address, fabricate_address, WalletConnector},
};

#[test]
fn wallet_connects_after_delay_and_closes_modal() {
    let clock = ManualClock::new();
    let mut store = Store::default();
    store.apply(Action::OpenWalletModal);
    let mut connector = WalletConnector::new(Duration::from_millis(1500));
    let mut rng = SeededRandom::from_seed(7);

    assert!(connector.begin(ProviderType::Coinbase, clock.now()));
    assert!(!connector.begin(ProviderType::Metamask, clock.now()));
    assert_eq!(connector.pending_provider(), Some(ProviderType::Coinbase));

    clock.advance(Duration::from_millis(1000));
    assert!(connector.poll(clock.now(), &mut rng, &mut store).is_none());
    assert!(!store.state().wallet.is_connected);

    clock.advance(Duration::from_millis(500));
    let wallet = connector
        .poll(clock.now(), &mut rng, &mut store)
        .expect("connection completes");
    assert!(!connector.is_connecting());
    assert_eq!(store.state().wallet, wallet);
    assert_eq!(wallet.provider, Some(ProviderType::Coinbase));
    assert!(!store.state().is_wallet_modal_open);

    let balance: f64 = wallet.balance.parse().expect("decimal balance");
    assert!((0.0..=10.0).contains(&balance));
    assert_eq!(wallet.balance.split('.').nth(1).map(str::len), Some(4));
}

#[test]
fn wallet_disconnect_resets_state() {
    let clock = ManualClock::new();
    let mut store = Store::default();
    let mut connector = WalletConnector::new(Duration::ZERO);
    let mut rng = ScriptedRandom::constant(0.25);

    connector.begin(ProviderType::Metamask, clock.now());
    connector.poll(clock.now(), &mut rng, &mut store);
    assert!(store.state().wallet.is_connected);

    store.apply(Action::OpenWalletModal);
    connector.disconnect(&mut store);
    assert_eq!(store.state().wallet, shared::state::WalletState::disconnected());
    assert!(!store.state().is_wallet_modal_open);
}

#[test]
fn fabricated_addresses_look_like_addresses() {
    let mut rng = SeededRandom::from_seed(1);
    let address = fabricate_address(&mut rng);
    assert_eq!(address.len(), 42);
    assert!(address.starts_with("0x"));
    assert!(address[2..].chars().all(|c| c.is_ascii_hexdigit()));

    assert_eq!(
        abbreviate_address("0x1234567890abcdef1234567890abcdef12345678"),
        "0x1234...5678"
    );
    assert_eq!(abbreviate_address("0xabc"), "0xabc");
}

#[test]
fn gauges_stay_within_bounds() {
    let clock = ManualClock::new();
    let mut feed = MonitoringFeed::start(Duration::from_secs(2), clock.now(), Utc::now());
    let mut rng = SeededRandom::from_seed(99);

    for _ in 0..500 {
        clock.advance(Duration::from_secs(2));
        assert_eq!(feed.poll(clock.now(), &mut rng), 1);
        for gauge in feed.gauges() {
            assert!(gauge.value >= gauge.min && gauge.value <= gauge.max, "{gauge:?}");
        }
    }
}

#[test]
fn gauge_step_is_centered_on_half() {
    let mut gauges = default_gauges();
    gauges[0].step(0.5);
    assert_eq!(gauges[0].value, 45.0);
    gauges[0].step(1.0);
    assert_eq!(gauges[0].value, 50.0);
    for _ in 0..3 {
        gauges[2].step(1.0);
    }
    assert_eq!(gauges[2].value, 95.0);
}

#[test]
fn alerts_can_be_dismissed_locally() {
    let clock = ManualClock::new();
    let now = Utc::now();
    let mut feed = MonitoringFeed::start(Duration::from_secs(2), clock.now(), now);
    assert_eq!(feed.alerts().len(), 3);
    assert_eq!(feed.alerts()[0].raised_at, now - ChronoDuration::minutes(5));
    assert!(feed.dismiss_alert(2));
    assert!(!feed.dismiss_alert(2));
    assert_eq!(
        feed.alerts().iter().map(|a| a.id).collect::<Vec<_>>(),
        vec![1, 3]
    );

    let times = health_log_times(now);
    assert_eq!(times.len(), 20);
    assert_eq!(times[1], now - ChronoDuration::seconds(5));
}

#[test]
fn routes_parse_and_redirect_unknown_paths() {
    assert_eq!(Route::parse("/"), Route::Dashboard);
    assert_eq!(Route::parse("/monitoring"), Route::Monitoring);
    assert_eq!(Route::parse("/settings/"), Route::Settings);
    assert_eq!(Route::parse("/new-audit"), Route::NewAudit(None));
    assert_eq!(
        Route::parse("/report/audit_1_abcd"),
        Route::Report(AuditId::from("audit_1_abcd"))
    );
    assert_eq!(Route::parse("/report/"), Route::Dashboard);
    assert_eq!(Route::parse("/report/a/b"), Route::Dashboard);
    assert_eq!(Route::parse("/nowhere"), Route::Dashboard);
    assert_eq!(Route::Report(AuditId::from("x")).path(), "/report/x");
    assert_eq!(Route::Monitoring.section(), Some(Section::Monitoring));
}

#[test]
fn navigator_returns_previous_route() {
    let mut nav = Navigator::default();
    assert_eq!(nav.navigate(Route::parse("/settings")), Route::Dashboard);
    assert_eq!(nav.current(), &Route::Settings);
    assert_eq!(nav.navigate(Route::parse("/bogus")), Route::Settings);
    assert_eq!(nav.current(), &Route::Dashboard);
}

#[test]
fn unknown_report_is_not_found_without_mutation() {
    let mut store = Store::default();
    let mut rng = ScriptedRandom::constant(0.9);
    let audit = simulate_audit(
        &AuditRequest::new("t", AuditType::AiAgent),
        &mut rng,
        Utc::now(),
    );
    let known = audit.id.clone();
    store.apply(Action::add_audit(audit));
    let before = store.state().clone();
    let revision = store.revision();

    assert_eq!(
        lookup_report(store.state(), &AuditId::from("audit_missing")),
        ReportLookup::NotFound
    );
    assert!(matches!(
        lookup_report(store.state(), &known),
        ReportLookup::Found(found) if found.id == known
    ));
    assert_eq!(store.state(), &before);
    assert_eq!(store.revision(), revision);
}

#[test]
fn initiate_form_rejects_blank_targets() {
    let mut form = InitiateAuditForm::default();
    assert!(!form.can_submit());
    form.target = "   ".into();
    assert_eq!(form.submit(), Err(DomainError::EmptyTarget));

    form.target = "https://app.example.com".into();
    form.audit_type = AuditType::Blockchain;
    let request = form.submit().expect("valid form");
    assert_eq!(request.target, "https://app.example.com");
    assert_eq!(request.audit_type, AuditType::Blockchain);
    assert_eq!(form, InitiateAuditForm::default());
}

#[test]
fn settings_form_is_local_only() {
    let mut form = SettingsForm::default();
    assert!(form.email_notifications && form.push_notifications && !form.auto_scan);
    assert_eq!(form.effective_scan_frequency(), None);
    form.auto_scan = true;
    form.scan_frequency = ScanFrequency::Daily;
    assert_eq!(form.effective_scan_frequency(), Some(ScanFrequency::Daily));
    assert_eq!(form.masked_api_key().chars().count(), "sk_live_...".len());
    assert_eq!(form.save(), SETTINGS_SAVED_MESSAGE);
}

#[test]
fn stat_cards_reflect_stats() {
    let cards = stat_cards(&AppState::default());
    assert_eq!(cards[0].value, "0");
    assert_eq!(cards[1].value, "98%");
    assert_eq!(cards[2].value, "3");
}

#[test]
fn score_history_orders_by_time_and_keeps_last_ten() {
    let base = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single().expect("ts");
    let mut rng = ScriptedRandom::constant(0.9);
    let mut audits = Vec::new();
    for i in 0..12i64 {
        let mut audit = simulate_audit(
            &AuditRequest::new(format!("t{i}"), AuditType::MiniApp),
            &mut rng,
            base + ChronoDuration::minutes(i),
        );
        audit.score = i as u8 * 5;
        audits.insert(0, audit);
    }

    let points = score_history(&audits).expect("enough points");
    assert_eq!(points.len(), 10);
    assert_eq!(points[0].score, 10);
    assert_eq!(points[9].score, 55);
    assert_eq!(points[0].x, 0.0);
    assert_eq!(points[9].x, 100.0);
    assert_eq!(points[9].y, 45.0);

    assert!(score_history(&audits[..1]).is_none());
}

#[test]
fn time_ago_uses_compact_units() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).single().expect("ts");
    assert_eq!(time_ago(now - ChronoDuration::seconds(42), now), "42s");
    assert_eq!(time_ago(now - ChronoDuration::minutes(5), now), "5m");
    assert_eq!(time_ago(now - ChronoDuration::hours(3), now), "3H");
    assert_eq!(time_ago(now - ChronoDuration::days(2), now), "2D");
    assert_eq!(time_ago(now + ChronoDuration::seconds(10), now), "0s");
    assert_eq!(integrity_tone(95), Tone::Good);
    assert_eq!(integrity_tone(50), Tone::Caution);
    assert_eq!(integrity_tone(49), Tone::Danger);
}
