use chrono::{TimeZone, Utc};
use shared::{
    domain::{AuditId, AuditStatus, AuditType, ProviderType},
    protocol::Action,
    state::{AppState, StatsPatch, WalletState},
};

use crate::{
    reducer::{reduce, replay},
    simulation::{assemble_audit_log, build_report, AuditRequest, CHECKPOINT_CATALOG},
    store::Store,
};

fn audit_with_score(id: &str, score: u8) -> shared::state::AuditLog {
    let checkpoints = CHECKPOINT_CATALOG
        .iter()
        .zip(1u32..)
        .map(|(template, id)| template.resolve(id, 0.99))
        .collect();
    let mut report = build_report(checkpoints);
    report.score = score;
    assemble_audit_log(
        AuditId::from(id),
        &AuditRequest::new("https://example.com", AuditType::MiniApp),
        report,
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().expect("timestamp"),
    )
}

#[test]
fn add_audit_counts_every_dispatch() {
    let mut state = AppState::default();
    for i in 0..7 {
        state = reduce(state, Action::add_audit(audit_with_score(&format!("a{i}"), 50)));
        assert_eq!(state.stats.total_audits as usize, state.audits.len());
    }
    assert_eq!(state.stats.total_audits, 7);
}

#[test]
fn add_audit_prepends_newest_first() {
    let state = replay(
        AppState::default(),
        [
            Action::add_audit(audit_with_score("first", 40)),
            Action::add_audit(audit_with_score("second", 90)),
        ],
    );
    assert_eq!(state.audits[0].id, AuditId::from("second"));
    assert_eq!(state.audits[1].id, AuditId::from("first"));
}

#[test]
fn single_passing_audit_lands_in_sequence() {
    let state = reduce(
        AppState::default(),
        Action::add_audit(audit_with_score("audit_92", 92)),
    );
    assert_eq!(state.audits.len(), 1);
    assert_eq!(state.stats.total_audits, 1);
    assert_eq!(state.audits[0].status, AuditStatus::Pass);
}

#[test]
fn disconnect_resets_wallet_regardless_of_connect_payload() {
    let connected = reduce(
        AppState::default(),
        Action::ConnectWallet(WalletState::connected("0xabc", "1.2345", ProviderType::Metamask)),
    );
    assert!(connected.wallet.is_connected);
    assert_eq!(connected.wallet.address.as_deref(), Some("0xabc"));

    let state = reduce(connected, Action::DisconnectWallet);
    assert_eq!(
        state.wallet,
        WalletState {
            is_connected: false,
            address: None,
            balance: "0.0".to_string(),
            provider: None,
        }
    );

    let again = reduce(state.clone(), Action::DisconnectWallet);
    assert_eq!(again.wallet, state.wallet);
}

#[test]
fn audit_modal_round_trip_changes_nothing_else() {
    let initial = AppState::default();
    let opened = reduce(initial.clone(), Action::OpenAuditModal);
    assert!(opened.is_audit_modal_open);
    assert!(!opened.is_upgrade_modal_open);
    assert!(!opened.is_wallet_modal_open);

    let closed = reduce(opened, Action::CloseAuditModal);
    assert_eq!(closed, initial);
}

#[test]
fn modal_flags_are_independent() {
    let state = replay(
        AppState::default(),
        [
            Action::OpenUpgradeModal,
            Action::OpenWalletModal,
            Action::CloseUpgradeModal,
        ],
    );
    assert!(!state.is_upgrade_modal_open);
    assert!(state.is_wallet_modal_open);
    assert!(!state.is_audit_modal_open);
}

#[test]
fn update_stats_merges_only_present_fields() {
    let state = reduce(
        AppState::default(),
        Action::UpdateStats(StatsPatch {
            system_health: None,
            active_alerts: Some(11),
        }),
    );
    assert_eq!(state.stats.active_alerts, 11);
    assert_eq!(state.stats.system_health, 98);
    assert_eq!(state.stats.total_audits, 0);
}

#[test]
fn unrecognized_action_is_a_no_op() {
    let initial = reduce(AppState::default(), Action::OpenUpgradeModal);
    assert_eq!(reduce(initial.clone(), Action::Unrecognized), initial);
}

#[test]
fn store_notifies_subscribers_with_revision_and_action() {
    let mut store = Store::default();
    let rx = store.subscribe();

    assert!(store.apply(Action::OpenWalletModal));
    assert!(!store.apply(Action::OpenWalletModal));

    let first = rx.try_recv().expect("first event");
    assert_eq!(first.revision, 1);
    assert_eq!(first.action, "OPEN_WALLET_MODAL");
    assert!(first.changed);

    let second = rx.try_recv().expect("second event");
    assert_eq!(second.revision, 2);
    assert!(!second.changed);
}

#[test]
fn store_prunes_dropped_subscribers() {
    let mut store = Store::default();
    let rx = store.subscribe();
    drop(rx);
    let _kept = store.subscribe();
    store.apply(Action::OpenAuditModal);
    assert_eq!(store.subscriber_count(), 1);
}

#[test]
fn store_reports_change_per_field() {
    let mut store = Store::default();
    let health = store.state().stats.system_health;
    let same = StatsPatch {
        system_health: Some(health),
        active_alerts: None,
    };
    assert!(!store.apply(Action::UpdateStats(same)));
    let lower = StatsPatch {
        system_health: Some(health - 1),
        active_alerts: None,
    };
    assert!(store.apply(Action::UpdateStats(lower)));

    assert!(store.apply(Action::add_audit(audit_with_score("a1", 90))));
    assert!(store.apply(Action::add_audit(audit_with_score("a1", 90))));

    let wallet = WalletState::connected("0xabc", "1.0000", ProviderType::Metamask);
    assert!(store.apply(Action::ConnectWallet(wallet.clone())));
    assert!(!store.apply(Action::ConnectWallet(wallet)));
    assert!(store.apply(Action::DisconnectWallet));
    assert!(!store.apply(Action::Unrecognized));
    assert_eq!(store.revision(), 8);
}

#[test]
fn replays_a_json_script_with_unknown_tags() {
    let script = r#"[
        {"type": "OPEN_WALLET_MODAL"},
        {"type": "SELF_DESTRUCT"},
        {"type": "UPDATE_STATS", "payload": {"system_health": 77}},
        {"type": "CLOSE_WALLET_MODAL"}
    ]"#;
    let actions: Vec<Action> = serde_json::from_str(script).expect("script");
    let state = replay(AppState::default(), actions);
    assert_eq!(state.stats.system_health, 77);
    assert!(!state.is_wallet_modal_open);
    assert!(state.audits.is_empty());
}
