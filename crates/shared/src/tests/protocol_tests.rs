use std::str::FromStr;

use serde_json::json;

use crate::{
    domain::{AuditStatus, AuditType, ProviderType},
    error::DomainError,
    protocol::Action,
    state::{StatsPatch, WalletState},
};

#[test]
fn audit_status_thresholds_are_inclusive() {
    assert_eq!(AuditStatus::from_score(85), AuditStatus::Pass);
    assert_eq!(AuditStatus::from_score(80), AuditStatus::Pass);
    assert_eq!(AuditStatus::from_score(79), AuditStatus::Warning);
    assert_eq!(AuditStatus::from_score(70), AuditStatus::Warning);
    assert_eq!(AuditStatus::from_score(60), AuditStatus::Warning);
    assert_eq!(AuditStatus::from_score(59), AuditStatus::Fail);
    assert_eq!(AuditStatus::from_score(40), AuditStatus::Fail);
    assert_eq!(AuditStatus::from_score(0), AuditStatus::Fail);
}

#[test]
fn action_tags_use_screaming_snake_case() {
    let encoded = serde_json::to_value(Action::OpenAuditModal).expect("encode");
    assert_eq!(encoded, json!({ "type": "OPEN_AUDIT_MODAL" }));

    let encoded = serde_json::to_value(Action::UpdateStats(StatsPatch {
        system_health: Some(91),
        active_alerts: None,
    }))
    .expect("encode");
    assert_eq!(
        encoded,
        json!({ "type": "UPDATE_STATS", "payload": { "system_health": 91 } })
    );
}

#[test]
fn connect_wallet_payload_decodes_provider_tag() {
    let action: Action = serde_json::from_value(json!({
        "type": "CONNECT_WALLET",
        "payload": {
            "is_connected": true,
            "address": "0xabc",
            "balance": "1.2345",
            "provider": "METAMASK"
        }
    }))
    .expect("decode");

    assert_eq!(
        action,
        Action::ConnectWallet(WalletState::connected("0xabc", "1.2345", ProviderType::Metamask))
    );
}

#[test]
fn unknown_action_tag_decodes_as_unrecognized() {
    let action: Action =
        serde_json::from_value(json!({ "type": "REBOOT_EVERYTHING" })).expect("decode");
    assert_eq!(action, Action::Unrecognized);
    assert_eq!(action.name(), "UNRECOGNIZED");
}

#[test]
fn unknown_action_payload_is_ignored() {
    let action: Action = serde_json::from_value(json!({
        "type": "SELF_DESTRUCT",
        "payload": { "countdown": 10, "targets": ["everything"] }
    }))
    .expect("decode");
    assert_eq!(action, Action::Unrecognized);

    let unit: Action =
        serde_json::from_value(json!({ "type": "CLOSE_AUDIT_MODAL", "payload": null }))
            .expect("decode");
    assert_eq!(unit, Action::CloseAuditModal);
}

#[test]
fn known_action_with_malformed_payload_is_rejected() {
    let result = serde_json::from_value::<Action>(json!({
        "type": "UPDATE_STATS",
        "payload": { "system_health": "very healthy" }
    }));
    assert!(result.is_err());
    assert!(serde_json::from_value::<Action>(json!({ "payload": {} })).is_err());
}

#[test]
fn stats_patch_rejects_total_audits() {
    let err = serde_json::from_value::<Action>(json!({
        "type": "UPDATE_STATS",
        "payload": { "total_audits": 7, "system_health": 50 }
    }))
    .unwrap_err();
    assert!(err.to_string().contains("total_audits"));
}

#[test]
fn parses_audit_types_from_cli_spellings() {
    assert_eq!(AuditType::from_str("mini-app"), Ok(AuditType::MiniApp));
    assert_eq!(AuditType::from_str("AI_AGENT"), Ok(AuditType::AiAgent));
    assert_eq!(AuditType::from_str(" blockchain "), Ok(AuditType::Blockchain));
    assert_eq!(
        AuditType::from_str("firmware"),
        Err(DomainError::UnknownAuditType("firmware".to_string()))
    );
}

#[test]
fn audit_type_serializes_as_kebab_slug() {
    assert_eq!(
        serde_json::to_value(AuditType::AiAgent).expect("encode"),
        json!("ai-agent")
    );
    assert_eq!(AuditType::MiniApp.to_string(), "mini-app");
}
