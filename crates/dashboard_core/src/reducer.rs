use shared::{
    protocol::Action,
    state::{AppState, Stats, WalletState},
};

/// Applies one action. Pure and total: no I/O, no randomness, and actions that
/// do not apply simply return the input state.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        Action::AddAudit(audit) => {
            let mut audits = Vec::with_capacity(state.audits.len() + 1);
            audits.push(*audit);
            audits.extend(state.audits);
            AppState {
                audits,
                stats: Stats {
                    total_audits: state.stats.total_audits + 1,
                    ..state.stats
                },
                ..state
            }
        }
        Action::UpdateStats(patch) => {
            let mut stats = state.stats;
            if let Some(system_health) = patch.system_health {
                stats.system_health = system_health;
            }
            if let Some(active_alerts) = patch.active_alerts {
                stats.active_alerts = active_alerts;
            }
            AppState { stats, ..state }
        }
        Action::ConnectWallet(wallet) => AppState { wallet, ..state },
        Action::DisconnectWallet => AppState {
            wallet: WalletState::disconnected(),
            ..state
        },
        Action::OpenUpgradeModal => AppState {
            is_upgrade_modal_open: true,
            ..state
        },
        Action::CloseUpgradeModal => AppState {
            is_upgrade_modal_open: false,
            ..state
        },
        Action::OpenAuditModal => AppState {
            is_audit_modal_open: true,
            ..state
        },
        Action::CloseAuditModal => AppState {
            is_audit_modal_open: false,
            ..state
        },
        Action::OpenWalletModal => AppState {
            is_wallet_modal_open: true,
            ..state
        },
        Action::CloseWalletModal => AppState {
            is_wallet_modal_open: false,
            ..state
        },
        Action::Unrecognized => state,
    }
}

/// Folds a script of actions over `initial`.
pub fn replay(initial: AppState, actions: impl IntoIterator<Item = Action>) -> AppState {
    actions.into_iter().fold(initial, reduce)
}
