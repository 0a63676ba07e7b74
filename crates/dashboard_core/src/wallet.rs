//! Simulated wallet connection: a timed no-op that fabricates an address and balance.

use std::time::{Duration, Instant};

use shared::{domain::ProviderType, protocol::Action, state::WalletState};
use tracing::info;

use crate::{random::RandomSource, store::Dispatch, timer::Countdown};

pub const DEFAULT_CONNECT_DELAY: Duration = Duration::from_millis(1500);
const ADDRESS_HEX_DIGITS: usize = 40;
const MAX_BALANCE: f64 = 10.0;

pub fn fabricate_address(rng: &mut dyn RandomSource) -> String {
    const HEX: &[u8] = b"0123456789abcdef";
    let mut address = String::with_capacity(ADDRESS_HEX_DIGITS + 2);
    address.push_str("0x");
    for _ in 0..ADDRESS_HEX_DIGITS {
        address.push(HEX[rng.next_below(HEX.len() as u32) as usize] as char);
    }
    address
}

/// Decimal string with four fractional digits in `[0, 10)`.
pub fn fabricate_balance(rng: &mut dyn RandomSource) -> String {
    format!("{:.4}", rng.next_unit() * MAX_BALANCE)
}

/// `0x1234...abcd` for display in tight spaces.
pub fn abbreviate_address(address: &str) -> String {
    if address.len() <= 10 || !address.is_ascii() {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

struct PendingConnection {
    provider: ProviderType,
    countdown: Countdown,
}

pub struct WalletConnector {
    delay: Duration,
    pending: Option<PendingConnection>,
}

impl WalletConnector {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn is_connecting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_provider(&self) -> Option<ProviderType> {
        self.pending.as_ref().map(|pending| pending.provider)
    }

    /// Starts a connection unless one is already pending. Returns whether it started.
    pub fn begin(&mut self, provider: ProviderType, now: Instant) -> bool {
        if self.pending.is_some() {
            return false;
        }
        info!(provider = provider.display_name(), "connecting simulated wallet");
        self.pending = Some(PendingConnection {
            provider,
            countdown: Countdown::start(self.delay, now),
        });
        true
    }

    /// Completes a pending connection once its delay has passed: dispatches
    /// `CONNECT_WALLET` and closes the wallet modal.
    pub fn poll(
        &mut self,
        now: Instant,
        rng: &mut dyn RandomSource,
        dispatcher: &mut dyn Dispatch,
    ) -> Option<WalletState> {
        let pending = self.pending.as_mut()?;
        if !pending.countdown.poll(now) {
            return None;
        }
        let provider = pending.provider;
        self.pending = None;

        let wallet = WalletState::connected(
            fabricate_address(rng),
            fabricate_balance(rng),
            provider,
        );
        info!(
            provider = provider.display_name(),
            address = wallet.address.as_deref().unwrap_or_default(),
            "simulated wallet connected"
        );
        dispatcher.dispatch(Action::ConnectWallet(wallet.clone()));
        dispatcher.dispatch(Action::CloseWalletModal);
        Some(wallet)
    }

    pub fn disconnect(&mut self, dispatcher: &mut dyn Dispatch) {
        self.cancel();
        dispatcher.dispatch(Action::DisconnectWallet);
        dispatcher.dispatch(Action::CloseWalletModal);
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .and_then(|pending| pending.countdown.time_remaining(now))
    }
}

impl Default for WalletConnector {
    fn default() -> Self {
        Self::new(DEFAULT_CONNECT_DELAY)
    }
}
