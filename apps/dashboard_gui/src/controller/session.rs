//! The dashboard session: owns the store, the clock, the random source and
//! every per-view timer. The egui layer only reads from it and feeds it
//! [`UiEvent`]s, so the whole flow can be driven headless in tests.

use std::time::Duration;

use chrono::{DateTime, Utc};
use crossbeam_channel::Receiver;
use dashboard_core::{
    forms::{InitiateAuditForm, SettingsForm},
    monitoring::MonitoringFeed,
    navigation::{Navigator, Route},
    wallet::WalletConnector,
    AuditRequest, AuditRun, Clock, DashboardSettings, PollOutcome, RandomSource, SeededRandom,
    Store, StoreEvent, SystemClock,
};
use shared::{domain::ProviderType, state::AppState};
use tracing::{debug, info};

use super::{
    events::{Modal, UiEvent},
    orchestration::{dispatch_ui_action, modal_action},
};

pub struct DashboardSession {
    settings: DashboardSettings,
    store: Store,
    store_events: Receiver<StoreEvent>,
    navigator: Navigator,
    clock: Box<dyn Clock>,
    rng: Box<dyn RandomSource>,
    audit_run: Option<AuditRun>,
    wallet: WalletConnector,
    monitoring: Option<MonitoringFeed>,
    audit_form: InitiateAuditForm,
    settings_form: SettingsForm,
    status: Option<String>,
}

impl DashboardSession {
    pub fn bootstrap(settings: DashboardSettings) -> Self {
        let rng = SeededRandom::from_optional_seed(settings.rng_seed);
        Self::new(settings, Box::new(SystemClock), Box::new(rng))
    }

    pub fn new(
        settings: DashboardSettings,
        clock: Box<dyn Clock>,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        let mut store = Store::new(settings.initial_state());
        let store_events = store.subscribe();
        Self {
            wallet: WalletConnector::new(settings.wallet_connect_delay()),
            settings,
            store,
            store_events,
            navigator: Navigator::default(),
            clock,
            rng,
            audit_run: None,
            monitoring: None,
            audit_form: InitiateAuditForm::default(),
            settings_form: SettingsForm::default(),
            status: None,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn route(&self) -> &Route {
        self.navigator.current()
    }

    pub fn audit_run(&self) -> Option<&AuditRun> {
        self.audit_run.as_ref()
    }

    pub fn monitoring(&self) -> Option<&MonitoringFeed> {
        self.monitoring.as_ref()
    }

    pub fn pending_wallet_provider(&self) -> Option<ProviderType> {
        self.wallet.pending_provider()
    }

    pub fn audit_form_mut(&mut self) -> &mut InitiateAuditForm {
        &mut self.audit_form
    }

    pub fn settings_form_mut(&mut self) -> &mut SettingsForm {
        &mut self.settings_form
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn wall_clock(&self) -> DateTime<Utc> {
        Utc::now()
    }

    pub fn handle(&mut self, event: UiEvent) {
        debug!(?event, "ui event");
        match event {
            UiEvent::Navigate(route) => self.navigate(route),
            UiEvent::OpenReport(id) => self.navigate(Route::Report(id)),
            UiEvent::OpenModal(modal) => self.set_modal(modal, true),
            UiEvent::CloseModal(modal) => {
                if modal == Modal::InitiateAudit {
                    self.audit_form.reset();
                }
                self.set_modal(modal, false);
            }
            UiEvent::SubmitAudit => match self.audit_form.submit() {
                Ok(request) => {
                    self.set_modal(Modal::InitiateAudit, false);
                    self.navigate(Route::NewAudit(Some(request)));
                }
                // The disabled submit button is the only feedback.
                Err(err) => debug!(%err, "ignoring audit submission"),
            },
            UiEvent::ConnectWallet(provider) => {
                self.wallet.begin(provider, self.clock.now());
            }
            UiEvent::DisconnectWallet => self.wallet.disconnect(&mut self.store),
            UiEvent::DismissAlert(id) => {
                if let Some(feed) = self.monitoring.as_mut() {
                    feed.dismiss_alert(id);
                }
            }
            UiEvent::SaveSettings => {
                self.status = Some(self.settings_form.save().to_string());
            }
            UiEvent::DismissStatus => self.status = None,
        }
    }

    fn set_modal(&mut self, modal: Modal, open: bool) {
        dispatch_ui_action(&mut self.store, modal_action(modal, open), modal.label());
    }

    /// Swaps the current route. Timers owned by the page being left are
    /// dropped; the page being entered starts its own.
    fn navigate(&mut self, route: Route) {
        let previous = self.navigator.navigate(route);
        if matches!(previous, Route::NewAudit(_)) {
            if let Some(mut run) = self.audit_run.take() {
                run.cancel();
            }
        }
        if previous == Route::Monitoring {
            self.monitoring = None;
        }

        let now = self.clock.now();
        match self.navigator.current() {
            Route::NewAudit(request) => {
                let request = request
                    .clone()
                    .unwrap_or_else(|| AuditRequest::from_transient(None, None));
                self.audit_run = Some(AuditRun::start(
                    request,
                    self.settings.progress_tick(),
                    now,
                ));
            }
            Route::Monitoring => {
                self.monitoring = Some(MonitoringFeed::start(
                    self.settings.monitoring_tick(),
                    now,
                    self.wall_clock(),
                ));
            }
            Route::Dashboard | Route::Report(_) | Route::Settings => {}
        }
    }

    /// Polls every live timer once. Returns the number of store changes seen
    /// since the previous call.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now();

        if let Some(run) = self.audit_run.as_mut() {
            if let PollOutcome::Completed(id) = run.poll(now, self.rng.as_mut(), &mut self.store)
            {
                info!(audit_id = %id, "audit ready for review");
            }
        }
        self.wallet.poll(now, self.rng.as_mut(), &mut self.store);
        if let Some(feed) = self.monitoring.as_mut() {
            feed.poll(now, self.rng.as_mut());
        }

        self.store_events
            .try_iter()
            .filter(|event| event.changed)
            .count()
    }

    /// Time until the earliest pending timer fires, if any timer is live.
    pub fn next_wakeup(&self) -> Option<Duration> {
        let now = self.clock.now();
        [
            self.audit_run
                .as_ref()
                .and_then(|run| run.time_until_next_tick(now)),
            self.wallet.time_remaining(now),
            self.monitoring
                .as_ref()
                .and_then(|feed| feed.time_until_next_update(now)),
        ]
        .into_iter()
        .flatten()
        .min()
    }
}
