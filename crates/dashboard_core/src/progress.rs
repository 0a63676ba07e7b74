//! Progress animation for one audit run.
//!
//! A run starts in `Initializing`, moves to `Running` on the first tick and to
//! `Complete` once progress reaches 100. The simulation runs on the first
//! transition into `Complete` and its result is dispatched exactly once.

use std::time::{Duration, Instant};

use chrono::Utc;
use shared::{domain::AuditId, protocol::Action};
use tracing::info;

use crate::{
    random::RandomSource,
    simulation::{simulate_audit, AuditRequest},
    store::Dispatch,
    timer::IntervalTimer,
};

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(800);
pub const MAX_TICK_INCREMENT: f64 = 15.0;
pub const INITIAL_STEP_LABEL: &str = "Initializing...";

pub const PROGRESS_STEPS: [&str; 9] = [
    "Initializing audit engine...",
    "Scanning target endpoint...",
    "Analyzing security headers...",
    "Checking authentication flow...",
    "Testing data validation...",
    "Reviewing error handling...",
    "Scanning for vulnerabilities...",
    "Generating security report...",
    "Finalizing analysis...",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditPhase {
    Initializing,
    Running,
    Complete,
}

impl AuditPhase {
    pub fn label(self) -> &'static str {
        match self {
            Self::Initializing => "INITIALIZING",
            Self::Running => "RUNNING",
            Self::Complete => "COMPLETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    Idle,
    Advanced { ticks: u32 },
    Completed(AuditId),
}

pub struct AuditRun {
    request: AuditRequest,
    phase: AuditPhase,
    progress: f64,
    timer: IntervalTimer,
    committed: Option<AuditId>,
    cancelled: bool,
}

impl AuditRun {
    pub fn start(request: AuditRequest, tick_interval: Duration, now: Instant) -> Self {
        info!(
            audit_target = %request.target,
            audit_type = %request.audit_type,
            "starting simulated audit"
        );
        Self {
            request,
            phase: AuditPhase::Initializing,
            progress: 0.0,
            timer: IntervalTimer::start(tick_interval, now),
            committed: None,
            cancelled: false,
        }
    }

    pub fn request(&self) -> &AuditRequest {
        &self.request
    }

    pub fn phase(&self) -> AuditPhase {
        self.phase
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn progress_percent(&self) -> u8 {
        self.progress.round().clamp(0.0, 100.0) as u8
    }

    pub fn is_complete(&self) -> bool {
        self.phase == AuditPhase::Complete
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Identifier of the committed audit, once the run has completed.
    pub fn audit_id(&self) -> Option<&AuditId> {
        self.committed.as_ref()
    }

    fn step_index(&self) -> usize {
        let index = ((self.progress / 100.0) * PROGRESS_STEPS.len() as f64).floor() as usize;
        index.min(PROGRESS_STEPS.len() - 1)
    }

    pub fn current_step(&self) -> &'static str {
        match self.phase {
            AuditPhase::Initializing => INITIAL_STEP_LABEL,
            _ => PROGRESS_STEPS[self.step_index()],
        }
    }

    /// Steps reached so far, oldest first.
    pub fn log_lines(&self) -> &'static [&'static str] {
        &PROGRESS_STEPS[..=self.step_index()]
    }

    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.time_until_next(now)
    }

    /// Advances by one timer period. No-op once complete or cancelled.
    pub fn tick(&mut self, rng: &mut dyn RandomSource) -> AuditPhase {
        if self.cancelled || self.phase == AuditPhase::Complete {
            return self.phase;
        }
        self.progress = (self.progress + rng.next_unit() * MAX_TICK_INCREMENT).min(100.0);
        self.phase = if self.progress >= 100.0 {
            AuditPhase::Complete
        } else {
            AuditPhase::Running
        };
        self.phase
    }

    /// Runs every tick that came due since the last poll and, on the first
    /// transition into `Complete`, simulates the audit and dispatches it.
    pub fn poll(
        &mut self,
        now: Instant,
        rng: &mut dyn RandomSource,
        dispatcher: &mut dyn Dispatch,
    ) -> PollOutcome {
        if self.cancelled {
            return PollOutcome::Idle;
        }

        let due = self.timer.poll(now);
        let mut ticks = 0;
        for _ in 0..due {
            if self.phase == AuditPhase::Complete {
                break;
            }
            self.tick(rng);
            ticks += 1;
        }

        if self.phase == AuditPhase::Complete {
            if let Some(id) = self.commit(rng, dispatcher) {
                return PollOutcome::Completed(id);
            }
            return PollOutcome::Idle;
        }

        if ticks == 0 {
            PollOutcome::Idle
        } else {
            PollOutcome::Advanced { ticks }
        }
    }

    fn commit(
        &mut self,
        rng: &mut dyn RandomSource,
        dispatcher: &mut dyn Dispatch,
    ) -> Option<AuditId> {
        if self.committed.is_some() {
            return None;
        }
        self.timer.cancel();

        let audit = simulate_audit(&self.request, rng, Utc::now());
        let id = audit.id.clone();
        info!(
            audit_id = %id,
            score = audit.score,
            status = audit.status.label(),
            "simulated audit complete"
        );
        dispatcher.dispatch(Action::add_audit(audit));
        self.committed = Some(id.clone());
        Some(id)
    }

    /// Stops the run. A cancelled run never dispatches anything.
    pub fn cancel(&mut self) {
        if self.committed.is_none() {
            self.cancelled = true;
        }
        self.timer.cancel();
    }
}
