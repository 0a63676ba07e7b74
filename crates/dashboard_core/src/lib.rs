//! Application core for the audit dashboard: the state container and its
//! reducer, the audit simulation, and the timer-driven pieces the views poll.

pub mod config;
pub mod forms;
pub mod monitoring;
pub mod navigation;
pub mod presenter;
pub mod progress;
pub mod random;
pub mod reducer;
pub mod simulation;
pub mod store;
pub mod timer;
pub mod wallet;

pub use config::{load_settings, DashboardSettings};
pub use progress::{AuditPhase, AuditRun, PollOutcome};
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use reducer::{reduce, replay};
pub use simulation::{simulate_audit, AuditRequest};
pub use store::{Dispatch, Store, StoreEvent};
pub use timer::{Clock, ManualClock, SystemClock};

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod reducer_tests;

#[cfg(test)]
#[path = "tests/simulation_tests.rs"]
mod simulation_tests;

#[cfg(test)]
#[path = "tests/progress_tests.rs"]
mod progress_tests;

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod session_tests;

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod config_tests;
