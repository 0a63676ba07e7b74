use std::time::Duration;

use shared::{domain::AuditType, protocol::Action};

use crate::{
    progress::{AuditPhase, AuditRun, PollOutcome, INITIAL_STEP_LABEL, PROGRESS_STEPS},
    random::ScriptedRandom,
    simulation::AuditRequest,
    store::{Dispatch, Store},
    timer::{Clock, Countdown, IntervalTimer, ManualClock},
};

const TICK: Duration = Duration::from_millis(800);

fn request() -> AuditRequest {
    AuditRequest::new("https://api.example.com", AuditType::MiniApp)
}

#[test]
fn interval_timer_counts_whole_periods() {
    let clock = ManualClock::new();
    let mut timer = IntervalTimer::start(TICK, clock.now());

    clock.advance(Duration::from_millis(799));
    assert_eq!(timer.poll(clock.now()), 0);
    clock.advance(Duration::from_millis(1));
    assert_eq!(timer.poll(clock.now()), 1);
    clock.advance(TICK * 3);
    assert_eq!(timer.poll(clock.now()), 3);

    timer.cancel();
    clock.advance(TICK * 10);
    assert_eq!(timer.poll(clock.now()), 0);
    assert!(!timer.is_active());
}

#[test]
fn countdown_fires_once() {
    let clock = ManualClock::new();
    let mut countdown = Countdown::start(Duration::from_millis(1500), clock.now());
    clock.advance(Duration::from_millis(1499));
    assert!(!countdown.poll(clock.now()));
    clock.advance(Duration::from_millis(1));
    assert!(countdown.poll(clock.now()));
    clock.advance(Duration::from_secs(5));
    assert!(!countdown.poll(clock.now()));
}

#[test]
fn starts_initializing_with_zero_progress() {
    let clock = ManualClock::new();
    let run = AuditRun::start(request(), TICK, clock.now());
    assert_eq!(run.phase(), AuditPhase::Initializing);
    assert_eq!(run.progress(), 0.0);
    assert_eq!(run.current_step(), INITIAL_STEP_LABEL);
    assert_eq!(run.log_lines(), &PROGRESS_STEPS[..1]);
    assert!(run.audit_id().is_none());
}

#[test]
fn first_tick_moves_to_running() {
    let clock = ManualClock::new();
    let mut run = AuditRun::start(request(), TICK, clock.now());
    let mut rng = ScriptedRandom::constant(0.4);

    assert_eq!(run.tick(&mut rng), AuditPhase::Running);
    assert!((run.progress() - 6.0).abs() < 1e-9);
    assert_eq!(run.current_step(), PROGRESS_STEPS[0]);
}

#[test]
fn step_label_follows_progress() {
    let clock = ManualClock::new();
    let mut run = AuditRun::start(request(), TICK, clock.now());
    // 0.8 * 15 = 12 per tick: 12, 24, 36 -> floor(0.36 * 9) = 3.
    let mut rng = ScriptedRandom::constant(0.8);
    for _ in 0..3 {
        run.tick(&mut rng);
    }
    assert_eq!(run.current_step(), PROGRESS_STEPS[3]);
    assert_eq!(run.log_lines().len(), 4);
}

#[test]
fn poll_runs_only_due_ticks() {
    let clock = ManualClock::new();
    let mut store = Store::default();
    let mut run = AuditRun::start(request(), TICK, clock.now());
    let mut rng = ScriptedRandom::constant(0.5);

    assert_eq!(run.poll(clock.now(), &mut rng, &mut store), PollOutcome::Idle);
    clock.advance(TICK * 2);
    assert_eq!(
        run.poll(clock.now(), &mut rng, &mut store),
        PollOutcome::Advanced { ticks: 2 }
    );
    assert!((run.progress() - 15.0).abs() < 1e-9);
    assert!(store.state().audits.is_empty());
}

#[test]
fn completion_commits_exactly_one_audit() {
    let clock = ManualClock::new();
    let mut store = Store::default();
    let mut run = AuditRun::start(request(), TICK, clock.now());
    // 0.99 * 15 = 14.85 per tick, seven ticks reach 100. The remaining draws
    // feed the checkpoints, all passing.
    let mut rng = ScriptedRandom::constant(0.99);

    clock.advance(TICK * 20);
    let outcome = run.poll(clock.now(), &mut rng, &mut store);
    let PollOutcome::Completed(id) = outcome else {
        panic!("expected completion, got {outcome:?}");
    };

    assert!(run.is_complete());
    assert_eq!(run.progress_percent(), 100);
    assert_eq!(run.current_step(), PROGRESS_STEPS[8]);
    assert_eq!(run.log_lines(), &PROGRESS_STEPS[..]);
    assert_eq!(run.audit_id(), Some(&id));
    assert_eq!(store.state().audits.len(), 1);
    assert_eq!(store.state().stats.total_audits, 1);
    assert_eq!(store.state().audits[0].id, id);
    assert_eq!(store.state().audits[0].score, 100);

    for _ in 0..5 {
        clock.advance(TICK * 4);
        assert_eq!(run.poll(clock.now(), &mut rng, &mut store), PollOutcome::Idle);
    }
    assert_eq!(store.state().audits.len(), 1);
    assert_eq!(store.state().stats.total_audits, 1);
}

#[test]
fn cancelled_run_never_commits() {
    let clock = ManualClock::new();
    let mut store = Store::default();
    let mut run = AuditRun::start(request(), TICK, clock.now());
    let mut rng = ScriptedRandom::constant(0.99);

    clock.advance(TICK * 2);
    run.poll(clock.now(), &mut rng, &mut store);
    run.cancel();
    clock.advance(TICK * 50);

    assert_eq!(run.poll(clock.now(), &mut rng, &mut store), PollOutcome::Idle);
    assert!(run.is_cancelled());
    assert!(store.state().audits.is_empty());
}

#[test]
fn commits_through_any_dispatcher() {
    struct Recorder(Vec<&'static str>);
    impl Dispatch for Recorder {
        fn dispatch(&mut self, action: Action) {
            self.0.push(action.name());
        }
    }

    let clock = ManualClock::new();
    let mut recorder = Recorder(Vec::new());
    let mut run = AuditRun::start(request(), TICK, clock.now());
    let mut rng = ScriptedRandom::constant(0.99);

    clock.advance(TICK * 8);
    assert!(matches!(
        run.poll(clock.now(), &mut rng, &mut recorder),
        PollOutcome::Completed(_)
    ));
    clock.advance(TICK * 8);
    assert_eq!(run.poll(clock.now(), &mut rng, &mut recorder), PollOutcome::Idle);
    assert_eq!(recorder.0, vec!["ADD_AUDIT"]);
}
