mod common;

use common::{time, RecordingSink};
use std::time::Duration;
use terminal_clock::core::{shutdown, DisplaySink};
use terminal_clock::{ClockError, ClockRunner, ClockSnapshot, ClockState, Result, TimeOfDay};
use tokio::time::sleep;

async fn run_for(
    runner: &ClockRunner,
    state: &mut ClockState,
    sink: &mut RecordingSink,
    stop_after: Duration,
) -> terminal_clock::RunOutcome {
    let (trigger, shutdown) = shutdown::channel();
    let stopper = async move {
        sleep(stop_after).await;
        trigger.trigger();
    };
    let (outcome, ()) = tokio::join!(runner.run(state, sink, shutdown), stopper);
    outcome.unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_runner_advances_once_per_tick() {
    let runner = ClockRunner::new(Duration::from_secs(1), Duration::ZERO);
    let mut state = ClockState::new(time(10, 0, 0));
    let mut sink = RecordingSink::default();

    let outcome = run_for(&runner, &mut state, &mut sink, Duration::from_millis(3500)).await;

    assert_eq!(outcome.ticks, 3);
    assert_eq!(outcome.alarms_fired, 0);
    assert_eq!(state.time().as_tuple(), (10, 0, 3));

    let shown: Vec<_> = sink.ticks.iter().map(|s| s.time.as_tuple()).collect();
    assert_eq!(shown, vec![(10, 0, 0), (10, 0, 1), (10, 0, 2), (10, 0, 3)]);
}

#[tokio::test(start_paused = true)]
async fn test_alarm_banner_shown_once_and_clock_held() {
    let runner = ClockRunner::new(Duration::from_secs(1), Duration::from_secs(30));
    let mut state = ClockState::new(time(6, 59, 58));
    state.set_alarm(7, 0, 0).unwrap();
    let mut sink = RecordingSink::default();

    let outcome = run_for(&runner, &mut state, &mut sink, Duration::from_millis(40_500)).await;

    assert_eq!(sink.alarms, vec![time(7, 0, 0)]);
    assert_eq!(outcome.alarms_fired, 1);
    assert!(state.alarm().is_none());
    // two ticks before the alarm, thirty seconds of banner, then eight more ticks
    assert_eq!(outcome.ticks, 10);
    assert_eq!(state.time().as_tuple(), (7, 0, 8));
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_during_alarm_hold() {
    let runner = ClockRunner::new(Duration::from_secs(1), Duration::from_secs(30));
    let mut state = ClockState::new(time(6, 59, 58));
    state.set_alarm(7, 0, 0).unwrap();
    let mut sink = RecordingSink::default();

    let outcome = run_for(&runner, &mut state, &mut sink, Duration::from_secs(10)).await;

    assert_eq!(outcome.ticks, 2);
    assert_eq!(outcome.alarms_fired, 1);
    assert_eq!(state.time().as_tuple(), (7, 0, 0));
    assert!(state.alarm().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_paused_clock_keeps_drawing() {
    let runner = ClockRunner::new(Duration::from_millis(100), Duration::ZERO);
    let mut state = ClockState::new(time(12, 0, 0));
    state.toggle_pause();
    let mut sink = RecordingSink::default();

    let outcome = run_for(&runner, &mut state, &mut sink, Duration::from_millis(550)).await;

    assert_eq!(outcome.ticks, 5);
    assert_eq!(sink.ticks.len(), 6);
    assert!(sink.ticks.iter().all(|s| s.paused));
    assert_eq!(state.time().as_tuple(), (12, 0, 0));
}

#[tokio::test(start_paused = true)]
async fn test_already_cancelled_run_draws_once() {
    let runner = ClockRunner::default();
    let mut state = ClockState::new(time(8, 0, 0));
    let mut sink = RecordingSink::default();

    let (trigger, shutdown) = shutdown::channel();
    trigger.trigger();
    let outcome = runner.run(&mut state, &mut sink, shutdown).await.unwrap();

    assert_eq!(outcome.ticks, 0);
    assert_eq!(sink.ticks.len(), 1);
    assert_eq!(state.time().as_tuple(), (8, 0, 0));
}

struct BrokenSink;

impl DisplaySink for BrokenSink {
    fn show_tick(&mut self, _snapshot: &ClockSnapshot) -> Result<()> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "terminal closed").into())
    }

    fn show_alarm(&mut self, _alarm: TimeOfDay) -> Result<()> {
        Ok(())
    }
}

#[tokio::test(start_paused = true)]
async fn test_sink_failure_ends_run() {
    let runner = ClockRunner::default();
    let mut state = ClockState::new(time(8, 0, 0));
    let (_trigger, shutdown) = shutdown::channel();

    let result = runner.run(&mut state, &mut BrokenSink, shutdown).await;

    assert!(matches!(result, Err(ClockError::IoError(_))));
    assert_eq!(state.time().as_tuple(), (8, 0, 0));
}
