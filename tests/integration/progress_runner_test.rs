// Tests for ProgressRunner: outcome, error propagation and the status line

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use toolbelt::ui::progress::{ProgressConfig, ProgressRunner};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }

    fn last_line(&self) -> String {
        let text = self.text();
        let text = text.trim_end_matches('\n');
        // The status line follows the erase sequence and carriage return
        text.rsplit('\r').next().unwrap_or("").to_string()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Debug, PartialEq)]
struct Boom(&'static str);

fn runner(config: ProgressConfig) -> (ProgressRunner<Capture>, Capture) {
    let capture = Capture::default();
    let config = config.with_frame_interval(Duration::from_millis(5));
    (ProgressRunner::new(config, capture.clone()), capture)
}

#[test]
fn test_normal_return_is_success() {
    let (runner, out) = runner(ProgressConfig::default().with_phrase("Crunching"));

    let outcome = runner.run(|| Ok::<_, Boom>(7)).unwrap();

    assert!(outcome.success);
    assert_eq!(outcome.value, Ok(7));
    assert_eq!(out.last_line(), "Crunching ✔");
    assert!(out.text().ends_with('\n'));
}

#[test]
fn test_error_is_raised_after_failure_marker() {
    let (runner, out) = runner(ProgressConfig::default());

    let result = runner.run(|| Err::<u32, _>(Boom("network down")));

    assert_eq!(result.unwrap_err(), Boom("network down"));
    assert_eq!(out.last_line(), "Loading... ✗");
}

#[test]
fn test_error_is_captured_when_not_raising() {
    let (runner, out) = runner(ProgressConfig::default().with_raise_on_failure(false));

    let outcome = runner.run(|| Err::<u32, _>(Boom("bad input"))).unwrap();

    assert!(!outcome.success);
    assert_eq!(outcome.value, Err(Boom("bad input")));
    assert_eq!(out.last_line(), "Loading... ✗");
}

#[test]
fn test_evaluator_decides_success() {
    let (runner, out) = runner(ProgressConfig::default());

    let accepted = runner.run_evaluated(|| Ok::<_, Boom>(200), |code| *code == 200).unwrap();
    assert!(accepted.success);
    assert_eq!(out.last_line(), "Loading... ✔");

    let rejected = runner.run_evaluated(|| Ok::<_, Boom>(500), |code| *code == 200).unwrap();
    assert!(!rejected.success);
    assert_eq!(rejected.value, Ok(500));
    assert_eq!(out.last_line(), "Loading... ✗");
}

#[test]
fn test_rejected_value_is_not_raised() {
    // raise_on_failure only concerns errors, not values the evaluator rejects
    let (runner, _out) = runner(ProgressConfig::default());

    let outcome = runner.run_evaluated(|| Ok::<_, Boom>(false), |ok| *ok).unwrap();
    assert!(!outcome.is_success());
    assert_eq!(outcome.into_value(), Ok(false));
}

#[test]
fn test_custom_markers() {
    let (runner, out) = runner(ProgressConfig::default().with_markers("OK", "FAIL"));

    runner.run(|| Ok::<_, Boom>(())).unwrap();
    assert_eq!(out.last_line(), "Loading... OK");

    let _ = runner.run(|| Err::<(), _>(Boom("x")));
    assert_eq!(out.last_line(), "Loading... FAIL");
}

#[test]
fn test_animation_draws_while_operation_runs() {
    let (runner, out) = runner(ProgressConfig::default().with_bar_length(3));

    runner
        .run(|| {
            thread::sleep(Duration::from_millis(60));
            Ok::<_, Boom>(())
        })
        .unwrap();

    let text = out.text();
    assert!(text.contains("\rLoading... ■□□"));
    assert!(text.contains("\rLoading... □■□"));
}

#[test]
fn test_no_frames_after_status_line() {
    let (runner, out) = runner(ProgressConfig::default());

    runner
        .run(|| {
            thread::sleep(Duration::from_millis(20));
            Ok::<_, Boom>(())
        })
        .unwrap();

    let finished = out.text();
    assert!(finished.ends_with("Loading... ✔\n"));

    thread::sleep(Duration::from_millis(30));
    assert_eq!(out.text(), finished, "animation kept drawing after stop");
}

#[test]
fn test_operation_runs_exactly_once() {
    let (runner, _out) = runner(ProgressConfig::default());
    let calls = Arc::new(Mutex::new(0));

    let counter = Arc::clone(&calls);
    runner
        .run(move || {
            *counter.lock() += 1;
            Ok::<_, Boom>(())
        })
        .unwrap();

    assert_eq!(*calls.lock(), 1);
}
