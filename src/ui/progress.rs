//! Loading animation around a long-running operation
//!
//! [`ProgressRunner`] draws a small sweeping bar on a background thread
//! while the caller's operation runs on the current thread, then replaces
//! the bar with a success or failure marker.
//!
//! ```text
//! Loading... □□■□□        (while running)
//! Loading... ✔            (when done)
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use toolbelt::ui::progress::{ProgressConfig, ProgressRunner};
//!
//! let runner = ProgressRunner::stdout(ProgressConfig::default().with_phrase("Fetching..."));
//! let outcome = runner.run(|| -> Result<u32, std::io::Error> {
//!     std::thread::sleep(std::time::Duration::from_secs(2));
//!     Ok(42)
//! })?;
//! assert!(outcome.success);
//! # Ok::<(), std::io::Error>(())
//! ```

use crossterm::{
    queue,
    terminal::{Clear, ClearType},
};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub const DEFAULT_PHRASE: &str = "Loading...";
pub const DEFAULT_BAR_LENGTH: usize = 5;
pub const DEFAULT_SUCCESS_MARKER: &str = "✔";
pub const DEFAULT_FAILURE_MARKER: &str = "✗";
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(150);

const FILLED_CELL: char = '■';
const EMPTY_CELL: char = '□';

/// How a [`ProgressRunner`] draws and how it treats failures
#[derive(Debug, Clone)]
pub struct ProgressConfig {
    pub phrase: String,
    pub bar_length: usize,
    pub success_marker: String,
    pub failure_marker: String,
    pub frame_interval: Duration,
    /// Return the operation's error as `Err` instead of capturing it in the outcome
    pub raise_on_failure: bool,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            phrase: DEFAULT_PHRASE.to_string(),
            bar_length: DEFAULT_BAR_LENGTH,
            success_marker: DEFAULT_SUCCESS_MARKER.to_string(),
            failure_marker: DEFAULT_FAILURE_MARKER.to_string(),
            frame_interval: DEFAULT_FRAME_INTERVAL,
            raise_on_failure: true,
        }
    }
}

impl ProgressConfig {
    pub fn with_phrase<S: Into<String>>(mut self, phrase: S) -> Self {
        self.phrase = phrase.into();
        self
    }

    /// Width of the bar in cells. Zero is bumped to one.
    pub fn with_bar_length(mut self, bar_length: usize) -> Self {
        self.bar_length = bar_length.max(1);
        self
    }

    pub fn with_markers<S: Into<String>, F: Into<String>>(mut self, success: S, failure: F) -> Self {
        self.success_marker = success.into();
        self.failure_marker = failure.into();
        self
    }

    pub fn with_frame_interval(mut self, frame_interval: Duration) -> Self {
        self.frame_interval = frame_interval;
        self
    }

    pub fn with_raise_on_failure(mut self, raise_on_failure: bool) -> Self {
        self.raise_on_failure = raise_on_failure;
        self
    }
}

/// Result of one [`ProgressRunner`] invocation
#[derive(Debug)]
pub struct RunOutcome<T, E> {
    /// What the operation returned, or the error it failed with
    pub value: std::result::Result<T, E>,
    pub success: bool,
}

impl<T, E> RunOutcome<T, E> {
    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn into_value(self) -> std::result::Result<T, E> {
        self.value
    }
}

/// Render one animation frame with the filled cell at `position`
pub fn render_frame(phrase: &str, bar_length: usize, position: usize) -> String {
    let mut frame = String::with_capacity(phrase.len() + 2 + bar_length * 3);
    frame.push('\r');
    frame.push_str(phrase);
    frame.push(' ');
    for cell in 0..bar_length {
        frame.push(if cell == position { FILLED_CELL } else { EMPTY_CELL });
    }
    frame
}

/// Runs operations while a loading bar animates on `W`
pub struct ProgressRunner<W: Write + Send + 'static> {
    config: ProgressConfig,
    output: Arc<Mutex<W>>,
}

impl ProgressRunner<io::Stdout> {
    /// Runner drawing on the process stdout
    pub fn stdout(config: ProgressConfig) -> Self {
        Self::new(config, io::stdout())
    }
}

impl<W: Write + Send + 'static> ProgressRunner<W> {
    pub fn new(config: ProgressConfig, output: W) -> Self {
        Self {
            config,
            output: Arc::new(Mutex::new(output)),
        }
    }

    pub fn config(&self) -> &ProgressConfig {
        &self.config
    }

    /// Run `operation`, counting any `Ok` value as success
    pub fn run<T, E, F>(&self, operation: F) -> std::result::Result<RunOutcome<T, E>, E>
    where
        F: FnOnce() -> std::result::Result<T, E>,
    {
        self.execute(operation, None)
    }

    /// Run `operation`, letting `evaluate` decide whether an `Ok` value is a success
    ///
    /// A value rejected by `evaluate` is still returned in the outcome, never
    /// as an error.
    pub fn run_evaluated<T, E, F, P>(
        &self,
        operation: F,
        evaluate: P,
    ) -> std::result::Result<RunOutcome<T, E>, E>
    where
        F: FnOnce() -> std::result::Result<T, E>,
        P: Fn(&T) -> bool,
    {
        let evaluate: &dyn Fn(&T) -> bool = &evaluate;
        self.execute(operation, Some(evaluate))
    }

    fn execute<T, E, F>(
        &self,
        operation: F,
        evaluate: Option<&dyn Fn(&T) -> bool>,
    ) -> std::result::Result<RunOutcome<T, E>, E>
    where
        F: FnOnce() -> std::result::Result<T, E>,
    {
        let animation = Animation::start(&self.config, Arc::clone(&self.output));

        let value = operation();
        let success = match &value {
            Ok(v) => evaluate.map_or(true, |evaluate| evaluate(v)),
            Err(_) => false,
        };

        animation.stop();
        self.write_status(success);

        match value {
            Err(e) if self.config.raise_on_failure => Err(e),
            value => Ok(RunOutcome { value, success }),
        }
    }

    fn write_status(&self, success: bool) {
        let marker = if success {
            &self.config.success_marker
        } else {
            &self.config.failure_marker
        };

        let mut out = self.output.lock();
        let written = queue!(out, Clear(ClearType::CurrentLine))
            .and_then(|_| write!(out, "\r{} {}\n", self.config.phrase, marker))
            .and_then(|_| out.flush());

        if let Err(e) = written {
            log::debug!("Failed to write progress status line: {}", e);
        }
    }
}

/// Handle to the background thread drawing the bar
///
/// Dropping the handle stops the thread too, so an operation that panics
/// does not leave the animation running.
struct Animation {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Animation {
    fn start<W: Write + Send + 'static>(config: &ProgressConfig, output: Arc<Mutex<W>>) -> Self {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let phrase = config.phrase.clone();
        let bar_length = config.bar_length.max(1);
        let interval = config.frame_interval;

        let handle = thread::Builder::new()
            .name("toolbelt-progress".to_string())
            .spawn(move || {
                let mut position = 0;
                loop {
                    {
                        let mut out = output.lock();
                        let frame = render_frame(&phrase, bar_length, position);
                        if out.write_all(frame.as_bytes()).and_then(|_| out.flush()).is_err() {
                            return;
                        }
                    }
                    position = (position + 1) % bar_length;

                    match stop_rx.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => continue,
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
                    }
                }
            });

        let handle = match handle {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::warn!("Could not start loading animation: {}", e);
                None
            }
        };

        Self {
            stop_tx: Some(stop_tx),
            handle,
        }
    }

    fn stop(mut self) {
        self.halt();
    }

    fn halt(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Animation {
    fn drop(&mut self) {
        self.halt();
    }
}
