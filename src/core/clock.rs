//! Simulated clock.
//!
//! The clock holds its own notion of "now", set by the operator at the start
//! of a session, and advances it by one second for every real second while
//! it runs. The value lives in a single `AtomicI64` (seconds since the epoch
//! of a naive local date-time): the tick task is the only periodic writer and
//! the terminal session only reads it, so no lock is ever held while the
//! session waits on stdin.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use crate::utils::{date, time};
use chrono::{DateTime, NaiveDateTime};
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

const TICK: Duration = Duration::from_secs(1);

/// Where the clock value came from after [`Clock::initialise`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSource {
    /// The operator's input was parsed.
    Parsed,
    /// Empty or invalid input, the real local time was used instead.
    SystemFallback,
}

pub struct Clock {
    seconds: Arc<AtomicI64>,
    /// Timer runtime. `None` until the first start, and again after a release.
    runtime: Option<Runtime>,
    ticker: Option<JoinHandle<()>>,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    /// A stopped clock showing the real local time.
    pub fn new() -> Self {
        Self {
            seconds: Arc::new(AtomicI64::new(to_seconds(&date::now()))),
            runtime: None,
            ticker: None,
        }
    }

    /// Set the simulated time from operator input.
    ///
    /// Never fails: empty or unparseable input falls back to the real local
    /// time with a warning. Any running ticker is stopped; call
    /// [`Clock::start`] to resume.
    pub fn initialise(&mut self, input: Option<&str>) -> TimeSource {
        self.stop(false);

        let raw = input.map(str::trim).unwrap_or("");
        let parsed = time::parse_clock_input(raw, date::today());

        let (value, source) = match parsed {
            Some(t) => (t, TimeSource::Parsed),
            None if raw.is_empty() => {
                warning("No time entered. Reverting to current system time.");
                (date::now(), TimeSource::SystemFallback)
            }
            None => {
                warning(format!(
                    "{}. Reverting to current system time.",
                    AppError::InvalidTime(raw.to_string())
                ));
                (date::now(), TimeSource::SystemFallback)
            }
        };

        self.set_time(value);
        source
    }

    pub fn set_time(&self, t: NaiveDateTime) {
        self.seconds.store(to_seconds(&t), Ordering::Release);
    }

    /// Snapshot of the simulated time. Safe while a tick is in flight.
    pub fn current_time(&self) -> NaiveDateTime {
        from_seconds(self.seconds.load(Ordering::Acquire))
    }

    pub fn is_running(&self) -> bool {
        self.ticker.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Start ticking once per real second.
    ///
    /// Does nothing if a ticker is already alive. Rebuilds the timer
    /// runtime if a previous `stop(true)` released it.
    pub fn start(&mut self) -> AppResult<()> {
        if self.is_running() {
            return Ok(());
        }

        if self.runtime.is_none() {
            let rt = Builder::new_multi_thread()
                .worker_threads(1)
                .thread_name("signalbook-clock")
                .enable_time()
                .build()
                .map_err(|e| AppError::Clock(format!("cannot start timer: {e}")))?;
            self.runtime = Some(rt);
        }

        let Some(rt) = self.runtime.as_ref() else {
            return Err(AppError::Clock("timer runtime unavailable".into()));
        };

        let seconds = Arc::clone(&self.seconds);
        self.ticker = Some(rt.spawn(run_ticker(seconds)));
        Ok(())
    }

    /// Stop ticking. With `release` the timer runtime is shut down too and
    /// the next [`Clock::start`] builds a fresh one.
    pub fn stop(&mut self, release: bool) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
        }

        if release && let Some(rt) = self.runtime.take() {
            rt.shutdown_background();
        }
    }
}

impl Drop for Clock {
    fn drop(&mut self) {
        self.stop(true);
    }
}

/// Tick task: one second of simulated time per real second.
async fn run_ticker(seconds: Arc<AtomicI64>) {
    // First tick one period from now, not immediately.
    let mut interval = tokio::time::interval_at(Instant::now() + TICK, TICK);
    interval.set_missed_tick_behavior(MissedTickBehavior::Burst);

    loop {
        interval.tick().await;
        seconds.fetch_add(1, Ordering::AcqRel);
    }
}

fn to_seconds(t: &NaiveDateTime) -> i64 {
    t.and_utc().timestamp()
}

fn from_seconds(secs: i64) -> NaiveDateTime {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.naive_utc())
        .unwrap_or_default()
}
