//! The periodic render tick.
//!
//! One tick drains the event queue and replays it into the engine. When a
//! frame took longer to render than one period, the following ticks are
//! skipped so the engine catches up instead of falling further behind.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crate::error::{ClientError, ClientResult};

/// Frame-skip accounting for the render tick.
#[derive(Clone, Copy, Debug)]
pub struct RenderTick {
    period: Duration,
    skip_remaining: u32,
}

impl RenderTick {
    /// Creates the accounting for the given tick period.
    #[must_use]
    pub const fn new(period: Duration) -> Self {
        Self {
            period,
            skip_remaining: 0,
        }
    }

    /// Tick period.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Records how long the last frame took to render. A frame spanning `k`
    /// periods causes the next `k - 1` ticks to be skipped.
    pub fn report_render_time(&mut self, render: Duration) {
        let period_ms = self.period.as_millis().max(1);
        let frames = render.as_millis().div_ceil(period_ms);
        self.skip_remaining = u32::try_from(frames.saturating_sub(1)).unwrap_or(u32::MAX);
        if self.skip_remaining > 0 {
            tracing::trace!(skip = self.skip_remaining, "render fell behind, skipping");
        }
    }

    /// Called once per period; returns whether this tick should do work.
    pub fn on_tick(&mut self) -> bool {
        if self.skip_remaining > 0 {
            self.skip_remaining -= 1;
            false
        } else {
            true
        }
    }
}

/// Owns the tick thread: explicit start/stop, joined on teardown.
#[derive(Debug)]
pub struct TickDriver {
    period: Duration,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl TickDriver {
    /// Creates a stopped driver.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            stop: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }

    /// True while the tick thread is alive.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Spawns the tick thread, invoking `tick` once per period.
    ///
    /// The callback runs on the tick thread; a slow callback delays the next
    /// tick rather than overlapping with it.
    pub fn start<F>(&mut self, mut tick: F) -> ClientResult<()>
    where
        F: FnMut() + Send + 'static,
    {
        if self.handle.is_some() {
            return Err(ClientError::AlreadyRunning);
        }
        self.stop.store(false, Ordering::SeqCst);
        let stop = Arc::clone(&self.stop);
        let period = self.period;
        self.handle = Some(std::thread::spawn(move || {
            tracing::debug!(?period, "tick thread started");
            while !stop.load(Ordering::SeqCst) {
                let started = Instant::now();
                tick();
                if let Some(rest) = period.checked_sub(started.elapsed()) {
                    std::thread::sleep(rest);
                }
            }
            tracing::debug!("tick thread stopped");
        }));
        Ok(())
    }

    /// Stops the tick thread and joins it. Idempotent.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            // A panicking tick callback already aborted the process
            // (panic = abort), so the join itself cannot fail meaningfully.
            let _ = handle.join();
        }
    }
}

impl Drop for TickDriver {
    fn drop(&mut self) {
        self.stop();
    }
}
