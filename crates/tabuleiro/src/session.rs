//! Session lifecycle: wires the router, the queue, the render tick, and the
//! engine sink together.
//!
//! The platform adapter owns one [`Session`] and forwards its callbacks into
//! it. `resume` starts the tick thread and opens sensor intake; `pause`
//! stops the thread, discards in-flight gesture state, and drops whatever
//! was still queued, so a backgrounded session never replays stale input.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tabuleiro_input::{EventQueue, GestureEventRouter, Orientation, TouchSample};
use tabuleiro_shared::keys::Key;

use crate::config::ClientConfig;
use crate::engine::EngineSink;
use crate::error::ClientResult;
use crate::replay::replay_batch;
use crate::tick::{RenderTick, TickDriver};

/// State shared with the tick thread.
struct Shared {
    router: Mutex<GestureEventRouter>,
    queue: Arc<EventQueue>,
    sink: Mutex<Box<dyn EngineSink>>,
    tick: Mutex<RenderTick>,
    active: AtomicBool,
}

/// One running client session.
pub struct Session {
    shared: Arc<Shared>,
    driver: TickDriver,
    epoch: Instant,
}

impl Session {
    /// Builds a paused session for a surface of the given physical size.
    #[must_use]
    pub fn new(config: &ClientConfig, surface_size: (u32, u32), sink: Box<dyn EngineSink>) -> Self {
        let router = GestureEventRouter::new(config.router_config(surface_size));
        let queue = router.queue();
        let period = config.tick_interval();
        Self {
            shared: Arc::new(Shared {
                router: Mutex::new(router),
                queue,
                sink: Mutex::new(sink),
                tick: Mutex::new(RenderTick::new(period)),
                active: AtomicBool::new(false),
            }),
            driver: TickDriver::new(period),
            epoch: Instant::now(),
        }
    }

    /// True between `resume` and `pause`.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.shared.active.load(Ordering::SeqCst)
    }

    /// Starts the tick thread and opens sensor intake.
    pub fn resume(&mut self) -> ClientResult<()> {
        let shared = Arc::clone(&self.shared);
        let epoch = self.epoch;
        self.driver.start(move || {
            Self::run_tick(&shared, epoch.elapsed());
        })?;
        self.shared.active.store(true, Ordering::SeqCst);
        tracing::info!("session resumed");
        Ok(())
    }

    /// Stops the tick thread. In-flight gesture state and queued events are
    /// discarded.
    pub fn pause(&mut self) {
        self.shared.active.store(false, Ordering::SeqCst);
        self.driver.stop();
        self.shared.router.lock().reset();
        let dropped = self.shared.queue.drain().len();
        if dropped > 0 {
            tracing::debug!(dropped, "discarded queued events on pause");
        }
        tracing::info!("session paused");
    }

    /// Forwards a raw touch sample from the platform.
    pub fn handle_touch(&self, sample: &TouchSample) {
        self.shared
            .router
            .lock()
            .handle_touch(sample, self.epoch.elapsed());
    }

    /// Forwards a key press.
    pub fn handle_key_down(&self, key: Key) {
        self.shared.router.lock().handle_key_down(key);
    }

    /// Forwards a key release.
    pub fn handle_key_up(&self, key: Key) {
        self.shared.router.lock().handle_key_up(key);
    }

    /// Forwards a pre-recognized scale update from a platform detector.
    pub fn handle_scale(&self, factor: f32) {
        self.shared.router.lock().on_scale(factor);
    }

    /// Forwards a pre-recognized rotation delta from a platform detector.
    pub fn handle_rotate(&self, delta: f32) {
        self.shared.router.lock().on_rotate(delta);
    }

    /// Forwards an orientation sensor sample. Dropped while paused.
    pub fn handle_sensor(&self, values: [f32; 3]) {
        if self.is_active() {
            self.shared.router.lock().handle_sensor(values);
        }
    }

    /// Updates the physical surface size after a resize.
    pub fn set_surface_size(&self, width: u32, height: u32) {
        self.shared.router.lock().set_surface_size(width, height);
    }

    /// Updates the current device orientation for tilt axis selection.
    pub fn set_device_orientation(&self, orientation: Orientation) {
        self.shared.router.lock().set_device_orientation(orientation);
    }

    /// Records how long the engine took to render the last frame, for
    /// frame-skip accounting.
    pub fn report_render_time(&self, render: Duration) {
        self.shared.tick.lock().report_render_time(render);
    }

    /// Runs one tick synchronously. The tick thread calls this once per
    /// period; tests call it directly.
    pub fn tick_once(&self) {
        Self::run_tick(&self.shared, self.epoch.elapsed());
    }

    fn run_tick(shared: &Shared, now: Duration) {
        if !shared.tick.lock().on_tick() {
            return;
        }
        let batch = {
            let mut router = shared.router.lock();
            router.advance(now);
            shared.queue.drain_deduplicated()
        };
        if batch.is_empty() {
            return;
        }
        tracing::trace!(events = batch.len(), "replaying batch");
        replay_batch(&batch, &mut **shared.sink.lock());
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.driver.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{RecordingSink, SinkCall};
    use tabuleiro_input::{Pointer, TouchPhase};

    /// Sink wrapper sharing the recorder with the test body.
    struct SharedSink(Arc<Mutex<RecordingSink>>);

    impl EngineSink for SharedSink {
        fn touch_pressed(&mut self, toggle: bool, x: i32, y: i32) {
            self.0.lock().touch_pressed(toggle, x, y);
        }
        fn touch_moved(&mut self, x: i32, y: i32) {
            self.0.lock().touch_moved(x, y);
        }
        fn touch_released(&mut self) {
            self.0.lock().touch_released();
        }
        fn double_click(&mut self, x: i32, y: i32) {
            self.0.lock().double_click(x, y);
        }
        fn two_finger_pressed(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
            self.0.lock().two_finger_pressed(x1, y1, x2, y2);
        }
        fn hover(&mut self, x: i32, y: i32) {
            self.0.lock().hover(x, y);
        }
        fn scale(&mut self, factor: f32) {
            self.0.lock().scale(factor);
        }
        fn rotate(&mut self, delta: f32) {
            self.0.lock().rotate(delta);
        }
        fn pan(&mut self, x: i32, y: i32) {
            self.0.lock().pan(x, y);
        }
        fn tilt(&mut self, delta: f32) {
            self.0.lock().tilt(delta);
        }
        fn keyboard(&mut self, code: i32, modifiers: i32) {
            self.0.lock().keyboard(code, modifiers);
        }
        fn action(&mut self, signal: bool, x: i32, y: i32) {
            self.0.lock().action(signal, x, y);
        }
    }

    fn session_with_recorder() -> (Session, Arc<Mutex<RecordingSink>>) {
        let recorder = Arc::new(Mutex::new(RecordingSink::new()));
        let session = Session::new(
            &ClientConfig::default(),
            (480, 800),
            Box::new(SharedSink(Arc::clone(&recorder))),
        );
        (session, recorder)
    }

    fn two_finger(phase: TouchPhase) -> TouchSample {
        TouchSample::new(
            phase,
            vec![Pointer::new(0, 100.0, 200.0), Pointer::new(1, 150.0, 220.0)],
        )
    }

    #[test]
    fn test_tick_replays_gesture_into_sink() {
        let (session, recorder) = session_with_recorder();

        session.handle_touch(&TouchSample::new(
            TouchPhase::Down,
            vec![Pointer::new(0, 100.0, 200.0)],
        ));
        session.handle_touch(&two_finger(TouchPhase::PointerDown));
        session.handle_touch(&two_finger(TouchPhase::PointerUp));
        session.tick_once();

        assert_eq!(
            recorder.lock().take(),
            vec![
                SinkCall::TwoFingerPressed { x1: 100, y1: 600, x2: 150, y2: 580 },
                SinkCall::TouchReleased,
            ]
        );
    }

    #[test]
    fn test_pause_discards_queued_events() {
        let (mut session, recorder) = session_with_recorder();
        session.resume().unwrap();
        session.pause();

        session.handle_touch(&TouchSample::new(
            TouchPhase::Down,
            vec![Pointer::new(0, 100.0, 200.0)],
        ));
        session.handle_touch(&two_finger(TouchPhase::PointerDown));
        session.pause();
        session.tick_once();
        assert!(recorder.lock().calls.is_empty());
    }

    #[test]
    fn test_sensor_dropped_while_paused() {
        let (session, recorder) = session_with_recorder();
        // Two fingers down would open the tilt gate, but the session is
        // paused so the sample never reaches the router.
        session.handle_touch(&two_finger(TouchPhase::PointerDown));
        session.handle_sensor([0.5, 0.0, 0.0]);
        session.tick_once();
        let calls = recorder.lock().take();
        assert!(!calls.iter().any(|c| matches!(c, SinkCall::Tilt(_))));
    }

    #[test]
    fn test_resume_pause_cycle() {
        let (mut session, _recorder) = session_with_recorder();
        assert!(!session.is_active());
        session.resume().unwrap();
        assert!(session.is_active());
        session.pause();
        assert!(!session.is_active());
        // A second cycle works too.
        session.resume().unwrap();
        session.pause();
    }
}
