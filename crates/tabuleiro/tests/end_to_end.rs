//! Full-pipeline test: platform callbacks in, engine calls out.

use std::sync::Arc;

use parking_lot::Mutex;
use tabuleiro::{ClientConfig, EngineSink, RecordingSink, Session, SinkCall};
use tabuleiro_input::{Pointer, TouchPhase, TouchSample};
use tabuleiro_shared::keys::Key;

/// Sink wrapper that shares the recorder with the test body.
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

fn session_480x800() -> (Session, Arc<Mutex<RecordingSink>>) {
    let recorder = Arc::new(Mutex::new(RecordingSink::new()));
    let session = Session::new(
        &ClientConfig::default(),
        (480, 800),
        Box::new(SharedSink(Arc::clone(&recorder))),
    );
    (session, recorder)
}

fn one(phase: TouchPhase, x: f32, y: f32) -> TouchSample {
    TouchSample::new(phase, vec![Pointer::new(0, x, y)])
}

fn two(phase: TouchPhase, a: (f32, f32), b: (f32, f32)) -> TouchSample {
    TouchSample::new(
        phase,
        vec![Pointer::new(0, a.0, a.1), Pointer::new(1, b.0, b.1)],
    )
}

#[test]
fn pinch_with_platform_scale_detector() {
    let (session, recorder) = session_480x800();

    session.handle_touch(&one(TouchPhase::Down, 100.0, 200.0));
    session.handle_touch(&two(TouchPhase::PointerDown, (100.0, 200.0), (150.0, 220.0)));
    session.handle_scale(1.2);
    session.handle_touch(&two(TouchPhase::PointerUp, (100.0, 200.0), (150.0, 220.0)));
    session.tick_once();

    assert_eq!(
        recorder.lock().take(),
        vec![
            SinkCall::TwoFingerPressed { x1: 100, y1: 600, x2: 150, y2: 580 },
            SinkCall::Scale(1.2),
            SinkCall::TouchReleased,
        ]
    );
}

#[test]
fn scale_and_rotate_rejected_outside_two_finger_gesture() {
    let (session, recorder) = session_480x800();

    session.handle_scale(1.5);
    session.handle_rotate(0.4);
    session.handle_rotate(0.0);
    session.tick_once();
    assert!(recorder.lock().calls.is_empty());
}

#[test]
fn drag_collapses_to_three_engine_calls_per_tick() {
    let (session, recorder) = session_480x800();

    session.handle_touch(&one(TouchPhase::Down, 10.0, 10.0));
    for i in 0..50i32 {
        session.handle_touch(&one(TouchPhase::Move, 60.0 + i as f32, 10.0));
    }
    session.handle_touch(&one(TouchPhase::Up, 109.0, 10.0));
    session.tick_once();

    assert_eq!(
        recorder.lock().take(),
        vec![
            SinkCall::TouchPressed { toggle: false, x: 10, y: 790 },
            SinkCall::TouchMoved { x: 109, y: 790 },
            SinkCall::TouchReleased,
        ]
    );
}

#[test]
fn key_events_reach_engine_with_modifiers() {
    let (session, recorder) = session_480x800();

    session.handle_key_down(Key::CtrlLeft);
    session.handle_key_up(Key::B);
    session.handle_key_up(Key::CtrlLeft);
    session.tick_once();

    assert_eq!(
        recorder.lock().take(),
        vec![SinkCall::Keyboard { code: 0x42, modifiers: 0x0400_0000 }]
    );
}
