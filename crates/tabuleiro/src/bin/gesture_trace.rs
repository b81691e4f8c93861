//! # Gesture Trace
//!
//! Feeds a scripted gesture sequence through the full pipeline and prints
//! every engine call it produces. Useful for eyeballing routing changes
//! without a device attached.
//!
//! ## Usage
//!
//! ```bash
//! gesture_trace --width 480 --height 800 --ticks 20
//! ```

use std::time::Duration;

use tabuleiro::{ClientConfig, RecordingSink, Session};
use tabuleiro_input::{Pointer, TouchPhase, TouchSample};
use tabuleiro_shared::keys::Key;

fn main() {
    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║         TABULEIRO GESTURE TRACE                                  ║");
    println!("║         SCRIPTED INPUT → ENGINE CALLS                            ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();

    // Parse command line arguments (simple parsing, no external deps)
    let args: Vec<String> = std::env::args().collect();
    let mut width = 480u32;
    let mut height = 800u32;
    let mut ticks = 20u32;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--width" | "-w" => {
                if i + 1 < args.len() {
                    width = args[i + 1].parse().unwrap_or(480);
                    i += 1;
                }
            }
            "--height" | "-H" => {
                if i + 1 < args.len() {
                    height = args[i + 1].parse().unwrap_or(800);
                    i += 1;
                }
            }
            "--ticks" | "-t" => {
                if i + 1 < args.len() {
                    ticks = args[i + 1].parse().unwrap_or(20);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Usage: gesture_trace [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -w, --width <PX>     Surface width (default: 480)");
                println!("  -H, --height <PX>    Surface height (default: 800)");
                println!("  -t, --ticks <N>      Ticks to run after the script (default: 20)");
                println!("  -h, --help           Show this help");
                return;
            }
            _ => {}
        }
        i += 1;
    }

    println!("┌─ CONFIGURATION ─────────────────────────────────────────────────┐");
    println!("│ Surface:            {width}x{height}");
    println!("│ Ticks:              {ticks}");
    println!("└─────────────────────────────────────────────────────────────────┘");
    println!();

    let mut session = Session::new(
        &ClientConfig::default(),
        (width, height),
        Box::new(PrintingSink::default()),
    );
    session.resume().expect("fresh session");

    let one = |phase, x, y| TouchSample::new(phase, vec![Pointer::new(0, x, y)]);
    let two = |phase, a: (f32, f32), b: (f32, f32)| {
        TouchSample::new(
            phase,
            vec![Pointer::new(0, a.0, a.1), Pointer::new(1, b.0, b.1)],
        )
    };

    println!("── script: tap ──");
    session.handle_touch(&one(TouchPhase::Down, 100.0, 200.0));
    session.handle_touch(&one(TouchPhase::Up, 100.0, 200.0));

    println!("── script: drag ──");
    session.handle_touch(&one(TouchPhase::Down, 50.0, 400.0));
    for step in 1..=5 {
        let x = 50.0 + step as f32 * 30.0;
        session.handle_touch(&one(TouchPhase::Move, x, 400.0));
    }
    session.handle_touch(&one(TouchPhase::Up, 200.0, 400.0));

    println!("── script: pinch ──");
    session.handle_touch(&one(TouchPhase::Down, 200.0, 300.0));
    session.handle_touch(&two(TouchPhase::PointerDown, (200.0, 300.0), (280.0, 300.0)));
    session.handle_touch(&two(TouchPhase::Move, (180.0, 300.0), (300.0, 300.0)));
    session.handle_sensor([0.2, 0.0, 0.0]);
    session.handle_touch(&two(TouchPhase::PointerUp, (180.0, 300.0), (300.0, 300.0)));
    session.handle_touch(&one(TouchPhase::Up, 300.0, 300.0));

    println!("── script: keys ──");
    session.handle_key_down(Key::CtrlLeft);
    session.handle_key_up(Key::A);
    session.handle_key_up(Key::CtrlLeft);

    // Let the tick thread replay everything and the tap window expire.
    std::thread::sleep(Duration::from_millis(33) * ticks);
    session.pause();

    println!();
    println!("Done.");
}

/// Sink that prints every engine call as it arrives.
#[derive(Default)]
struct PrintingSink {
    inner: RecordingSink,
}

impl tabuleiro::EngineSink for PrintingSink {
    fn touch_pressed(&mut self, toggle: bool, x: i32, y: i32) {
        println!("  engine.touch_pressed(toggle={toggle}, {x}, {y})");
        self.inner.touch_pressed(toggle, x, y);
    }
    fn touch_moved(&mut self, x: i32, y: i32) {
        println!("  engine.touch_moved({x}, {y})");
        self.inner.touch_moved(x, y);
    }
    fn touch_released(&mut self) {
        println!("  engine.touch_released()");
        self.inner.touch_released();
    }
    fn double_click(&mut self, x: i32, y: i32) {
        println!("  engine.double_click({x}, {y})");
        self.inner.double_click(x, y);
    }
    fn two_finger_pressed(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        println!("  engine.two_finger_pressed({x1}, {y1}, {x2}, {y2})");
        self.inner.two_finger_pressed(x1, y1, x2, y2);
    }
    fn hover(&mut self, x: i32, y: i32) {
        println!("  engine.hover({x}, {y})");
        self.inner.hover(x, y);
    }
    fn scale(&mut self, factor: f32) {
        println!("  engine.scale({factor})");
        self.inner.scale(factor);
    }
    fn rotate(&mut self, delta: f32) {
        println!("  engine.rotate({delta})");
        self.inner.rotate(delta);
    }
    fn pan(&mut self, x: i32, y: i32) {
        println!("  engine.pan({x}, {y})");
        self.inner.pan(x, y);
    }
    fn tilt(&mut self, delta: f32) {
        println!("  engine.tilt({delta})");
        self.inner.tilt(delta);
    }
    fn keyboard(&mut self, code: i32, modifiers: i32) {
        println!("  engine.keyboard(code={code:#x}, modifiers={modifiers:#x})");
        self.inner.keyboard(code, modifiers);
    }
    fn action(&mut self, signal: bool, x: i32, y: i32) {
        println!("  engine.action(signal={signal}, {x}, {y})");
        self.inner.action(signal, x, y);
    }
}
