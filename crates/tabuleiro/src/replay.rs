//! Replays drained event batches into the engine boundary.
//!
//! Most events map 1:1 onto an [`EngineSink`] call. The exceptions encode
//! how the engine models presses: a confirmed tap becomes a press
//! immediately followed by a release, while a drag start becomes a press
//! that stays down until the queued `Released` arrives.

use tabuleiro_shared::events::InputEvent;

use crate::engine::EngineSink;

/// Replays one batch, in order, into the sink.
pub fn replay_batch(batch: &[InputEvent], sink: &mut dyn EngineSink) {
    for event in batch {
        replay_event(*event, sink);
    }
}

fn replay_event(event: InputEvent, sink: &mut dyn EngineSink) {
    match event {
        InputEvent::Click { x, y } => {
            sink.touch_pressed(false, x, y);
            sink.touch_released();
        }
        InputEvent::ToggleClick { x, y } => {
            sink.touch_pressed(true, x, y);
            sink.touch_released();
        }
        InputEvent::DoubleClick { x, y } => sink.double_click(x, y),
        InputEvent::Scale(factor) => sink.scale(factor),
        InputEvent::Hover { x, y } => sink.hover(x, y),
        InputEvent::LoadBegin { x, y } => sink.touch_pressed(false, x, y),
        InputEvent::Released => sink.touch_released(),
        InputEvent::Move { x, y } => sink.touch_moved(x, y),
        InputEvent::Rotate(delta) => sink.rotate(delta),
        InputEvent::Pan { x, y } => sink.pan(x, y),
        InputEvent::Tilt(delta) => sink.tilt(delta),
        InputEvent::Key { code, modifiers } => sink.keyboard(code, modifiers),
        InputEvent::Action { x, y } => sink.action(false, x, y),
        InputEvent::SignaledAction { x, y } => sink.action(true, x, y),
        InputEvent::TwoFingerPressed { x1, y1, x2, y2 } => {
            sink.two_finger_pressed(x1, y1, x2, y2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{RecordingSink, SinkCall};

    #[test]
    fn test_click_is_press_then_release() {
        let mut sink = RecordingSink::new();
        replay_batch(&[InputEvent::Click { x: 10, y: 20 }], &mut sink);
        assert_eq!(
            sink.take(),
            vec![
                SinkCall::TouchPressed { toggle: false, x: 10, y: 20 },
                SinkCall::TouchReleased,
            ]
        );
    }

    #[test]
    fn test_toggle_click_sets_toggle() {
        let mut sink = RecordingSink::new();
        replay_batch(&[InputEvent::ToggleClick { x: 1, y: 2 }], &mut sink);
        assert_eq!(
            sink.calls[0],
            SinkCall::TouchPressed { toggle: true, x: 1, y: 2 }
        );
    }

    #[test]
    fn test_drag_batch_holds_press_until_released() {
        let mut sink = RecordingSink::new();
        replay_batch(
            &[
                InputEvent::LoadBegin { x: 5, y: 5 },
                InputEvent::Move { x: 9, y: 5 },
                InputEvent::Released,
            ],
            &mut sink,
        );
        assert_eq!(
            sink.take(),
            vec![
                SinkCall::TouchPressed { toggle: false, x: 5, y: 5 },
                SinkCall::TouchMoved { x: 9, y: 5 },
                SinkCall::TouchReleased,
            ]
        );
    }

    #[test]
    fn test_one_to_one_mappings() {
        let mut sink = RecordingSink::new();
        replay_batch(
            &[
                InputEvent::TwoFingerPressed { x1: 1, y1: 2, x2: 3, y2: 4 },
                InputEvent::Scale(1.2),
                InputEvent::Rotate(0.1),
                InputEvent::Tilt(-0.3),
                InputEvent::Key { code: 0x41, modifiers: 0 },
                InputEvent::Action { x: 7, y: 8 },
                InputEvent::SignaledAction { x: 9, y: 10 },
            ],
            &mut sink,
        );
        assert_eq!(
            sink.take(),
            vec![
                SinkCall::TwoFingerPressed { x1: 1, y1: 2, x2: 3, y2: 4 },
                SinkCall::Scale(1.2),
                SinkCall::Rotate(0.1),
                SinkCall::Tilt(-0.3),
                SinkCall::Keyboard { code: 0x41, modifiers: 0 },
                SinkCall::Action { signal: false, x: 7, y: 8 },
                SinkCall::Action { signal: true, x: 9, y: 10 },
            ]
        );
    }
}
