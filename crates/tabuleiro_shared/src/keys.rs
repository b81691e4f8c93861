//! Key codes and modifier state.
//!
//! The engine expects Qt-style key codes and modifier bits, so the mapping
//! here must stay in sync with the engine's keyboard handler. Keys with no
//! mapping become [`NO_KEY_MAPPING`] and are still forwarded; the engine
//! ignores the sentinel.

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};

/// Sentinel code for keys the engine has no mapping for.
pub const NO_KEY_MAPPING: i32 = -1;

/// Native modifier bit: any shift held.
pub const MODIFIER_SHIFT: i32 = 0x0200_0000;
/// Native modifier bit: any ctrl held.
pub const MODIFIER_CTRL: i32 = 0x0400_0000;
/// Native modifier bit: any alt held.
pub const MODIFIER_ALT: i32 = 0x0800_0000;

/// Platform-independent keyboard key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Num0, Num1, Num2, Num3, Num4, Num5, Num6, Num7, Num8, Num9,
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    Space,
    Enter,
    Escape,
    Left,
    Up,
    Right,
    Down,
    Backspace,
    Tab,
    ShiftLeft,
    ShiftRight,
    CtrlLeft,
    CtrlRight,
    AltLeft,
    AltRight,
    /// Anything the platform reports that has no entry above.
    Unknown,
}

impl Key {
    /// Returns true for the six modifier keys tracked as held state.
    #[must_use]
    pub const fn is_modifier(self) -> bool {
        matches!(
            self,
            Self::ShiftLeft
                | Self::ShiftRight
                | Self::CtrlLeft
                | Self::CtrlRight
                | Self::AltLeft
                | Self::AltRight
        )
    }

    /// Maps this key to the engine's native (Qt) key code.
    ///
    /// Unmapped keys return [`NO_KEY_MAPPING`]; the router forwards them
    /// anyway and the engine drops them.
    #[must_use]
    pub const fn native_code(self) -> i32 {
        match self {
            Self::Num0 => 0x30,
            Self::Num1 => 0x31,
            Self::Num2 => 0x32,
            Self::Num3 => 0x33,
            Self::Num4 => 0x34,
            Self::Num5 => 0x35,
            Self::Num6 => 0x36,
            Self::Num7 => 0x37,
            Self::Num8 => 0x38,
            Self::Num9 => 0x39,
            Self::A => 0x41,
            Self::B => 0x42,
            Self::C => 0x43,
            Self::D => 0x44,
            Self::E => 0x45,
            Self::F => 0x46,
            Self::G => 0x47,
            Self::H => 0x48,
            Self::I => 0x49,
            Self::J => 0x4A,
            Self::K => 0x4B,
            Self::L => 0x4C,
            Self::M => 0x4D,
            Self::N => 0x4E,
            Self::O => 0x4F,
            Self::P => 0x50,
            Self::Q => 0x51,
            Self::R => 0x52,
            Self::S => 0x53,
            Self::T => 0x54,
            Self::U => 0x55,
            Self::V => 0x56,
            Self::W => 0x57,
            Self::X => 0x58,
            Self::Y => 0x59,
            Self::Z => 0x5A,
            Self::Space => 0x20,
            Self::Enter => 0x0100_0004,
            Self::Escape => 0x0100_0000,
            Self::Left => 0x0100_0012,
            Self::Up => 0x0100_0013,
            Self::Right => 0x0100_0014,
            Self::Down => 0x0100_0015,
            Self::Backspace => 0x0100_0003,
            Self::Tab => 0x0100_0001,
            Self::AltLeft => 0x0110_0007,
            Self::AltRight => 0x0110_0008,
            Self::ShiftLeft
            | Self::ShiftRight
            | Self::CtrlLeft
            | Self::CtrlRight
            | Self::Unknown => NO_KEY_MAPPING,
        }
    }
}

/// Held modifier keys, tracked per physical side.
///
/// The tap dispatch rules distinguish left from right alt, so the sides are
/// kept separate here and only merged when building the native bitmask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaKeys {
    pub shift_left: bool,
    pub shift_right: bool,
    pub ctrl_left: bool,
    pub ctrl_right: bool,
    pub alt_left: bool,
    pub alt_right: bool,
}

impl MetaKeys {
    /// No modifiers held.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            shift_left: false,
            shift_right: false,
            ctrl_left: false,
            ctrl_right: false,
            alt_left: false,
            alt_right: false,
        }
    }

    /// Records a modifier press or release. Non-modifier keys are ignored.
    pub fn set(&mut self, key: Key, held: bool) {
        match key {
            Key::ShiftLeft => self.shift_left = held,
            Key::ShiftRight => self.shift_right = held,
            Key::CtrlLeft => self.ctrl_left = held,
            Key::CtrlRight => self.ctrl_right = held,
            Key::AltLeft => self.alt_left = held,
            Key::AltRight => self.alt_right = held,
            _ => {}
        }
    }

    /// Returns true if no modifier is held.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.shift_left
            || self.shift_right
            || self.ctrl_left
            || self.ctrl_right
            || self.alt_left
            || self.alt_right)
    }

    /// Either shift held.
    #[must_use]
    pub const fn shift(&self) -> bool {
        self.shift_left || self.shift_right
    }

    /// Either ctrl held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.ctrl_left || self.ctrl_right
    }

    /// Either alt held.
    #[must_use]
    pub const fn alt(&self) -> bool {
        self.alt_left || self.alt_right
    }

    /// Builds the native modifier bitmask the engine expects.
    #[must_use]
    pub const fn native_modifiers(&self) -> i32 {
        let mut mask = 0;
        if self.shift() {
            mask |= MODIFIER_SHIFT;
        }
        if self.ctrl() {
            mask |= MODIFIER_CTRL;
        }
        if self.alt() {
            mask |= MODIFIER_ALT;
        }
        mask
    }
}
