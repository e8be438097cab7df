//! macOS implementation using rdev.

use crate::key::Key;
use crate::sink::{KeySink, KeyState};
use anyhow::Result;
use rdev::{simulate, EventType};
use std::io;
use std::thread;
use std::time::Duration;

/// Pause after each batch so the OS sees the events in order.
const SETTLE_DELAY: Duration = Duration::from_millis(20);

/// Convert our platform-agnostic Key to rdev Key.
fn to_rdev_key(key: Key) -> Option<rdev::Key> {
    let rdev_key = match key {
        Key::KEY_LEFTCTRL => rdev::Key::ControlLeft,
        Key::KEY_RIGHTCTRL => rdev::Key::ControlRight,
        Key::KEY_LEFTALT => rdev::Key::Alt,
        Key::KEY_RIGHTALT => rdev::Key::AltGr,
        Key::KEY_LEFTSHIFT => rdev::Key::ShiftLeft,
        Key::KEY_RIGHTSHIFT => rdev::Key::ShiftRight,
        Key::KEY_LEFTMETA => rdev::Key::MetaLeft,
        Key::KEY_RIGHTMETA => rdev::Key::MetaRight,
        Key::KEY_F1 => rdev::Key::F1,
        Key::KEY_F2 => rdev::Key::F2,
        Key::KEY_F3 => rdev::Key::F3,
        Key::KEY_F4 => rdev::Key::F4,
        Key::KEY_F5 => rdev::Key::F5,
        Key::KEY_F6 => rdev::Key::F6,
        Key::KEY_F7 => rdev::Key::F7,
        Key::KEY_F8 => rdev::Key::F8,
        Key::KEY_F9 => rdev::Key::F9,
        Key::KEY_F10 => rdev::Key::F10,
        Key::KEY_F11 => rdev::Key::F11,
        Key::KEY_F12 => rdev::Key::F12,
        Key::KEY_ENTER => rdev::Key::Return,
        Key::KEY_TAB => rdev::Key::Tab,
        Key::KEY_ESC => rdev::Key::Escape,
        Key::KEY_SPACE => rdev::Key::Space,
        Key::KEY_BACKSPACE => rdev::Key::Backspace,
        Key::KEY_DELETE => rdev::Key::Delete,
        Key::KEY_INSERT => rdev::Key::Insert,
        Key::KEY_HOME => rdev::Key::Home,
        Key::KEY_END => rdev::Key::End,
        Key::KEY_PAGEUP => rdev::Key::PageUp,
        Key::KEY_PAGEDOWN => rdev::Key::PageDown,
        Key::KEY_LEFT => rdev::Key::LeftArrow,
        Key::KEY_RIGHT => rdev::Key::RightArrow,
        Key::KEY_UP => rdev::Key::UpArrow,
        Key::KEY_DOWN => rdev::Key::DownArrow,
        Key::KEY_CAPSLOCK => rdev::Key::CapsLock,
        Key::KEY_NUMLOCK => rdev::Key::NumLock,
        Key::KEY_SCROLLLOCK => rdev::Key::ScrollLock,
        Key::KEY_PAUSE => rdev::Key::Pause,
        Key::KEY_SYSRQ => rdev::Key::PrintScreen,
        Key::KEY_A => rdev::Key::KeyA,
        Key::KEY_B => rdev::Key::KeyB,
        Key::KEY_C => rdev::Key::KeyC,
        Key::KEY_D => rdev::Key::KeyD,
        Key::KEY_E => rdev::Key::KeyE,
        Key::KEY_F => rdev::Key::KeyF,
        Key::KEY_G => rdev::Key::KeyG,
        Key::KEY_H => rdev::Key::KeyH,
        Key::KEY_I => rdev::Key::KeyI,
        Key::KEY_J => rdev::Key::KeyJ,
        Key::KEY_K => rdev::Key::KeyK,
        Key::KEY_L => rdev::Key::KeyL,
        Key::KEY_M => rdev::Key::KeyM,
        Key::KEY_N => rdev::Key::KeyN,
        Key::KEY_O => rdev::Key::KeyO,
        Key::KEY_P => rdev::Key::KeyP,
        Key::KEY_Q => rdev::Key::KeyQ,
        Key::KEY_R => rdev::Key::KeyR,
        Key::KEY_S => rdev::Key::KeyS,
        Key::KEY_T => rdev::Key::KeyT,
        Key::KEY_U => rdev::Key::KeyU,
        Key::KEY_V => rdev::Key::KeyV,
        Key::KEY_W => rdev::Key::KeyW,
        Key::KEY_X => rdev::Key::KeyX,
        Key::KEY_Y => rdev::Key::KeyY,
        Key::KEY_Z => rdev::Key::KeyZ,
        Key::KEY_1 => rdev::Key::Num1,
        Key::KEY_2 => rdev::Key::Num2,
        Key::KEY_3 => rdev::Key::Num3,
        Key::KEY_4 => rdev::Key::Num4,
        Key::KEY_5 => rdev::Key::Num5,
        Key::KEY_6 => rdev::Key::Num6,
        Key::KEY_7 => rdev::Key::Num7,
        Key::KEY_8 => rdev::Key::Num8,
        Key::KEY_9 => rdev::Key::Num9,
        Key::KEY_0 => rdev::Key::Num0,
        Key::KEY_MINUS => rdev::Key::Minus,
        Key::KEY_EQUAL => rdev::Key::Equal,
        Key::KEY_LEFTBRACE => rdev::Key::LeftBracket,
        Key::KEY_RIGHTBRACE => rdev::Key::RightBracket,
        Key::KEY_SEMICOLON => rdev::Key::SemiColon,
        Key::KEY_APOSTROPHE => rdev::Key::Quote,
        Key::KEY_GRAVE => rdev::Key::BackQuote,
        Key::KEY_BACKSLASH => rdev::Key::BackSlash,
        Key::KEY_102ND => rdev::Key::IntlBackslash,
        Key::KEY_COMMA => rdev::Key::Comma,
        Key::KEY_DOT => rdev::Key::Dot,
        Key::KEY_SLASH => rdev::Key::Slash,
        Key::KEY_KPENTER => rdev::Key::KpReturn,
        Key::KEY_KPMINUS => rdev::Key::KpMinus,
        Key::KEY_KPPLUS => rdev::Key::KpPlus,
        Key::KEY_KPASTERISK => rdev::Key::KpMultiply,
        Key::KEY_KPSLASH => rdev::Key::KpDivide,
        Key::KEY_KPDOT => rdev::Key::KpDelete,
        Key::KEY_KP0 => rdev::Key::Kp0,
        Key::KEY_KP1 => rdev::Key::Kp1,
        Key::KEY_KP2 => rdev::Key::Kp2,
        Key::KEY_KP3 => rdev::Key::Kp3,
        Key::KEY_KP4 => rdev::Key::Kp4,
        Key::KEY_KP5 => rdev::Key::Kp5,
        Key::KEY_KP6 => rdev::Key::Kp6,
        Key::KEY_KP7 => rdev::Key::Kp7,
        Key::KEY_KP8 => rdev::Key::Kp8,
        Key::KEY_KP9 => rdev::Key::Kp9,
        Key::KEY_FN => rdev::Key::Function,
        _ => return None,
    };
    Some(rdev_key)
}

/// Injects key events through the macOS event system.
///
/// Each write is posted immediately; the OS has no batch boundary, so
/// [`KeySink::synchronize`] only waits for the events to settle.
pub struct SimulateSink;

impl SimulateSink {
    pub fn open() -> Result<Self> {
        log::info!("Using rdev event simulation");
        Ok(Self)
    }
}

impl KeySink for SimulateSink {
    fn write(&mut self, key: Key, state: KeyState) -> io::Result<()> {
        let rdev_key = to_rdev_key(key).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::Unsupported,
                format!("{} cannot be simulated on macOS", key),
            )
        })?;
        let event = match state {
            KeyState::Down => EventType::KeyPress(rdev_key),
            KeyState::Up => EventType::KeyRelease(rdev_key),
        };
        simulate(&event).map_err(|e| io::Error::other(format!("{:?}", e)))
    }

    fn synchronize(&mut self) -> io::Result<()> {
        thread::sleep(SETTLE_DELAY);
        Ok(())
    }
}
