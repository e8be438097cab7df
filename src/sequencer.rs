//! Press and release a hotkey through an injection sink.

use crate::error::{InjectionError, Phase};
use crate::hotkey::HotkeySpec;
use crate::key::Key;
use crate::sink::{KeySink, KeyState};
use parking_lot::Mutex;

/// Press every key of `spec` in order, synchronize, release them in reverse
/// order, and synchronize again.
///
/// The first failed emission aborts its phase. Whichever phase fails, every key
/// that may still be held is released by a best-effort recovery pass before the
/// error is returned, so no key is left down.
pub fn press_and_release(
    sink: &mut dyn KeySink,
    spec: &HotkeySpec,
) -> Result<(), InjectionError> {
    if spec.is_empty() {
        return Ok(());
    }

    let keys = spec.keys();

    for (pressed, &key) in keys.iter().enumerate() {
        if let Err(source) = sink.write(key, KeyState::Down) {
            release_held(sink, &keys[..pressed]);
            return Err(InjectionError::Press { key, source });
        }
    }

    if let Err(source) = sink.synchronize() {
        release_held(sink, keys);
        return Err(InjectionError::Sync {
            phase: Phase::Press,
            source,
        });
    }

    for (released, &key) in keys.iter().rev().enumerate() {
        if let Err(source) = sink.write(key, KeyState::Up) {
            release_held(sink, &keys[..keys.len() - released]);
            return Err(InjectionError::Release { key, source });
        }
    }

    // A failed flush may have dropped every up event in the batch.
    if let Err(source) = sink.synchronize() {
        release_held(sink, keys);
        return Err(InjectionError::Sync {
            phase: Phase::Release,
            source,
        });
    }

    Ok(())
}

/// Best-effort release of `held` (in press order) after a failed phase.
/// Keeps going past individual failures.
fn release_held(sink: &mut dyn KeySink, held: &[Key]) {
    if held.is_empty() {
        return;
    }

    log::warn!("Releasing {} key(s) after a failed injection", held.len());
    for &key in held.iter().rev() {
        if let Err(e) = sink.write(key, KeyState::Up) {
            log::error!("Failed to release {} during recovery: {}", key, e);
        }
    }
    if let Err(e) = sink.synchronize() {
        log::error!("Failed to synchronize during recovery: {}", e);
    }
}

/// Owns the injection sink for the lifetime of the component and serializes
/// access to it.
///
/// The sink is released when the sequencer is dropped.
pub struct KeySequencer {
    sink: Mutex<Box<dyn KeySink + Send>>,
}

impl KeySequencer {
    /// Take ownership of an already opened sink.
    pub fn new(sink: Box<dyn KeySink + Send>) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    /// Press and release `spec`. Concurrent callers are run one at a time.
    pub fn trigger(&self, spec: &HotkeySpec) -> Result<(), InjectionError> {
        let mut sink = self.sink.lock();
        press_and_release(&mut **sink, spec)
    }
}
