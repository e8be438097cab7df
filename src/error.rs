//! Error types for parsing and injecting hotkeys.

use crate::key::Key;
use std::fmt;
use std::io;
use thiserror::Error;

/// A hotkey string contained a segment that names no known key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown key '{segment}' in hotkey '{hotkey}'")]
pub struct InvalidKeyError {
    /// The offending segment, trimmed but otherwise as typed.
    pub segment: String,
    /// The full hotkey string the segment came from.
    pub hotkey: String,
}

/// Which half of a trigger an injection error happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Press,
    Release,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Press => write!(f, "press"),
            Phase::Release => write!(f, "release"),
        }
    }
}

/// The injection sink rejected an event or a flush.
#[derive(Debug, Error)]
pub enum InjectionError {
    #[error("Failed to press {key}: {source}")]
    Press {
        key: Key,
        #[source]
        source: io::Error,
    },
    #[error("Failed to release {key}: {source}")]
    Release {
        key: Key,
        #[source]
        source: io::Error,
    },
    #[error("Failed to synchronize after {phase} phase: {source}")]
    Sync {
        phase: Phase,
        #[source]
        source: io::Error,
    },
}

impl InjectionError {
    /// The phase the failure happened in.
    pub fn phase(&self) -> Phase {
        match self {
            InjectionError::Press { .. } => Phase::Press,
            InjectionError::Release { .. } => Phase::Release,
            InjectionError::Sync { phase, .. } => *phase,
        }
    }
}
