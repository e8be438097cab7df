//! Bind a macro-deck dial to keyboard hotkeys.
//!
//! This crate implements a dial action for a macro-deck controller: turning the
//! dial clockwise, counterclockwise, or pressing it sends a configurable key
//! combination such as `Ctrl+Alt+Del` to the operating system.
//!
//! # Features
//!
//! - **Forgiving hotkey strings** - `ctrl + alt + del`, `Win+D`, `Shift+F13`
//! - **One validator** - the check behind the configuration field is the same
//!   parse the dial event runs, so what the UI accepts always fires
//! - **No stuck keys** - keys are released in reverse order, and still
//!   released when injecting a press fails
//! - **Native injection** - a uinput virtual keyboard on Linux (works on X11
//!   and Wayland), rdev on macOS
//!
//! # Example
//!
//! ```no_run
//! use dial_hotkey::{DialEvent, DialHotkeyActionBuilder, JsonFileStore};
//!
//! fn main() -> anyhow::Result<()> {
//!     let store = JsonFileStore::new(JsonFileStore::default_path()?);
//!
//!     // Opens the virtual keyboard; without one the action comes up disabled
//!     let mut action = DialHotkeyActionBuilder::new().store(store).build();
//!     action.on_ready()?;
//!
//!     // The user types into the clockwise field
//!     let validation = action.on_hotkey_changed(DialEvent::TurnCw, "Ctrl+Alt+Right");
//!     assert!(validation.valid);
//!
//!     // The dial turns
//!     action.on_event(DialEvent::TurnCw);
//!     Ok(())
//! }
//! ```
//!
//! # Linux Requirements
//!
//! On Linux, the user must have write access to `/dev/uinput`. This typically
//! means running as root or being a member of the `input` group with a udev
//! rule granting that group access to the device.

mod action;
mod bindings;
mod error;
mod event;
mod hotkey;
mod key;
mod sequencer;
mod settings;
mod sink;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

pub use action::{
    ConfigField, DialHotkeyAction, DialHotkeyActionBuilder, ACTION_ID, ACTION_NAME, APP_VERSION,
    GITHUB_REPO, PLUGIN_NAME, PLUGIN_VERSION,
};
pub use bindings::Bindings;
pub use error::{InjectionError, InvalidKeyError, Phase};
pub use event::DialEvent;
pub use hotkey::{parse_hotkey, resolve_key, validate_hotkey, HotkeySpec, Validation};
pub use key::{Key, NAMESPACE};
pub use sequencer::{press_and_release, KeySequencer};
pub use settings::{JsonFileStore, MemoryStore, SettingsStore};
pub use sink::{KeySink, KeyState};

#[cfg(target_os = "linux")]
pub use linux::UinputSink;

#[cfg(target_os = "macos")]
pub use macos::SimulateSink;
