//! Linux implementation using a uinput virtual keyboard.

use crate::key::Key;
use crate::sink::{KeySink, KeyState};
use anyhow::{anyhow, Context, Result};
use evdev::uinput::{VirtualDevice, VirtualDeviceBuilder};
use evdev::{AttributeSet, EventType, InputEvent};
use nix::errno::Errno;
use nix::unistd::{access, AccessFlags};
use std::io;

const UINPUT_PATH: &str = "/dev/uinput";
const DEVICE_NAME: &str = "dial-hotkey virtual keyboard";

/// Convert our platform-agnostic Key to evdev Key.
fn to_evdev_key(key: Key) -> evdev::Key {
    evdev::Key::new(key.code())
}

/// Check up front that the uinput device can be opened for writing, so a
/// missing module or group membership gets a useful message.
fn check_uinput_access() -> Result<()> {
    match access(UINPUT_PATH, AccessFlags::W_OK) {
        Ok(()) => Ok(()),
        Err(Errno::ENOENT) => Err(anyhow!(
            "{} does not exist. Load the uinput kernel module (modprobe uinput).",
            UINPUT_PATH
        )),
        Err(Errno::EACCES) | Err(Errno::EPERM) => Err(anyhow!(
            "No write access to {}. Make sure you're in the 'input' group or running as root.",
            UINPUT_PATH
        )),
        Err(e) => Err(anyhow!("Cannot access {}: {}", UINPUT_PATH, e)),
    }
}

/// A virtual keyboard that can type every key in the namespace.
///
/// Writes are buffered; [`KeySink::synchronize`] emits the batch followed by a
/// single `SYN_REPORT`. The device is destroyed when the sink is dropped.
pub struct UinputSink {
    device: VirtualDevice,
    pending: Vec<InputEvent>,
}

impl UinputSink {
    /// Create the virtual keyboard.
    pub fn open() -> Result<Self> {
        check_uinput_access()?;

        let mut keys = AttributeSet::<evdev::Key>::new();
        for key in Key::all() {
            keys.insert(to_evdev_key(key));
        }

        let device = VirtualDeviceBuilder::new()
            .map_err(|e| {
                if e.raw_os_error() == Some(libc::EACCES) {
                    anyhow!("Permission denied opening {}", UINPUT_PATH)
                } else {
                    anyhow!(e)
                }
            })?
            .name(DEVICE_NAME)
            .with_keys(&keys)
            .context("Failed to register keys on the virtual keyboard")?
            .build()
            .context("Failed to create the virtual keyboard")?;

        log::info!("Created {:?}", DEVICE_NAME);
        Ok(Self {
            device,
            pending: Vec::new(),
        })
    }
}

impl KeySink for UinputSink {
    fn write(&mut self, key: Key, state: KeyState) -> io::Result<()> {
        self.pending
            .push(InputEvent::new(EventType::KEY, key.code(), state.value()));
        Ok(())
    }

    fn synchronize(&mut self) -> io::Result<()> {
        let batch = std::mem::take(&mut self.pending);
        log::debug!("Emitting {} key event(s)", batch.len());
        self.device.emit(&batch)
    }
}

impl Drop for UinputSink {
    fn drop(&mut self) {
        if !self.pending.is_empty() {
            log::warn!(
                "Dropping {} unsynchronized key event(s)",
                self.pending.len()
            );
        }
        log::debug!("Destroying {:?}", DEVICE_NAME);
    }
}
