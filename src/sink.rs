//! The seam between the sequencer and the OS input-injection device.

use crate::key::Key;
use std::io;

/// Whether a key event presses or releases the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Up = 0,
    Down = 1,
}

impl KeyState {
    /// The value written to the device: 1 for down, 0 for up.
    pub fn value(self) -> i32 {
        self as i32
    }
}

/// A device that accepts synthesized key events.
///
/// Events written with [`KeySink::write`] form a batch that the receiving input
/// layer observes together once [`KeySink::synchronize`] is called.
pub trait KeySink {
    /// Emit one key event.
    fn write(&mut self, key: Key, state: KeyState) -> io::Result<()>;

    /// Flush the current batch of events.
    fn synchronize(&mut self) -> io::Result<()>;
}

#[cfg(test)]
pub(crate) mod testing {
    //! Sink doubles shared by the unit tests.

    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Emitted {
        Write(Key, KeyState),
        Sync,
    }

    /// Records every call and can be told to fail on the n-th write or sync.
    #[derive(Clone, Default)]
    pub struct RecordingSink {
        pub log: Arc<Mutex<Vec<Emitted>>>,
        pub fail_write_at: Option<usize>,
        pub fail_sync_at: Option<usize>,
        writes: usize,
        syncs: usize,
    }

    impl RecordingSink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing_write(n: usize) -> Self {
            Self {
                fail_write_at: Some(n),
                ..Self::default()
            }
        }

        pub fn failing_sync(n: usize) -> Self {
            Self {
                fail_sync_at: Some(n),
                ..Self::default()
            }
        }

        pub fn emitted(&self) -> Vec<Emitted> {
            self.log.lock().clone()
        }

        pub fn writes(&self) -> Vec<(Key, KeyState)> {
            self.emitted()
                .into_iter()
                .filter_map(|e| match e {
                    Emitted::Write(key, state) => Some((key, state)),
                    Emitted::Sync => None,
                })
                .collect()
        }

        pub fn sync_count(&self) -> usize {
            self.emitted()
                .iter()
                .filter(|e| matches!(e, Emitted::Sync))
                .count()
        }
    }

    impl KeySink for RecordingSink {
        fn write(&mut self, key: Key, state: KeyState) -> io::Result<()> {
            let n = self.writes;
            self.writes += 1;
            if self.fail_write_at == Some(n) {
                return Err(io::Error::other("injected write failure"));
            }
            self.log.lock().push(Emitted::Write(key, state));
            Ok(())
        }

        fn synchronize(&mut self) -> io::Result<()> {
            let n = self.syncs;
            self.syncs += 1;
            if self.fail_sync_at == Some(n) {
                return Err(io::Error::other("injected sync failure"));
            }
            self.log.lock().push(Emitted::Sync);
            Ok(())
        }
    }
}
