//! The dial action as the host application sees it.
//!
//! [`DialHotkeyAction`] glues the parser and sequencer to the host's
//! configuration fields, settings store and dial events. It holds no UI
//! widgets; the host renders [`ConfigField`]s and reports edits back.

use crate::bindings::Bindings;
use crate::event::DialEvent;
use crate::hotkey::{validate_hotkey, Validation};
use crate::sequencer::KeySequencer;
use crate::settings::{MemoryStore, SettingsStore};
use crate::sink::KeySink;
use anyhow::{Context, Result};

/// Identifier the action is registered under with the host.
pub const ACTION_ID: &str = "com_falcon_DialHotkey::DialHotkeyAction";
/// Display name of the action.
pub const ACTION_NAME: &str = "Dial Hotkey Action";
/// Display name of the plugin providing the action.
pub const PLUGIN_NAME: &str = "Dial Hotkey";
/// Where the plugin's source lives, shown by the host's plugin store.
pub const GITHUB_REPO: &str = "https://github.com/Steakbouncer/DialHotkey";
/// Version reported to the host.
pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Host application version the plugin was built against.
pub const APP_VERSION: &str = "1.1.1-alpha";

/// One hotkey entry field in the action's configuration page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigField {
    pub event: DialEvent,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub placeholder: &'static str,
    pub tooltip: &'static str,
    /// The currently bound hotkey string.
    pub text: String,
    pub validation: Validation,
}

const FIELD_TOOLTIP: &str = "Type the hotkey combination using '+' to separate keys.";

fn field_labels(event: DialEvent) -> (&'static str, &'static str, &'static str) {
    match event {
        DialEvent::TurnCw => (
            "Clockwise Hotkey",
            "Hotkey for clockwise turn",
            "E.g., Ctrl+Alt+Del",
        ),
        DialEvent::TurnCcw => (
            "Counterclockwise Hotkey",
            "Hotkey for counterclockwise turn",
            "E.g., Shift+F1",
        ),
        DialEvent::Press => ("Press Hotkey", "Hotkey for dial press", "E.g., Ctrl+Shift+S"),
    }
}

#[cfg(target_os = "linux")]
fn open_platform_sink() -> Result<Box<dyn KeySink + Send>> {
    Ok(Box::new(crate::linux::UinputSink::open()?))
}

#[cfg(target_os = "macos")]
fn open_platform_sink() -> Result<Box<dyn KeySink + Send>> {
    Ok(Box::new(crate::macos::SimulateSink::open()?))
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
fn open_platform_sink() -> Result<Box<dyn KeySink + Send>> {
    anyhow::bail!("Key injection is not supported on this platform")
}

type SinkOpener = Box<dyn FnOnce() -> Result<Box<dyn KeySink + Send>>>;

/// Builder for creating a dial hotkey action.
#[derive(Default)]
pub struct DialHotkeyActionBuilder {
    store: Option<Box<dyn SettingsStore>>,
    open_sink: Option<SinkOpener>,
}

impl DialHotkeyActionBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `store` for persisting bindings. Defaults to an in-memory store.
    pub fn store(mut self, store: impl SettingsStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Inject key events into `sink` instead of the platform device.
    pub fn sink(self, sink: Box<dyn KeySink + Send>) -> Self {
        self.open_sink_with(move || Ok(sink))
    }

    /// Open the injection device with `open` instead of the platform default.
    /// It is called once, when the action is built.
    pub fn open_sink_with(
        mut self,
        open: impl FnOnce() -> Result<Box<dyn KeySink + Send>> + 'static,
    ) -> Self {
        self.open_sink = Some(Box::new(open));
        self
    }

    fn into_parts(self) -> (Box<dyn SettingsStore>, Result<Box<dyn KeySink + Send>>) {
        let sink = match self.open_sink {
            Some(open) => open(),
            None => open_platform_sink(),
        };
        let store = self
            .store
            .unwrap_or_else(|| Box::new(MemoryStore::default()));
        (store, sink)
    }

    /// Build the action, failing if the injection device can't be opened.
    pub fn try_build(self) -> Result<DialHotkeyAction> {
        let (store, sink) = self.into_parts();
        let sink = sink.context("Failed to open the key injection device")?;
        Ok(DialHotkeyAction {
            bindings: Bindings::default(),
            sequencer: Some(KeySequencer::new(sink)),
            store,
        })
    }

    /// Build the action. If the injection device can't be opened the error is
    /// logged and the action comes up disabled: it can still be configured,
    /// but dial events do nothing.
    pub fn build(self) -> DialHotkeyAction {
        let (store, sink) = self.into_parts();
        let sequencer = match sink {
            Ok(sink) => Some(KeySequencer::new(sink)),
            Err(e) => {
                log::error!("Dial hotkeys disabled, no key injection device: {:#}", e);
                None
            }
        };
        DialHotkeyAction {
            bindings: Bindings::default(),
            sequencer,
            store,
        }
    }
}

/// Binds dial turns and presses to hotkeys.
pub struct DialHotkeyAction {
    bindings: Bindings,
    sequencer: Option<KeySequencer>,
    store: Box<dyn SettingsStore>,
}

impl DialHotkeyAction {
    /// Whether an injection device is available.
    pub fn is_enabled(&self) -> bool {
        self.sequencer.is_some()
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Load the persisted bindings. Called once when the host is ready.
    pub fn on_ready(&mut self) -> Result<()> {
        let settings = self.store.load().context("Failed to load hotkey settings")?;
        self.bindings = Bindings::from_settings(&settings);
        log::info!(
            "Loaded hotkey settings: clockwise={}, counterclockwise={}, press={}",
            self.bindings.raw(DialEvent::TurnCw),
            self.bindings.raw(DialEvent::TurnCcw),
            self.bindings.raw(DialEvent::Press)
        );
        Ok(())
    }

    /// The configuration fields, clockwise first, then counterclockwise,
    /// then press.
    pub fn config_fields(&self) -> Vec<ConfigField> {
        DialEvent::ALL
            .into_iter()
            .map(|event| {
                let (title, subtitle, placeholder) = field_labels(event);
                let text = self.bindings.raw(event).to_string();
                ConfigField {
                    event,
                    title,
                    subtitle,
                    placeholder,
                    tooltip: FIELD_TOOLTIP,
                    validation: validate_hotkey(&text),
                    text,
                }
            })
            .collect()
    }

    /// Handle an edit to one of the hotkey fields.
    ///
    /// Valid text is bound and persisted right away. Invalid text is not
    /// stored; the returned [`Validation`] says why so the host can show a
    /// warning.
    pub fn on_hotkey_changed(&mut self, event: DialEvent, text: &str) -> Validation {
        let validation = validate_hotkey(text);
        if !validation.valid {
            return validation;
        }

        self.bindings.set(event, text);
        if let Err(e) = self.persist() {
            log::error!("Failed to save {}: {:#}", event, e);
        } else {
            log::info!("Updated {} to: {}", event, text);
        }
        validation
    }

    fn persist(&mut self) -> Result<()> {
        let mut settings = self.store.load().unwrap_or_else(|e| {
            log::warn!("Could not reload settings before saving: {:#}", e);
            Default::default()
        });
        self.bindings.write_settings(&mut settings);
        self.store.save(&settings)
    }

    /// Handle a dial event by triggering its bound hotkey, if any.
    ///
    /// Never fails: unparseable bindings and injection errors are logged.
    pub fn on_event(&self, event: DialEvent) {
        let raw = self.bindings.raw(event);
        if raw.trim().is_empty() {
            return;
        }

        let spec = match self.bindings.spec(event) {
            Ok(spec) => spec,
            Err(e) => {
                log::warn!("Ignoring {}: {}", event, e);
                return;
            }
        };

        let Some(sequencer) = &self.sequencer else {
            log::warn!("Not triggering {}: key injection is disabled", raw);
            return;
        };

        log::info!("Triggering hotkey: {}", raw);
        match sequencer.trigger(&spec) {
            Ok(()) => log::info!("Successfully triggered hotkey: {}", raw),
            Err(e) => log::error!("Failed to trigger hotkey {}: {}", raw, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Key;
    use crate::settings::JsonFileStore;
    use crate::sink::testing::{Emitted, RecordingSink};
    use crate::sink::KeyState;
    use parking_lot::Mutex;
    use serde_json::{json, Map, Value};
    use std::sync::Arc;

    /// A store whose contents the test can still see after handing it over.
    #[derive(Clone, Default)]
    struct SharedStore(Arc<Mutex<Map<String, Value>>>);

    impl SettingsStore for SharedStore {
        fn load(&self) -> Result<Map<String, Value>> {
            Ok(self.0.lock().clone())
        }

        fn save(&mut self, settings: &Map<String, Value>) -> Result<()> {
            *self.0.lock() = settings.clone();
            Ok(())
        }
    }

    fn action_with(store: SharedStore) -> (DialHotkeyAction, RecordingSink) {
        let sink = RecordingSink::new();
        let action = DialHotkeyActionBuilder::new()
            .store(store)
            .sink(Box::new(sink.clone()))
            .build();
        (action, sink)
    }

    #[test]
    fn test_on_ready_loads_bindings() {
        let store = SharedStore::default();
        store.0.lock().insert("clockwise_hotkey".into(), json!("Ctrl+Alt+Right"));
        let (mut action, _) = action_with(store);

        action.on_ready().unwrap();
        assert_eq!(action.bindings().raw(DialEvent::TurnCw), "Ctrl+Alt+Right");
        assert_eq!(action.bindings().raw(DialEvent::Press), "");
    }

    #[test]
    fn test_on_ready_reports_unreadable_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{").unwrap();
        let mut action = DialHotkeyActionBuilder::new()
            .store(JsonFileStore::new(&path))
            .sink(Box::new(RecordingSink::new()))
            .build();
        assert!(action.on_ready().is_err());
    }

    #[test]
    fn test_valid_edit_is_persisted() {
        let store = SharedStore::default();
        store.0.lock().insert("unrelated".into(), json!(1));
        let (mut action, _) = action_with(store.clone());
        action.on_ready().unwrap();

        let validation = action.on_hotkey_changed(DialEvent::Press, "Ctrl+Shift+S");
        assert!(validation.valid);
        assert_eq!(action.bindings().raw(DialEvent::Press), "Ctrl+Shift+S");

        let saved = store.0.lock().clone();
        assert_eq!(saved["press_hotkey"], json!("Ctrl+Shift+S"));
        assert_eq!(saved["unrelated"], json!(1));
    }

    #[test]
    fn test_invalid_edit_is_not_persisted() {
        let store = SharedStore::default();
        let (mut action, _) = action_with(store.clone());
        action.on_hotkey_changed(DialEvent::Press, "Ctrl+S");

        let validation = action.on_hotkey_changed(DialEvent::Press, "Ctrl+Foo");
        assert!(!validation.valid);
        assert!(validation.reason.unwrap().contains("Foo"));
        assert_eq!(action.bindings().raw(DialEvent::Press), "Ctrl+S");
        assert_eq!(store.0.lock()["press_hotkey"], json!("Ctrl+S"));
    }

    #[test]
    fn test_clearing_a_field_unbinds_it() {
        let (mut action, sink) = action_with(SharedStore::default());
        action.on_hotkey_changed(DialEvent::TurnCcw, "Shift+F1");
        assert!(action.on_hotkey_changed(DialEvent::TurnCcw, "").valid);

        action.on_event(DialEvent::TurnCcw);
        assert!(sink.emitted().is_empty());
    }

    #[test]
    fn test_on_event_triggers_bound_hotkey() {
        let (mut action, sink) = action_with(SharedStore::default());
        action.on_hotkey_changed(DialEvent::TurnCcw, "Shift+F1");

        action.on_event(DialEvent::TurnCcw);
        assert_eq!(
            sink.emitted(),
            vec![
                Emitted::Write(Key::KEY_LEFTSHIFT, KeyState::Down),
                Emitted::Write(Key::KEY_F1, KeyState::Down),
                Emitted::Sync,
                Emitted::Write(Key::KEY_F1, KeyState::Up),
                Emitted::Write(Key::KEY_LEFTSHIFT, KeyState::Up),
                Emitted::Sync,
            ]
        );
    }

    #[test]
    fn test_on_event_routes_by_kind() {
        let (mut action, sink) = action_with(SharedStore::default());
        action.on_hotkey_changed(DialEvent::TurnCw, "Right");
        action.on_hotkey_changed(DialEvent::TurnCcw, "Left");
        action.on_hotkey_changed(DialEvent::Press, "Enter");

        action.on_event(DialEvent::Press);
        action.on_event(DialEvent::TurnCw);
        let downs: Vec<Key> = sink
            .writes()
            .into_iter()
            .filter(|(_, s)| *s == KeyState::Down)
            .map(|(k, _)| k)
            .collect();
        assert_eq!(downs, vec![Key::KEY_ENTER, Key::KEY_RIGHT]);
    }

    #[test]
    fn test_on_event_ignores_unparseable_binding() {
        let store = SharedStore::default();
        store.0.lock().insert("press_hotkey".into(), json!("Ctrl+Hyper"));
        let (mut action, sink) = action_with(store);
        action.on_ready().unwrap();

        action.on_event(DialEvent::Press);
        assert!(sink.emitted().is_empty());
    }

    #[test]
    fn test_on_event_survives_injection_failure() {
        let sink = RecordingSink::failing_write(1);
        let mut action = DialHotkeyActionBuilder::new()
            .sink(Box::new(sink.clone()))
            .build();
        action.on_hotkey_changed(DialEvent::Press, "Ctrl+Alt+Del");

        action.on_event(DialEvent::Press);
        assert_eq!(
            sink.emitted(),
            vec![
                Emitted::Write(Key::KEY_LEFTCTRL, KeyState::Down),
                Emitted::Write(Key::KEY_LEFTCTRL, KeyState::Up),
                Emitted::Sync,
            ]
        );
    }

    #[test]
    fn test_failed_sink_open_builds_disabled_action() {
        let store = SharedStore::default();
        let mut action = DialHotkeyActionBuilder::new()
            .store(store.clone())
            .open_sink_with(|| anyhow::bail!("permission denied"))
            .build();
        assert!(!action.is_enabled());

        assert!(action.on_hotkey_changed(DialEvent::Press, "Ctrl+C").valid);
        assert_eq!(store.0.lock()["press_hotkey"], json!("Ctrl+C"));
        action.on_event(DialEvent::Press);
    }

    #[test]
    fn test_try_build_reports_failed_sink_open() {
        let err = DialHotkeyActionBuilder::new()
            .open_sink_with(|| anyhow::bail!("permission denied"))
            .try_build()
            .err()
            .unwrap();
        assert!(format!("{:#}", err).contains("permission denied"));
    }

    #[test]
    fn test_sink_opener_is_used() {
        let sink = RecordingSink::new();
        let opened = sink.clone();
        let mut action = DialHotkeyActionBuilder::new()
            .open_sink_with(move || Ok(Box::new(opened) as Box<dyn KeySink + Send>))
            .build();
        assert!(action.is_enabled());

        action.on_hotkey_changed(DialEvent::TurnCw, "Win+D");
        action.on_event(DialEvent::TurnCw);
        assert_eq!(sink.writes().len(), 4);
    }

    #[test]
    fn test_plugin_metadata() {
        assert!(ACTION_ID.starts_with("com_falcon_DialHotkey::"));
        assert_eq!(PLUGIN_VERSION, "1.0.0");
        assert_eq!(APP_VERSION, "1.1.1-alpha");
        assert!(GITHUB_REPO.ends_with("/DialHotkey"));
    }

    #[test]
    fn test_config_fields() {
        let (mut action, _) = action_with(SharedStore::default());
        action.on_hotkey_changed(DialEvent::Press, "Ctrl+Shift+S");

        let fields = action.config_fields();
        let titles: Vec<&str> = fields.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            vec!["Clockwise Hotkey", "Counterclockwise Hotkey", "Press Hotkey"]
        );
        assert_eq!(fields[2].text, "Ctrl+Shift+S");
        assert_eq!(fields[0].placeholder, "E.g., Ctrl+Alt+Del");
        assert!(fields.iter().all(|f| f.validation.valid));
    }
}
