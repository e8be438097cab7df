//! Which hotkey string is bound to which dial event.

use crate::error::InvalidKeyError;
use crate::event::DialEvent;
use crate::hotkey::{parse_hotkey, HotkeySpec};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// The persisted form of the bindings, keyed the way the host stores them.
///
/// Missing keys, and values that aren't strings, default to no binding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bindings {
    #[serde(deserialize_with = "lenient_string")]
    clockwise_hotkey: String,
    #[serde(deserialize_with = "lenient_string")]
    counterclockwise_hotkey: String,
    #[serde(deserialize_with = "lenient_string")]
    press_hotkey: String,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().unwrap_or_default().to_string())
}

impl Bindings {
    /// Read the bindings out of a host settings map.
    pub fn from_settings(settings: &Map<String, Value>) -> Self {
        serde_json::from_value(Value::Object(settings.clone())).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed hotkey settings: {}", e);
            Self::default()
        })
    }

    /// Write the bindings into a host settings map, leaving other keys alone.
    pub fn write_settings(&self, settings: &mut Map<String, Value>) {
        // Three string fields always serialize to an object.
        if let Ok(Value::Object(fields)) = serde_json::to_value(self) {
            settings.extend(fields);
        }
    }

    /// The hotkey string bound to `event`, as the user typed it.
    pub fn raw(&self, event: DialEvent) -> &str {
        match event {
            DialEvent::TurnCw => &self.clockwise_hotkey,
            DialEvent::TurnCcw => &self.counterclockwise_hotkey,
            DialEvent::Press => &self.press_hotkey,
        }
    }

    pub fn set(&mut self, event: DialEvent, raw: &str) {
        let slot = match event {
            DialEvent::TurnCw => &mut self.clockwise_hotkey,
            DialEvent::TurnCcw => &mut self.counterclockwise_hotkey,
            DialEvent::Press => &mut self.press_hotkey,
        };
        *slot = raw.to_string();
    }

    /// Parse the hotkey bound to `event`. Parsed fresh on every call.
    pub fn spec(&self, event: DialEvent) -> Result<HotkeySpec, InvalidKeyError> {
        parse_hotkey(self.raw(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Key;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_from_settings_defaults_missing_keys() {
        let settings = map(json!({ "press_hotkey": "Ctrl+S", "clockwise_hotkey": 5 }));
        let bindings = Bindings::from_settings(&settings);
        assert_eq!(bindings.raw(DialEvent::Press), "Ctrl+S");
        assert_eq!(bindings.raw(DialEvent::TurnCw), "");
        assert_eq!(bindings.raw(DialEvent::TurnCcw), "");
    }

    #[test]
    fn test_non_string_values_read_as_unbound() {
        let settings = map(json!({
            "clockwise_hotkey": null,
            "counterclockwise_hotkey": ["Shift", "F1"],
            "press_hotkey": { "keys": "Ctrl+S" },
        }));
        assert_eq!(Bindings::from_settings(&settings), Bindings::default());

        let bindings: Bindings =
            serde_json::from_str(r#"{"press_hotkey":true,"clockwise_hotkey":"Right"}"#).unwrap();
        assert_eq!(bindings.raw(DialEvent::Press), "");
        assert_eq!(bindings.raw(DialEvent::TurnCw), "Right");
    }

    #[test]
    fn test_write_settings_preserves_other_keys() {
        let mut settings = map(json!({ "other": true }));
        let mut bindings = Bindings::default();
        bindings.set(DialEvent::TurnCcw, "Shift+F1");
        bindings.write_settings(&mut settings);

        assert_eq!(settings["other"], json!(true));
        assert_eq!(settings["counterclockwise_hotkey"], json!("Shift+F1"));
        assert_eq!(settings["clockwise_hotkey"], json!(""));
        assert_eq!(Bindings::from_settings(&settings), bindings);
    }

    #[test]
    fn test_spec_is_parsed_from_raw() {
        let mut bindings = Bindings::default();
        bindings.set(DialEvent::TurnCw, "Win+D");
        assert_eq!(
            bindings.spec(DialEvent::TurnCw).unwrap().keys(),
            &[Key::KEY_LEFTMETA, Key::KEY_D]
        );
        assert!(bindings.spec(DialEvent::Press).unwrap().is_empty());
    }

    #[test]
    fn test_unparseable_raw_is_an_error_not_a_panic() {
        let settings = map(json!({ "press_hotkey": "Ctrl+Hyper" }));
        let bindings = Bindings::from_settings(&settings);
        assert!(bindings.spec(DialEvent::Press).is_err());
    }

    #[test]
    fn test_serde_field_names() {
        let bindings: Bindings = serde_json::from_str(r#"{"press_hotkey":"A"}"#).unwrap();
        assert_eq!(bindings.raw(DialEvent::Press), "A");
        let value = serde_json::to_value(&bindings).unwrap();
        assert_eq!(value["clockwise_hotkey"], json!(""));
    }
}
