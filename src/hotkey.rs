//! Hotkey strings and their parsed form.
//!
//! A hotkey string is a `+`-separated list of key names such as `Ctrl+Alt+Del`
//! or `Shift + F1`. Names are matched case-insensitively after trimming. The
//! same resolver backs both [`parse_hotkey`] and [`validate_hotkey`], so a
//! string the configuration UI accepts is always one a dial event can trigger.

use crate::error::InvalidKeyError;
use crate::key::Key;

/// Modifier names. Every meta variant maps to the left meta key.
static MODIFIER_KEYS: &[(&str, Key)] = &[
    ("CTRL", Key::KEY_LEFTCTRL),
    ("CONTROL", Key::KEY_LEFTCTRL),
    ("ALT", Key::KEY_LEFTALT),
    ("SHIFT", Key::KEY_LEFTSHIFT),
    ("WIN", Key::KEY_LEFTMETA),
    ("META", Key::KEY_LEFTMETA),
    ("SUPER", Key::KEY_LEFTMETA),
];

static FUNCTION_KEYS: &[(&str, Key)] = &[
    ("F1", Key::KEY_F1),
    ("F2", Key::KEY_F2),
    ("F3", Key::KEY_F3),
    ("F4", Key::KEY_F4),
    ("F5", Key::KEY_F5),
    ("F6", Key::KEY_F6),
    ("F7", Key::KEY_F7),
    ("F8", Key::KEY_F8),
    ("F9", Key::KEY_F9),
    ("F10", Key::KEY_F10),
    ("F11", Key::KEY_F11),
    ("F12", Key::KEY_F12),
    ("F13", Key::KEY_F13),
    ("F14", Key::KEY_F14),
    ("F15", Key::KEY_F15),
    ("F16", Key::KEY_F16),
    ("F17", Key::KEY_F17),
    ("F18", Key::KEY_F18),
    ("F19", Key::KEY_F19),
    ("F20", Key::KEY_F20),
    ("F21", Key::KEY_F21),
    ("F22", Key::KEY_F22),
    ("F23", Key::KEY_F23),
    ("F24", Key::KEY_F24),
];

static SPECIAL_KEYS: &[(&str, Key)] = &[
    ("ENTER", Key::KEY_ENTER),
    ("TAB", Key::KEY_TAB),
    ("ESC", Key::KEY_ESC),
    ("SPACE", Key::KEY_SPACE),
    ("BACKSPACE", Key::KEY_BACKSPACE),
    ("DELETE", Key::KEY_DELETE),
    ("DEL", Key::KEY_DELETE),
    ("HOME", Key::KEY_HOME),
    ("END", Key::KEY_END),
    ("PAGEUP", Key::KEY_PAGEUP),
    ("PAGEDOWN", Key::KEY_PAGEDOWN),
    ("LEFT", Key::KEY_LEFT),
    ("RIGHT", Key::KEY_RIGHT),
    ("UP", Key::KEY_UP),
    ("DOWN", Key::KEY_DOWN),
    ("CAPSLOCK", Key::KEY_CAPSLOCK),
    ("NUMLOCK", Key::KEY_NUMLOCK),
    ("SCROLLLOCK", Key::KEY_SCROLLLOCK),
];

/// `A` through `Z`, in alphabetical order.
static LETTER_KEYS: [Key; 26] = [
    Key::KEY_A,
    Key::KEY_B,
    Key::KEY_C,
    Key::KEY_D,
    Key::KEY_E,
    Key::KEY_F,
    Key::KEY_G,
    Key::KEY_H,
    Key::KEY_I,
    Key::KEY_J,
    Key::KEY_K,
    Key::KEY_L,
    Key::KEY_M,
    Key::KEY_N,
    Key::KEY_O,
    Key::KEY_P,
    Key::KEY_Q,
    Key::KEY_R,
    Key::KEY_S,
    Key::KEY_T,
    Key::KEY_U,
    Key::KEY_V,
    Key::KEY_W,
    Key::KEY_X,
    Key::KEY_Y,
    Key::KEY_Z,
];

/// `0` through `9`, in numeric order.
static DIGIT_KEYS: [Key; 10] = [
    Key::KEY_0,
    Key::KEY_1,
    Key::KEY_2,
    Key::KEY_3,
    Key::KEY_4,
    Key::KEY_5,
    Key::KEY_6,
    Key::KEY_7,
    Key::KEY_8,
    Key::KEY_9,
];

fn lookup(table: &[(&str, Key)], name: &str) -> Option<Key> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|&(_, key)| key)
}

/// Resolve one segment of a hotkey string to a key.
///
/// The segment is trimmed and upper-cased, then tried against the modifier,
/// function-key and special-key tables, then as a single letter or digit,
/// and finally against the full key namespace. Longer digit strings such as
/// `10` name no key and fall through to the namespace, which rejects them.
pub fn resolve_key(segment: &str) -> Option<Key> {
    let name = segment.trim().to_uppercase();

    if let Some(key) = lookup(MODIFIER_KEYS, &name) {
        return Some(key);
    }
    if let Some(key) = lookup(FUNCTION_KEYS, &name) {
        return Some(key);
    }
    if let Some(key) = lookup(SPECIAL_KEYS, &name) {
        return Some(key);
    }

    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_uppercase() {
            return Some(LETTER_KEYS[usize::from(c as u8 - b'A')]);
        }
        if c.is_ascii_digit() {
            return Some(DIGIT_KEYS[usize::from(c as u8 - b'0')]);
        }
        // Letters outside A-Z have no key of their own.
        if c.is_alphabetic() {
            return None;
        }
    }

    Key::from_name(&name)
}

/// An ordered key combination. Keys are pressed in order and released in
/// reverse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HotkeySpec {
    keys: Vec<Key>,
}

impl HotkeySpec {
    /// The keys in press order.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// An empty spec means nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }
}

/// Renders the canonical form, e.g. `LEFTCTRL+LEFTALT+DELETE`, which parses
/// back to the same spec.
impl std::fmt::Display for HotkeySpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.keys.iter().map(|k| k.name()).collect();
        write!(f, "{}", names.join("+"))
    }
}

/// Parse a hotkey string like "Ctrl+Alt+Del" into a [`HotkeySpec`].
///
/// Empty or whitespace-only input yields an empty spec. Any unknown segment
/// rejects the whole string.
pub fn parse_hotkey(s: &str) -> Result<HotkeySpec, InvalidKeyError> {
    if s.trim().is_empty() {
        return Ok(HotkeySpec::default());
    }

    let keys = s
        .split('+')
        .map(|segment| {
            resolve_key(segment).ok_or_else(|| InvalidKeyError {
                segment: segment.trim().to_string(),
                hotkey: s.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HotkeySpec { keys })
}

/// Outcome of checking a hotkey string, for live feedback in the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    /// Human-readable reason when the string is invalid.
    pub reason: Option<String>,
}

impl Validation {
    fn ok() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    fn invalid(err: &InvalidKeyError) -> Self {
        Self {
            valid: false,
            reason: Some(format!("Invalid hotkey format: {}", err)),
        }
    }
}

/// Check whether a hotkey string would parse.
pub fn validate_hotkey(s: &str) -> Validation {
    match parse_hotkey(s) {
        Ok(_) => Validation::ok(),
        Err(e) => Validation::invalid(&e),
    }
}
