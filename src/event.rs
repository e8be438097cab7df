//! Events delivered by the dial.

/// The kinds of event a rotary dial produces. Each has its own hotkey slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialEvent {
    /// The dial was turned one step clockwise.
    TurnCw,
    /// The dial was turned one step counterclockwise.
    TurnCcw,
    /// The dial was pressed down.
    Press,
}

impl DialEvent {
    /// All event kinds, in the order their fields are shown.
    pub const ALL: [DialEvent; 3] = [DialEvent::TurnCw, DialEvent::TurnCcw, DialEvent::Press];

    /// The key this event's hotkey is persisted under.
    pub fn settings_key(&self) -> &'static str {
        match self {
            DialEvent::TurnCw => "clockwise_hotkey",
            DialEvent::TurnCcw => "counterclockwise_hotkey",
            DialEvent::Press => "press_hotkey",
        }
    }
}

impl std::fmt::Display for DialEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DialEvent::TurnCw => write!(f, "Clockwise Hotkey"),
            DialEvent::TurnCcw => write!(f, "Counterclockwise Hotkey"),
            DialEvent::Press => write!(f, "Press Hotkey"),
        }
    }
}
