//! Key-name mapping for simulated keystrokes.

/// Windows virtual-key code handed to the OS input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCode(pub u16);

impl KeyCode {
    pub const ENTER: KeyCode = KeyCode(0x0d);
    pub const ESCAPE: KeyCode = KeyCode(0x1b);
    pub const TAB: KeyCode = KeyCode(0x09);
    pub const RIGHT_ARROW: KeyCode = KeyCode(0x27);
    pub const UP_ARROW: KeyCode = KeyCode(0x26);
}

/// Maps a spoken key name to its virtual-key code.
///
/// The name set is closed; anything outside it yields `None` and the
/// dispatcher stays silent. The simulation side effect lives behind
/// the host seam so this table stays pure.
pub fn key_code(name: &str) -> Option<KeyCode> {
    match name.to_lowercase().as_str() {
        "enter" => Some(KeyCode::ENTER),
        "escape" => Some(KeyCode::ESCAPE),
        "tab" => Some(KeyCode::TAB),
        "right" | "right arrow" => Some(KeyCode::RIGHT_ARROW),
        "up" | "up arrow" => Some(KeyCode::UP_ARROW),
        _ => None,
    }
}
