//! Capture Normalizer for the RepoDash shortcut engine.
//!
//! Converts a raw key-press event into the canonical shortcut string used as
//! the identity for equality and conflict comparison, or rejects it. Two
//! captures of the same physical combination always normalize to the same
//! string regardless of the order the keys were pressed in.

use crate::platform;
use crate::types::capture::KeyCaptureEvent;

/// Token separator in canonical shortcut strings.
pub const SHORTCUT_SEPARATOR: &str = "+";

/// Normalizes a raw key-press into a canonical shortcut string.
///
/// Returns `None` for the two non-bindable cases: the reserved cancel key
/// (Escape), and a chord with no non-modifier primary key. Both are normal
/// outcomes, not faults; the editor session treats them as "abort capture".
///
/// Modifier tokens always appear in the fixed order Ctrl, super, Alt, Shift,
/// with the super modifier rendered as the platform token (Cmd / Win /
/// Super).
pub fn normalize_capture(event: &KeyCaptureEvent) -> Option<String> {
    if is_cancel_key(&event.key) {
        return None;
    }

    // A modifier pressed as the primary key is already represented by the
    // flags; without a real primary key the chord is not bindable.
    let primary = normalize_key_name(&event.key)?;

    let mut tokens: Vec<String> = Vec::new();
    if event.ctrl_key {
        tokens.push("Ctrl".to_string());
    }
    if event.meta_key {
        tokens.push(platform::super_key_token().to_string());
    }
    if event.alt_key {
        tokens.push("Alt".to_string());
    }
    if event.shift_key {
        tokens.push("Shift".to_string());
    }
    tokens.push(primary);

    Some(tokens.join(SHORTCUT_SEPARATOR))
}

/// Whether `key` is the reserved capture-cancel key.
pub fn is_cancel_key(key: &str) -> bool {
    let lower = key.trim().to_lowercase();
    lower == "escape" || lower == "esc"
}

/// Normalizes a primary key name into the canonical display vocabulary.
///
/// Returns `None` when the name is empty or names a modifier key. Single
/// printable characters upper-case; named keys map to a fixed vocabulary;
/// anything else is title-cased so differently-cased reports of the same
/// key compare equal.
pub fn normalize_key_name(raw: &str) -> Option<String> {
    // The space bar reports as a literal space on most toolkits; catch it
    // before trimming eats it.
    if raw == " " {
        return Some("Space".to_string());
    }

    let lower = raw.trim().to_lowercase();
    if lower.is_empty() || is_modifier_name(&lower) {
        return None;
    }

    let named = match lower.as_str() {
        "space" | "spacebar" => Some("Space"),
        "enter" | "return" => Some("Enter"),
        "tab" => Some("Tab"),
        "backspace" | "back" => Some("Backspace"),
        "delete" | "del" => Some("Delete"),
        "arrowup" | "uparrow" | "up" => Some("Up"),
        "arrowdown" | "downarrow" | "down" => Some("Down"),
        "arrowleft" | "leftarrow" | "left" => Some("Left"),
        "arrowright" | "rightarrow" | "right" => Some("Right"),
        "home" => Some("Home"),
        "end" => Some("End"),
        "pageup" | "pgup" => Some("PageUp"),
        "pagedown" | "pgdn" | "pgdown" => Some("PageDown"),
        _ => None,
    };
    if let Some(name) = named {
        return Some(name.to_string());
    }

    if let Some(function_key) = normalize_function_key(&lower) {
        return Some(function_key);
    }

    if lower.chars().count() == 1 {
        return Some(lower.to_uppercase());
    }

    // Title-case everything else ("contextmenu" and "ContextMenu" must
    // compare equal).
    let mut chars = lower.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}

fn is_modifier_name(lower: &str) -> bool {
    matches!(
        lower,
        "control"
            | "ctrl"
            | "meta"
            | "super"
            | "cmd"
            | "command"
            | "win"
            | "os"
            | "alt"
            | "option"
            | "altgraph"
            | "shift"
    )
}

/// `"f1"`..`"f24"` normalize to `"F1"`..`"F24"`.
fn normalize_function_key(lower: &str) -> Option<String> {
    let digits = lower.strip_prefix('f')?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let number: u32 = digits.parse().ok()?;
    if (1..=24).contains(&number) {
        Some(format!("F{}", number))
    } else {
        None
    }
}
