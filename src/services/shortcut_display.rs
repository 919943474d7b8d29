//! Display rendering of canonical shortcut strings.
//!
//! The dashboard shows shortcuts in menus, tooltips, and the settings
//! editor. On Windows and Linux the canonical `+`-joined form is already the
//! display form; macOS renders modifiers as the conventional symbols with no
//! separator.

use crate::platform;
use crate::types::binding::PlatformTag;

/// Renders a canonical shortcut string for the current platform.
pub fn display_shortcut(canonical: &str) -> String {
    display_shortcut_for(canonical, platform::current_platform())
}

/// Renders a canonical shortcut string for a specific platform.
///
/// Unknown tokens pass through verbatim; an empty canonical string renders
/// empty.
pub fn display_shortcut_for(canonical: &str, platform: PlatformTag) -> String {
    match platform {
        PlatformTag::MacOS => display_macos(canonical),
        _ => canonical.to_string(),
    }
}

/// Canonical modifier order is fixed (Ctrl, super, Alt, Shift), so the
/// prefix can be peeled off token by token. Whatever remains is the primary
/// key, which keeps a literal `+` key intact.
fn display_macos(canonical: &str) -> String {
    let mut symbols = String::new();
    let mut rest = canonical;

    for (token, symbol) in [("Ctrl+", '⌃'), ("Cmd+", '⌘'), ("Alt+", '⌥'), ("Shift+", '⇧')] {
        if let Some(stripped) = rest.strip_prefix(token) {
            symbols.push(symbol);
            rest = stripped;
        }
    }

    symbols.push_str(rest);
    symbols
}
