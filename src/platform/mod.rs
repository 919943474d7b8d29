// RepoDash platform abstraction
// Provides the current platform tag and the platform-specific "super"
// modifier token for Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use crate::types::binding::PlatformTag;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform tag for the OS this build is running on.
///
/// Unrecognized targets report as Linux, the least surprising default for
/// the desktop distributions RepoDash ships on.
pub fn current_platform() -> PlatformTag {
    #[cfg(target_os = "linux")]
    {
        linux::platform_tag()
    }
    #[cfg(target_os = "macos")]
    {
        macos::platform_tag()
    }
    #[cfg(target_os = "windows")]
    {
        windows::platform_tag()
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        PlatformTag::Linux
    }
}

/// Returns the display token for the "super" modifier on this platform.
///
/// - **macOS**: `Cmd`
/// - **Windows**: `Win`
/// - **Linux**: `Super`
pub fn super_key_token() -> &'static str {
    #[cfg(target_os = "linux")]
    {
        linux::super_key_token()
    }
    #[cfg(target_os = "macos")]
    {
        macos::super_key_token()
    }
    #[cfg(target_os = "windows")]
    {
        windows::super_key_token()
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        "Super"
    }
}

/// Whether a binding tagged with `tag` is active on the current platform.
pub fn binding_applies(tag: PlatformTag) -> bool {
    tag == PlatformTag::All || tag == current_platform()
}
