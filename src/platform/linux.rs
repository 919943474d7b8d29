// RepoDash platform specifics for Linux
// Super modifier renders as "Super" (the conventional X11/Wayland name).

use crate::types::binding::PlatformTag;

pub fn platform_tag() -> PlatformTag {
    PlatformTag::Linux
}

pub fn super_key_token() -> &'static str {
    "Super"
}
