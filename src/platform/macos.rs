// RepoDash platform specifics for macOS
// Super modifier is the Command key, rendered as "Cmd".

use crate::types::binding::PlatformTag;

pub fn platform_tag() -> PlatformTag {
    PlatformTag::MacOS
}

pub fn super_key_token() -> &'static str {
    "Cmd"
}
