// RepoDash platform specifics for Windows
// Super modifier is the Windows key, rendered as "Win".

use crate::types::binding::PlatformTag;

pub fn platform_tag() -> PlatformTag {
    PlatformTag::Windows
}

pub fn super_key_token() -> &'static str {
    "Win"
}
