use serde::{Deserialize, Serialize};

/// Whether a binding applies only while the application has focus or
/// system-wide.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    #[default]
    App,
    Global,
}

impl Scope {
    /// The lowercase tag used on the wire and inside binding ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::App => "app",
            Scope::Global => "global",
        }
    }
}

/// Which operating system a binding is restricted to. `All` matches every
/// platform.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlatformTag {
    #[default]
    All,
    MacOS,
    Windows,
    Linux,
}

impl PlatformTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformTag::All => "all",
            PlatformTag::MacOS => "macos",
            PlatformTag::Windows => "windows",
            PlatformTag::Linux => "linux",
        }
    }
}

/// One concrete shortcut assignment for an action.
///
/// `shortcut` holds the canonical string produced by the capture normalizer
/// and may be empty while a freshly added binding is waiting for its first
/// capture. All fields except `id` and `scope` default during
/// deserialization so that blobs saved by older versions deserialize without
/// failing; the merge engine repairs whatever is missing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutBinding {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub scope: Scope,
    #[serde(default)]
    pub shortcut: String,
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub platform: PlatformTag,
    #[serde(default)]
    pub is_default: bool,
}

impl ShortcutBinding {
    /// The deterministic id for a binding derived from its action, scope,
    /// and position. Re-deriving for the same inputs always yields the same
    /// id, which keeps default resets idempotent.
    pub fn deterministic_id(action_id: &str, scope: Scope, ordinal: usize) -> String {
        format!("{}-{}-{}", action_id, scope.as_str(), ordinal)
    }
}
