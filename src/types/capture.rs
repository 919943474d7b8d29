use serde::{Deserialize, Serialize};

/// A raw key-press as delivered by the collaborator's input-event stream.
///
/// `key` is the primary key name as the windowing layer reports it
/// (`"k"`, `"ArrowUp"`, `"Escape"`, ...); the four flags record which
/// modifiers were held at press time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct KeyCaptureEvent {
    pub key: String,
    #[serde(default)]
    pub ctrl_key: bool,
    #[serde(default)]
    pub meta_key: bool,
    #[serde(default)]
    pub alt_key: bool,
    #[serde(default)]
    pub shift_key: bool,
}

impl KeyCaptureEvent {
    /// A press of `key` with no modifiers held.
    pub fn plain(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ..Default::default()
        }
    }

    /// A press of `key` with Ctrl held.
    pub fn ctrl(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ctrl_key: true,
            ..Default::default()
        }
    }
}
