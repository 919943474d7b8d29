use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::binding::ShortcutBinding;

/// Current schema version written by this build of the engine.
pub const SETTINGS_SCHEMA_VERSION: u32 = 1;

/// The persisted keyboard-shortcut settings aggregate.
///
/// This is the only shape the engine exchanges with the collaborator's
/// load/save facility. Keys of `bindings` are action ids; entries for action
/// ids the current registry does not know are preserved verbatim so that
/// downgrades never destroy customizations.
///
/// `last_updated` is an ISO-8601 timestamp stamped by the collaborator on
/// save; the engine itself never reads a clock and carries the field through
/// merges unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KeyboardShortcutSettings {
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub bindings: HashMap<String, Vec<ShortcutBinding>>,
}

impl KeyboardShortcutSettings {
    /// An empty settings value at the current schema version. Callers that
    /// want the full default catalog go through the default provider
    /// instead.
    pub fn empty() -> Self {
        Self {
            version: SETTINGS_SCHEMA_VERSION,
            last_updated: None,
            bindings: HashMap::new(),
        }
    }

    /// The bindings recorded for one action, if any.
    pub fn bindings_for(&self, action_id: &str) -> Option<&[ShortcutBinding]> {
        self.bindings.get(action_id).map(|list| list.as_slice())
    }
}

impl Default for KeyboardShortcutSettings {
    fn default() -> Self {
        Self::empty()
    }
}
