//! Conflict Detector for the RepoDash shortcut engine.
//!
//! Scans a settings snapshot and reports every group of bindings sharing the
//! same identity key `(scope, context, platform, canonical shortcut)`. The
//! detector is stateless and cheap enough to re-run after every edit.

use std::collections::HashMap;

use crate::managers::action_registry::{ActionRegistry, ActionRegistryTrait};
use crate::types::binding::{PlatformTag, Scope, ShortcutBinding};
use crate::types::settings::KeyboardShortcutSettings;

/// One other member of a conflict group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictPeer {
    pub action_id: String,
    pub action_label: String,
    pub binding_id: String,
}

/// One member of a conflict group, with every other member it collides with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutConflict {
    pub action_id: String,
    pub action_label: String,
    pub binding_id: String,
    pub scope: Scope,
    pub context: String,
    pub platform: PlatformTag,
    pub shortcut: String,
    pub conflicts_with: Vec<ConflictPeer>,
}

/// The full conflict report for one settings snapshot.
#[derive(Debug, Clone, Default)]
pub struct ConflictReport {
    /// Every conflicting binding, sorted by shortcut, action id, binding id.
    pub conflicts: Vec<ShortcutConflict>,
    /// Conflicts indexed by binding id.
    pub conflict_lookup: HashMap<String, Vec<ShortcutConflict>>,
    /// Number of distinct identity-key groups with more than one member.
    pub group_count: usize,
}

impl ConflictReport {
    pub fn has_conflicts(&self) -> bool {
        self.group_count > 0
    }

    /// The conflicts a given binding participates in, if any.
    pub fn conflicts_for(&self, binding_id: &str) -> &[ShortcutConflict] {
        self.conflict_lookup
            .get(binding_id)
            .map(|conflicts| conflicts.as_slice())
            .unwrap_or(&[])
    }
}

/// Trait defining conflict detection over a settings snapshot.
pub trait ConflictDetectorTrait {
    fn detect_conflicts(&self, settings: &KeyboardShortcutSettings) -> ConflictReport;
}

/// Detects colliding bindings. Holds no state between calls; the registry is
/// only consulted for display labels.
pub struct ConflictDetector<'a> {
    registry: &'a ActionRegistry,
}

impl<'a> ConflictDetector<'a> {
    pub fn new(registry: &'a ActionRegistry) -> Self {
        Self { registry }
    }

    fn label_for(&self, action_id: &str) -> String {
        self.registry
            .find_action(action_id)
            .map(|action| action.label.clone())
            .unwrap_or_else(|| action_id.to_string())
    }
}

type IdentityKey = (Scope, String, PlatformTag, String);

impl ConflictDetectorTrait for ConflictDetector<'_> {
    fn detect_conflicts(&self, settings: &KeyboardShortcutSettings) -> ConflictReport {
        // Bucket every assigned binding by identity key. Empty shortcuts are
        // mid-capture or never-assigned and cannot conflict.
        let mut buckets: HashMap<IdentityKey, Vec<(&str, &ShortcutBinding)>> = HashMap::new();
        for (action_id, bindings) in &settings.bindings {
            for binding in bindings {
                if binding.shortcut.is_empty() {
                    continue;
                }
                let key = (
                    binding.scope,
                    binding.context.clone(),
                    binding.platform,
                    binding.shortcut.clone(),
                );
                buckets
                    .entry(key)
                    .or_default()
                    .push((action_id.as_str(), binding));
            }
        }

        let mut report = ConflictReport::default();
        for members in buckets.into_values() {
            if members.len() < 2 {
                continue;
            }
            report.group_count += 1;

            for (action_id, binding) in &members {
                // Binding ids are only unique within one action, so a peer
                // is "someone else" only if action id or binding id differ.
                let conflicts_with: Vec<ConflictPeer> = members
                    .iter()
                    .filter(|(peer_action_id, other)| {
                        (*peer_action_id, other.id.as_str()) != (*action_id, binding.id.as_str())
                    })
                    .map(|(peer_action_id, peer)| ConflictPeer {
                        action_id: peer_action_id.to_string(),
                        action_label: self.label_for(peer_action_id),
                        binding_id: peer.id.clone(),
                    })
                    .collect();

                report.conflicts.push(ShortcutConflict {
                    action_id: action_id.to_string(),
                    action_label: self.label_for(action_id),
                    binding_id: binding.id.clone(),
                    scope: binding.scope,
                    context: binding.context.clone(),
                    platform: binding.platform,
                    shortcut: binding.shortcut.clone(),
                    conflicts_with,
                });
            }
        }

        // Bucket iteration order is arbitrary; sort so repeated scans of the
        // same snapshot render identically.
        report.conflicts.sort_by(|a, b| {
            (&a.shortcut, &a.action_id, &a.binding_id)
                .cmp(&(&b.shortcut, &b.action_id, &b.binding_id))
        });
        for conflict in &report.conflicts {
            report
                .conflict_lookup
                .entry(conflict.binding_id.clone())
                .or_default()
                .push(conflict.clone());
        }

        report
    }
}
