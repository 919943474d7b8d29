//! Merge/Upgrade Engine for the RepoDash shortcut engine.
//!
//! Reconciles a persisted settings blob against the current action registry,
//! producing a complete, valid settings value without discarding user
//! customizations. Malformed data is repaired, never rejected: a blob saved
//! by any past or future version must load.
//!
//! Missing `platform` and `isDefault` fields are already filled by the
//! deserialization defaults on [`ShortcutBinding`]; this engine repairs the
//! rest (ids, contexts, disallowed scopes) and fills in defaults for actions
//! the blob does not mention. The whole merge is idempotent: repairing
//! already-repaired input changes nothing.

use std::collections::HashSet;

use crate::managers::action_registry::{ActionRegistry, ActionRegistryTrait};
use crate::services::default_provider::{DefaultProvider, DefaultProviderTrait};
use crate::types::action::ShortcutDefinition;
use crate::types::binding::{Scope, ShortcutBinding};
use crate::types::context::GLOBAL_CONTEXT_ID;
use crate::types::settings::{KeyboardShortcutSettings, SETTINGS_SCHEMA_VERSION};

/// Trait defining settings reconciliation.
pub trait MergeEngineTrait {
    fn merge_settings(
        &self,
        existing: Option<&KeyboardShortcutSettings>,
    ) -> KeyboardShortcutSettings;
}

/// Reconciles persisted settings with the current registry.
pub struct MergeEngine<'a> {
    registry: &'a ActionRegistry,
    defaults: DefaultProvider<'a>,
}

impl<'a> MergeEngine<'a> {
    pub fn new(registry: &'a ActionRegistry) -> Self {
        Self {
            registry,
            defaults: DefaultProvider::new(registry),
        }
    }

    /// Picks an id for a binding that arrived without one (or with a
    /// duplicate). Starts from the binding's position and advances past ids
    /// the list already uses, so repair never manufactures a collision.
    fn assign_id(
        action_id: &str,
        scope: Scope,
        position: usize,
        taken: &HashSet<String>,
    ) -> String {
        let mut ordinal = position;
        loop {
            let candidate = ShortcutBinding::deterministic_id(action_id, scope, ordinal);
            if !taken.contains(&candidate) {
                return candidate;
            }
            ordinal += 1;
        }
    }

    /// Repairs the bindings of an action the registry knows.
    ///
    /// Bindings whose scope the action does not allow are dropped; declared
    /// contexts are resolved against the permitted list with the usual
    /// first-permitted fallback.
    fn repair_known(
        &self,
        action: &ShortcutDefinition,
        existing: &[ShortcutBinding],
    ) -> Vec<ShortcutBinding> {
        let mut taken: HashSet<String> = HashSet::new();
        let mut repaired: Vec<ShortcutBinding> = Vec::new();

        for binding in existing {
            if !action.allows_scope(binding.scope) {
                continue;
            }

            let mut binding = binding.clone();
            let permitted = self.registry.contexts_for(action, binding.scope);
            if !permitted.iter().any(|option| option.id == binding.context) {
                binding.context = permitted[0].id.clone();
            }
            if binding.id.is_empty() || taken.contains(&binding.id) {
                binding.id = Self::assign_id(&action.id, binding.scope, repaired.len(), &taken);
            }
            taken.insert(binding.id.clone());
            repaired.push(binding);
        }

        repaired
    }

    /// Repairs the bindings of an action the registry does not know
    /// (saved by a future version or an experiment).
    ///
    /// These are opaque pass-through: scopes and non-empty contexts are
    /// preserved verbatim rather than re-validated, so a downgrade never
    /// rewrites what a newer version meant.
    fn repair_foreign(
        &self,
        action_id: &str,
        existing: &[ShortcutBinding],
    ) -> Vec<ShortcutBinding> {
        let mut taken: HashSet<String> = HashSet::new();
        let mut repaired: Vec<ShortcutBinding> = Vec::new();

        for binding in existing {
            let mut binding = binding.clone();
            if binding.context.is_empty() {
                binding.context = GLOBAL_CONTEXT_ID.to_string();
            }
            if binding.id.is_empty() || taken.contains(&binding.id) {
                binding.id = Self::assign_id(action_id, binding.scope, repaired.len(), &taken);
            }
            taken.insert(binding.id.clone());
            repaired.push(binding);
        }

        repaired
    }
}

impl MergeEngineTrait for MergeEngine<'_> {
    /// Produces a complete, registry-consistent settings value.
    ///
    /// Absent input (first run) and inputs without any bindings yield fresh
    /// defaults. Otherwise every registry action ends up with an entry
    /// (existing bindings repaired, missing ones populated from defaults)
    /// and unknown-action entries are carried through with shape repair.
    /// `lastUpdated` is carried over unchanged: merging is not a user edit.
    fn merge_settings(
        &self,
        existing: Option<&KeyboardShortcutSettings>,
    ) -> KeyboardShortcutSettings {
        let Some(existing) = existing else {
            return self.defaults.create_default_settings();
        };
        if existing.bindings.is_empty() {
            return self.defaults.create_default_settings();
        }

        let mut merged = KeyboardShortcutSettings {
            version: existing.version.max(SETTINGS_SCHEMA_VERSION),
            last_updated: existing.last_updated.clone(),
            bindings: std::collections::HashMap::new(),
        };

        for action in self.registry.list_actions() {
            let repaired = match existing.bindings.get(&action.id) {
                Some(bindings) => self.repair_known(action, bindings),
                None => self.defaults.default_bindings_for_action(&action.id),
            };
            merged.bindings.insert(action.id.clone(), repaired);
        }

        for (action_id, bindings) in &existing.bindings {
            if self.registry.find_action(action_id).is_none() {
                merged
                    .bindings
                    .insert(action_id.clone(), self.repair_foreign(action_id, bindings));
            }
        }

        merged
    }
}
