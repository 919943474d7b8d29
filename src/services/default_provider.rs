//! Default Provider for the RepoDash shortcut engine.
//!
//! Derives fresh binding sets from the action registry's default templates.
//! Derivation is deterministic: the same action always yields bindings with
//! identical ids, so resets are idempotent and "differs from default"
//! comparisons stay stable across runs.

use std::collections::HashMap;

use crate::managers::action_registry::{ActionRegistry, ActionRegistryTrait};
use crate::types::action::ShortcutDefinition;
use crate::types::binding::{Scope, ShortcutBinding};
use crate::types::settings::{KeyboardShortcutSettings, SETTINGS_SCHEMA_VERSION};

/// Trait defining default-binding derivation.
pub trait DefaultProviderTrait {
    fn default_bindings_for_action(&self, action_id: &str) -> Vec<ShortcutBinding>;
    fn create_default_settings(&self) -> KeyboardShortcutSettings;
}

/// Derives default bindings from the registry's templates.
pub struct DefaultProvider<'a> {
    registry: &'a ActionRegistry,
}

impl<'a> DefaultProvider<'a> {
    pub fn new(registry: &'a ActionRegistry) -> Self {
        Self { registry }
    }

    /// Resolves a template's declared context per the fallback rule: keep it
    /// if permitted for `(action, scope)`, otherwise the first permitted
    /// context (which is `"global"` when the action declares none).
    fn resolve_context(
        &self,
        action: &ShortcutDefinition,
        scope: Scope,
        declared: Option<&str>,
    ) -> String {
        let permitted = self.registry.contexts_for(action, scope);
        if let Some(declared) = declared {
            if permitted.iter().any(|option| option.id == declared) {
                return declared.to_string();
            }
        }
        permitted[0].id.clone()
    }
}

impl DefaultProviderTrait for DefaultProvider<'_> {
    /// Fresh default bindings for one action.
    ///
    /// Ids are derived from `(action, scope, per-scope ordinal)`. An unknown
    /// action id yields an empty list, not an error.
    fn default_bindings_for_action(&self, action_id: &str) -> Vec<ShortcutBinding> {
        let Some(action) = self.registry.find_action(action_id) else {
            return Vec::new();
        };

        let mut per_scope_ordinal: HashMap<Scope, usize> = HashMap::new();
        action
            .default_bindings
            .iter()
            .map(|template| {
                let ordinal = per_scope_ordinal.entry(template.scope).or_insert(0);
                let binding = ShortcutBinding {
                    id: ShortcutBinding::deterministic_id(&action.id, template.scope, *ordinal),
                    scope: template.scope,
                    shortcut: template.shortcut.clone(),
                    context: self.resolve_context(
                        action,
                        template.scope,
                        template.context.as_deref(),
                    ),
                    platform: template.platform,
                    is_default: true,
                };
                *ordinal += 1;
                binding
            })
            .collect()
    }

    /// A complete settings value with one bindings entry per registry
    /// action, all populated from defaults.
    fn create_default_settings(&self) -> KeyboardShortcutSettings {
        let bindings = self
            .registry
            .list_actions()
            .iter()
            .map(|action| (action.id.clone(), self.default_bindings_for_action(&action.id)))
            .collect();

        KeyboardShortcutSettings {
            version: SETTINGS_SCHEMA_VERSION,
            last_updated: None,
            bindings,
        }
    }
}
