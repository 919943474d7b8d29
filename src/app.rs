//! Engine facade for RepoDash keyboard shortcuts.
//!
//! Central struct wiring the action registry and the stateless services
//! together, exposing the contract the dashboard consumes: settings merging,
//! default derivation, lookup, search, conflict detection, and editor
//! sessions.

use crate::managers::action_registry::{ActionRegistry, ActionRegistryTrait};
use crate::managers::binding_session::BindingEditorSession;
use crate::services::conflict_detector::{ConflictDetector, ConflictDetectorTrait, ConflictReport};
use crate::services::default_provider::{DefaultProvider, DefaultProviderTrait};
use crate::services::merge_engine::{MergeEngine, MergeEngineTrait};
use crate::types::action::ShortcutDefinition;
use crate::types::binding::ShortcutBinding;
use crate::types::settings::KeyboardShortcutSettings;

/// The shortcut engine: one registry plus the services built around it.
///
/// The engine performs no I/O. The collaborator loads the persisted blob,
/// passes it through [`ShortcutEngine::merge_settings`], renders the result,
/// routes edits through an [`BindingEditorSession`], and saves whatever
/// comes back.
pub struct ShortcutEngine {
    registry: ActionRegistry,
}

impl ShortcutEngine {
    pub fn new() -> Self {
        Self {
            registry: ActionRegistry::new(),
        }
    }

    /// The underlying action registry, for catalog rendering.
    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    /// Reconciles a loaded settings blob (or `None` on first run) with the
    /// current registry. See [`MergeEngine`].
    pub fn merge_settings(
        &self,
        existing: Option<&KeyboardShortcutSettings>,
    ) -> KeyboardShortcutSettings {
        MergeEngine::new(&self.registry).merge_settings(existing)
    }

    /// A complete all-default settings value.
    pub fn create_default_settings(&self) -> KeyboardShortcutSettings {
        DefaultProvider::new(&self.registry).create_default_settings()
    }

    /// Fresh default bindings for one action; empty for unknown ids.
    pub fn default_bindings_for_action(&self, action_id: &str) -> Vec<ShortcutBinding> {
        DefaultProvider::new(&self.registry).default_bindings_for_action(action_id)
    }

    /// Looks up one action definition.
    pub fn find_action(&self, action_id: &str) -> Option<&ShortcutDefinition> {
        self.registry.find_action(action_id)
    }

    /// Filters the catalog for the settings UI's search box.
    pub fn search_actions(&self, query: &str) -> Vec<&ShortcutDefinition> {
        self.registry.search_actions(query)
    }

    /// Scans a settings snapshot for colliding bindings.
    pub fn detect_conflicts(&self, settings: &KeyboardShortcutSettings) -> ConflictReport {
        ConflictDetector::new(&self.registry).detect_conflicts(settings)
    }

    /// A fresh editor session borrowing this engine's registry. The
    /// collaborator owns the session for as long as the editor is open.
    pub fn editor_session(&self) -> BindingEditorSession<'_> {
        BindingEditorSession::new(&self.registry)
    }
}

impl Default for ShortcutEngine {
    fn default() -> Self {
        Self::new()
    }
}
