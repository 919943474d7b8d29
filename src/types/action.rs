use serde::{Deserialize, Serialize};

use super::binding::{PlatformTag, Scope};

/// A presentation grouping for actions in the shortcut editor.
///
/// Categories carry no behavioral contract; the dashboard uses them purely
/// to section the editor list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortcutCategory {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// Blueprint for one default binding of an action.
///
/// `context = None` resolves to the first context permitted for the
/// template's scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingTemplate {
    pub scope: Scope,
    pub shortcut: String,
    pub context: Option<String>,
    pub platform: PlatformTag,
}

impl BindingTemplate {
    pub fn app(shortcut: &str) -> Self {
        Self {
            scope: Scope::App,
            shortcut: shortcut.to_string(),
            context: None,
            platform: PlatformTag::All,
        }
    }

    pub fn global(shortcut: &str) -> Self {
        Self {
            scope: Scope::Global,
            shortcut: shortcut.to_string(),
            context: None,
            platform: PlatformTag::All,
        }
    }

    pub fn in_context(mut self, context_id: &str) -> Self {
        self.context = Some(context_id.to_string());
        self
    }

    pub fn on_platform(mut self, platform: PlatformTag) -> Self {
        self.platform = platform;
        self
    }
}

/// One user-invokable action the engine can bind shortcuts to.
///
/// Definitions are immutable once compiled into the registry. Action ids are
/// stable and never reused across versions. Context membership is stored as
/// context-option ids and resolved through the context library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutDefinition {
    pub id: String,
    pub label: String,
    pub description: String,
    pub category_id: String,
    pub keywords: Vec<String>,
    pub allow_app: bool,
    pub allow_global: bool,
    pub app_contexts: Vec<String>,
    pub global_contexts: Vec<String>,
    pub default_bindings: Vec<BindingTemplate>,
}

impl ShortcutDefinition {
    /// Whether the given scope is permitted for this action.
    pub fn allows_scope(&self, scope: Scope) -> bool {
        match scope {
            Scope::App => self.allow_app,
            Scope::Global => self.allow_global,
        }
    }

    /// The declared context-id list for the given scope. May be empty, in
    /// which case the registry falls back to the global context.
    pub fn context_ids(&self, scope: Scope) -> &[String] {
        match scope {
            Scope::App => &self.app_contexts,
            Scope::Global => &self.global_contexts,
        }
    }
}
