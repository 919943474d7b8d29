//! Action Registry for the RepoDash shortcut engine.
//!
//! Compiles the built-in catalog of shortcut-able actions, their categories,
//! and their permitted execution contexts into one immutable value. The
//! registry is constructed once at startup and passed by reference to every
//! component that needs it; it is read-only and has no side effects.

use std::collections::HashMap;

use crate::types::action::{BindingTemplate, ShortcutCategory, ShortcutDefinition};
use crate::types::binding::Scope;
use crate::types::context::{ContextLibrary, ShortcutContextOption};

/// Trait defining read access to the action catalog.
pub trait ActionRegistryTrait {
    fn list_actions(&self) -> &[ShortcutDefinition];
    fn find_action(&self, id: &str) -> Option<&ShortcutDefinition>;
    fn list_categories(&self) -> &[ShortcutCategory];
    fn contexts_for(
        &self,
        action: &ShortcutDefinition,
        scope: Scope,
    ) -> Vec<&ShortcutContextOption>;
    fn search_actions(&self, query: &str) -> Vec<&ShortcutDefinition>;
    fn context_library(&self) -> &ContextLibrary;
}

/// The immutable catalog of actions, categories, and contexts.
pub struct ActionRegistry {
    contexts: ContextLibrary,
    categories: Vec<ShortcutCategory>,
    actions: Vec<ShortcutDefinition>,
    id_to_index: HashMap<String, usize>,
}

impl ActionRegistry {
    /// Builds the registry from the built-in RepoDash catalog.
    pub fn new() -> Self {
        let actions = builtin_actions();
        let id_to_index = actions
            .iter()
            .enumerate()
            .map(|(index, action)| (action.id.clone(), index))
            .collect();

        Self {
            contexts: ContextLibrary::standard(),
            categories: builtin_categories(),
            actions,
            id_to_index,
        }
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionRegistryTrait for ActionRegistry {
    /// All actions in catalog order.
    fn list_actions(&self) -> &[ShortcutDefinition] {
        &self.actions
    }

    fn find_action(&self, id: &str) -> Option<&ShortcutDefinition> {
        self.id_to_index.get(id).map(|&index| &self.actions[index])
    }

    /// Categories in presentation order.
    fn list_categories(&self) -> &[ShortcutCategory] {
        &self.categories
    }

    /// Resolves the context options permitted for `(action, scope)`.
    ///
    /// An action that declares no contexts for the scope yields the single
    /// `"global"` context as a safe fallback.
    fn contexts_for(
        &self,
        action: &ShortcutDefinition,
        scope: Scope,
    ) -> Vec<&ShortcutContextOption> {
        let resolved: Vec<&ShortcutContextOption> = action
            .context_ids(scope)
            .iter()
            .filter_map(|id| self.contexts.find(id))
            .collect();

        if resolved.is_empty() {
            vec![self.contexts.global()]
        } else {
            resolved
        }
    }

    /// Case-insensitive substring search over label, description, and
    /// keywords. An empty query returns the whole catalog.
    fn search_actions(&self, query: &str) -> Vec<&ShortcutDefinition> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.actions.iter().collect();
        }

        self.actions
            .iter()
            .filter(|action| {
                action.label.to_lowercase().contains(&needle)
                    || action.description.to_lowercase().contains(&needle)
                    || action
                        .keywords
                        .iter()
                        .any(|keyword| keyword.to_lowercase().contains(&needle))
            })
            .collect()
    }

    fn context_library(&self) -> &ContextLibrary {
        &self.contexts
    }
}

fn builtin_categories() -> Vec<ShortcutCategory> {
    let categories = [
        (
            "navigation",
            "Navigation",
            "Moving around the dashboard and its panels.",
        ),
        (
            "repositories",
            "Repositories",
            "Operations on the repository list.",
        ),
        ("tasks", "Tasks", "Running and controlling repository tasks."),
        (
            "agents",
            "Background Agents",
            "Launching and managing background agents.",
        ),
        (
            "system",
            "System",
            "System-wide shortcuts available while the app is in the background.",
        ),
    ];

    categories
        .into_iter()
        .map(|(id, title, description)| ShortcutCategory {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        })
        .collect()
}

/// Builds an app-scope action. Contexts default to `["global"]` when the
/// caller passes none.
fn app_action(
    id: &str,
    label: &str,
    description: &str,
    category_id: &str,
    keywords: &[&str],
    app_contexts: &[&str],
    default_bindings: Vec<BindingTemplate>,
) -> ShortcutDefinition {
    let app_contexts = if app_contexts.is_empty() {
        vec!["global".to_string()]
    } else {
        app_contexts.iter().map(|id| id.to_string()).collect()
    };

    ShortcutDefinition {
        id: id.to_string(),
        label: label.to_string(),
        description: description.to_string(),
        category_id: category_id.to_string(),
        keywords: keywords.iter().map(|keyword| keyword.to_string()).collect(),
        allow_app: true,
        allow_global: false,
        app_contexts,
        global_contexts: Vec::new(),
        default_bindings,
    }
}

/// Builds a global-scope-only action bound to the `system` context.
fn system_action(
    id: &str,
    label: &str,
    description: &str,
    keywords: &[&str],
    default_bindings: Vec<BindingTemplate>,
) -> ShortcutDefinition {
    ShortcutDefinition {
        id: id.to_string(),
        label: label.to_string(),
        description: description.to_string(),
        category_id: "system".to_string(),
        keywords: keywords.iter().map(|keyword| keyword.to_string()).collect(),
        allow_app: false,
        allow_global: true,
        app_contexts: Vec::new(),
        global_contexts: vec!["system".to_string()],
        default_bindings,
    }
}

fn builtin_actions() -> Vec<ShortcutDefinition> {
    let mut actions = vec![
        app_action(
            "app.navigation.openSettings",
            "Open Settings",
            "Open the settings view.",
            "navigation",
            &["preferences", "options", "configure"],
            &[],
            vec![BindingTemplate::app("Ctrl+,")],
        ),
        app_action(
            "app.navigation.focusSearch",
            "Focus Search",
            "Move focus to the search field.",
            "navigation",
            &["find", "filter", "palette"],
            &[],
            vec![BindingTemplate::app("Ctrl+K"), BindingTemplate::app("Ctrl+P")],
        ),
        app_action(
            "app.navigation.toggleSidebar",
            "Toggle Sidebar",
            "Show or hide the navigation sidebar.",
            "navigation",
            &["panel", "collapse"],
            &[],
            vec![BindingTemplate::app("Ctrl+B")],
        ),
        app_action(
            "app.navigation.showRepositories",
            "Show Repositories",
            "Switch to the repository list.",
            "navigation",
            &["repos", "list"],
            &[],
            vec![BindingTemplate::app("Ctrl+1")],
        ),
        app_action(
            "app.navigation.showTasks",
            "Show Tasks",
            "Switch to the task panel.",
            "navigation",
            &["jobs", "runs"],
            &[],
            vec![BindingTemplate::app("Ctrl+2")],
        ),
        app_action(
            "app.navigation.showAgents",
            "Show Agents",
            "Switch to the background agent panel.",
            "navigation",
            &["bots"],
            &[],
            vec![BindingTemplate::app("Ctrl+3")],
        ),
        app_action(
            "app.navigation.closeModal",
            "Close Modal",
            "Dismiss the active modal dialog.",
            "navigation",
            &["dismiss", "cancel"],
            &["modal"],
            Vec::new(),
        ),
        app_action(
            "app.settings.editShortcuts",
            "Edit Shortcuts",
            "Jump to the keyboard shortcut editor.",
            "navigation",
            &["keys", "bindings", "keyboard"],
            &["settings"],
            vec![BindingTemplate::app("Ctrl+Shift+,").in_context("settings")],
        ),
        app_action(
            "app.repositories.refreshAll",
            "Refresh All Repositories",
            "Re-scan every tracked repository for new commits and status changes.",
            "repositories",
            &["reload", "scan", "fetch"],
            &["global", "repository-list"],
            vec![BindingTemplate::app("Ctrl+R")],
        ),
        app_action(
            "app.repositories.openInEditor",
            "Open in Editor",
            "Open the selected repository in the configured editor.",
            "repositories",
            &["code", "ide"],
            &["repository-list"],
            vec![BindingTemplate::app("Ctrl+E")],
        ),
        app_action(
            "app.repositories.openInTerminal",
            "Open in Terminal",
            "Open the selected repository in a terminal window.",
            "repositories",
            &["shell", "console"],
            &["repository-list"],
            vec![BindingTemplate::app("Ctrl+Shift+T")],
        ),
        app_action(
            "app.repositories.copyPath",
            "Copy Repository Path",
            "Copy the selected repository's path to the clipboard.",
            "repositories",
            &["clipboard"],
            &["repository-list"],
            vec![BindingTemplate::app("Ctrl+Shift+C")],
        ),
        app_action(
            "app.repositories.toggleFavorite",
            "Toggle Favorite",
            "Pin or unpin the selected repository at the top of the list.",
            "repositories",
            &["pin", "star"],
            &["repository-list"],
            vec![BindingTemplate::app("Ctrl+D")],
        ),
        app_action(
            "app.repositories.fetchCurrent",
            "Fetch Selected Repository",
            "Fetch remote changes for the selected repository.",
            "repositories",
            &["pull", "remote", "sync"],
            &["repository-list"],
            vec![BindingTemplate::app("Ctrl+Shift+F")],
        ),
        app_action(
            "app.tasks.runTask",
            "Run Task",
            "Run the selected task.",
            "tasks",
            &["start", "execute"],
            &["task-panel"],
            vec![BindingTemplate::app("Ctrl+Enter")],
        ),
        app_action(
            "app.tasks.stopTask",
            "Stop Task",
            "Stop the running task.",
            "tasks",
            &["kill", "cancel"],
            &["task-panel"],
            vec![BindingTemplate::app("Ctrl+.")],
        ),
        app_action(
            "app.tasks.clearOutput",
            "Clear Task Output",
            "Clear the output pane of the task panel.",
            "tasks",
            &["console", "log"],
            &["task-panel"],
            vec![BindingTemplate::app("Ctrl+L")],
        ),
        app_action(
            "app.agents.togglePanel",
            "Toggle Agent Panel",
            "Show or hide the background agent panel.",
            "agents",
            &["bots", "panel"],
            &["global", "background-agent"],
            vec![BindingTemplate::app("Ctrl+J")],
        ),
        system_action(
            "app.system.summonDashboard",
            "Summon Dashboard",
            "Bring the dashboard window to the front from anywhere.",
            &["show", "focus", "raise"],
            vec![BindingTemplate::global("Ctrl+Shift+G")],
        ),
        system_action(
            "app.system.quickCommand",
            "Quick Command",
            "Open the quick command popup without focusing the app.",
            &["launcher", "popup"],
            vec![BindingTemplate::global("Ctrl+Shift+Space")],
        ),
    ];

    // The one dual-scope action: launching an agent works both inside the
    // app and as a system-wide hotkey.
    let mut new_agent = app_action(
        "app.agents.newAgent",
        "New Background Agent",
        "Start a new background agent for the selected repository.",
        "agents",
        &["launch", "spawn", "bots"],
        &["global", "background-agent"],
        vec![BindingTemplate::app("Ctrl+Shift+A")],
    );
    new_agent.allow_global = true;
    new_agent.global_contexts = vec!["system".to_string()];
    actions.push(new_agent);

    actions
}
