use serde::{Deserialize, Serialize};

/// A named execution context in which a shortcut binding can be active.
///
/// Context options are owned by the [`ContextLibrary`]; every other part of
/// the engine refers to them by `id` only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortcutContextOption {
    pub id: String,
    pub label: String,
    pub description: String,
}

/// Context id used as the safe fallback whenever a binding's declared
/// context cannot be resolved.
pub const GLOBAL_CONTEXT_ID: &str = "global";

/// The library of reusable execution-context descriptors.
///
/// Constructed once with the standard RepoDash contexts and read-only
/// afterwards.
pub struct ContextLibrary {
    options: Vec<ShortcutContextOption>,
}

impl ContextLibrary {
    /// Builds the standard context catalog for the dashboard.
    pub fn standard() -> Self {
        let options = vec![
            context(
                GLOBAL_CONTEXT_ID,
                "Everywhere",
                "Active anywhere inside the application window.",
            ),
            context(
                "repository-list",
                "Repository List",
                "Active while the repository list has focus.",
            ),
            context(
                "task-panel",
                "Task Panel",
                "Active while the task panel has focus.",
            ),
            context(
                "settings",
                "Settings",
                "Active while the settings view is open.",
            ),
            context(
                "modal",
                "Modals",
                "Active while a modal dialog is open.",
            ),
            context(
                "system",
                "System Wide",
                "Active even when the application is in the background.",
            ),
            context(
                "background-agent",
                "Background Agents",
                "Active while the background agent panel has focus.",
            ),
        ];
        Self { options }
    }

    /// All context options in presentation order.
    pub fn options(&self) -> &[ShortcutContextOption] {
        &self.options
    }

    /// Looks up a context option by id.
    pub fn find(&self, id: &str) -> Option<&ShortcutContextOption> {
        self.options.iter().find(|option| option.id == id)
    }

    /// The `"global"` fallback context. Always present in the catalog.
    pub fn global(&self) -> &ShortcutContextOption {
        self.find(GLOBAL_CONTEXT_ID)
            .unwrap_or(&self.options[0])
    }
}

impl Default for ContextLibrary {
    fn default() -> Self {
        Self::standard()
    }
}

fn context(id: &str, label: &str, description: &str) -> ShortcutContextOption {
    ShortcutContextOption {
        id: id.to_string(),
        label: label.to_string(),
        description: description.to_string(),
    }
}
