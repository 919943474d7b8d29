//! Tests for the persisted settings wire format.
//!
//! The collaborator's load/save facility exchanges exactly this JSON shape;
//! field names and tag spellings are load-bearing.

use repodash_shortcuts::managers::action_registry::ActionRegistry;
use repodash_shortcuts::services::merge_engine::{MergeEngine, MergeEngineTrait};
use repodash_shortcuts::types::binding::{PlatformTag, Scope, ShortcutBinding};
use repodash_shortcuts::types::settings::KeyboardShortcutSettings;

#[test]
fn test_serialized_field_names() {
    let mut settings = KeyboardShortcutSettings::empty();
    settings.last_updated = Some("2026-01-05T12:00:00Z".to_string());
    settings.bindings.insert(
        "app.tasks.runTask".to_string(),
        vec![ShortcutBinding {
            id: "app.tasks.runTask-app-0".to_string(),
            scope: Scope::App,
            shortcut: "Ctrl+Enter".to_string(),
            context: "task-panel".to_string(),
            platform: PlatformTag::All,
            is_default: true,
        }],
    );

    let json = serde_json::to_value(&settings).unwrap();
    assert_eq!(json["version"], 1);
    assert_eq!(json["lastUpdated"], "2026-01-05T12:00:00Z");

    let binding = &json["bindings"]["app.tasks.runTask"][0];
    assert_eq!(binding["id"], "app.tasks.runTask-app-0");
    assert_eq!(binding["scope"], "app");
    assert_eq!(binding["shortcut"], "Ctrl+Enter");
    assert_eq!(binding["context"], "task-panel");
    assert_eq!(binding["platform"], "all");
    assert_eq!(binding["isDefault"], true);
}

#[test]
fn test_parses_collaborator_shaped_blob() {
    let settings: KeyboardShortcutSettings = serde_json::from_str(
        r#"{
            "version": 2,
            "lastUpdated": null,
            "bindings": {
                "app.system.summonDashboard": [
                    {
                        "id": "app.system.summonDashboard-global-0",
                        "scope": "global",
                        "shortcut": "Ctrl+Shift+G",
                        "context": "system",
                        "platform": "linux",
                        "isDefault": false
                    }
                ]
            }
        }"#,
    )
    .unwrap();

    assert_eq!(settings.version, 2);
    assert!(settings.last_updated.is_none());
    let binding = &settings.bindings_for("app.system.summonDashboard").unwrap()[0];
    assert_eq!(binding.scope, Scope::Global);
    assert_eq!(binding.platform, PlatformTag::Linux);
    assert!(!binding.is_default);
}

#[test]
fn test_round_trip_preserves_unknown_actions() {
    let blob = r#"{
        "version": 1,
        "lastUpdated": "2026-02-10T08:30:00Z",
        "bindings": {
            "exp.future.action": [
                {
                    "id": "custom-1",
                    "scope": "app",
                    "shortcut": "Ctrl+0",
                    "context": "future-panel",
                    "platform": "all",
                    "isDefault": false
                }
            ]
        }
    }"#;

    let parsed: KeyboardShortcutSettings = serde_json::from_str(blob).unwrap();
    let json = serde_json::to_string(&parsed).unwrap();
    let reparsed: KeyboardShortcutSettings = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, reparsed);

    // And a merge keeps the foreign entry too.
    let registry = ActionRegistry::new();
    let merged = MergeEngine::new(&registry).merge_settings(Some(&parsed));
    let foreign = merged.bindings_for("exp.future.action").unwrap();
    assert_eq!(foreign[0].id, "custom-1");
    assert_eq!(foreign[0].shortcut, "Ctrl+0");
    assert_eq!(foreign[0].context, "future-panel");
}

#[test]
fn test_partial_binding_objects_deserialize() {
    // Settings written by an older build may omit fields added later.
    let settings: KeyboardShortcutSettings = serde_json::from_str(
        r#"{"version": 1, "bindings": {"app.tasks.runTask": [{"shortcut": "Ctrl+Enter"}]}}"#,
    )
    .unwrap();
    let binding = &settings.bindings_for("app.tasks.runTask").unwrap()[0];
    assert_eq!(binding.id, "");
    assert_eq!(binding.scope, Scope::App);
    assert_eq!(binding.platform, PlatformTag::All);
    assert!(!binding.is_default);
}
