//! Property-based tests for the conflict detector.
//!
//! Conflicts are symmetric, empty shortcuts never participate, and the
//! group count matches an independent recount.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use repodash_shortcuts::managers::action_registry::ActionRegistry;
use repodash_shortcuts::services::conflict_detector::{ConflictDetector, ConflictDetectorTrait};
use repodash_shortcuts::types::binding::{PlatformTag, Scope, ShortcutBinding};
use repodash_shortcuts::types::settings::KeyboardShortcutSettings;

// Small pools so collisions actually happen.

fn arb_scope() -> impl Strategy<Value = Scope> {
    prop_oneof![Just(Scope::App), Just(Scope::Global)]
}

fn arb_platform() -> impl Strategy<Value = PlatformTag> {
    prop_oneof![Just(PlatformTag::All), Just(PlatformTag::MacOS)]
}

fn arb_shortcut() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("Ctrl+K".to_string()),
        Just("Ctrl+M".to_string()),
    ]
}

fn arb_context() -> impl Strategy<Value = String> {
    prop_oneof![Just("global".to_string()), Just("task-panel".to_string())]
}

fn arb_action_id() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("app.navigation.focusSearch".to_string()),
        Just("app.navigation.toggleSidebar".to_string()),
        Just("exp.future.widget".to_string()),
    ]
}

fn arb_settings() -> impl Strategy<Value = KeyboardShortcutSettings> {
    proptest::collection::hash_map(
        arb_action_id(),
        proptest::collection::vec(
            (arb_scope(), arb_shortcut(), arb_context(), arb_platform()),
            0..5,
        ),
        0..4,
    )
    .prop_map(|raw| {
        let mut bindings = HashMap::new();
        for (action_id, list) in raw {
            // Ids must be unique within one action (settings invariant);
            // the detector is only defined over valid settings.
            let list: Vec<ShortcutBinding> = list
                .into_iter()
                .enumerate()
                .map(|(index, (scope, shortcut, context, platform))| ShortcutBinding {
                    id: format!("{}-b{}", action_id, index),
                    scope,
                    shortcut,
                    context,
                    platform,
                    is_default: false,
                })
                .collect();
            bindings.insert(action_id, list);
        }
        KeyboardShortcutSettings {
            version: 1,
            last_updated: None,
            bindings,
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(40))]

    // **Conflict symmetry**: if A's conflict list contains B, then B's
    // conflict list contains A.
    #[test]
    fn conflicts_are_symmetric(settings in arb_settings()) {
        let registry = ActionRegistry::new();
        let report = ConflictDetector::new(&registry).detect_conflicts(&settings);

        for conflict in &report.conflicts {
            for peer in &conflict.conflicts_with {
                let reverse = report.conflicts.iter().find(|other| {
                    other.action_id == peer.action_id && other.binding_id == peer.binding_id
                });
                let reverse = reverse.expect("peer must have its own conflict record");
                prop_assert!(
                    reverse.conflicts_with.iter().any(|back| {
                        back.action_id == conflict.action_id
                            && back.binding_id == conflict.binding_id
                    }),
                    "{}/{} does not point back at {}/{}",
                    peer.action_id, peer.binding_id,
                    conflict.action_id, conflict.binding_id
                );
            }
        }
    }

    // **Empty-shortcut exclusion**: unassigned bindings never conflict.
    #[test]
    fn empty_shortcuts_never_appear(settings in arb_settings()) {
        let registry = ActionRegistry::new();
        let report = ConflictDetector::new(&registry).detect_conflicts(&settings);
        for conflict in &report.conflicts {
            prop_assert!(!conflict.shortcut.is_empty());
        }
    }

    // **Group count**: matches an independent recount of identity keys
    // shared by more than one binding.
    #[test]
    fn group_count_matches_recount(settings in arb_settings()) {
        let registry = ActionRegistry::new();
        let report = ConflictDetector::new(&registry).detect_conflicts(&settings);

        let mut tally: HashMap<(Scope, String, PlatformTag, String), usize> = HashMap::new();
        for bindings in settings.bindings.values() {
            for binding in bindings {
                if binding.shortcut.is_empty() {
                    continue;
                }
                *tally
                    .entry((
                        binding.scope,
                        binding.context.clone(),
                        binding.platform,
                        binding.shortcut.clone(),
                    ))
                    .or_insert(0) += 1;
            }
        }
        let expected = tally.values().filter(|&&count| count > 1).count();
        prop_assert_eq!(report.group_count, expected);
    }

    // Every member of every group appears exactly once in the report, and
    // the lookup agrees with the flat list.
    #[test]
    fn report_and_lookup_agree(settings in arb_settings()) {
        let registry = ActionRegistry::new();
        let report = ConflictDetector::new(&registry).detect_conflicts(&settings);

        let mut seen: HashSet<(String, String)> = HashSet::new();
        for conflict in &report.conflicts {
            prop_assert!(
                seen.insert((conflict.action_id.clone(), conflict.binding_id.clone())),
                "duplicate conflict record"
            );
            prop_assert!(report
                .conflicts_for(&conflict.binding_id)
                .iter()
                .any(|entry| entry.action_id == conflict.action_id));
        }
    }
}
