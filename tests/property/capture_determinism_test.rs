//! Property-based tests for the capture normalizer.
//!
//! The canonical string is a pure function of the event, Escape and
//! pure-modifier chords always cancel, and modifier tokens always appear in
//! the fixed canonical order.

use proptest::prelude::*;
use repodash_shortcuts::platform;
use repodash_shortcuts::services::capture_normalizer::{normalize_capture, normalize_key_name};
use repodash_shortcuts::types::capture::KeyCaptureEvent;

fn arb_primary_key() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]",
        "[0-9]",
        Just("ArrowUp".to_string()),
        Just("Enter".to_string()),
        Just(" ".to_string()),
        Just("F5".to_string()),
        Just("Home".to_string()),
        Just("contextmenu".to_string()),
    ]
}

fn arb_any_key() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_primary_key(),
        Just("Escape".to_string()),
        Just("Control".to_string()),
        Just("Shift".to_string()),
        Just("Meta".to_string()),
    ]
}

fn arb_event() -> impl Strategy<Value = KeyCaptureEvent> {
    (arb_any_key(), any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(key, ctrl_key, meta_key, alt_key, shift_key)| KeyCaptureEvent {
            key,
            ctrl_key,
            meta_key,
            alt_key,
            shift_key,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // **Determinism**: the same event always normalizes identically.
    #[test]
    fn normalization_is_a_pure_function(event in arb_event()) {
        prop_assert_eq!(normalize_capture(&event), normalize_capture(&event));
    }

    // **Rejection**: Escape cancels no matter which modifiers are held.
    #[test]
    fn escape_always_cancels(ctrl in any::<bool>(), meta in any::<bool>(),
                             alt in any::<bool>(), shift in any::<bool>()) {
        let event = KeyCaptureEvent {
            key: "Escape".to_string(),
            ctrl_key: ctrl,
            meta_key: meta,
            alt_key: alt,
            shift_key: shift,
        };
        prop_assert_eq!(normalize_capture(&event), None);
    }

    // **Rejection**: a modifier as the primary key never yields a shortcut.
    #[test]
    fn modifier_primary_always_cancels(
        key in prop_oneof![
            Just("Control"), Just("Ctrl"), Just("Meta"), Just("Super"),
            Just("Alt"), Just("Option"), Just("Shift"), Just("AltGraph"),
        ],
        ctrl in any::<bool>(), meta in any::<bool>(),
        alt in any::<bool>(), shift in any::<bool>(),
    ) {
        let event = KeyCaptureEvent {
            key: key.to_string(),
            ctrl_key: ctrl,
            meta_key: meta,
            alt_key: alt,
            shift_key: shift,
        };
        prop_assert_eq!(normalize_capture(&event), None);
    }

    // **Canonical structure**: for a real primary key, the result is the
    // fixed-order modifier prefix followed by the normalized key name.
    #[test]
    fn tokens_follow_canonical_order(key in arb_primary_key(),
                                     ctrl in any::<bool>(), meta in any::<bool>(),
                                     alt in any::<bool>(), shift in any::<bool>()) {
        let event = KeyCaptureEvent {
            key: key.clone(),
            ctrl_key: ctrl,
            meta_key: meta,
            alt_key: alt,
            shift_key: shift,
        };
        let canonical = normalize_capture(&event).expect("primary keys are bindable");

        let mut expected: Vec<String> = Vec::new();
        if ctrl {
            expected.push("Ctrl".to_string());
        }
        if meta {
            expected.push(platform::super_key_token().to_string());
        }
        if alt {
            expected.push("Alt".to_string());
        }
        if shift {
            expected.push("Shift".to_string());
        }
        expected.push(normalize_key_name(&key).expect("primary key has a name"));

        prop_assert_eq!(canonical, expected.join("+"));
    }
}
