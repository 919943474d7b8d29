//! Binding Editor Session for the RepoDash shortcut engine.
//!
//! The interactive capture state machine: Idle until a capture starts, then
//! Listening until a key commits, Escape cancels, or a new capture takes
//! over. The session only defines state and transition functions; installing
//! and removing the actual key listener (and suppressing live shortcut
//! dispatch while Listening) is the collaborator's job.
//!
//! Settings are treated as immutable values: every operation takes the
//! current settings by reference and returns the next settings value, so the
//! collaborator can keep rendering the old snapshot while the new one is
//! computed.

use uuid::Uuid;

use crate::managers::action_registry::{ActionRegistry, ActionRegistryTrait};
use crate::services::capture_normalizer::normalize_capture;
use crate::services::default_provider::{DefaultProvider, DefaultProviderTrait};
use crate::types::binding::{PlatformTag, Scope, ShortcutBinding};
use crate::types::capture::KeyCaptureEvent;
use crate::types::settings::KeyboardShortcutSettings;

/// Current state of the capture state machine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CaptureState {
    #[default]
    Idle,
    Listening {
        action_id: String,
        binding_id: String,
        scope: Scope,
        /// Whether the target binding is a placeholder created solely to be
        /// captured. Cancellation deletes such placeholders instead of
        /// leaving an empty binding behind.
        was_new: bool,
    },
}

impl CaptureState {
    pub fn is_listening(&self) -> bool {
        matches!(self, CaptureState::Listening { .. })
    }
}

/// Trait defining the editor session operations.
///
/// Every operation applied to an unknown action id is a silent no-op: stale
/// and foreign settings entries are tolerated, not errors.
pub trait BindingEditorSessionTrait {
    fn state(&self) -> &CaptureState;
    fn start_capture(
        &mut self,
        settings: &KeyboardShortcutSettings,
        action_id: &str,
        binding_id: &str,
        scope: Scope,
        was_new: bool,
    ) -> KeyboardShortcutSettings;
    fn handle_key_press(
        &mut self,
        settings: &KeyboardShortcutSettings,
        event: &KeyCaptureEvent,
    ) -> KeyboardShortcutSettings;
    fn cancel(&mut self, settings: &KeyboardShortcutSettings) -> KeyboardShortcutSettings;
    fn reset_action(
        &mut self,
        settings: &KeyboardShortcutSettings,
        action_id: &str,
    ) -> KeyboardShortcutSettings;
    fn clear_binding(
        &mut self,
        settings: &KeyboardShortcutSettings,
        action_id: &str,
        binding_id: &str,
    ) -> KeyboardShortcutSettings;
    fn add_binding(
        &mut self,
        settings: &KeyboardShortcutSettings,
        action_id: &str,
        scope: Scope,
    ) -> KeyboardShortcutSettings;
}

/// The capture state machine. At most one Listening session exists per
/// instance; starting a new capture implicitly cancels the previous one.
pub struct BindingEditorSession<'a> {
    registry: &'a ActionRegistry,
    defaults: DefaultProvider<'a>,
    state: CaptureState,
}

impl<'a> BindingEditorSession<'a> {
    pub fn new(registry: &'a ActionRegistry) -> Self {
        Self {
            registry,
            defaults: DefaultProvider::new(registry),
            state: CaptureState::Idle,
        }
    }

    /// Leaves Listening, removing the placeholder binding when the session
    /// was started for a newly created one.
    fn cancel_internal(&mut self, settings: &KeyboardShortcutSettings) -> KeyboardShortcutSettings {
        let mut next = settings.clone();
        if let CaptureState::Listening {
            action_id,
            binding_id,
            was_new: true,
            ..
        } = std::mem::take(&mut self.state)
        {
            if let Some(bindings) = next.bindings.get_mut(&action_id) {
                bindings.retain(|binding| binding.id != binding_id);
            }
        }
        self.state = CaptureState::Idle;
        next
    }

    /// Writes the captured canonical shortcut into the target binding. A
    /// vanished target (cleared behind our back) makes the commit a no-op.
    fn commit(
        &mut self,
        settings: &KeyboardShortcutSettings,
        canonical: String,
    ) -> KeyboardShortcutSettings {
        let mut next = settings.clone();
        if let CaptureState::Listening {
            action_id,
            binding_id,
            ..
        } = std::mem::take(&mut self.state)
        {
            if let Some(bindings) = next.bindings.get_mut(&action_id) {
                if let Some(binding) = bindings.iter_mut().find(|binding| binding.id == binding_id)
                {
                    binding.shortcut = canonical;
                    binding.is_default = false;
                }
            }
        }
        self.state = CaptureState::Idle;
        next
    }
}

impl BindingEditorSessionTrait for BindingEditorSession<'_> {
    fn state(&self) -> &CaptureState {
        &self.state
    }

    /// Begins listening for a capture targeting an existing binding.
    ///
    /// Any capture already in progress is cancelled first, with the usual
    /// placeholder cleanup.
    fn start_capture(
        &mut self,
        settings: &KeyboardShortcutSettings,
        action_id: &str,
        binding_id: &str,
        scope: Scope,
        was_new: bool,
    ) -> KeyboardShortcutSettings {
        let next = self.cancel_internal(settings);
        if self.registry.find_action(action_id).is_none() {
            return next;
        }
        self.state = CaptureState::Listening {
            action_id: action_id.to_string(),
            binding_id: binding_id.to_string(),
            scope,
            was_new,
        };
        next
    }

    /// Routes one key-press through the normalizer while Listening.
    ///
    /// A normalized shortcut commits; the cancel sentinel (Escape or a
    /// pure-modifier chord) cancels. Outside Listening the event is ignored.
    fn handle_key_press(
        &mut self,
        settings: &KeyboardShortcutSettings,
        event: &KeyCaptureEvent,
    ) -> KeyboardShortcutSettings {
        if !self.state.is_listening() {
            return settings.clone();
        }
        match normalize_capture(event) {
            Some(canonical) => self.commit(settings, canonical),
            None => self.cancel_internal(settings),
        }
    }

    fn cancel(&mut self, settings: &KeyboardShortcutSettings) -> KeyboardShortcutSettings {
        self.cancel_internal(settings)
    }

    /// Replaces all of an action's bindings with fresh defaults, bypassing
    /// capture entirely.
    fn reset_action(
        &mut self,
        settings: &KeyboardShortcutSettings,
        action_id: &str,
    ) -> KeyboardShortcutSettings {
        if self.registry.find_action(action_id).is_none() {
            return settings.clone();
        }

        // A capture aimed at this action would target a binding that no
        // longer exists after the reset.
        if matches!(
            &self.state,
            CaptureState::Listening { action_id: listening, .. } if listening == action_id
        ) {
            self.state = CaptureState::Idle;
        }

        let mut next = settings.clone();
        next.bindings.insert(
            action_id.to_string(),
            self.defaults.default_bindings_for_action(action_id),
        );
        next
    }

    /// Removes one binding outright (no capture involved).
    fn clear_binding(
        &mut self,
        settings: &KeyboardShortcutSettings,
        action_id: &str,
        binding_id: &str,
    ) -> KeyboardShortcutSettings {
        if self.registry.find_action(action_id).is_none() {
            return settings.clone();
        }

        let mut next = settings.clone();
        if let Some(bindings) = next.bindings.get_mut(action_id) {
            bindings.retain(|binding| binding.id != binding_id);
        }

        if matches!(
            &self.state,
            CaptureState::Listening { action_id: a, binding_id: b, .. }
                if a == action_id && b == binding_id
        ) {
            self.state = CaptureState::Idle;
        }
        next
    }

    /// Appends a placeholder binding with an empty shortcut and immediately
    /// starts listening for it.
    ///
    /// The placeholder id is a fresh uuid rather than a deterministic id:
    /// placeholders are never compared against defaults, and a colliding id
    /// here could silently alias an existing binding.
    fn add_binding(
        &mut self,
        settings: &KeyboardShortcutSettings,
        action_id: &str,
        scope: Scope,
    ) -> KeyboardShortcutSettings {
        let mut next = self.cancel_internal(settings);

        let Some(action) = self.registry.find_action(action_id) else {
            return next;
        };
        if !action.allows_scope(scope) {
            return next;
        }

        let context = self.registry.contexts_for(action, scope)[0].id.clone();
        let binding = ShortcutBinding {
            id: Uuid::new_v4().to_string(),
            scope,
            shortcut: String::new(),
            context,
            platform: PlatformTag::All,
            is_default: false,
        };

        self.state = CaptureState::Listening {
            action_id: action_id.to_string(),
            binding_id: binding.id.clone(),
            scope,
            was_new: true,
        };
        next.bindings
            .entry(action_id.to_string())
            .or_default()
            .push(binding);
        next
    }
}
