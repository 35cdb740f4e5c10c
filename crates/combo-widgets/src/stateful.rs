#![forbid(unsafe_code)]

//! Opt-in trait for widgets with persistable state.
//!
//! A combobox persists what the user sees and submits: the input text and
//! the hidden field value. Open state, filtered view and highlight are
//! derived and start fresh (closed) after a restore.
//!
//! # Invariants
//!
//! 1. `restore_state(save_state())` reproduces the same text and value when
//!    the text shows the committed option (its label or match key).
//! 2. The committed option is the first one carrying the stored value whose
//!    label or match key equals the stored text. With no such option the text
//!    is restored with an empty value.
//! 3. `save_state` is a pure read; `restore_state` only mutates `self`.

use core::fmt;

use crate::combobox::Combobox;

/// Unique identifier for a widget's persisted state.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct StateKey {
    /// The widget type name (e.g. `"Combobox"`).
    pub widget_type: &'static str,
    /// Instance-unique identifier.
    pub instance_id: String,
}

impl StateKey {
    /// Create a new state key from a widget type and instance id.
    #[must_use]
    pub fn new(widget_type: &'static str, id: impl Into<String>) -> Self {
        Self {
            widget_type,
            instance_id: id.into(),
        }
    }

    /// Canonical string representation: `"widget_type::instance_id"`.
    #[must_use]
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.widget_type, self.instance_id)
    }
}

/// Widgets whose user-facing state can be saved and restored.
pub trait Stateful: Sized {
    /// The state type that gets persisted.
    ///
    /// Must implement `Default` so missing or corrupt state degrades
    /// gracefully.
    type State: Default;

    /// Unique key identifying this widget instance.
    fn state_key(&self) -> StateKey;

    /// Extract current state for persistence.
    fn save_state(&self) -> Self::State;

    /// Restore state from persistence.
    fn restore_state(&mut self, state: Self::State);

    /// Restore from an optional stored blob, falling back to the default.
    fn restore_or_default(&mut self, state: Option<Self::State>) {
        self.restore_state(state.unwrap_or_default());
    }
}

/// Persisted combobox state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ComboboxPersistState {
    /// Input text.
    pub text: String,
    /// Hidden field value; empty when nothing was committed.
    pub value: String,
}

impl Stateful for Combobox {
    type State = ComboboxPersistState;

    fn state_key(&self) -> StateKey {
        StateKey::new("Combobox", self.config().id.as_str())
    }

    fn save_state(&self) -> ComboboxPersistState {
        ComboboxPersistState {
            text: self.text().to_owned(),
            value: self.value().to_owned(),
        }
    }

    fn restore_state(&mut self, state: ComboboxPersistState) {
        let committed = if state.value.is_empty() {
            None
        } else {
            let found = self.catalog().iter().position(|option| {
                option.value() == state.value
                    && (option.label() == state.text || option.match_key() == state.text)
            });
            if found.is_none() {
                crate::warn!(
                    key = %self.state_key(),
                    text = state.text.as_str(),
                    value = state.value.as_str(),
                    "persisted combobox value does not match its text; dropped"
                );
            }
            found
        };
        self.reset_to(&state.text, committed);
    }
}
