//! Key binding registry and resolution.
//!
//! [`KeyBindingRegistry`] maps key+modifier combinations to [`Action`]s.
//! The `with_defaults()` constructor installs the list navigation keys
//! (`j`/`k`/`g`/`G`, arrows, Home/End) and the quit keys (`q`, Ctrl+C).

use std::collections::HashMap;

use super::input::{Key, KeyEvent, Modifiers};

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// What a bound key asks the compositor to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Select the next line of the focused list.
    Down,
    /// Select the previous line of the focused list.
    Up,
    /// Jump to the first line of the focused list.
    First,
    /// Jump to the last line of the focused list.
    Last,
    /// Leave the render loop.
    Quit,
}

// ---------------------------------------------------------------------------
// KeyBindingRegistry
// ---------------------------------------------------------------------------

/// Registry of key bindings, mapping (Key, Modifiers) -> Action.
#[derive(Debug, Clone, Default)]
pub struct KeyBindingRegistry {
    bindings: HashMap<(Key, Modifiers), Action>,
}

impl KeyBindingRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the standard bindings.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.bind(Key::Char('j'), Modifiers::NONE, Action::Down);
        registry.bind(Key::Char('k'), Modifiers::NONE, Action::Up);
        registry.bind(Key::Char('g'), Modifiers::NONE, Action::First);
        registry.bind(Key::Char('G'), Modifiers::NONE, Action::Last);
        registry.bind(Key::Down, Modifiers::NONE, Action::Down);
        registry.bind(Key::Up, Modifiers::NONE, Action::Up);
        registry.bind(Key::Home, Modifiers::NONE, Action::First);
        registry.bind(Key::End, Modifiers::NONE, Action::Last);
        registry.bind(Key::Char('q'), Modifiers::NONE, Action::Quit);
        registry.bind(Key::Char('c'), Modifiers::CTRL, Action::Quit);
        registry
    }

    /// Register a key binding, replacing any existing one for the same keys.
    pub fn bind(&mut self, key: Key, modifiers: Modifiers, action: Action) {
        self.bindings.insert((key, modifiers), action);
    }

    /// Remove a key binding. Returns the removed action, if any.
    pub fn unbind(&mut self, key: Key, modifiers: Modifiers) -> Option<Action> {
        self.bindings.remove(&(key, modifiers))
    }

    /// Look up the action for a key event.
    ///
    /// Shift is already folded into the character of a `Key::Char` (`G`, not
    /// `g`), and terminals disagree on whether they also report it, so it is
    /// ignored for character keys.
    pub fn resolve(&self, event: &KeyEvent) -> Option<Action> {
        let modifiers = match event.code {
            Key::Char(_) => event.modifiers.without(Modifiers::SHIFT),
            _ => event.modifiers,
        };
        self.bindings.get(&(event.code, modifiers)).copied()
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the registry has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
