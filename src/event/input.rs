//! Input event types wrapping crossterm for decoupling.
//!
//! Defines [`InputEvent`], [`KeyEvent`], [`MouseEvent`] and supporting types.
//! Crossterm events are converted with [`InputEvent::from_crossterm`], so the
//! compositor and its tests never touch crossterm types directly.

use std::ops::BitOr;

use crossterm::event as ct;

use crate::geometry::Size;

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// Keyboard key, decoupled from crossterm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    Backspace,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
    /// Any key the compositor has no use for.
    Other,
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Modifier key bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(2);
    pub const ALT: Modifiers = Modifiers(4);

    /// Check whether `self` contains all the bits in `other`.
    pub fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    /// `self` with the bits of `other` cleared.
    pub fn without(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 & !other.0)
    }

    /// Check whether no modifier bits are set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;
    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

// ---------------------------------------------------------------------------
// KeyEvent / MouseEvent
// ---------------------------------------------------------------------------

/// A keyboard event with key and modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a new key event.
    pub fn new(code: Key, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// A character key with no modifiers.
    pub fn char(ch: char) -> Self {
        Self::new(Key::Char(ch), Modifiers::NONE)
    }
}

/// Mouse action kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseAction {
    Down,
    Up,
    Drag,
    Moved,
    ScrollUp,
    ScrollDown,
}

/// A mouse event with action and cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    pub kind: MouseAction,
    pub x: u16,
    pub y: u16,
}

// ---------------------------------------------------------------------------
// InputEvent
// ---------------------------------------------------------------------------

/// Top-level terminal input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(Size),
    FocusGained,
    FocusLost,
    Paste(String),
}

impl InputEvent {
    /// Convert a crossterm event.
    ///
    /// Key releases are dropped (only reported on terminals with the kitty
    /// keyboard protocol or on Windows), so each physical press acts once.
    pub fn from_crossterm(event: ct::Event) -> Option<InputEvent> {
        match event {
            ct::Event::Key(ke) if ke.kind == ct::KeyEventKind::Release => None,
            ct::Event::Key(ke) => Some(InputEvent::Key(KeyEvent::from(ke))),
            ct::Event::Mouse(me) => Some(InputEvent::Mouse(MouseEvent {
                kind: convert_mouse_kind(me.kind),
                x: me.column,
                y: me.row,
            })),
            ct::Event::Resize(w, h) => Some(InputEvent::Resize(Size::from((w, h)))),
            ct::Event::FocusGained => Some(InputEvent::FocusGained),
            ct::Event::FocusLost => Some(InputEvent::FocusLost),
            ct::Event::Paste(s) => Some(InputEvent::Paste(s)),
        }
    }
}

// ---------------------------------------------------------------------------
// From<crossterm> conversions
// ---------------------------------------------------------------------------

fn convert_modifiers(m: ct::KeyModifiers) -> Modifiers {
    let mut out = Modifiers::NONE;
    if m.contains(ct::KeyModifiers::SHIFT) {
        out = out | Modifiers::SHIFT;
    }
    if m.contains(ct::KeyModifiers::CONTROL) {
        out = out | Modifiers::CTRL;
    }
    if m.contains(ct::KeyModifiers::ALT) {
        out = out | Modifiers::ALT;
    }
    out
}

fn convert_mouse_kind(kind: ct::MouseEventKind) -> MouseAction {
    match kind {
        ct::MouseEventKind::Down(_) => MouseAction::Down,
        ct::MouseEventKind::Up(_) => MouseAction::Up,
        ct::MouseEventKind::Drag(_) => MouseAction::Drag,
        ct::MouseEventKind::Moved => MouseAction::Moved,
        ct::MouseEventKind::ScrollUp | ct::MouseEventKind::ScrollLeft => MouseAction::ScrollUp,
        ct::MouseEventKind::ScrollDown | ct::MouseEventKind::ScrollRight => {
            MouseAction::ScrollDown
        }
    }
}

impl From<ct::KeyEvent> for KeyEvent {
    fn from(ke: ct::KeyEvent) -> Self {
        let code = match ke.code {
            ct::KeyCode::Char(c) => Key::Char(c),
            ct::KeyCode::Enter => Key::Enter,
            ct::KeyCode::Esc => Key::Escape,
            ct::KeyCode::Tab => Key::Tab,
            ct::KeyCode::Backspace => Key::Backspace,
            ct::KeyCode::Left => Key::Left,
            ct::KeyCode::Right => Key::Right,
            ct::KeyCode::Up => Key::Up,
            ct::KeyCode::Down => Key::Down,
            ct::KeyCode::Home => Key::Home,
            ct::KeyCode::End => Key::End,
            ct::KeyCode::PageUp => Key::PageUp,
            ct::KeyCode::PageDown => Key::PageDown,
            ct::KeyCode::F(n) => Key::F(n),
            _ => Key::Other,
        };
        KeyEvent::new(code, convert_modifiers(ke.modifiers))
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ct_key(code: ct::KeyCode, modifiers: ct::KeyModifiers) -> ct::Event {
        ct::Event::Key(ct::KeyEvent::new(code, modifiers))
    }

    // ── Modifiers ────────────────────────────────────────────────────

    #[test]
    fn modifiers_combined() {
        let mods = Modifiers::CTRL | Modifiers::ALT;
        assert!(mods.contains(Modifiers::CTRL));
        assert!(mods.contains(Modifiers::ALT));
        assert!(!mods.contains(Modifiers::SHIFT));
        assert!(!mods.is_empty());
    }

    #[test]
    fn modifiers_without() {
        let mods = Modifiers::SHIFT | Modifiers::CTRL;
        assert_eq!(mods.without(Modifiers::SHIFT), Modifiers::CTRL);
        assert!(Modifiers::SHIFT.without(Modifiers::SHIFT).is_empty());
    }

    // ── Crossterm conversion ─────────────────────────────────────────

    #[test]
    fn converts_char_with_shift() {
        let ev = InputEvent::from_crossterm(ct_key(ct::KeyCode::Char('G'), ct::KeyModifiers::SHIFT));
        assert_eq!(
            ev,
            Some(InputEvent::Key(KeyEvent::new(Key::Char('G'), Modifiers::SHIFT)))
        );
    }

    #[test]
    fn converts_ctrl_c() {
        let ev = InputEvent::from_crossterm(ct_key(ct::KeyCode::Char('c'), ct::KeyModifiers::CONTROL));
        assert_eq!(
            ev,
            Some(InputEvent::Key(KeyEvent::new(Key::Char('c'), Modifiers::CTRL)))
        );
    }

    #[test]
    fn drops_key_release() {
        let mut ke = ct::KeyEvent::new(ct::KeyCode::Char('j'), ct::KeyModifiers::NONE);
        ke.kind = ct::KeyEventKind::Release;
        assert_eq!(InputEvent::from_crossterm(ct::Event::Key(ke)), None);
    }

    #[test]
    fn unknown_key_maps_to_other() {
        let ev = InputEvent::from_crossterm(ct_key(ct::KeyCode::Insert, ct::KeyModifiers::NONE));
        assert_eq!(ev, Some(InputEvent::Key(KeyEvent::new(Key::Other, Modifiers::NONE))));
    }

    #[test]
    fn converts_resize() {
        let ev = InputEvent::from_crossterm(ct::Event::Resize(100, 30));
        assert_eq!(ev, Some(InputEvent::Resize(Size::new(100, 30))));
    }

    #[test]
    fn converts_mouse() {
        let ev = InputEvent::from_crossterm(ct::Event::Mouse(ct::MouseEvent {
            kind: ct::MouseEventKind::Down(ct::MouseButton::Left),
            column: 4,
            row: 7,
            modifiers: ct::KeyModifiers::NONE,
        }));
        assert_eq!(
            ev,
            Some(InputEvent::Mouse(MouseEvent { kind: MouseAction::Down, x: 4, y: 7 }))
        );
    }

    #[test]
    fn converts_focus_and_paste() {
        assert_eq!(
            InputEvent::from_crossterm(ct::Event::FocusLost),
            Some(InputEvent::FocusLost)
        );
        assert_eq!(
            InputEvent::from_crossterm(ct::Event::Paste("hi".into())),
            Some(InputEvent::Paste("hi".into()))
        );
    }
}
