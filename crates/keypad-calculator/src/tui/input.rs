//! Terminal event mapping
//!
//! Only the on-screen keypad drives the calculator: mouse clicks press
//! buttons, arrow keys move the focus cursor and Enter/Space press the
//! focused button. Digits and operators typed on the keyboard are ignored.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Direction of a focus move on the keypad grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    /// One row up
    Up,
    /// One row down
    Down,
    /// One column left
    Left,
    /// One column right
    Right,
}

/// Actions produced by terminal events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    /// Left click at a terminal cell
    Click {
        /// Column of the click
        column: u16,
        /// Row of the click
        row: u16,
    },
    /// Move the focus cursor
    MoveFocus(FocusMove),
    /// Press the focused button
    Activate,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps terminal events to shell actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps any terminal event to an action
    #[must_use]
    pub fn handle_event(&self, event: &Event) -> ShellAction {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            _ => ShellAction::None,
        }
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> ShellAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return ShellAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => ShellAction::Quit,
                _ => ShellAction::None,
            };
        }

        match code {
            KeyCode::Up => ShellAction::MoveFocus(FocusMove::Up),
            KeyCode::Down => ShellAction::MoveFocus(FocusMove::Down),
            KeyCode::Left => ShellAction::MoveFocus(FocusMove::Left),
            KeyCode::Right => ShellAction::MoveFocus(FocusMove::Right),
            KeyCode::Enter | KeyCode::Char(' ') => ShellAction::Activate,
            KeyCode::Esc | KeyCode::Char('q') => ShellAction::Quit,
            _ => ShellAction::None,
        }
    }

    /// Maps a mouse event to an action
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent) -> ShellAction {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => ShellAction::Click {
                column: event.column,
                row: event.row,
            },
            _ => ShellAction::None,
        }
    }
}
