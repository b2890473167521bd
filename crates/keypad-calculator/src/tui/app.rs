//! Terminal application state
//!
//! Wraps the engine together with the keypad focus cursor. All calculator
//! input arrives as keypad presses, either clicked or activated via focus.

use ratatui::layout::Rect;
use tracing::debug;

use super::input::{FocusMove, ShellAction};
use super::keypad::hit_test;
use super::ui::keypad_area;
use crate::config::EngineConfig;
use crate::core::{Button, Engine, Keypad, Readout};

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    engine: Engine,
    keypad: Keypad,
    focus: usize,
    last_pressed: Option<usize>,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new app with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates an app with a custom engine configuration
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let keypad = Keypad::new();
        // Start on the 7 key so the digits are one step away
        let focus = keypad.index_of(Button::Digit(7)).unwrap_or(0);
        Self {
            engine: Engine::with_config(config),
            keypad,
            focus,
            last_pressed: None,
            should_quit: false,
        }
    }

    /// Returns the engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the index of the focused button
    #[must_use]
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Returns the focused button
    #[must_use]
    pub fn focused_button(&self) -> Option<Button> {
        self.keypad.get_button(self.focus).map(|b| b.button)
    }

    /// Returns the index of the most recently pressed button
    #[must_use]
    pub fn last_pressed(&self) -> Option<usize> {
        self.last_pressed
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Presses a button
    pub fn press(&mut self, button: Button) -> Readout {
        self.last_pressed = self.keypad.index_of(button);
        self.engine.handle(button)
    }

    /// Moves the focus onto `button`; returns false if it is not on the keypad
    pub fn focus_button(&mut self, button: Button) -> bool {
        match self.keypad.index_of(button) {
            Some(index) => {
                self.focus = index;
                true
            }
            None => false,
        }
    }

    /// Moves the focus cursor, wrapping around the grid edges
    pub fn move_focus(&mut self, direction: FocusMove) {
        let (rows, cols) = self.keypad.dimensions();
        let (mut row, mut col) = (self.focus / cols, self.focus % cols);
        match direction {
            FocusMove::Up => row = (row + rows - 1) % rows,
            FocusMove::Down => row = (row + 1) % rows,
            FocusMove::Left => col = (col + cols - 1) % cols,
            FocusMove::Right => col = (col + 1) % cols,
        }
        self.focus = row * cols + col;
    }

    /// Presses the focused button
    pub fn activate(&mut self) -> Option<Readout> {
        let button = self.focused_button()?;
        Some(self.press(button))
    }

    /// Handles a click at terminal position (x, y) for a frame of size `frame`
    pub fn click(&mut self, frame: Rect, x: u16, y: u16) -> Option<Readout> {
        let index = hit_test(&self.keypad, keypad_area(frame), x, y)?;
        let button = self.keypad.get_button(index)?.button;
        debug!(x, y, %button, "keypad click");
        self.focus = index;
        Some(self.press(button))
    }

    /// Applies a shell action for a frame of size `frame`
    pub fn apply(&mut self, action: ShellAction, frame: Rect) {
        match action {
            ShellAction::Click { column, row } => {
                self.click(frame, column, row);
            }
            ShellAction::MoveFocus(direction) => self.move_focus(direction),
            ShellAction::Activate => {
                self.activate();
            }
            ShellAction::Quit => self.quit(),
            ShellAction::None => {}
        }
    }
}
