//! Keypad layout shared by every shell
//!
//! ```text
//! [ C ] [CE ] [ ⌫ ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ − ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [ ± ] [ 0 ] [ . ] [ = ]
//! [ √ ] [x² ] [1/x] [ % ]
//! ```

use super::button::Button;
use super::operations::{BinaryOp, UnaryOp};

/// A button placed on the keypad grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// The button
    pub button: Button,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButton {
    /// Returns the key label
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.button.label()
    }
}

/// The calculator keypad, a 6x4 grid in row-major order
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        use Button::{Backspace, Clear, ClearEntry, Decimal, Digit, Equals, Function, Operator, ToggleSign};

        let grid: [[Button; 4]; 6] = [
            [Clear, ClearEntry, Backspace, Operator(BinaryOp::Divide)],
            [Digit(7), Digit(8), Digit(9), Operator(BinaryOp::Multiply)],
            [Digit(4), Digit(5), Digit(6), Operator(BinaryOp::Subtract)],
            [Digit(1), Digit(2), Digit(3), Operator(BinaryOp::Add)],
            [ToggleSign, Digit(0), Decimal, Equals],
            UnaryOp::ALL.map(Function),
        ];

        let buttons = grid
            .iter()
            .enumerate()
            .flat_map(|(row, keys)| {
                keys.iter()
                    .enumerate()
                    .map(move |(col, &button)| KeypadButton { button, row, col })
            })
            .collect();

        Self {
            buttons,
            rows: grid.len(),
            cols: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds the index of a button by its label
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.label() == label)
    }

    /// Finds the index of a button
    #[must_use]
    pub fn index_of(&self, button: Button) -> Option<usize> {
        self.buttons.iter().position(|b| b.button == button)
    }

    /// Returns all buttons in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }
}
