//! Terminal shell for the calculator
//!
//! A ratatui front end that shows the history and display labels above a
//! clickable 6x4 keypad.

mod app;
mod input;
mod keypad;
mod terminal;
mod ui;

pub use app::CalculatorApp;
pub use input::{FocusMove, InputHandler, ShellAction};
pub use keypad::{hit_test, inner_area, kind_style, KeypadWidget, OPERATOR_ORANGE};
pub use terminal::{enter_terminal, restore_terminal, run_then_restore};
pub use ui::{keypad_area, layout, render, CalculatorUI, HELP_LINE, TITLE};
