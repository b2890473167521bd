//! Keypad Calculator
//!
//! The state machine behind a desktop-style calculator: a single-line
//! display, an operation-history label and a keypad of digits, the four
//! binary operators, equals, clear keys and the unary functions `√`, `x²`,
//! `1/x`, `%` and `±`.
//!
//! Every button press goes through [`Engine::handle`], which returns the
//! display and history text to render. Arithmetic errors never escape: they
//! put the engine in an error state that shows a configurable marker.
//!
//! With the `tui` feature (on by default) the crate also ships a terminal
//! shell with a clickable keypad.
//!
//! # Example
//!
//! ```rust
//! use keypad_calculator::prelude::*;
//!
//! let mut engine = Engine::new();
//! for label in ["1", "2", "×", "3", "="] {
//!     engine.handle_label(label);
//! }
//! assert_eq!(engine.display(), "36");
//! assert_eq!(engine.history(), "12 × 3 =");
//!
//! // Errors show the marker and clear the history
//! engine.handle(Button::Function(UnaryOp::Reciprocal));
//! engine.handle(Button::Digit(0));
//! engine.handle(Button::Function(UnaryOp::Reciprocal));
//! assert_eq!(engine.display(), "Error");
//! assert!(engine.is_error());
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod error;

#[cfg(feature = "tui")]
pub mod cli;
#[cfg(feature = "tui")]
pub mod tui;

pub use crate::config::EngineConfig;
pub use crate::core::{CalcError, CalcResult, Engine, Readout};
pub use crate::error::{ShellError, ShellResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::core::{
        format_number, BinaryOp, Button, ButtonKind, CalcError, CalcResult, CalculatorState,
        Engine, Keypad, KeypadButton, Readout, UnaryOp,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::error::{ShellError, ShellResult};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
    #[cfg(feature = "tui")]
    pub use crate::tui::CalculatorApp;
}
