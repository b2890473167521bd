//! Calculator engine core
//!
//! Everything a shell needs to drive the calculator: the button catalogue,
//! the keypad layout, the arithmetic and the state machine itself.

pub mod button;
pub mod engine;
pub mod format;
pub mod keypad;
mod operations;

pub use button::{Button, ButtonKind};
pub use engine::{CalculatorState, Engine, Readout};
pub use format::{format_number, format_with_digits};
pub use keypad::{Keypad, KeypadButton};
pub use operations::{BinaryOp, UnaryOp};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// Every variant is handled the same way at the dispatch boundary: the
/// display switches to the error marker and the history label clears.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Binary division or reciprocal with a zero divisor
    #[error("Division by zero")]
    DivideByZero,
    /// Square root of a negative number
    #[error("Domain error: square root of a negative number")]
    DomainError,
    /// Display text that is not a decimal numeral
    #[error("Invalid number: {0}")]
    ParseError(String),
    /// Result is not a finite number
    #[error("Overflow: result exceeds the representable range")]
    Overflow,
}

/// Parses display text into an operand.
pub(crate) fn parse_display(text: &str) -> CalcResult<f64> {
    let value: f64 = text
        .parse()
        .map_err(|_| CalcError::ParseError(text.to_string()))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::ParseError(text.to_string()))
    }
}
