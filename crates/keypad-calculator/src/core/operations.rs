//! Arithmetic behind the operator and function keys

use crate::core::{CalcError, CalcResult};

/// Binary operator awaiting its right-hand operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// Addition (+)
    Add,
    /// Subtraction (−)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl BinaryOp {
    /// All binary operators in keypad order
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the operator symbol as printed on the key and in the history label
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Applies the operator to two operands
    pub fn apply(&self, a: f64, b: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivideByZero);
                }
                a / b
            }
        };
        check_finite(result)
    }
}

/// Single-operand function applied to the display value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Square root (√)
    SquareRoot,
    /// Square (x²)
    Square,
    /// Reciprocal (1/x)
    Reciprocal,
    /// Percent (%), the value divided by one hundred
    Percent,
}

impl UnaryOp {
    /// All unary functions in keypad order
    pub const ALL: [Self; 4] = [
        Self::SquareRoot,
        Self::Square,
        Self::Reciprocal,
        Self::Percent,
    ];

    /// Returns the key label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SquareRoot => "√",
            Self::Square => "x²",
            Self::Reciprocal => "1/x",
            Self::Percent => "%",
        }
    }

    /// Applies the function
    pub fn apply(&self, x: f64) -> CalcResult<f64> {
        let result = match self {
            Self::SquareRoot => {
                if x < 0.0 {
                    return Err(CalcError::DomainError);
                }
                x.sqrt()
            }
            Self::Square => x * x,
            Self::Reciprocal => {
                if x == 0.0 {
                    return Err(CalcError::DivideByZero);
                }
                1.0 / x
            }
            Self::Percent => x / 100.0,
        };
        check_finite(result)
    }

    /// Builds the history label for an already formatted operand
    #[must_use]
    pub fn history(&self, operand: &str) -> String {
        match self {
            Self::SquareRoot => format!("√({operand}) ="),
            Self::Square => format!("({operand})² ="),
            Self::Reciprocal => format!("1/({operand}) ="),
            Self::Percent => format!("{operand}% ="),
        }
    }
}

fn check_finite(result: f64) -> CalcResult<f64> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::Overflow)
    }
}
