//! Closed set of calculator buttons
//!
//! Shells translate their widget events into [`Button`]s; a label that does
//! not name a button maps to `None` and is ignored by the engine.

use super::operations::{BinaryOp, UnaryOp};

/// Every key the engine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// Binary operator
    Operator(BinaryOp),
    /// Evaluate the pending operation
    Equals,
    /// Clear all state (C)
    Clear,
    /// Clear the current entry only (CE)
    ClearEntry,
    /// Remove the last character (⌫)
    Backspace,
    /// Negate the current entry (±)
    ToggleSign,
    /// Unary function
    Function(UnaryOp),
}

/// Visual category of a button, used by shells for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    /// Digits, decimal point and sign toggle
    Entry,
    /// Binary operators
    Operator,
    /// Equals and the clearing keys
    Control,
    /// Unary functions
    Function,
}

impl Button {
    /// Returns the text printed on the key
    #[must_use]
    pub fn label(&self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            Self::Digit(d) => DIGITS.get(usize::from(*d)).copied().unwrap_or("?"),
            Self::Decimal => ".",
            Self::Operator(op) => op.symbol(),
            Self::Equals => "=",
            Self::Clear => "C",
            Self::ClearEntry => "CE",
            Self::Backspace => "⌫",
            Self::ToggleSign => "±",
            Self::Function(f) => f.label(),
        }
    }

    /// Parses a key label, accepting a few ASCII aliases
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let button = match label.trim() {
            "." => Self::Decimal,
            "+" => Self::Operator(BinaryOp::Add),
            "−" | "-" => Self::Operator(BinaryOp::Subtract),
            "×" | "*" => Self::Operator(BinaryOp::Multiply),
            "÷" | "/" => Self::Operator(BinaryOp::Divide),
            "=" => Self::Equals,
            "C" => Self::Clear,
            "CE" => Self::ClearEntry,
            "⌫" | "bs" => Self::Backspace,
            "±" | "neg" => Self::ToggleSign,
            "√" | "sqrt" => Self::Function(UnaryOp::SquareRoot),
            "x²" | "sqr" => Self::Function(UnaryOp::Square),
            "1/x" | "inv" => Self::Function(UnaryOp::Reciprocal),
            "%" => Self::Function(UnaryOp::Percent),
            other => {
                let mut chars = other.chars();
                let digit = chars.next()?.to_digit(10)?;
                if chars.next().is_some() {
                    return None;
                }
                Self::Digit(u8::try_from(digit).ok()?)
            }
        };
        Some(button)
    }

    /// Returns the styling category
    #[must_use]
    pub const fn kind(&self) -> ButtonKind {
        match self {
            Self::Digit(_) | Self::Decimal | Self::ToggleSign => ButtonKind::Entry,
            Self::Operator(_) => ButtonKind::Operator,
            Self::Equals | Self::Clear | Self::ClearEntry | Self::Backspace => {
                ButtonKind::Control
            }
            Self::Function(_) => ButtonKind::Function,
        }
    }

    /// Returns true for keys that edit the current entry rather than compute
    #[must_use]
    pub const fn is_entry_edit(&self) -> bool {
        matches!(
            self,
            Self::Digit(_) | Self::Decimal | Self::ClearEntry | Self::Backspace
        )
    }
}

impl std::fmt::Display for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_labels_round_trip() {
        for d in 0..=9u8 {
            let button = Button::Digit(d);
            assert_eq!(Button::from_label(button.label()), Some(button));
        }
    }

    #[test]
    fn test_symbol_labels() {
        assert_eq!(Button::from_label("÷"), Some(Button::Operator(BinaryOp::Divide)));
        assert_eq!(Button::from_label("×"), Some(Button::Operator(BinaryOp::Multiply)));
        assert_eq!(Button::from_label("−"), Some(Button::Operator(BinaryOp::Subtract)));
        assert_eq!(Button::from_label("+"), Some(Button::Operator(BinaryOp::Add)));
        assert_eq!(Button::from_label("⌫"), Some(Button::Backspace));
        assert_eq!(Button::from_label("±"), Some(Button::ToggleSign));
        assert_eq!(Button::from_label("x²"), Some(Button::Function(UnaryOp::Square)));
    }

    #[test]
    fn test_ascii_aliases() {
        assert_eq!(Button::from_label("-"), Some(Button::Operator(BinaryOp::Subtract)));
        assert_eq!(Button::from_label("*"), Some(Button::Operator(BinaryOp::Multiply)));
        assert_eq!(Button::from_label("/"), Some(Button::Operator(BinaryOp::Divide)));
        assert_eq!(Button::from_label("sqrt"), Some(Button::Function(UnaryOp::SquareRoot)));
        assert_eq!(Button::from_label(" 7 "), Some(Button::Digit(7)));
    }

    #[test]
    fn test_unknown_labels() {
        assert_eq!(Button::from_label(""), None);
        assert_eq!(Button::from_label("12"), None);
        assert_eq!(Button::from_label("M+"), None);
        assert_eq!(Button::from_label("^"), None);
    }

    #[test]
    fn test_every_label_parses_back() {
        let buttons = [
            Button::Decimal,
            Button::Equals,
            Button::Clear,
            Button::ClearEntry,
            Button::Backspace,
            Button::ToggleSign,
        ];
        let ops = BinaryOp::ALL.map(Button::Operator);
        let funcs = UnaryOp::ALL.map(Button::Function);
        for button in buttons.iter().chain(&ops).chain(&funcs) {
            assert_eq!(Button::from_label(button.label()), Some(*button), "{button}");
        }
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Button::Digit(3).kind(), ButtonKind::Entry);
        assert_eq!(Button::ToggleSign.kind(), ButtonKind::Entry);
        assert_eq!(Button::Operator(BinaryOp::Add).kind(), ButtonKind::Operator);
        assert_eq!(Button::Equals.kind(), ButtonKind::Control);
        assert_eq!(Button::Backspace.kind(), ButtonKind::Control);
        assert_eq!(
            Button::Function(UnaryOp::Percent).kind(),
            ButtonKind::Function
        );
    }

    #[test]
    fn test_out_of_range_digit_label() {
        assert_eq!(Button::Digit(12).label(), "?");
    }
}
