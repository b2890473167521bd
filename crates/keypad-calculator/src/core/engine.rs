//! Calculator state machine
//!
//! The engine holds one pending operand, one pending operator and the text of
//! the display. Each button press is handled to completion; arithmetic errors
//! are caught at [`Engine::handle`] and turned into the error state.

use tracing::{debug, info, warn};

use super::button::Button;
use super::format::format_with_digits;
use super::operations::{BinaryOp, UnaryOp};
use super::{parse_display, CalcError, CalcResult};
use crate::config::EngineConfig;

/// Mutable state behind the display
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    /// Left-hand value of the pending operation
    pub first_operand: f64,
    /// Right-hand value captured at evaluation time
    pub second_operand: f64,
    /// Operator awaiting evaluation
    pub pending_operator: Option<BinaryOp>,
    /// Set by an operator key until the next entry key
    pub operator_just_pressed: bool,
    /// Set by `=` or a function key until the next entry key
    pub result_just_shown: bool,
    /// Text of the display; also the current entry
    pub display_text: String,
    /// Text of the history label, empty when hidden
    pub history_text: String,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            first_operand: 0.0,
            second_operand: 0.0,
            pending_operator: None,
            operator_just_pressed: false,
            result_just_shown: false,
            display_text: "0".to_string(),
            history_text: String::new(),
        }
    }
}

impl CalculatorState {
    fn clear_flags(&mut self) {
        self.operator_just_pressed = false;
        self.result_just_shown = false;
    }

    fn entry_pending(&self) -> bool {
        !self.operator_just_pressed && !self.result_just_shown
    }
}

/// The two strings a shell renders after each press
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Readout {
    /// Display text
    pub display: String,
    /// History label text, empty when hidden
    pub history: String,
}

impl Readout {
    /// Splits the readout into `(display, history)`
    #[must_use]
    pub fn into_pair(self) -> (String, String) {
        (self.display, self.history)
    }
}

/// Button-driven calculator engine
#[derive(Debug, Clone, Default)]
pub struct Engine {
    state: CalculatorState,
    config: EngineConfig,
    error: bool,
}

impl Engine {
    /// Creates an engine with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with a custom configuration
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            state: CalculatorState::default(),
            config,
            error: false,
        }
    }

    /// Returns the current state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the configuration
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns true while the error marker is shown
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.state.display_text
    }

    /// Returns the history label text
    #[must_use]
    pub fn history(&self) -> &str {
        &self.state.history_text
    }

    /// Returns the current display and history
    #[must_use]
    pub fn readout(&self) -> Readout {
        Readout {
            display: self.state.display_text.clone(),
            history: self.state.history_text.clone(),
        }
    }

    /// Handles one button press and returns the text to render
    pub fn handle(&mut self, button: Button) -> Readout {
        if self.error {
            match button {
                Button::Clear => {}
                entry if entry.is_entry_edit() => self.reset(),
                _ => {
                    debug!(%button, "ignoring button while error marker is shown");
                    return self.readout();
                }
            }
        }

        if let Err(err) = self.dispatch(button) {
            self.enter_error(button, &err);
        }

        debug!(
            %button,
            display = %self.state.display_text,
            history = %self.state.history_text,
            "handled button press"
        );
        self.readout()
    }

    /// Handles a press identified by its key label; unknown labels are ignored
    pub fn handle_label(&mut self, label: &str) -> Readout {
        match Button::from_label(label) {
            Some(button) => self.handle(button),
            None => {
                debug!(label, "ignoring unknown button label");
                self.readout()
            }
        }
    }

    fn dispatch(&mut self, button: Button) -> CalcResult<()> {
        match button {
            Button::Digit(d) => self.push_digit(d),
            Button::Decimal => self.push_decimal(),
            Button::Backspace => self.backspace(),
            Button::ClearEntry => self.state.display_text = "0".to_string(),
            Button::Clear => {
                info!("clearing calculator");
                self.reset();
            }
            Button::ToggleSign => self.toggle_sign()?,
            Button::Operator(op) => self.press_operator(op)?,
            Button::Equals => self.evaluate()?,
            Button::Function(f) => self.apply_function(f)?,
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.state = CalculatorState::default();
        self.error = false;
    }

    fn enter_error(&mut self, button: Button, err: &CalcError) {
        warn!(%button, error = %err, "calculation failed");
        self.state.display_text = self.config.error_marker.clone();
        self.state.history_text.clear();
        self.error = true;
    }

    fn format(&self, value: f64) -> String {
        format_with_digits(value, self.config.significant_digits)
    }

    fn push_digit(&mut self, digit: u8) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            debug!(digit, "ignoring out-of-range digit");
            return;
        };

        let state = &mut self.state;
        if !state.entry_pending() || state.display_text == "0" {
            state.display_text = ch.to_string();
            state.clear_flags();
        } else if state.display_text == "-0" {
            state.display_text = format!("-{ch}");
        } else if state.display_text.contains('E') {
            // Appending would extend the exponent, not the mantissa
            debug!(digit, display = %state.display_text, "ignoring digit after exponent");
        } else {
            state.display_text.push(ch);
        }
    }

    fn push_decimal(&mut self) {
        let state = &mut self.state;
        if !state.entry_pending() {
            state.display_text = "0.".to_string();
            state.clear_flags();
        } else if !state.display_text.contains(['.', 'E']) {
            state.display_text.push('.');
        }
    }

    fn backspace(&mut self) {
        let text = &mut self.state.display_text;
        text.pop();
        // Drop a dangling exponent marker left behind by the removed digit
        while text.ends_with(['E', '+']) || (text.len() > 1 && text.ends_with('-')) {
            text.pop();
        }
        if text.is_empty() || *text == "-" {
            *text = "0".to_string();
        }
    }

    fn toggle_sign(&mut self) -> CalcResult<()> {
        // An entry being typed keeps its text, trailing point included
        if self.state.entry_pending() {
            let text = &mut self.state.display_text;
            if text.starts_with('-') {
                text.remove(0);
            } else {
                text.insert(0, '-');
            }
            return Ok(());
        }

        let negated = -parse_display(&self.state.display_text)?;
        self.state.display_text = if negated == 0.0 {
            let zero = if negated.is_sign_negative() { "-0" } else { "0" };
            zero.to_string()
        } else {
            self.format(negated)
        };
        Ok(())
    }

    fn press_operator(&mut self, op: BinaryOp) -> CalcResult<()> {
        if self.state.pending_operator.is_some() && self.state.entry_pending() {
            self.evaluate()?;
        }

        let first = parse_display(&self.state.display_text)?;
        let history = format!("{} {}", self.format(first), op.symbol());

        let state = &mut self.state;
        state.first_operand = first;
        state.pending_operator = Some(op);
        state.operator_just_pressed = true;
        state.result_just_shown = false;
        state.history_text = history;
        Ok(())
    }

    fn evaluate(&mut self) -> CalcResult<()> {
        let Some(op) = self.state.pending_operator else {
            return Ok(());
        };
        if self.state.operator_just_pressed {
            return Ok(());
        }

        let second = parse_display(&self.state.display_text)?;
        self.state.second_operand = second;
        let first = self.state.first_operand;
        let result = op.apply(first, second)?;

        let history = format!(
            "{} {} {} =",
            self.format(first),
            op.symbol(),
            self.format(second)
        );
        let display = self.format(result);

        let state = &mut self.state;
        state.display_text = display;
        state.history_text = history;
        state.first_operand = result;
        state.pending_operator = None;
        state.result_just_shown = true;
        Ok(())
    }

    fn apply_function(&mut self, function: UnaryOp) -> CalcResult<()> {
        let operand = parse_display(&self.state.display_text)?;
        let result = function.apply(operand)?;

        self.state.history_text = function.history(&self.format(operand));
        self.state.display_text = self.format(result);
        self.state.result_just_shown = true;
        Ok(())
    }
}
