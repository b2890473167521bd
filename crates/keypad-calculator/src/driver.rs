//! Unified calculator driver
//!
//! Behavioural checks are written once against [`CalculatorDriver`] and run
//! against the bare engine and against the terminal shell.

use crate::core::Engine;

/// Abstract driver for button-level calculator interactions
pub trait CalculatorDriver {
    /// Presses the button with the given label
    fn press(&mut self, label: &str);

    /// Gets the display text
    fn display(&self) -> String;

    /// Gets the history label text
    fn history(&self) -> String;

    /// Presses clear-all
    fn clear(&mut self) {
        self.press("C");
    }

    /// Presses a sequence of buttons
    fn press_all(&mut self, labels: &[&str]) {
        for label in labels {
            self.press(label);
        }
    }
}

impl CalculatorDriver for Engine {
    fn press(&mut self, label: &str) {
        self.handle_label(label);
    }

    fn display(&self) -> String {
        Engine::display(self).to_string()
    }

    fn history(&self) -> String {
        Engine::history(self).to_string()
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::CalculatorDriver;
    use crate::core::Button;
    use crate::tui::CalculatorApp;

    /// Driver that presses buttons through the terminal app's keypad
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, label: &str) {
            // Go through the keypad focus so the shell's own dispatch path is used
            let Some(button) = Button::from_label(label) else {
                return;
            };
            if self.app.focus_button(button) {
                self.app.activate();
            }
        }

        fn display(&self) -> String {
            self.app.engine().display().to_string()
        }

        fn history(&self) -> String {
            self.app.engine().history().to_string()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified specifications =====
// These work with ANY CalculatorDriver implementation

/// Verifies the four binary operators and their history text
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all(&["1", "+", "2", "="]);
    assert_eq!(driver.display(), "3");
    assert_eq!(driver.history(), "1 + 2 =");

    driver.clear();
    driver.press_all(&["1", "0", "−", "4", "="]);
    assert_eq!(driver.display(), "6");

    driver.clear();
    driver.press_all(&["6", "×", "7", "="]);
    assert_eq!(driver.display(), "42");

    driver.clear();
    driver.press_all(&["2", "0", "÷", "8", "="]);
    assert_eq!(driver.display(), "2.5");
    driver.clear();
}

/// Verifies left-to-right evaluation of chained operators
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all(&["1", "+", "2", "+", "3", "="]);
    assert_eq!(driver.display(), "6");

    driver.clear();
    driver.press_all(&["2", "+", "3", "×", "4", "="]);
    assert_eq!(driver.display(), "20");
    driver.clear();
}

/// Verifies that `=` without a pending operator changes nothing
pub fn verify_equals_noop<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all(&["4", "2"]);
    let before = (driver.display(), driver.history());
    driver.press("=");
    assert_eq!((driver.display(), driver.history()), before);
    driver.clear();
}

/// Verifies the unary function keys
pub fn verify_functions<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all(&["9", "√"]);
    assert_eq!(driver.display(), "3");
    assert_eq!(driver.history(), "√(9) =");

    driver.clear();
    driver.press_all(&["5", "x²"]);
    assert_eq!(driver.display(), "25");

    driver.clear();
    driver.press_all(&["4", "1/x"]);
    assert_eq!(driver.display(), "0.25");

    driver.clear();
    driver.press_all(&["2", "5", "%"]);
    assert_eq!(driver.display(), "0.25");
    driver.clear();
}

/// Verifies entry editing: decimal point, backspace, sign toggle
pub fn verify_entry_editing<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all(&["1", ".", ".", "5"]);
    assert_eq!(driver.display(), "1.5");

    driver.press_all(&["⌫", "⌫", "⌫", "⌫"]);
    assert_eq!(driver.display(), "0");

    driver.press_all(&["7", "±"]);
    assert_eq!(driver.display(), "-7");
    driver.clear();
}

/// Verifies the error state and recovery with clear-all
pub fn verify_error_state<D: CalculatorDriver>(driver: &mut D, marker: &str) {
    driver.clear();
    driver.press_all(&["5", "÷", "0", "="]);
    assert_eq!(driver.display(), marker);
    assert_eq!(driver.history(), "");

    driver.press("+");
    assert_eq!(driver.display(), marker);

    driver.clear();
    driver.press_all(&["±", "4", "√"]);
    assert_eq!(driver.display(), marker);

    driver.clear();
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.history(), "");
}

/// Complete verification suite
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_chaining(driver);
    verify_equals_noop(driver);
    verify_functions(driver);
    verify_entry_editing(driver);
    verify_error_state(driver, "Error");
}
