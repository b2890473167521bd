//! Keypad widget for the terminal shell
//!
//! Buttons are coloured by [`ButtonKind`]: operator keys orange, control keys
//! dark, digits plain and function keys light blue. The focused button is
//! drawn reversed; the last pressed one is highlighted yellow.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::core::{ButtonKind, Keypad};

/// Orange used for the operator keys
pub const OPERATOR_ORANGE: Color = Color::Rgb(255, 165, 0);

/// Returns the base style of a button category
#[must_use]
pub fn kind_style(kind: ButtonKind) -> Style {
    let (fg, bg) = match kind {
        ButtonKind::Operator => (Color::White, OPERATOR_ORANGE),
        ButtonKind::Control => (Color::White, Color::DarkGray),
        ButtonKind::Entry => (Color::Black, Color::White),
        ButtonKind::Function => (Color::Black, Color::LightBlue),
    };
    Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

/// Returns the area inside the keypad border
#[must_use]
pub fn inner_area(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Converts a click position inside `area` to a button index
#[must_use]
pub fn hit_test(keypad: &Keypad, area: Rect, x: u16, y: u16) -> Option<usize> {
    let inner = inner_area(area);
    if x < inner.x || y < inner.y || x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    let (rows, cols) = keypad.dimensions();
    let btn_width = inner.width / cols as u16;
    let btn_height = inner.height / rows as u16;
    if btn_width == 0 || btn_height == 0 {
        return None;
    }

    let col = ((x - inner.x) / btn_width) as usize;
    let row = ((y - inner.y) / btn_height) as usize;
    if row < rows && col < cols {
        Some(row * cols + col)
    } else {
        None
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    focus: Option<usize>,
    pressed: Option<usize>,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self {
            keypad,
            focus: None,
            pressed: None,
        }
    }

    /// Marks the focused button
    #[must_use]
    pub fn focus(mut self, index: Option<usize>) -> Self {
        self.focus = index;
        self
    }

    /// Marks the most recently pressed button
    #[must_use]
    pub fn pressed(mut self, index: Option<usize>) -> Self {
        self.pressed = index;
        self
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray))
            .render(area, buf);

        let inner = inner_area(area);
        let (rows, cols) = self.keypad.dimensions();
        let btn_width = inner.width / cols as u16;
        let btn_height = inner.height / rows as u16;
        if btn_width < 3 || btn_height == 0 {
            return;
        }

        for (index, btn) in self.keypad.buttons().iter().enumerate() {
            let mut style = kind_style(btn.button.kind());
            if self.pressed == Some(index) {
                style = style.fg(Color::Black).bg(Color::Yellow);
            }
            if self.focus == Some(index) {
                style = style.add_modifier(Modifier::REVERSED);
            }

            // One column of spacing between neighbouring keys
            let cell = Rect {
                x: inner.x + btn.col as u16 * btn_width,
                y: inner.y + btn.row as u16 * btn_height,
                width: btn_width - 1,
                height: btn_height,
            };
            buf.set_style(cell, style);

            let label = btn.label();
            let label_width = label.chars().count() as u16;
            let label_x = cell.x + cell.width.saturating_sub(label_width) / 2;
            let label_y = cell.y + cell.height / 2;
            buf.set_string(label_x, label_y, label, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Button;

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_kind_styles_differ() {
        let styles = [
            kind_style(ButtonKind::Operator),
            kind_style(ButtonKind::Control),
            kind_style(ButtonKind::Entry),
            kind_style(ButtonKind::Function),
        ];
        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(kind_style(ButtonKind::Operator).bg, Some(OPERATOR_ORANGE));
    }

    #[test]
    fn test_inner_area() {
        assert_eq!(inner_area(Rect::new(2, 3, 10, 8)), Rect::new(3, 4, 8, 6));
        assert_eq!(inner_area(Rect::new(0, 0, 1, 1)).width, 0);
    }

    #[test]
    fn test_hit_test_first_and_last() {
        let keypad = Keypad::new();
        // 4 columns of 5 and 6 rows of 2 inside the border
        let area = Rect::new(0, 0, 22, 14);
        assert_eq!(hit_test(&keypad, area, 1, 1), Some(0));
        assert_eq!(hit_test(&keypad, area, 20, 12), Some(23));
    }

    #[test]
    fn test_hit_test_specific_button() {
        let keypad = Keypad::new();
        let area = Rect::new(10, 5, 22, 14);
        // Row 1, col 2 is the 9 key
        let index = hit_test(&keypad, area, 11 + 2 * 5, 6 + 2).unwrap();
        assert_eq!(keypad.get_button(index).unwrap().button, Button::Digit(9));
    }

    #[test]
    fn test_hit_test_border_and_outside() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 22, 14);
        assert_eq!(hit_test(&keypad, area, 0, 0), None);
        assert_eq!(hit_test(&keypad, area, 21, 5), None);
        assert_eq!(hit_test(&keypad, area, 50, 50), None);
    }

    #[test]
    fn test_hit_test_too_small() {
        let keypad = Keypad::new();
        assert_eq!(hit_test(&keypad, Rect::new(0, 0, 4, 4), 1, 1), None);
    }

    #[test]
    fn test_render_labels() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 30, 14);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad).render(area, &mut buf);

        let content = buffer_text(&buf);
        assert!(content.contains("Keypad"));
        for label in ["CE", "÷", "×", "−", "=", "1/x", "x²", "√"] {
            assert!(content.contains(label), "missing {label}");
        }
    }

    #[test]
    fn test_render_focus_is_reversed() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 30, 14);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad).focus(Some(0)).render(area, &mut buf);

        let cell = &buf[(1, 1)];
        assert!(cell.modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_render_pressed_is_yellow() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 30, 14);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad).pressed(Some(0)).render(area, &mut buf);

        assert_eq!(buf[(1, 1)].bg, Color::Yellow);
    }

    #[test]
    fn test_render_too_small_draws_only_border() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 8, 4);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad).render(area, &mut buf);
        assert!(!buffer_text(&buf).contains('7'));
    }
}
