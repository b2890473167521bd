//! TUI rendering
//!
//! ```text
//! ┌ Calculator ──────────────────┐
//! │┌ Display ───────────────────┐│
//! ││                      12 × ││
//! ││                         3 ││
//! │└────────────────────────────┘│
//! │┌ Keypad ────────────────────┐│
//! ││  C   CE   ⌫   ÷            ││
//! ││  ...                       ││
//! │└────────────────────────────┘│
//! │   click or arrows + Enter    │
//! └──────────────────────────────┘
//! ```

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Window title
pub const TITLE: &str = " Calculator ";

/// One-line usage hint shown under the keypad
pub const HELP_LINE: &str = "click a key · ←↑↓→ + Enter · q quit";

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Splits the frame into display, keypad and help areas
#[must_use]
pub fn layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(8),
        Constraint::Length(1),
    ])
    .margin(1)
    .areas(area)
}

/// Returns the keypad area for a frame of the given size
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    layout(area)[1]
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Renders the history label above the display text
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let engine = self.app.engine();
        let display_style = if engine.is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };

        let lines = vec![
            Line::from(Span::styled(
                engine.history(),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(engine.display(), display_style)),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(HELP_LINE, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let [display_area, keypad_area, help_area] = layout(area);
        self.render_display(display_area, buf);
        KeypadWidget::new(self.app.keypad())
            .focus(Some(self.app.focus()))
            .pressed(self.app.last_pressed())
            .render(keypad_area, buf);
        self.render_help(help_area, buf);
    }
}
