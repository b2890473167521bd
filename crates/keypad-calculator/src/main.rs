//! Keypad calculator in the terminal
//!
//! ## Usage
//!
//! ```bash
//! keypad-calculator                          # Default settings
//! keypad-calculator --config keypad.yaml     # Load settings from YAML
//! keypad-calculator --digits 10 --log-file calc.log --log-level debug
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;
use crossterm::event;
use keypad_calculator::{
    cli::Cli,
    tui::{
        enter_terminal, render, restore_terminal, run_then_restore, CalculatorApp, InputHandler,
    },
    ShellResult,
};
use ratatui::{backend::Backend, backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::info;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> ShellResult<()> {
    let cli = Cli::parse();
    let config = cli.engine_config()?;
    cli.init_logging()?;
    info!(?config, "starting calculator");

    let app = CalculatorApp::with_config(config);
    run_then_restore(
        || {
            enter_terminal()?;
            let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
            run_app(&mut terminal, app)
        },
        restore_terminal,
    )
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: CalculatorApp) -> ShellResult<()> {
    let input_handler = InputHandler::new();
    let mut area = Rect::default();

    loop {
        terminal.draw(|f| {
            area = f.area();
            render(&app, f);
        })?;

        let action = input_handler.handle_event(&event::read()?);
        app.apply(action, area);

        if app.should_quit() {
            break;
        }
    }

    info!("calculator closed");
    Ok(())
}
