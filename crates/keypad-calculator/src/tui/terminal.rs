//! Terminal session setup and teardown

use std::io;

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::error::ShellResult;

/// Runs `body`, then `restore`, however `body` ended
///
/// When both fail the error from `body` is returned.
pub fn run_then_restore<T, E>(
    body: impl FnOnce() -> Result<T, E>,
    restore: impl FnOnce() -> Result<(), E>,
) -> Result<T, E> {
    let result = body();
    let restored = restore();
    let value = result?;
    restored?;
    Ok(value)
}

/// Switches to raw mode, the alternate screen and mouse capture
pub fn enter_terminal() -> ShellResult<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    Ok(())
}

/// Undoes [`enter_terminal`]; safe to call after a partial setup
pub fn restore_terminal() -> ShellResult<()> {
    let raw = disable_raw_mode();
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show)?;
    raw?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_restore_runs_after_success() {
        let restored = Cell::new(false);
        let result: Result<u8, String> = run_then_restore(
            || Ok(7),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert_eq!(result, Ok(7));
        assert!(restored.get());
    }

    #[test]
    fn test_restore_runs_after_setup_failure() {
        let restored = Cell::new(false);
        let result: Result<(), String> = run_then_restore(
            || Err("alternate screen unavailable".to_string()),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert_eq!(result, Err("alternate screen unavailable".to_string()));
        assert!(restored.get());
    }

    #[test]
    fn test_restore_failure_is_reported() {
        let result: Result<u8, String> =
            run_then_restore(|| Ok(1), || Err("raw mode stuck".to_string()));
        assert_eq!(result, Err("raw mode stuck".to_string()));
    }

    #[test]
    fn test_body_error_wins_over_restore_error() {
        let result: Result<(), String> = run_then_restore(
            || Err("draw failed".to_string()),
            || Err("raw mode stuck".to_string()),
        );
        assert_eq!(result, Err("draw failed".to_string()));
    }
}
