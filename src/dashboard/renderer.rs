//! Dashboard renderer.
//!
//! Handles terminal setup, the event loop, and teardown.

use super::app::DashboardApp;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;

pub type DashboardTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Initialize terminal for the dashboard.
pub fn init_terminal() -> io::Result<DashboardTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restore terminal to normal state.
pub fn restore_terminal(terminal: &mut DashboardTerminal) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Main event loop: redraw, wait for input, dispatch.
pub fn run_event_loop(terminal: &mut DashboardTerminal, app: &mut DashboardApp) -> io::Result<()> {
    let poll_rate = Duration::from_millis(250);

    while app.running {
        terminal.draw(|f| app.render(f))?;

        if event::poll(poll_rate)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}
