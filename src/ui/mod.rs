//! Terminal bitmap viewer built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! - **[`app`]**: viewer state and keyboard event loop
//! - **[`panes`]**: stateless render functions for the bitmap and status bar
//! - **[`theme`]**: color palette shared by the panes
//!
//! [`run_viewer`] owns terminal setup: it enters raw mode and the alternate
//! screen, runs the [`App`], and restores the terminal whatever the outcome.

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

/// Show `rows` full screen until the user quits
pub fn run_viewer(rows: Vec<String>, title: String) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e);
    }

    let res = Terminal::new(CrosstermBackend::new(io::stdout())).and_then(|mut terminal| {
        let mut app = App::new(rows, title);
        let res = app.run(&mut terminal);
        terminal.show_cursor()?;
        res
    });

    // Restore terminal
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;

    res
}
