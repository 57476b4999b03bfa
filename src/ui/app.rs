//! Bitmap viewer application state and event loop

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// The viewer state
pub struct App {
    /// Rendered bitmap rows
    pub rows: Vec<String>,

    /// Pane title, usually the file name
    pub title: String,

    /// Index of the first visible row
    pub scroll: usize,

    /// Rows visible in the last frame, used as the page size
    pub page_height: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(rows: Vec<String>, title: String) -> Self {
        App {
            rows,
            title,
            scroll: 0,
            page_height: 1,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the event loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let pane_title = format!("{} ({} rows)", self.title, self.rows.len());
        self.page_height = super::panes::render_bitmap_pane(
            frame,
            chunks[0],
            &pane_title,
            &self.rows,
            &mut self.scroll,
        );

        super::panes::render_status_bar(
            frame,
            chunks[1],
            &self.status_message,
            self.scroll,
            self.page_height,
            self.rows.len(),
        );
    }

    fn max_scroll(&self) -> usize {
        self.rows.len().saturating_sub(self.page_height)
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                self.status_message = "Scrolled up".to_string();
            }
            KeyCode::Down => {
                self.scroll = (self.scroll + 1).min(self.max_scroll());
                self.status_message = "Scrolled down".to_string();
            }
            KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_sub(self.page_height);
                self.status_message = "Page up".to_string();
            }
            KeyCode::PageDown => {
                self.scroll = (self.scroll + self.page_height).min(self.max_scroll());
                self.status_message = "Page down".to_string();
            }
            KeyCode::Home | KeyCode::Backspace => {
                self.scroll = 0;
                self.status_message = "Jumped to top".to_string();
            }
            KeyCode::End | KeyCode::Enter => {
                self.scroll = self.max_scroll();
                self.status_message = "Jumped to bottom".to_string();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn draw(app: &mut App, terminal: &mut Terminal<TestBackend>) -> Vec<String> {
        terminal.draw(|f| app.render(f)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|line| line.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn numbered_rows(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("row{:02}", i)).collect()
    }

    #[test]
    fn test_renders_rows_and_status() {
        let mut app = App::new(vec!["###  ".into(), " ####".into()], "logo.txt".into());
        let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
        let screen = draw(&mut app, &mut terminal);

        assert!(screen[0].contains("logo.txt (2 rows)"));
        assert!(screen[1].contains("###"));
        assert!(screen[2].contains(" ####"));
        assert!(screen[7].contains("Rows 1-2/2"));
    }

    #[test]
    fn test_empty_bitmap_placeholder() {
        let mut app = App::new(Vec::new(), "blank".into());
        let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();
        let screen = draw(&mut app, &mut terminal);
        assert!(screen[1].contains("(empty bitmap)"));
        assert!(screen[5].contains("Rows 0/0"));
    }

    #[test]
    fn test_scrolling_is_clamped() {
        let mut app = App::new(numbered_rows(20), "tall".into());
        // 8 lines: 7 for the pane (5 visible rows) + status bar
        let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
        draw(&mut app, &mut terminal);
        assert_eq!(app.page_height, 5);

        press(&mut app, KeyCode::Up);
        assert_eq!(app.scroll, 0);

        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.scroll, 5);
        let screen = draw(&mut app, &mut terminal);
        assert!(screen[1].contains("row05"));

        press(&mut app, KeyCode::End);
        assert_eq!(app.scroll, 15);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.scroll, 15);
        let screen = draw(&mut app, &mut terminal);
        assert!(screen[5].contains("row19"));
        assert!(screen[7].contains("Rows 16-20/20"));

        press(&mut app, KeyCode::Home);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(Vec::new(), "x".into());
        press(&mut app, KeyCode::Char('a'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
