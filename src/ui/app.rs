//! Main TUI application state and logic

use crate::snapshot::{Playback, PlaybackError};
use crate::ui::panes::{self, SourceRenderData, StatusRenderData};
use crate::ui::theme::{Theme, DARK_THEME, LIGHT_THEME};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// The main application state
pub struct App {
    /// Cursor over the generated trace
    pub playback: Playback,

    /// The source code being traced
    pub source_code: String,

    /// 1-based line the breakpoint cursor sits on
    pub cursor_line: usize,

    pub theme: &'static Theme,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Delay between auto-play steps
    pub play_interval: Duration,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(playback: Playback, source_code: String, play_interval: Duration) -> Self {
        let cursor_line = playback.current().line_number;
        App {
            playback,
            source_code,
            cursor_line,
            theme: &DARK_THEME,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            play_interval,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= self.play_interval {
                self.advance_playback();
                self.last_play_time = Instant::now();
            }

            // Poll with a timeout so auto-play keeps ticking
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// One auto-play tick: advance a step, pausing at breakpoints and the end
    pub fn advance_playback(&mut self) {
        match self.playback.step_forward() {
            Ok(()) if self.playback.at_breakpoint() => {
                self.is_playing = false;
                self.status_message = format!(
                    "Paused at breakpoint on line {}",
                    self.playback.current().line_number
                );
            }
            Ok(()) => {
                self.status_message = "Playing...".to_string();
            }
            Err(_) => {
                self.is_playing = false;
                self.status_message = "Playback complete".to_string();
            }
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[0]);

        // Left column: Source (top) | Output (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[0]);

        // Right column: Variables (top) | Chart (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(columns[1]);

        let step = self.playback.current();
        let previous = self
            .playback
            .position()
            .checked_sub(1)
            .and_then(|i| self.playback.steps().get(i));
        let breakpoints = self.playback.breakpoints();

        panes::render_source_pane(
            frame,
            left_rows[0],
            &SourceRenderData {
                source: &self.source_code,
                current_line: step.line_number,
                cursor_line: self.cursor_line,
                breakpoints: &breakpoints,
            },
            self.theme,
        );

        panes::render_output_pane(
            frame,
            left_rows[1],
            &self.playback.output_so_far(),
            self.theme,
        );

        panes::render_variables_pane(frame, right_rows[0], step, previous, self.theme);
        panes::render_chart_pane(frame, right_rows[1], step, self.theme);

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &StatusRenderData {
                message: &self.status_message,
                current_step: self.playback.position(),
                total_steps: self.playback.len(),
                is_playing: self.is_playing,
                at_breakpoint: self.playback.at_breakpoint(),
            },
            self.theme,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1);
                let stepped = (0..n)
                    .take_while(|_| self.playback.step_forward().is_ok())
                    .count();
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.is_playing = false;
                let result = self.playback.step_backward();
                self.report_step(result, "Stepped backward", "Cannot step backward");
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.is_playing = false;
                let result = self.playback.step_forward();
                self.report_step(result, "Stepped forward", "Cannot step forward");
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor_line = self.cursor_line.saturating_sub(1).max(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let last_line = self.source_code.lines().count().max(1);
                self.cursor_line = (self.cursor_line + 1).min(last_line);
            }
            KeyCode::Char('b') => {
                let line = self.cursor_line;
                self.status_message = if self.playback.toggle_breakpoint(line) {
                    format!("Breakpoint set on line {}", line)
                } else {
                    format!("Breakpoint cleared on line {}", line)
                };
            }
            KeyCode::Char('c') => {
                self.is_playing = false;
                self.status_message = match self.playback.run_to_breakpoint() {
                    Ok(_) if self.playback.at_breakpoint() => format!(
                        "Hit breakpoint on line {}",
                        self.playback.current().line_number
                    ),
                    Ok(_) => "Ran to end (no breakpoint hit)".to_string(),
                    Err(e) => format!("Cannot continue: {}", e),
                };
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Char('t') => {
                self.theme = if std::ptr::eq(self.theme, &DARK_THEME) {
                    &LIGHT_THEME
                } else {
                    &DARK_THEME
                };
                self.status_message = format!("Theme: {}", self.theme.name);
            }
            KeyCode::Enter | KeyCode::End => {
                self.is_playing = false;
                self.playback.jump_to_end();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace | KeyCode::Home => {
                self.is_playing = false;
                self.playback.rewind_to_start();
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }

    fn toggle_play(&mut self) {
        if self.is_playing {
            self.is_playing = false;
            self.status_message = "Paused".to_string();
            return;
        }

        // Replay from the top once the end has been reached
        if self.playback.is_at_end() {
            self.playback.rewind_to_start();
        }
        self.is_playing = true;
        self.last_play_time = Instant::now()
            .checked_sub(self.play_interval)
            .unwrap_or_else(Instant::now);
        self.status_message = "Playing...".to_string();
    }

    fn report_step(&mut self, result: Result<(), PlaybackError>, ok: &str, failed: &str) {
        self.status_message = match result {
            Ok(()) => ok.to_string(),
            Err(e) => format!("{}: {}", failed, e),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{generate_trace, Language, DEMO_SOURCE};
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        let steps = generate_trace(DEMO_SOURCE, Language::JavaScript).unwrap();
        let playback = Playback::new(steps).unwrap();
        App::new(playback, DEMO_SOURCE.to_string(), Duration::from_millis(10))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_arrow_keys_step() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.playback.position(), 2);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.playback.position(), 1);

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Left);
        assert!(app.status_message.starts_with("Cannot step backward"));
    }

    #[test]
    fn test_number_key_steps_many() {
        let mut app = app();
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.playback.position(), 5);
        assert_eq!(app.status_message, "Stepped forward 5 step(s)");
    }

    #[test]
    fn test_breakpoint_on_cursor_and_continue() {
        let mut app = app();
        // Cursor starts on the array declaration (line 2); move to the swap line
        for _ in 0..6 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.cursor_line, 8);
        press(&mut app, KeyCode::Char('b'));
        assert!(app.playback.has_breakpoint(8));

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.playback.current().line_number, 8);
        assert_eq!(app.status_message, "Hit breakpoint on line 8");
    }

    #[test]
    fn test_autoplay_pauses_on_breakpoint() {
        let mut app = app();
        app.playback.toggle_breakpoint(5);
        app.is_playing = true;

        app.advance_playback(); // n init, line 3
        assert!(app.is_playing);
        app.advance_playback(); // outer loop, line 5
        assert!(!app.is_playing);
        assert_eq!(app.status_message, "Paused at breakpoint on line 5");
    }

    #[test]
    fn test_autoplay_stops_at_end() {
        let mut app = app();
        app.playback.jump_to_end();
        app.is_playing = true;
        app.advance_playback();
        assert!(!app.is_playing);
        assert_eq!(app.status_message, "Playback complete");
    }

    #[test]
    fn test_theme_toggle_and_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme.name, "light");
        assert!(std::ptr::eq(app.theme, &LIGHT_THEME));
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme.name, "dark");
        assert!(std::ptr::eq(app.theme, &DARK_THEME));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_theme_toggle_from_light_start() {
        let mut app = app();
        app.theme = &LIGHT_THEME;
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme.name, "dark");
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme.name, "light");
    }

    #[test]
    fn test_render_shows_panes() {
        let mut app = app();
        app.playback.jump_to_end();
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Source"));
        assert!(screen.contains("Variables"));
        assert!(screen.contains("Chart: arr"));
        assert!(screen.contains("[11, 12, 22, 25, 34, 64, 90]"));
        assert!(screen.contains("Step 81/81"));
    }
}
