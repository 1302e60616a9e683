//! Main TUI application state and logic

use crate::compiler::Algorithm;
use crate::controller::{RunController, Tick};
use crate::pacing::{FixedPacer, Pacer};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::{Duration, Instant};

/// Upper bound on how long the loop blocks waiting for input
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// The main application state
pub struct App<P: Pacer = FixedPacer> {
    /// The run controller and the sequence it owns
    pub controller: RunController,

    /// Delay policy between playback steps
    pub pacer: P,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports an error
    pub is_error: bool,

    /// When the next playback step is due.
    /// Fixed when the previous step is taken, so a speed change only
    /// affects the pause after the next step.
    pub next_step_at: Instant,
}

impl<P: Pacer> App<P> {
    /// Create a new app around the given controller
    pub fn new(controller: RunController, pacer: P) -> Self {
        App {
            controller,
            pacer,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_error: false,
            next_step_at: Instant::now(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Advance playback once the pause after the last step is over
            if self.controller.is_running() && Instant::now() >= self.next_step_at {
                self.advance();
            }

            // Use poll with timeout so playback keeps moving without input
            let timeout = if self.controller.is_running() {
                self.next_step_at
                    .saturating_duration_since(Instant::now())
                    .min(POLL_INTERVAL)
            } else {
                POLL_INTERVAL * 5
            };
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Navbar on top, bars in the middle, status bar at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        let running = self.controller.is_running();

        super::panes::render_navbar(frame, chunks[0], &self.controller.settings(), running);

        super::panes::render_bars_pane(frame, chunks[1], self.controller.elements(), running);

        super::panes::render_status_bar(
            frame,
            chunks[2],
            super::panes::StatusRenderData {
                message: &self.status_message,
                state: self.controller.state(),
                progress: self.controller.progress(),
                is_done: !self.controller.store().is_empty() && self.controller.store().all_done(),
                is_error: self.is_error,
            },
        );
    }

    /// Apply one playback step and schedule the next
    fn advance(&mut self) {
        match self.controller.tick() {
            Ok(Tick::Step(_)) => {
                self.next_step_at = Instant::now() + self.controller.delay(&self.pacer);
            }
            Ok(Tick::Finished(summary)) => {
                self.status_message = format!(
                    "{} finished: {} moves, {} steps",
                    summary.algorithm.name(),
                    summary.moves,
                    summary.steps
                );
            }
            Ok(Tick::Idle) => {}
            Err(e) => {
                self.is_error = true;
                self.status_message = format!("Run aborted: {}", e);
            }
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Enter | KeyCode::Char('s') => self.start(),
            KeyCode::Char('r') => {
                if self.controller.regenerate() {
                    self.set_status("New random sequence");
                } else {
                    self.set_status("Cannot change the sequence while sorting");
                }
            }
            KeyCode::Char('a') => {
                let next = self.controller.settings().algorithm.next();
                self.select_algorithm(next);
            }
            KeyCode::Char('A') => {
                let prev = self.controller.settings().algorithm.prev();
                self.select_algorithm(prev);
            }
            // Number keys pick an algorithm by its menu number
            KeyCode::Char(c @ '1'..='5') => {
                if let Some(algorithm) = c
                    .to_digit(10)
                    .and_then(|n| Algorithm::from_number(n as u8).ok())
                {
                    self.select_algorithm(algorithm);
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let size = self.controller.settings().size.next();
                self.select_size(size);
            }
            KeyCode::Char('-') => {
                let size = self.controller.settings().size.prev();
                self.select_size(size);
            }
            KeyCode::Char('>') | KeyCode::Char('.') => {
                let speed = self.controller.speed().faster();
                self.controller.set_speed(speed);
                self.set_status(&format!("Speed {}", speed));
            }
            KeyCode::Char('<') | KeyCode::Char(',') => {
                let speed = self.controller.speed().slower();
                self.controller.set_speed(speed);
                self.set_status(&format!("Speed {}", speed));
            }
            _ => {}
        }
    }

    fn start(&mut self) {
        match self.controller.start() {
            Ok(()) => {
                self.next_step_at = Instant::now();
                let name = self.controller.settings().algorithm.name();
                self.set_status(&format!("Running {}...", name));
            }
            Err(e) => {
                self.is_error = true;
                self.status_message = format!("Cannot start: {}", e);
            }
        }
    }

    fn select_algorithm(&mut self, algorithm: Algorithm) {
        if self.controller.set_algorithm(algorithm) {
            self.set_status(&format!("Selected {}", algorithm.name()));
        } else {
            self.set_status("Cannot change the algorithm while sorting");
        }
    }

    fn select_size(&mut self, size: crate::config::Size) {
        if self.controller.set_size(size) {
            self.set_status(&format!("Size {}", size));
        } else {
            self.set_status("Cannot change the size while sorting");
        }
    }

    fn set_status(&mut self, message: &str) {
        self.is_error = false;
        self.status_message = message.to_string();
    }
}
