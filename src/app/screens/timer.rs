//! Timer screen implementation
//!
//! Shows the active mode's time as a large centered clock string, with
//! run status and the wall-clock time the current run was started.

use crate::clock::TickSource;
use crate::format::{format_millis, TimeFormat};
use crate::timer::TimeMode;
use chrono::{DateTime, Local};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Timer screen component rendering one time mode
#[derive(Debug, Default)]
pub struct TimerScreen {
    time_format: TimeFormat,
    /// Wall-clock time of the first start since the mode was entered or reset
    started_at: Option<DateTime<Local>>,
}

impl TimerScreen {
    /// Create a new timer screen
    pub fn new(time_format: TimeFormat) -> Self {
        Self {
            time_format,
            started_at: None,
        }
    }

    /// Forget per-run state when a fresh mode is entered
    pub fn clear(&mut self) {
        self.started_at = None;
    }

    /// Update per-run state after inputs were applied to `mode`.
    ///
    /// The start time is stamped on the first start and cleared once the
    /// mode is back at its initial value.
    pub fn sync<C: TickSource>(&mut self, mode: &TimeMode<C>) {
        if mode.is_running() {
            if self.started_at.is_none() {
                self.started_at = Some(Local::now());
            }
        } else if mode.display_ms() == initial_ms(mode) {
            self.started_at = None;
        }
    }

    pub fn started_at(&self) -> Option<DateTime<Local>> {
        self.started_at
    }

    /// Text shown for `mode` right now
    pub fn display_text<C: TickSource>(&self, mode: &TimeMode<C>) -> String {
        format_millis(mode.display_ms(), self.time_format)
    }

    /// Render the timer screen
    pub fn render<C: TickSource>(&self, f: &mut Frame, mode: &TimeMode<C>) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(5),    // Clock
                Constraint::Length(3), // Status
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_title(f, chunks[0], mode);
        self.render_clock(f, chunks[1], mode);
        self.render_status(f, chunks[2], mode);
        self.render_help(f, chunks[3]);
    }

    fn status_color<C: TickSource>(mode: &TimeMode<C>) -> Color {
        if mode.is_running() {
            Color::Green
        } else if mode.display_ms() == initial_ms(mode) {
            Color::Cyan
        } else {
            Color::Yellow
        }
    }

    fn render_title<C: TickSource>(&self, f: &mut Frame, area: Rect, mode: &TimeMode<C>) {
        let color = Self::status_color(mode);
        let title = Paragraph::new(mode.kind().label())
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );

        f.render_widget(title, area);
    }

    fn render_clock<C: TickSource>(&self, f: &mut Frame, area: Rect, mode: &TimeMode<C>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White));
        let inner = block.inner(area);
        f.render_widget(block, area);

        // Center the single clock line vertically
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        let clock = Paragraph::new(self.display_text(mode))
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(clock, rows[1]);
    }

    fn render_status<C: TickSource>(&self, f: &mut Frame, area: Rect, mode: &TimeMode<C>) {
        let state = if mode.is_running() {
            "Running"
        } else if mode.display_ms() == initial_ms(mode) {
            "Ready"
        } else {
            "Paused"
        };

        let mut spans = vec![Span::styled(
            state,
            Style::default()
                .fg(Self::status_color(mode))
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(started) = self.started_at {
            spans.push(Span::raw(format!(
                "  started {}",
                started.format("%H:%M:%S")
            )));
        }

        let status = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(Block::default().title("Status").borders(Borders::ALL));

        f.render_widget(status, area);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let key = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let help_text = vec![Line::from(vec![
            Span::styled("Space", key),
            Span::raw(" Start/Pause  "),
            Span::styled("R", key),
            Span::raw(" Reset  "),
            Span::styled("Esc", key),
            Span::raw(" Menu  "),
            Span::styled("Q", key),
            Span::raw(" Quit"),
        ])];

        let help = Paragraph::new(help_text)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );

        f.render_widget(help, area);
    }
}

/// Value the mode shows before it is first started
fn initial_ms<C: TickSource>(mode: &TimeMode<C>) -> u64 {
    match mode {
        TimeMode::Stopwatch(_) => 0,
        TimeMode::Countdown(cd) => cd.duration_ms(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::timer::{Countdown, Stopwatch};

    #[test]
    fn test_display_text_uses_format() {
        let clock = ManualClock::new(0);
        let mut mode = TimeMode::Stopwatch(Stopwatch::new(clock.clone()));
        mode.start();
        clock.advance(61_034);

        assert_eq!(TimerScreen::new(TimeFormat::Full).display_text(&mode), "00:01:01,03");
        assert_eq!(TimerScreen::new(TimeFormat::Compact).display_text(&mode), "01:01:03");
    }

    #[test]
    fn test_started_at_tracking() {
        let clock = ManualClock::new(0);
        let mut mode = TimeMode::Countdown(Countdown::new(clock.clone(), 1000));
        let mut screen = TimerScreen::new(TimeFormat::Full);

        screen.sync(&mode);
        assert!(screen.started_at().is_none());

        mode.toggle();
        screen.sync(&mode);
        let first = screen.started_at();
        assert!(first.is_some());

        // Pausing and resuming keeps the original start time
        clock.advance(100);
        mode.toggle();
        screen.sync(&mode);
        mode.toggle();
        screen.sync(&mode);
        assert_eq!(screen.started_at(), first);

        mode.reset();
        screen.sync(&mode);
        assert!(screen.started_at().is_none());
    }
}
