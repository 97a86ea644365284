//! Menu screen implementation
//!
//! Lists the timing modes with a movable highlight. Pointer clicks are
//! hit-tested against the area the list was last drawn in.

use crate::app::state::Input;
use crate::timer::ModeKind;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::time::Duration;

const MODES: [ModeKind; 2] = [ModeKind::Stopwatch, ModeKind::Countdown];

/// Menu screen component with mode selection
#[derive(Debug)]
pub struct MenuScreen {
    selected_index: usize,
    list_state: ListState,
    countdown_label: String,
    /// Inner area of the mode list from the last render
    list_area: Option<Rect>,
}

impl MenuScreen {
    /// Create a new menu screen. The countdown entry shows `countdown`.
    pub fn new(countdown: Duration) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            selected_index: 0,
            list_state,
            countdown_label: humantime::format_duration(countdown).to_string(),
            list_area: None,
        }
    }

    /// Get the currently highlighted mode
    pub fn selected_mode(&self) -> ModeKind {
        MODES[self.selected_index]
    }

    /// Navigator input that opens the highlighted mode
    pub fn selected_input(&self) -> Input {
        select_input(self.selected_mode())
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = MODES.len() - 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        if self.selected_index < MODES.len() - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Resolve a pointer release at terminal cell (`column`, `row`)
    pub fn input_at(&self, column: u16, row: u16) -> Option<Input> {
        let area = self.list_area?;
        if column < area.x
            || column >= area.x + area.width
            || row < area.y
            || row >= area.y + area.height
        {
            return None;
        }
        MODES
            .get(usize::from(row - area.y))
            .map(|mode| select_input(*mode))
    }

    /// Record where the list is drawn, for hit-testing
    pub fn set_list_area(&mut self, area: Rect) {
        self.list_area = Some(area);
    }

    /// Render the menu screen
    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Title and subtitle
                Constraint::Min(4),    // Mode list
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_title(f, chunks[0]);
        self.render_menu(f, chunks[1]);
        self.render_help(f, chunks[2]);
    }

    fn render_title(&self, f: &mut Frame, area: Rect) {
        let title_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(2)])
            .split(area);

        let title = Paragraph::new("STOPWATCH")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(title, title_chunks[0]);

        let subtitle = Paragraph::new("Choose a timer")
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(subtitle, title_chunks[1]);
    }

    fn render_menu(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = MODES
            .iter()
            .map(|mode| match mode {
                ModeKind::Stopwatch => ListItem::new("1  Stopwatch"),
                ModeKind::Countdown => {
                    ListItem::new(format!("2  Countdown ({})", self.countdown_label))
                }
            })
            .collect();

        let block = Block::default().borders(Borders::ALL).title("Modes");
        self.set_list_area(block.inner(area));

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let key = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let help_text = vec![Line::from(vec![
            Span::styled("↑↓", key),
            Span::raw(" Navigate  "),
            Span::styled("Enter", key),
            Span::raw(" Select  "),
            Span::styled("Esc/Q", key),
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

fn select_input(mode: ModeKind) -> Input {
    match mode {
        ModeKind::Stopwatch => Input::SelectStopwatch,
        ModeKind::Countdown => Input::SelectCountdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_screen_creation() {
        let screen = MenuScreen::new(Duration::from_secs(300));
        assert_eq!(screen.selected_index, 0);
        assert_eq!(screen.selected_mode(), ModeKind::Stopwatch);
        assert_eq!(screen.countdown_label, "5m");
    }

    #[test]
    fn test_menu_navigation() {
        let mut screen = MenuScreen::new(Duration::from_secs(60));

        screen.select_next();
        assert_eq!(screen.selected_input(), Input::SelectCountdown);

        // Wraps to the beginning
        screen.select_next();
        assert_eq!(screen.selected_input(), Input::SelectStopwatch);

        // Moving up from the first item wraps to the last
        screen.select_previous();
        assert_eq!(screen.selected_mode(), ModeKind::Countdown);
    }

    #[test]
    fn test_pointer_hit_testing() {
        let mut screen = MenuScreen::new(Duration::from_secs(60));
        assert_eq!(screen.input_at(5, 5), None);

        screen.set_list_area(Rect::new(1, 6, 40, 3));
        assert_eq!(screen.input_at(3, 6), Some(Input::SelectStopwatch));
        assert_eq!(screen.input_at(3, 7), Some(Input::SelectCountdown));
        // Inside the area but past the last entry
        assert_eq!(screen.input_at(3, 8), None);
        assert_eq!(screen.input_at(0, 6), None);
        assert_eq!(screen.input_at(3, 9), None);
    }
}
