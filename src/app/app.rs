//! Main application controller
//!
//! Owns the terminal, the navigator and the screen components, and runs
//! the frame loop: read events, dispatch, poll expiry, redraw.

use crate::{
    app::{
        screens::{MenuScreen, TimerScreen},
        state::{key_to_action, Input, KeyAction, Navigator, ScreenKind, Transition},
        tui::Tui,
    },
    clock::{SystemClock, TickSource},
    config::AppConfig,
    Result, StopwatchError,
};
use crossterm::event::{Event, MouseButton, MouseEventKind};
use std::io;
use tokio::time::{self, MissedTickBehavior};

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Screen state machine
    navigator: Navigator<SystemClock>,
    /// Application config
    config: AppConfig,
    /// Screen components
    menu_screen: MenuScreen,
    timer_screen: TimerScreen,
}

impl App {
    /// Create a new application instance
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            tui: Tui::new().map_err(|e| StopwatchError::TuiError(e.to_string()))?,
            navigator: Navigator::new(SystemClock::new(), config.countdown_ms()),
            menu_screen: MenuScreen::new(config.countdown_duration),
            timer_screen: TimerScreen::new(config.time_format),
            config,
        })
    }

    /// Initialize the application and TUI
    pub fn init(&mut self) -> Result<()> {
        self.tui
            .init()
            .map_err(|e| StopwatchError::TuiError(e.to_string()))?;
        log::info!(
            "started, countdown {}",
            humantime::format_duration(self.config.countdown_duration)
        );
        Ok(())
    }

    /// Restore the terminal
    pub fn restore(&mut self) -> Result<()> {
        self.tui.restore()?;
        Ok(())
    }

    /// Run the main application loop until the navigator terminates
    pub async fn run(&mut self) -> Result<()> {
        let mut frames = time::interval(self.config.frame_interval);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        while !self.navigator.is_terminated() {
            frames.tick().await;
            self.handle_events()?;
            self.update();
            if self.navigator.is_terminated() {
                break;
            }
            self.draw()?;
        }
        Ok(())
    }

    /// Draw the current screen
    fn draw(&mut self) -> io::Result<()> {
        let navigator = &self.navigator;
        let menu_screen = &mut self.menu_screen;
        let timer_screen = &self.timer_screen;
        self.tui.draw(|f| match navigator.active_mode() {
            Some(mode) => timer_screen.render(f, mode),
            None => menu_screen.render(f),
        })
    }

    /// Read pending terminal events and route them through the navigator
    fn handle_events(&mut self) -> Result<()> {
        let events = self.tui.drain_events()?;
        let transitions = route_events(&mut self.navigator, &mut self.menu_screen, &events);
        if transitions
            .iter()
            .any(|t| matches!(t, Transition::Entered(_)))
        {
            self.timer_screen.clear();
        }
        Ok(())
    }

    /// Per-frame state update
    fn update(&mut self) {
        self.navigator.tick();
        if let Some(mode) = self.navigator.active_mode() {
            self.timer_screen.sync(mode);
        }
    }
}

/// Combine the frame loop outcome with the terminal restore outcome.
///
/// A loop error wins over a restore error; both are logged.
pub fn shutdown_result(run: Result<()>, restored: Result<()>) -> Result<()> {
    if let Err(e) = &run {
        log::error!("application error: {}", e);
    }
    if let Err(e) = &restored {
        log::error!("failed to restore terminal: {}", e);
    }
    run.and(restored)
}

/// Resolve and apply events in order.
///
/// Each event is resolved against the screen left by the previous one, so a
/// batch that opens a mode sends its remaining keys to that mode. Events
/// after a quit are dropped.
pub fn route_events<C: TickSource + Clone>(
    navigator: &mut Navigator<C>,
    menu: &mut MenuScreen,
    events: &[Event],
) -> Vec<Transition> {
    let mut transitions = Vec::new();
    for event in events {
        if navigator.is_terminated() {
            break;
        }
        if let Some(input) = resolve_event(menu, navigator.active_kind(), event) {
            transitions.push(navigator.handle(input));
        }
    }
    transitions
}

/// Turn a terminal event into a navigator input.
///
/// Menu-local keys (highlight movement) are applied to `menu` directly and
/// produce no input. Pointer releases are hit-tested on the menu only.
pub fn resolve_event(
    menu: &mut MenuScreen,
    screen: Option<ScreenKind>,
    event: &Event,
) -> Option<Input> {
    let on_menu = screen == Some(ScreenKind::Menu);

    match event {
        Event::Key(key) => match key_to_action(*key) {
            KeyAction::Up if on_menu => {
                menu.select_previous();
                None
            }
            KeyAction::Down if on_menu => {
                menu.select_next();
                None
            }
            KeyAction::Confirm if on_menu => Some(menu.selected_input()),
            KeyAction::Input(input) => Some(input),
            _ => None,
        },
        Event::Mouse(mouse) if on_menu => match mouse.kind {
            MouseEventKind::Up(MouseButton::Left) => menu.input_at(mouse.column, mouse.row),
            _ => None,
        },
        _ => None,
    }
}
