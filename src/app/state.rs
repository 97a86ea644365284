//! Application state management
//!
//! The navigator decides which screen owns input: the menu, or a single
//! active time mode whose parent is the menu. Transitions are looked up in
//! an explicit table keyed by the current screen and the incoming input.

use crate::clock::TickSource;
use crate::timer::{Countdown, ModeKind, Stopwatch, TimeMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Screens the navigator can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    /// Mode selection, the root screen
    Menu,
    /// A running time mode
    Mode(ModeKind),
}

impl ScreenKind {
    /// Screen that "back" returns to. The menu is the root and has none.
    pub fn parent(&self) -> Option<ScreenKind> {
        match self {
            ScreenKind::Menu => None,
            ScreenKind::Mode(_) => Some(ScreenKind::Menu),
        }
    }
}

/// Resolved input intents delivered to the navigator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Start when stopped, pause when running
    Toggle,
    /// Return the active mode to its initial value
    Reset,
    /// Leave the current screen
    Back,
    /// Open a fresh stopwatch
    SelectStopwatch,
    /// Open a fresh countdown
    SelectCountdown,
    /// Exit the application
    Quit,
}

/// Result of handling one input or tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Input has no meaning on the current screen
    Ignored,
    /// Input delivered to the active screen, no screen change
    Stay,
    /// A fresh mode screen became active
    Entered(ModeKind),
    /// Active mode discarded, parent screen active again
    Back,
    /// Countdown ran out and control returned to its parent
    Expired,
    /// Application is shutting down
    Quit,
}

/// Look up the transition for `input` on the `current` screen.
///
/// `None` means the navigator is terminated; nothing leaves that state.
pub fn transition_for(current: Option<ScreenKind>, input: Input) -> Transition {
    let Some(screen) = current else {
        return Transition::Ignored;
    };

    match (screen, input) {
        (_, Input::Quit) => Transition::Quit,
        (_, Input::Back) => match screen.parent() {
            Some(_) => Transition::Back,
            None => Transition::Quit,
        },
        (ScreenKind::Menu, Input::SelectStopwatch) => Transition::Entered(ModeKind::Stopwatch),
        (ScreenKind::Menu, Input::SelectCountdown) => Transition::Entered(ModeKind::Countdown),
        (ScreenKind::Mode(_), Input::Toggle | Input::Reset) => Transition::Stay,
        _ => Transition::Ignored,
    }
}

#[derive(Debug)]
enum Screen<C: TickSource> {
    Menu,
    Active(TimeMode<C>),
    Terminal,
}

/// Screen-level state machine
#[derive(Debug)]
pub struct Navigator<C: TickSource + Clone> {
    clock: C,
    countdown_ms: u64,
    screen: Screen<C>,
}

impl<C: TickSource + Clone> Navigator<C> {
    /// Create a navigator at the menu.
    ///
    /// `countdown_ms` is the duration given to every countdown opened from
    /// the menu.
    pub fn new(clock: C, countdown_ms: u64) -> Self {
        Self {
            clock,
            countdown_ms,
            screen: Screen::Menu,
        }
    }

    /// Which screen is active, `None` once terminated
    pub fn active_kind(&self) -> Option<ScreenKind> {
        match &self.screen {
            Screen::Menu => Some(ScreenKind::Menu),
            Screen::Active(mode) => Some(ScreenKind::Mode(mode.kind())),
            Screen::Terminal => None,
        }
    }

    /// The active time mode, if a mode screen is showing
    pub fn active_mode(&self) -> Option<&TimeMode<C>> {
        match &self.screen {
            Screen::Active(mode) => Some(mode),
            _ => None,
        }
    }

    pub fn active_mode_mut(&mut self) -> Option<&mut TimeMode<C>> {
        match &mut self.screen {
            Screen::Active(mode) => Some(mode),
            _ => None,
        }
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.screen, Screen::Terminal)
    }

    /// Apply a single input to the active screen
    pub fn handle(&mut self, input: Input) -> Transition {
        let transition = transition_for(self.active_kind(), input);

        match transition {
            Transition::Ignored => {
                log::debug!("ignored {:?} on {:?}", input, self.active_kind());
            }
            Transition::Stay => {
                if let Some(mode) = self.active_mode_mut() {
                    match input {
                        Input::Toggle => mode.toggle(),
                        Input::Reset => mode.reset(),
                        _ => {}
                    }
                }
            }
            Transition::Entered(kind) => {
                log::info!("entering {}", kind);
                self.screen = Screen::Active(self.fresh_mode(kind));
            }
            Transition::Back | Transition::Expired => {
                log::info!("back to menu");
                self.screen = Screen::Menu;
            }
            Transition::Quit => {
                log::info!("quit requested");
                self.screen = Screen::Terminal;
            }
        }

        transition
    }

    /// Route a batch of inputs to the active screen, in order.
    ///
    /// Inputs after a quit are dropped.
    pub fn dispatch<I>(&mut self, inputs: I) -> Vec<Transition>
    where
        I: IntoIterator<Item = Input>,
    {
        let mut applied = Vec::new();
        for input in inputs {
            if self.is_terminated() {
                break;
            }
            applied.push(self.handle(input));
        }
        applied
    }

    /// Per-frame update: a countdown that has run out returns to its parent
    pub fn tick(&mut self) -> Transition {
        let expired = match self.active_mode_mut() {
            Some(mode) => mode.poll_expiry(),
            None => false,
        };

        if expired {
            log::info!("countdown expired, back to menu");
            self.screen = Screen::Menu;
            Transition::Expired
        } else {
            Transition::Stay
        }
    }

    fn fresh_mode(&self, kind: ModeKind) -> TimeMode<C> {
        match kind {
            ModeKind::Stopwatch => TimeMode::Stopwatch(Stopwatch::new(self.clock.clone())),
            ModeKind::Countdown => {
                TimeMode::Countdown(Countdown::new(self.clock.clone(), self.countdown_ms))
            }
        }
    }
}

/// Keyboard actions before they are resolved against the active screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Move menu highlight up (arrow up, k)
    Up,
    /// Move menu highlight down (arrow down, j)
    Down,
    /// Pick the highlighted menu entry (Enter)
    Confirm,
    /// Key bound directly to a navigator input
    Input(Input),
    /// No action
    None,
}

/// Convert keyboard event to a key action
pub fn key_to_action(key: KeyEvent) -> KeyAction {
    match key.code {
        // Quit keys
        KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Input(Input::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyAction::Input(Input::Quit)
        }

        // Timer controls
        KeyCode::Char(' ') => KeyAction::Input(Input::Toggle),
        KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Input(Input::Reset),

        // Mode shortcuts
        KeyCode::Char('1') | KeyCode::Char('s') => KeyAction::Input(Input::SelectStopwatch),
        KeyCode::Char('2') | KeyCode::Char('c') => KeyAction::Input(Input::SelectCountdown),

        // Menu navigation
        KeyCode::Up | KeyCode::Char('k') => KeyAction::Up,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::Down,
        KeyCode::Enter => KeyAction::Confirm,

        // Back/cancel
        KeyCode::Esc | KeyCode::Backspace => KeyAction::Input(Input::Back),

        _ => KeyAction::None,
    }
}
