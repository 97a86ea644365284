//! TUI application module
//!
//! Contains the terminal user interface components, screen navigation,
//! and the frame loop driving them.

pub mod app;
pub mod screens;
pub mod state;
pub mod tui;

pub use app::{resolve_event, route_events, shutdown_result, App};
pub use screens::{MenuScreen, TimerScreen};
pub use state::{key_to_action, Input, KeyAction, Navigator, ScreenKind, Transition};
pub use tui::Tui;
