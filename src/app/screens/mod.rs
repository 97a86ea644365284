//! TUI screen components
//!
//! Contains individual screen implementations for the menu and the active
//! timing mode.

pub mod menu;
pub mod timer;

pub use menu::MenuScreen;
pub use timer::TimerScreen;
