//! TUI application module
//!
//! Contains the terminal user interface components, screen management,
//! and the navigation state machine.

pub mod app;
pub mod controller;
pub mod screens;
pub mod state;
pub mod tui;

pub use app::App;
pub use controller::Controller;
pub use state::{NavigationAction, Screen, Session, StateManager, Trigger};
pub use tui::Tui;
