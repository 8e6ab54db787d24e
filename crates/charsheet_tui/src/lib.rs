//! Terminal character sheet built on ratatui.
pub mod app;
pub mod config;
pub mod input;
pub mod state;
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use app::App;
pub use config::TuiConfig;
