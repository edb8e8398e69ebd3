//! Terminal host for the note stats plugin.
mod app;
mod config;
mod logging;
mod terminal;

pub use app::run_app;
