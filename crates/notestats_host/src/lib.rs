//! Note stats host layer: capability traits and effect execution.
mod date;
mod host;
mod runner;

pub use date::{format_date, Clock, DateFormatError, FixedClock, SystemClock};
pub use host::{EditorHost, SelectionEditor, StatsDisplay, TextSource};
pub use runner::{dispatch, EffectRunner};
