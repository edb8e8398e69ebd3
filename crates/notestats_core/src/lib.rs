//! Note stats core: text statistics and the pure plugin state machine.
mod command;
mod effect;
mod msg;
mod settings;
mod state;
mod stats;
mod update;
mod view_model;

pub use command::CommandId;
pub use effect::Effect;
pub use msg::Msg;
pub use settings::{PluginSettings, DEFAULT_DATE_FORMAT};
pub use state::AppState;
pub use stats::{
    compute_statistics, compute_statistics_opt, StatisticsCounter, TextStatistics,
    TextStatsEngine,
};
pub use update::update;
pub use view_model::AppViewModel;
