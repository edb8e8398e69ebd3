use crate::{PluginSettings, TextStatistics};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub settings: PluginSettings,
    pub last_stats: Option<TextStatistics>,
    pub dirty: bool,
}
