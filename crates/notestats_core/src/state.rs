use crate::view_model::AppViewModel;
use crate::{PluginSettings, TextStatistics};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    settings: PluginSettings,
    last_stats: Option<TextStatistics>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: PluginSettings) -> Self {
        Self {
            settings: settings.normalized(),
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            settings: self.settings.clone(),
            last_stats: self.last_stats,
            dirty: self.dirty,
        }
    }

    pub fn settings(&self) -> &PluginSettings {
        &self.settings
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn record_stats(&mut self, stats: TextStatistics) {
        self.last_stats = Some(stats);
        self.dirty = true;
    }

    pub(crate) fn replace_settings(&mut self, settings: PluginSettings) {
        let settings = settings.normalized();
        if self.settings != settings {
            self.settings = settings;
            self.dirty = true;
        }
    }
}
