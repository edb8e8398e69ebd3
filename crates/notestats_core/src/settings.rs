/// Default pattern for the date insertion command (chrono `strftime` syntax).
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Plugin configuration, passed explicitly to whatever needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginSettings {
    pub date_format: String,
}

impl PluginSettings {
    /// Replaces a blank date format with the default.
    pub fn normalized(mut self) -> Self {
        if self.date_format.trim().is_empty() {
            self.date_format = DEFAULT_DATE_FORMAT.to_string();
        }
        self
    }
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}
