use crate::{CommandId, PluginSettings};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User ran a registered command.
    CommandInvoked(CommandId),
    /// Host answered a text request; `None` when no note is active.
    ActiveTextSupplied(Option<String>),
    /// Settings were edited or reloaded.
    SettingsChanged(PluginSettings),
    /// Fallback for placeholder wiring.
    NoOp,
}
