use crate::{compute_statistics_opt, AppState, CommandId, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::CommandInvoked(CommandId::ShowNoteStats) => vec![Effect::RequestActiveText],
        Msg::CommandInvoked(CommandId::InsertTodayDate) => vec![Effect::InsertDate {
            format: state.settings().date_format.clone(),
        }],
        Msg::ActiveTextSupplied(text) => {
            let stats = compute_statistics_opt(text.as_deref());
            state.record_stats(stats);
            vec![Effect::DisplayStats(stats)]
        }
        Msg::SettingsChanged(settings) => {
            state.replace_settings(settings);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
