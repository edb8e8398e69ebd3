use chrono::NaiveDate;
use notestats_core::{AppState, CommandId, Msg, PluginSettings, TextStatistics};
use notestats_host::{
    dispatch, EffectRunner, FixedClock, SelectionEditor, StatsDisplay, TextSource,
};
use pretty_assertions::assert_eq;

#[derive(Default)]
struct RecordingHost {
    text: Option<String>,
    displayed: Vec<TextStatistics>,
    inserted: Vec<String>,
}

impl TextSource for RecordingHost {
    fn active_text(&self) -> Option<String> {
        self.text.clone()
    }
}

impl StatsDisplay for RecordingHost {
    fn display_stats(&mut self, stats: &TextStatistics) {
        self.displayed.push(*stats);
    }
}

impl SelectionEditor for RecordingHost {
    fn replace_selection(&mut self, text: &str) {
        self.inserted.push(text.to_string());
    }
}

fn clock() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2025, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap(),
    )
}

fn runner_with_text(text: Option<&str>) -> EffectRunner<RecordingHost, FixedClock> {
    let host = RecordingHost {
        text: text.map(ToOwned::to_owned),
        ..RecordingHost::default()
    };
    EffectRunner::new(host, clock())
}

#[test]
fn show_stats_round_trips_through_host() {
    let mut runner = runner_with_text(Some("Hello   world  again"));
    let state = dispatch(
        AppState::new(),
        Msg::CommandInvoked(CommandId::ShowNoteStats),
        &mut runner,
    );

    let expected = TextStatistics {
        word_count: 3,
        character_count: 20,
    };
    assert_eq!(runner.host().displayed, vec![expected]);
    assert_eq!(state.view().last_stats, Some(expected));
    assert!(runner.host().inserted.is_empty());
}

#[test]
fn show_stats_without_active_note_displays_zero() {
    let mut runner = runner_with_text(None);
    dispatch(
        AppState::new(),
        Msg::CommandInvoked(CommandId::ShowNoteStats),
        &mut runner,
    );

    assert_eq!(runner.into_host().displayed, vec![TextStatistics::EMPTY]);
}

#[test]
fn insert_date_replaces_selection() {
    let mut runner = runner_with_text(Some("ignored"));
    let state = AppState::with_settings(PluginSettings {
        date_format: "%d.%m.%Y".to_string(),
    });
    dispatch(
        state,
        Msg::CommandInvoked(CommandId::InsertTodayDate),
        &mut runner,
    );

    assert_eq!(runner.host().inserted, vec!["31.12.2025".to_string()]);
    assert!(runner.host().displayed.is_empty());
}

#[test]
fn invalid_date_format_leaves_selection_untouched() {
    let mut runner = runner_with_text(None);
    let state = AppState::with_settings(PluginSettings {
        date_format: "%Q".to_string(),
    });
    dispatch(
        state,
        Msg::CommandInvoked(CommandId::InsertTodayDate),
        &mut runner,
    );

    assert!(runner.host().inserted.is_empty());
}
