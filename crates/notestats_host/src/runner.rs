use std::collections::VecDeque;

use notestats_core::{update, AppState, Effect, Msg};
use notestats_logging::{notes_debug, notes_info, notes_warn};

use crate::date::{format_date, Clock};
use crate::host::EditorHost;

/// Executes core effects against a host and collects follow-up messages.
pub struct EffectRunner<H, C> {
    host: H,
    clock: C,
}

impl<H: EditorHost, C: Clock> EffectRunner<H, C> {
    pub fn new(host: H, clock: C) -> Self {
        Self { host, clock }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn run(&mut self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut follow_ups = Vec::new();
        for effect in effects {
            match effect {
                Effect::RequestActiveText => {
                    let text = self.host.active_text();
                    notes_debug!(
                        "RequestActiveText present={} len={}",
                        text.is_some(),
                        text.as_deref().map_or(0, str::len)
                    );
                    follow_ups.push(Msg::ActiveTextSupplied(text));
                }
                Effect::DisplayStats(stats) => {
                    notes_info!(
                        "DisplayStats words={} characters={}",
                        stats.word_count,
                        stats.character_count
                    );
                    self.host.display_stats(&stats);
                }
                Effect::InsertDate { format } => match format_date(&format, &self.clock) {
                    Ok(date) => self.host.replace_selection(&date),
                    Err(err) => notes_warn!("Skipping date insertion: {}", err),
                },
            }
        }
        follow_ups
    }
}

/// Feeds `msg` through `update` and runs effects until the queue drains.
pub fn dispatch<H: EditorHost, C: Clock>(
    mut state: AppState,
    msg: Msg,
    runner: &mut EffectRunner<H, C>,
) -> AppState {
    let mut inbox = VecDeque::from([msg]);
    while let Some(msg) = inbox.pop_front() {
        let (next, effects) = update(state, msg);
        state = next;
        inbox.extend(runner.run(effects));
    }
    state
}
