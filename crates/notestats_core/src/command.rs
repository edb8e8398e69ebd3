/// User-invocable actions the host binds to its command palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    ShowNoteStats,
    InsertTodayDate,
}

impl CommandId {
    /// Every command, in registration order.
    pub fn all() -> &'static [CommandId] {
        &[CommandId::ShowNoteStats, CommandId::InsertTodayDate]
    }

    /// Stable identifier the host registers the command under.
    pub fn id(self) -> &'static str {
        match self {
            CommandId::ShowNoteStats => "show-note-stats",
            CommandId::InsertTodayDate => "insert-today-date",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CommandId::ShowNoteStats => "Show note statistics",
            CommandId::InsertTodayDate => "Insert today's date",
        }
    }

    pub fn from_id(id: &str) -> Option<CommandId> {
        Self::all().iter().copied().find(|command| command.id() == id)
    }
}
