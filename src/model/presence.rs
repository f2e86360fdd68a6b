use serenity::all::{OnlineStatus, Presence, UserId};

/// Presence of a monitored bot as reported by Discord.
///
/// `Offline` doubles as the fallback for any bot whose presence cannot be
/// resolved, so a snapshot never has gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceStatus {
    Online,
    Idle,
    DoNotDisturb,
    Offline,
}

impl PresenceStatus {
    /// Resolves the status from an optional cached presence.
    ///
    /// A missing presence means Discord has nothing to report for the member,
    /// which it only does for offline accounts.
    pub fn from_presence(presence: Option<&Presence>) -> Self {
        presence.map_or(Self::Offline, |p| Self::from(p.status))
    }

    /// Discord's wire name for the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Idle => "idle",
            Self::DoNotDisturb => "dnd",
            Self::Offline => "offline",
        }
    }

    /// Uppercase label shown in the status report.
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Online => "✅",
            Self::Idle => "🌙",
            Self::DoNotDisturb => "⛔",
            Self::Offline => "🔴",
        }
    }

    pub fn is_offline(&self) -> bool {
        *self == Self::Offline
    }
}

impl From<OnlineStatus> for PresenceStatus {
    fn from(status: OnlineStatus) -> Self {
        match status {
            OnlineStatus::Online => Self::Online,
            OnlineStatus::Idle => Self::Idle,
            OnlineStatus::DoNotDisturb => Self::DoNotDisturb,
            // Invisible accounts are reported to other users as offline
            _ => Self::Offline,
        }
    }
}

/// Point-in-time presence of every monitored bot.
///
/// Entries keep the configured order and each configured bot appears exactly once.
/// A snapshot is built fresh for every poll or command and never compared against
/// a previous one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusSnapshot {
    entries: Vec<(UserId, PresenceStatus)>,
}

impl StatusSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the status of a bot, replacing any earlier entry for the same bot.
    pub fn insert(&mut self, bot_id: UserId, status: PresenceStatus) {
        match self.entries.iter_mut().find(|(id, _)| *id == bot_id) {
            Some(entry) => entry.1 = status,
            None => self.entries.push((bot_id, status)),
        }
    }

    #[cfg(test)]
    pub fn get(&self, bot_id: UserId) -> Option<PresenceStatus> {
        self.entries
            .iter()
            .find(|(id, _)| *id == bot_id)
            .map(|(_, status)| *status)
    }

    pub fn iter(&self) -> impl Iterator<Item = (UserId, PresenceStatus)> + '_ {
        self.entries.iter().copied()
    }

    /// Bots currently resolved as offline, in snapshot order.
    pub fn offline(&self) -> impl Iterator<Item = UserId> + '_ {
        self.iter()
            .filter(|(_, status)| status.is_offline())
            .map(|(id, _)| id)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
