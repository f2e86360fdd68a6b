use serenity::all::{CreateEmbed, Mention, Timestamp};

use crate::model::presence::StatusSnapshot;

pub const REPORT_TITLE: &str = "🤖 Bot Status Monitor";
/// Discord blurple.
pub const REPORT_COLOR: u32 = 0x5865f2;

/// One monitored bot's line in the status report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusField {
    /// Mention of the bot, e.g. `<@123>`
    pub name: String,
    /// Glyph and bold uppercase label, e.g. `🌙 **IDLE**`
    pub value: String,
}

/// Display model of the `/status` reply.
///
/// Built from a snapshot and converted into an embed only when replying, so the
/// rendered content can be checked without going through Serenity's builders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub fields: Vec<StatusField>,
}

impl StatusReport {
    /// Builds one field per snapshot entry, in snapshot order.
    pub fn from_snapshot(snapshot: &StatusSnapshot) -> Self {
        let fields = snapshot
            .iter()
            .map(|(bot_id, status)| StatusField {
                name: Mention::User(bot_id).to_string(),
                value: format!("{} **{}**", status.glyph(), status.label()),
            })
            .collect();

        Self { fields }
    }

    /// Converts the report into an embed stamped with the current time.
    pub fn to_embed(&self) -> CreateEmbed {
        let fields = self
            .fields
            .iter()
            .map(|field| (field.name.clone(), field.value.clone(), true));

        CreateEmbed::new()
            .title(REPORT_TITLE)
            .color(REPORT_COLOR)
            .timestamp(Timestamp::now())
            .fields(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::presence::PresenceStatus;
    use serenity::all::UserId;

    /// Tests rendering an idle and a do-not-disturb bot.
    ///
    /// Expected: two fields in snapshot order with moon and no-entry glyphs
    #[test]
    fn renders_fields_in_snapshot_order() {
        let mut snapshot = StatusSnapshot::new();
        snapshot.insert(UserId::new(111), PresenceStatus::Idle);
        snapshot.insert(UserId::new(222), PresenceStatus::DoNotDisturb);

        let report = StatusReport::from_snapshot(&snapshot);

        assert_eq!(
            report.fields,
            vec![
                StatusField {
                    name: "<@111>".to_string(),
                    value: "🌙 **IDLE**".to_string(),
                },
                StatusField {
                    name: "<@222>".to_string(),
                    value: "⛔ **DND**".to_string(),
                },
            ]
        );
    }

    /// Tests that the embed carries the title, colour and inline fields.
    ///
    /// Expected: serialized embed with one inline field per bot
    #[test]
    fn converts_to_embed() {
        let mut snapshot = StatusSnapshot::new();
        snapshot.insert(UserId::new(111), PresenceStatus::Online);

        let embed = serde_json::to_value(StatusReport::from_snapshot(&snapshot).to_embed())
            .unwrap();

        assert_eq!(embed["title"], REPORT_TITLE);
        assert_eq!(embed["color"], REPORT_COLOR);
        assert_eq!(embed["fields"][0]["name"], "<@111>");
        assert_eq!(embed["fields"][0]["value"], "✅ **ONLINE**");
        assert_eq!(embed["fields"][0]["inline"], true);
        assert!(embed["timestamp"].is_string());
    }
}
