//! Test factory for creating Serenity Presence objects.

use serenity::all::Presence;

/// Creates a test Serenity Presence for a user with the given status.
///
/// The presence carries no activities and no per-client status, which matches
/// what the gateway sends for most bot accounts.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `status` - Wire status string: `online`, `idle`, `dnd`, `invisible` or `offline`
///
/// # Returns
/// - `Presence` - A valid Serenity Presence struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Presence (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::presence::create_test_presence;
///
/// let presence = create_test_presence(123456789, "dnd");
/// assert_eq!(presence.user.id.get(), 123456789);
/// ```
pub fn create_test_presence(user_id: u64, status: &str) -> Presence {
    serde_json::from_value(serde_json::json!({
        "user": {
            "id": user_id.to_string(),
        },
        "guild_id": "100000000000000000",
        "status": status,
        "activities": [],
        "client_status": null,
    }))
    .expect("Failed to create test presence - invalid JSON structure")
}
