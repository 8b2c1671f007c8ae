//! Test factories for creating Serenity User and Message objects.

use serenity::all::{Message, User};

/// Timestamp given to every test message.
pub const TEST_MESSAGE_TIMESTAMP: &str = "2024-04-14T02:00:00.000000+00:00";

/// Creates a test Serenity User.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `name` - Username
/// - `avatar` - Avatar hash (32 hex characters), or `None` for the default avatar
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
pub fn create_test_user(user_id: u64, name: &str, avatar: Option<&str>) -> User {
    serde_json::from_value(user_json(user_id, name, avatar))
        .expect("Failed to create test user - invalid JSON structure")
}

/// Creates a test guild text message posted at [`TEST_MESSAGE_TIMESTAMP`].
///
/// Each entry of `attachment_urls` becomes an attachment with that URL. Like messages
/// fetched over HTTP, the result carries no guild id.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Channel the message was posted in
/// - `author` - Message author, see [`create_test_user`]
/// - `content` - Message text
/// - `attachment_urls` - Attachment URLs in order
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    author: &User,
    content: &str,
    attachment_urls: &[&str],
) -> Message {
    let attachments: Vec<serde_json::Value> = attachment_urls
        .iter()
        .enumerate()
        .map(|(index, url)| {
            serde_json::json!({
                "id": (message_id + index as u64 + 1).to_string(),
                "filename": format!("attachment-{}.png", index),
                "size": 1024,
                "url": url,
                "proxy_url": url,
                "height": 64,
                "width": 64,
                "content_type": "image/png",
            })
        })
        .collect();

    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "author": user_json(
            author.id.get(),
            &author.name,
            author.avatar.as_ref().map(|hash| hash.to_string()).as_deref(),
        ),
        "content": content,
        "timestamp": TEST_MESSAGE_TIMESTAMP,
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "attachments": attachments,
        "embeds": [],
        "pinned": false,
        "type": 0,
    }))
    .expect("Failed to create test message - invalid JSON structure")
}

fn user_json(user_id: u64, name: &str, avatar: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "id": user_id.to_string(),
        "username": name,
        "global_name": null,
        "avatar": avatar,
    })
}
