use crate::{
    data::{is_unique_violation, wall_of_shame::WallOfShameRepository},
    error::AppError,
    model::wall_of_shame::CreateWallOfShameParam,
};
use chrono::{TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_message_id;

fn param(message_id: u64) -> CreateWallOfShameParam {
    CreateWallOfShameParam {
        message_id,
        author_id: 42,
        author: "dumbass".to_string(),
        author_url: Some("https://cdn.discordapp.com/avatars/42/abc.png".to_string()),
        content: "pineapple belongs on pizza 🍍".to_string(),
        channel_name: "general".to_string(),
        channel_id: 7,
        created_at: Utc.with_ymd_and_hms(2024, 4, 14, 2, 0, 0).unwrap(),
        guild_name: "The Gym".to_string(),
        guild_id: 9,
        attachment_urls: vec![
            "https://cdn.discordapp.com/attachments/1/2/proof.png".to_string(),
            "https://cdn.discordapp.com/attachments/1/3/more.png".to_string(),
        ],
    }
}
