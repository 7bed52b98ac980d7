use twilight_model::gateway::payload::incoming::MessageCreate;

use addons_core::Context;
use addons_utils::reply::{NoticeLevel, reply_notice};

use crate::commands::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "ping",
    desc: "Check that the bot is alive.",
    usage: "!ping",
};

/// Liveness check.
pub async fn run(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    reply_notice(&ctx.http, msg.channel_id, NoticeLevel::Success, "Pong!").await?;
    Ok(())
}
