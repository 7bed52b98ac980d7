use std::sync::Arc;

use twilight_model::gateway::payload::incoming::MessageCreate;

use addons_core::Context;
use addons_utils::gateway::HttpGateway;
use addons_utils::menu::DisplayTarget;
use addons_utils::pagination::{Paginator, parse_one_based_page};
use addons_utils::reply::{NoticeLevel, reply_notice};

use crate::commands::{COMMANDS, CommandMeta};

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "List available commands.",
    usage: "!help [page]",
};

const COMMANDS_PER_PAGE: usize = 5;

/// Display the command list in a reaction-paginated embed.
///
/// Only the invoking user can turn pages.
pub async fn run(ctx: Context, msg: Box<MessageCreate>, arg1: Option<&str>) -> anyhow::Result<()> {
    let Some(page) = parse_one_based_page(arg1) else {
        let usage = format!("Usage: `{}` (page starts at 1)", META.usage);
        reply_notice(&ctx.http, msg.channel_id, NoticeLevel::Warning, &usage).await?;
        return Ok(());
    };

    let entries: Vec<String> = COMMANDS
        .iter()
        .map(|meta| format!("`{}`: {}", meta.usage, meta.desc))
        .collect();

    let paginator = Paginator::builder()
        .items(entries)
        .items_per_page(COMMANDS_PER_PAGE)
        .number_items(true)
        .allow_user(msg.author.id)
        .build()?;

    let gateway = HttpGateway::new(Arc::clone(&ctx.http));
    paginator
        .paginate(
            &gateway,
            &ctx.waiter,
            DisplayTarget::Channel(msg.channel_id),
            page,
        )
        .await
}
