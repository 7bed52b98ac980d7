use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use twilight_model::gateway::payload::incoming::MessageCreate;

use addons_core::Context;
use addons_utils::gateway::HttpGateway;
use addons_utils::menu::DisplayTarget;
use addons_utils::pagination::{Paginator, parse_one_based_page, total_pages};
use addons_utils::reply::{NoticeLevel, reply_notice};

use crate::commands::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "pagetest",
    desc: "Exercise reaction pagination.",
    usage: "!pagetest [page]",
};

const ITEMS_PER_PAGE: usize = 10;
const ITEM_COUNT: usize = 23;

/// Reaction pagination exercise over generated items.
///
/// Inputs:
/// - optional start page: `!pagetest [page]`.
///
/// Error behavior:
/// - returns usage text on invalid page input.
/// - returns bounds text when the requested page is out of range.
pub async fn run(ctx: Context, msg: Box<MessageCreate>, arg1: Option<&str>) -> anyhow::Result<()> {
    let Some(page) = parse_one_based_page(arg1) else {
        let usage = format!("Usage: `{}` (page starts at 1)", META.usage);
        reply_notice(&ctx.http, msg.channel_id, NoticeLevel::Warning, &usage).await?;
        return Ok(());
    };

    let items: Vec<String> = (1..=ITEM_COUNT)
        .map(|index| format!("Generated item {index}"))
        .collect();
    let total = total_pages(items.len(), ITEMS_PER_PAGE);

    if page > total {
        let out = format!("Page {page} does not exist. Available pages: 1-{total}.");
        reply_notice(&ctx.http, msg.channel_id, NoticeLevel::Warning, &out).await?;
        return Ok(());
    }

    let paginator = Paginator::builder()
        .items(items)
        .items_per_page(ITEMS_PER_PAGE)
        .columns(2)
        .number_items(true)
        .allow_user(msg.author.id)
        .timeout(Duration::from_secs(60))
        .text(|page, total| format!("Pagination test, page {page} of {total}"))
        .final_action(|message| {
            info!(
                message_id = message.message_id.get(),
                "pagetest session ended"
            );
        })
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
