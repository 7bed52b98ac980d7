//! Reply conveniences for command handlers.

use std::fmt;

use twilight_http::Client;
use twilight_model::channel::Message;
use twilight_model::channel::message::embed::Embed;
use twilight_model::id::{Id, marker::ChannelMarker};

/// Severity badge prefixed to plain-text command replies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let badge = match self {
            NoticeLevel::Info => "ℹ️",
            NoticeLevel::Success => "✅",
            NoticeLevel::Warning => "⚠️",
            NoticeLevel::Error => "❌",
        };
        f.write_str(badge)
    }
}

/// Send a plain-text reply, firing the typing indicator first.
///
/// The typing trigger is best-effort; a failure never blocks the reply.
pub async fn reply_text(
    http: &Client,
    channel_id: Id<ChannelMarker>,
    content: &str,
) -> anyhow::Result<Message> {
    let _ = http.create_typing_trigger(channel_id).await;

    let message = http
        .create_message(channel_id)
        .content(content)
        .await?
        .model()
        .await?;

    Ok(message)
}

/// Send a badge-prefixed notice formatted as `{badge} | {text}`.
pub async fn reply_notice(
    http: &Client,
    channel_id: Id<ChannelMarker>,
    level: NoticeLevel,
    content: &str,
) -> anyhow::Result<Message> {
    reply_text(http, channel_id, &format!("{level} | {content}")).await
}

/// Send an embed reply, firing the typing indicator first.
pub async fn reply_embed(
    http: &Client,
    channel_id: Id<ChannelMarker>,
    embed: &Embed,
) -> anyhow::Result<Message> {
    let _ = http.create_typing_trigger(channel_id).await;

    let message = http
        .create_message(channel_id)
        .embeds(std::slice::from_ref(embed))
        .await?
        .model()
        .await?;

    Ok(message)
}
