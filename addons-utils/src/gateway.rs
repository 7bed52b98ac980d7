//! Thin seam over the chat-platform message operations menus consume.

use std::sync::Arc;

use twilight_http::Client;
use twilight_http::request::channel::reaction::RequestReactionType;
use twilight_model::channel::message::embed::Embed;
use twilight_model::id::{
    Id,
    marker::{ChannelMarker, MessageMarker, UserMarker},
};

/// Identity of a message a menu controls.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MessageRef {
    pub channel_id: Id<ChannelMarker>,
    pub message_id: Id<MessageMarker>,
}

/// Trait over the message operations interactive menus perform.
/// Implemented by [`HttpGateway`] (real Discord REST) and
/// [`RecordingGateway`](crate::mock::RecordingGateway) (in-memory, tests).
#[allow(async_fn_in_trait)]
pub trait ChannelGateway {
    /// Send a new message carrying an embed, returning its identity.
    async fn create_message(
        &self,
        channel_id: Id<ChannelMarker>,
        content: Option<&str>,
        embed: &Embed,
    ) -> anyhow::Result<MessageRef>;

    /// Replace an existing message's content and embed in place.
    async fn update_message(
        &self,
        message: MessageRef,
        content: Option<&str>,
        embed: &Embed,
    ) -> anyhow::Result<()>;

    /// Attach a unicode reaction as the bot user.
    async fn create_reaction(&self, message: MessageRef, emoji: &str) -> anyhow::Result<()>;

    /// Remove one user's unicode reaction.
    async fn delete_reaction(
        &self,
        message: MessageRef,
        emoji: &str,
        user_id: Id<UserMarker>,
    ) -> anyhow::Result<()>;
}

/// [`ChannelGateway`] backed by the twilight HTTP client.
#[derive(Clone)]
pub struct HttpGateway {
    http: Arc<Client>,
}

impl HttpGateway {
    pub fn new(http: Arc<Client>) -> Self {
        Self { http }
    }
}

impl ChannelGateway for HttpGateway {
    async fn create_message(
        &self,
        channel_id: Id<ChannelMarker>,
        content: Option<&str>,
        embed: &Embed,
    ) -> anyhow::Result<MessageRef> {
        let mut request = self
            .http
            .create_message(channel_id)
            .embeds(std::slice::from_ref(embed));
        if let Some(content) = content {
            request = request.content(content);
        }

        let message = request.await?.model().await?;

        Ok(MessageRef {
            channel_id: message.channel_id,
            message_id: message.id,
        })
    }

    async fn update_message(
        &self,
        message: MessageRef,
        content: Option<&str>,
        embed: &Embed,
    ) -> anyhow::Result<()> {
        self.http
            .update_message(message.channel_id, message.message_id)
            .content(content)
            .embeds(Some(std::slice::from_ref(embed)))
            .await?;

        Ok(())
    }

    async fn create_reaction(&self, message: MessageRef, emoji: &str) -> anyhow::Result<()> {
        self.http
            .create_reaction(
                message.channel_id,
                message.message_id,
                &RequestReactionType::Unicode { name: emoji },
            )
            .await?;

        Ok(())
    }

    async fn delete_reaction(
        &self,
        message: MessageRef,
        emoji: &str,
        user_id: Id<UserMarker>,
    ) -> anyhow::Result<()> {
        self.http
            .delete_reaction(
                message.channel_id,
                message.message_id,
                &RequestReactionType::Unicode { name: emoji },
                user_id,
            )
            .await?;

        Ok(())
    }
}
