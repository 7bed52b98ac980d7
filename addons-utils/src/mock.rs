//! In-memory gateway for unit testing menus without a Discord connection.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use twilight_model::channel::message::embed::Embed;
use twilight_model::id::{
    Id,
    marker::{ChannelMarker, UserMarker},
};

use crate::gateway::{ChannelGateway, MessageRef};

/// One recorded gateway operation.
#[derive(Clone, Debug)]
pub enum GatewayCall {
    CreateMessage {
        message: MessageRef,
        content: Option<String>,
        embed: Embed,
    },
    UpdateMessage {
        message: MessageRef,
        content: Option<String>,
        embed: Embed,
    },
    CreateReaction {
        message: MessageRef,
        emoji: String,
    },
    DeleteReaction {
        message: MessageRef,
        emoji: String,
        user_id: Id<UserMarker>,
    },
}

/// In-memory [`ChannelGateway`] that records every operation in order.
/// Use in tests instead of [`HttpGateway`](crate::gateway::HttpGateway).
///
/// Reaction and edit failures can be injected to simulate missing
/// permissions or a deleted primary message.
#[derive(Clone)]
pub struct RecordingGateway {
    calls: Arc<Mutex<Vec<GatewayCall>>>,
    next_message_id: Arc<AtomicU64>,
    fail_reactions: Arc<AtomicBool>,
    fail_updates: Arc<AtomicBool>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            next_message_id: Arc::new(AtomicU64::new(1)),
            fail_reactions: Arc::new(AtomicBool::new(false)),
            fail_updates: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make reaction add/remove calls fail until switched back.
    pub fn fail_reactions(&self, fail: bool) {
        self.fail_reactions.store(fail, Ordering::SeqCst);
    }

    /// Make message edits fail until switched back.
    pub fn fail_updates(&self, fail: bool) {
        self.fail_updates.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of all recorded calls in operation order.
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Embeds sent or edited onto messages, in operation order.
    pub fn rendered_embeds(&self) -> Vec<Embed> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter_map(|call| match call {
                GatewayCall::CreateMessage { embed, .. }
                | GatewayCall::UpdateMessage { embed, .. } => Some(embed.clone()),
                _ => None,
            })
            .collect()
    }

    /// Emojis attached by the bot, in attach order.
    pub fn attached_reactions(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter_map(|call| match call {
                GatewayCall::CreateReaction { emoji, .. } => Some(emoji.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: GatewayCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Default for RecordingGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelGateway for RecordingGateway {
    async fn create_message(
        &self,
        channel_id: Id<ChannelMarker>,
        content: Option<&str>,
        embed: &Embed,
    ) -> anyhow::Result<MessageRef> {
        let message = MessageRef {
            channel_id,
            message_id: Id::new(self.next_message_id.fetch_add(1, Ordering::SeqCst)),
        };

        self.record(GatewayCall::CreateMessage {
            message,
            content: content.map(str::to_owned),
            embed: embed.clone(),
        });

        Ok(message)
    }

    async fn update_message(
        &self,
        message: MessageRef,
        content: Option<&str>,
        embed: &Embed,
    ) -> anyhow::Result<()> {
        if self.fail_updates.load(Ordering::SeqCst) {
            anyhow::bail!("message edit rejected");
        }

        self.record(GatewayCall::UpdateMessage {
            message,
            content: content.map(str::to_owned),
            embed: embed.clone(),
        });

        Ok(())
    }

    async fn create_reaction(&self, message: MessageRef, emoji: &str) -> anyhow::Result<()> {
        if self.fail_reactions.load(Ordering::SeqCst) {
            anyhow::bail!("reaction add rejected");
        }

        self.record(GatewayCall::CreateReaction {
            message,
            emoji: emoji.to_owned(),
        });

        Ok(())
    }

    async fn delete_reaction(
        &self,
        message: MessageRef,
        emoji: &str,
        user_id: Id<UserMarker>,
    ) -> anyhow::Result<()> {
        if self.fail_reactions.load(Ordering::SeqCst) {
            anyhow::bail!("reaction remove rejected");
        }

        self.record(GatewayCall::DeleteReaction {
            message,
            emoji: emoji.to_owned(),
            user_id,
        });

        Ok(())
    }
}
