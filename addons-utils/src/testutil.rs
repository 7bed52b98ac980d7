//! Builders for gateway payloads shared across unit tests.

use twilight_model::channel::message::EmojiReactionType;
use twilight_model::gateway::GatewayReaction;
use twilight_model::gateway::event::Event;
use twilight_model::gateway::payload::incoming::ReactionAdd;
use twilight_model::id::{
    Id,
    marker::{MessageMarker, UserMarker},
};

pub(crate) fn unicode_reaction(
    message_id: Id<MessageMarker>,
    user_id: Id<UserMarker>,
    emoji: &str,
) -> GatewayReaction {
    GatewayReaction {
        burst: false,
        burst_colors: Vec::new(),
        channel_id: Id::new(10),
        emoji: EmojiReactionType::Unicode {
            name: emoji.to_owned(),
        },
        guild_id: None,
        member: None,
        message_author_id: None,
        message_id,
        user_id,
    }
}

pub(crate) fn reaction_event(
    message_id: Id<MessageMarker>,
    user_id: Id<UserMarker>,
    emoji: &str,
) -> Event {
    Event::ReactionAdd(Box::new(ReactionAdd(unicode_reaction(
        message_id, user_id, emoji,
    ))))
}
