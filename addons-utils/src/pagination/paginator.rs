//! The reaction-driven pagination state machine.

use tracing::{debug, warn};
use twilight_model::channel::message::EmojiReactionType;
use twilight_model::gateway::event::{Event, EventType};

use crate::gateway::{ChannelGateway, MessageRef};
use crate::menu::{DisplayTarget, MenuOptions};
use crate::waiter::EventWaiter;

use super::page::clamp_page;
use super::view::{PageLayout, RenderedPage, render_page};

/// Reaction attached for moving one page back.
pub const LEFT: &str = "◀";
/// Reaction attached for ending the session.
pub const STOP: &str = "⏹";
/// Reaction attached for moving one page forward.
pub const RIGHT: &str = "▶";

pub type ColorFn = Box<dyn Fn(usize, usize) -> u32 + Send + Sync>;
pub type TextFn = Box<dyn Fn(usize, usize) -> String + Send + Sync>;
pub type FinalAction = Box<dyn Fn(MessageRef) + Send + Sync>;

/// A reaction-driven paginated menu over a list of text items.
///
/// Built through [`PaginatorBuilder`](super::PaginatorBuilder). Displaying
/// one drives a full session: render, send or edit, attach navigation
/// reactions, then alternate between waiting for a qualifying reaction and
/// editing the message until a stop reaction or a timeout ends it. The
/// session's `final_action` runs exactly once, with the last known message.
pub struct Paginator {
    pub(super) options: MenuOptions,
    pub(super) items: Vec<String>,
    pub(super) items_per_page: usize,
    pub(super) columns: usize,
    pub(super) number_items: bool,
    pub(super) show_page_numbers: bool,
    pub(super) wait_on_single_page: bool,
    pub(super) color: ColorFn,
    pub(super) text: Option<TextFn>,
    pub(super) final_action: FinalAction,
    pub(super) total_pages: usize,
}

impl Paginator {
    pub fn builder() -> super::PaginatorBuilder {
        super::PaginatorBuilder::new()
    }

    /// Number of pages this paginator renders.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Display page 1 at the target and run the session to completion.
    pub async fn display<G: ChannelGateway>(
        &self,
        gateway: &G,
        waiter: &EventWaiter,
        target: DisplayTarget,
    ) -> anyhow::Result<()> {
        self.paginate(gateway, waiter, target, 1).await
    }

    /// Display a specific start page at the target and run the session.
    ///
    /// The requested page is clamped into `1..=total_pages`. The future
    /// resolves once the session ends; send and edit failures on the
    /// primary message propagate, reaction failures never do.
    pub async fn paginate<G: ChannelGateway>(
        &self,
        gateway: &G,
        waiter: &EventWaiter,
        target: DisplayTarget,
        page: usize,
    ) -> anyhow::Result<()> {
        let page = clamp_page(page, self.total_pages);
        let rendered = self.render(page)?;

        let message = match target {
            DisplayTarget::Channel(channel_id) => {
                gateway
                    .create_message(channel_id, rendered.content.as_deref(), &rendered.embed)
                    .await?
            }
            DisplayTarget::Message {
                channel_id,
                message_id,
            } => {
                let message = MessageRef {
                    channel_id,
                    message_id,
                };
                gateway
                    .update_message(message, rendered.content.as_deref(), &rendered.embed)
                    .await?;
                message
            }
        };

        if self.total_pages > 1 {
            for emoji in [LEFT, STOP, RIGHT] {
                // A failed attach must not block pagination; the wait phase
                // starts regardless.
                if let Err(source) = gateway.create_reaction(message, emoji).await {
                    warn!(?source, emoji, "failed to attach navigation reaction");
                }
            }
        } else if self.wait_on_single_page {
            if let Err(source) = gateway.create_reaction(message, STOP).await {
                warn!(?source, emoji = STOP, "failed to attach stop reaction");
            }
        } else {
            (self.final_action)(message);
            return Ok(());
        }

        self.run(gateway, waiter, message, page).await
    }

    /// Wait-react-edit loop; one iteration per accepted navigation event.
    ///
    /// The next wait is only registered after the edit that produced the
    /// current page completed, so transitions are strictly serialized.
    async fn run<G: ChannelGateway>(
        &self,
        gateway: &G,
        waiter: &EventWaiter,
        message: MessageRef,
        mut page: usize,
    ) -> anyhow::Result<()> {
        loop {
            let options = self.options.clone();
            let message_id = message.message_id;
            let matched = waiter
                .wait_for(
                    EventType::ReactionAdd,
                    move |event| {
                        let Event::ReactionAdd(reaction) = event else {
                            return false;
                        };
                        reaction.message_id == message_id
                            && nav_emoji(&reaction.emoji).is_some()
                            && options.allows_reactor(reaction)
                    },
                    self.options.timeout(),
                )
                .await;

            let Some(Event::ReactionAdd(reaction)) = matched else {
                // Deadline passed without a qualifying reaction.
                (self.final_action)(message);
                return Ok(());
            };

            let emoji = match nav_emoji(&reaction.emoji) {
                Some(emoji) => emoji,
                None => continue,
            };

            match emoji {
                STOP => {
                    (self.final_action)(message);
                    return Ok(());
                }
                LEFT if page > 1 => page -= 1,
                RIGHT if page < self.total_pages => page += 1,
                _ => {}
            }

            // Best-effort retraction of the actor's navigation reaction.
            if let Err(source) = gateway
                .delete_reaction(message, emoji, reaction.user_id)
                .await
            {
                debug!(?source, emoji, "failed to retract navigation reaction");
            }

            let rendered = self.render(page)?;
            gateway
                .update_message(message, rendered.content.as_deref(), &rendered.embed)
                .await?;
        }
    }

    fn render(&self, page: usize) -> anyhow::Result<RenderedPage> {
        let layout = PageLayout {
            items: &self.items,
            items_per_page: self.items_per_page,
            columns: self.columns,
            number_items: self.number_items,
            show_page_numbers: self.show_page_numbers,
        };
        let color = (self.color)(page, self.total_pages);
        let content = self.text.as_ref().map(|text| text(page, self.total_pages));

        render_page(&layout, page, self.total_pages, color, content)
    }
}

/// Map a reaction emoji to the navigation emoji it names, if any.
fn nav_emoji(emoji: &EmojiReactionType) -> Option<&'static str> {
    let EmojiReactionType::Unicode { name } = emoji else {
        return None;
    };

    [LEFT, STOP, RIGHT].into_iter().find(|nav| name == *nav)
}
