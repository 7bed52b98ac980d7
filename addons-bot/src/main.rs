use std::env;
use std::sync::Arc;

use tracing::{error, info};
use twilight_gateway::{EventTypeFlags, Intents, Shard, ShardId, StreamExt as _};
use twilight_http::Client;
use twilight_model::gateway::event::Event;

use addons_core::Context;
use addons_utils::waiter::EventWaiter;

mod commands;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Load the .env file
    dotenvy::dotenv().ok();

    let token = env::var("DISCORD_TOKEN")?;

    // Create a single shared HTTP client and waiter registry
    let http = Arc::new(Client::new(token.clone()));
    let waiter = Arc::new(EventWaiter::new());
    let ctx = Context::new(Arc::clone(&http), Arc::clone(&waiter));

    // Declare which intents the bot has
    let intents = Intents::GUILDS
        | Intents::GUILD_MESSAGES
        | Intents::MESSAGE_CONTENT
        | Intents::GUILD_MESSAGE_REACTIONS;

    // A shard is one Gateway WebSocket connection to Discord
    let mut shard = Shard::new(ShardId::new(0, 1), token, intents);

    info!("addons demo bot is connecting...");

    while let Some(item) = shard.next_event(EventTypeFlags::all()).await {
        let event = match item {
            Ok(event) => event,
            Err(source) => {
                error!(?source, "gateway event stream error");
                continue;
            }
        };

        // Pending menu sessions get first pick of every event; a consumed
        // event never doubles as a command trigger.
        if waiter.process(&event) {
            continue;
        }

        match event {
            Event::Ready(_) => {
                info!("addons demo bot is ready");
            }

            Event::MessageCreate(msg) => {
                // Pagination sessions run until they end; never hold up the
                // event loop waiting on one.
                let ctx = ctx.clone();
                tokio::spawn(async move {
                    if let Err(source) = commands::handle_message(ctx, msg).await {
                        error!(?source, "command handler failed");
                    }
                });
            }
            _ => {} // Ignore unused events
        }
    }

    Ok(())
}
