pub mod help;
pub mod pagetest;
pub mod ping;

use twilight_model::gateway::payload::incoming::MessageCreate;

use addons_core::Context;

/// Single source of truth for the message-command prefix.
pub const COMMAND_PREFIX: char = '!';

// Global command meta data
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    ping::META,
    help::META,
    pagetest::META,
    // Add new commands here
];

pub async fn handle_message(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    if msg.author.bot {
        return Ok(());
    }

    let content_owned = msg.content.clone();
    let content = content_owned.trim();

    if !content.starts_with(COMMAND_PREFIX) {
        return Ok(());
    }

    let content = content.trim_start_matches(COMMAND_PREFIX).trim();
    let mut command_and_rest = content.splitn(2, char::is_whitespace);
    let cmd = command_and_rest.next().unwrap_or("").to_ascii_lowercase();
    let arg1 = command_and_rest
        .next()
        .map(str::trim)
        .filter(|value| !value.is_empty());

    match cmd.as_str() {
        "ping" => ping::run(ctx, msg).await?,
        "help" => help::run(ctx, msg, arg1).await?,
        "pagetest" => pagetest::run(ctx, msg, arg1).await?,
        // Add new commands here
        _ => {}
    }

    Ok(())
}
