/// Generic embed builders shared across the add-on UI.
pub mod embed;
/// Typed configuration errors reported at menu build time.
pub mod error;
/// Seam over the chat-platform message operations menus consume.
pub mod gateway;
/// Access control and display-target configuration for interactive menus.
pub mod menu;
/// In-memory gateway recorder for tests.
pub mod mock;
/// Reaction-driven pagination menu core.
pub mod pagination;
/// Reply conveniences for command handlers.
pub mod reply;
/// One-shot gateway event subscriptions with deadlines.
pub mod waiter;

#[cfg(test)]
pub(crate) mod testutil;
