//! Access control and display-target configuration shared by interactive menus.

use std::collections::HashSet;
use std::time::Duration;

use twilight_model::gateway::GatewayReaction;
use twilight_model::id::{
    Id,
    marker::{ChannelMarker, MessageMarker, RoleMarker, UserMarker},
};

/// Where a menu renders its message.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DisplayTarget {
    /// Post a new message to a channel.
    Channel(Id<ChannelMarker>),
    /// Take over an existing message and edit it in place.
    Message {
        channel_id: Id<ChannelMarker>,
        message_id: Id<MessageMarker>,
    },
}

/// Access control and timing shared by all interactive menus.
///
/// Immutable once built. Empty allowlists mean unrestricted access.
#[derive(Clone, Debug)]
pub struct MenuOptions {
    allowed_users: HashSet<Id<UserMarker>>,
    allowed_roles: HashSet<Id<RoleMarker>>,
    timeout: Duration,
}

impl MenuOptions {
    pub fn new(
        allowed_users: HashSet<Id<UserMarker>>,
        allowed_roles: HashSet<Id<RoleMarker>>,
        timeout: Duration,
    ) -> Self {
        Self {
            allowed_users,
            allowed_roles,
            timeout,
        }
    }

    /// How long one wait phase lasts before the session times out.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether an actor may drive this menu.
    ///
    /// True when both allowlists are empty, when the user is allowlisted,
    /// or when any of the carried roles is.
    pub fn is_valid_user(&self, user_id: Id<UserMarker>, roles: &[Id<RoleMarker>]) -> bool {
        if self.allowed_users.is_empty() && self.allowed_roles.is_empty() {
            return true;
        }

        self.allowed_users.contains(&user_id)
            || roles.iter().any(|role| self.allowed_roles.contains(role))
    }

    /// Apply [`Self::is_valid_user`] to the actor of a reaction event.
    ///
    /// Role membership comes from the member record carried on the event;
    /// reactions outside a guild carry none and match on user identity only.
    pub fn allows_reactor(&self, reaction: &GatewayReaction) -> bool {
        let roles = reaction
            .member
            .as_ref()
            .map(|member| member.roles.as_slice())
            .unwrap_or(&[]);

        self.is_valid_user(reaction.user_id, roles)
    }
}
