//! Fluent configuration producing a validated [`Paginator`].

use std::collections::HashSet;
use std::time::Duration;

use twilight_model::id::{
    Id,
    marker::{RoleMarker, UserMarker},
};

use crate::embed::DEFAULT_EMBED_COLOR;
use crate::error::ConfigError;
use crate::gateway::MessageRef;
use crate::menu::MenuOptions;

use super::DEFAULT_TIMEOUT_SECS;
use super::page::total_pages;
use super::paginator::{ColorFn, FinalAction, Paginator, TextFn};

/// Builder for [`Paginator`].
///
/// Everything has a default except the item list, which must be non-empty.
/// Validation happens in [`build`](Self::build); a configuration that
/// builds cannot fail later at render time.
pub struct PaginatorBuilder {
    items: Vec<String>,
    items_per_page: usize,
    columns: usize,
    number_items: bool,
    show_page_numbers: bool,
    wait_on_single_page: bool,
    allowed_users: HashSet<Id<UserMarker>>,
    allowed_roles: HashSet<Id<RoleMarker>>,
    timeout: Duration,
    color: ColorFn,
    text: Option<TextFn>,
    final_action: FinalAction,
}

impl PaginatorBuilder {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            items_per_page: 10,
            columns: 1,
            number_items: false,
            show_page_numbers: true,
            wait_on_single_page: false,
            allowed_users: HashSet::new(),
            allowed_roles: HashSet::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            color: Box::new(|_, _| DEFAULT_EMBED_COLOR),
            text: None,
            final_action: Box::new(|_| {}),
        }
    }

    /// Replace the item list.
    pub fn items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    /// Append one item.
    pub fn add_item(mut self, item: impl Into<String>) -> Self {
        self.items.push(item.into());
        self
    }

    pub fn items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = items_per_page;
        self
    }

    /// Number of side-by-side columns a page is split into (1 to 3).
    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Prefix every item with its one-based number.
    pub fn number_items(mut self, number_items: bool) -> Self {
        self.number_items = number_items;
        self
    }

    /// Show a `Page X/Y` footer on every page.
    pub fn show_page_numbers(mut self, show_page_numbers: bool) -> Self {
        self.show_page_numbers = show_page_numbers;
        self
    }

    /// Attach a stop reaction and wait even when there is only one page.
    pub fn wait_on_single_page(mut self, wait_on_single_page: bool) -> Self {
        self.wait_on_single_page = wait_on_single_page;
        self
    }

    /// Allow a user to drive the menu. No allowlisted users or roles means
    /// unrestricted access.
    pub fn allow_user(mut self, user_id: Id<UserMarker>) -> Self {
        self.allowed_users.insert(user_id);
        self
    }

    pub fn allow_users(mut self, user_ids: impl IntoIterator<Item = Id<UserMarker>>) -> Self {
        self.allowed_users.extend(user_ids);
        self
    }

    /// Allow holders of a role to drive the menu.
    pub fn allow_role(mut self, role_id: Id<RoleMarker>) -> Self {
        self.allowed_roles.insert(role_id);
        self
    }

    pub fn allow_roles(mut self, role_ids: impl IntoIterator<Item = Id<RoleMarker>>) -> Self {
        self.allowed_roles.extend(role_ids);
        self
    }

    /// How long each wait phase lasts before the session times out.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Compute the embed accent color from `(page, total_pages)`.
    pub fn color(mut self, color: impl Fn(usize, usize) -> u32 + Send + Sync + 'static) -> Self {
        self.color = Box::new(color);
        self
    }

    /// Compute plain message text from `(page, total_pages)`, sent alongside
    /// the embed.
    pub fn text(mut self, text: impl Fn(usize, usize) -> String + Send + Sync + 'static) -> Self {
        self.text = Some(Box::new(text));
        self
    }

    /// Run once when the session ends, with the last known message.
    pub fn final_action(
        mut self,
        final_action: impl Fn(MessageRef) + Send + Sync + 'static,
    ) -> Self {
        self.final_action = Box::new(final_action);
        self
    }

    /// Validate the configuration and produce a [`Paginator`].
    pub fn build(self) -> Result<Paginator, ConfigError> {
        if self.items.is_empty() {
            return Err(ConfigError::NoItems);
        }
        if self.items_per_page < 1 {
            return Err(ConfigError::InvalidItemsPerPage(self.items_per_page));
        }
        if !(1..=3).contains(&self.columns) {
            return Err(ConfigError::InvalidColumns(self.columns));
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        let total_pages = total_pages(self.items.len(), self.items_per_page);

        Ok(Paginator {
            options: MenuOptions::new(self.allowed_users, self.allowed_roles, self.timeout),
            items: self.items,
            items_per_page: self.items_per_page,
            columns: self.columns,
            number_items: self.number_items,
            show_page_numbers: self.show_page_numbers,
            wait_on_single_page: self.wait_on_single_page,
            color: self.color,
            text: self.text,
            final_action: self.final_action,
            total_pages,
        })
    }
}

impl Default for PaginatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::PaginatorBuilder;
    use crate::error::ConfigError;

    fn items(count: usize) -> Vec<String> {
        (1..=count).map(|index| format!("item {index}")).collect()
    }

    #[test]
    fn defaults_build_cleanly() {
        let paginator = PaginatorBuilder::new().items(items(3)).build().unwrap();
        assert_eq!(paginator.total_pages(), 1);
    }

    #[test]
    fn total_pages_rounds_up() {
        let paginator = PaginatorBuilder::new()
            .items(items(25))
            .items_per_page(10)
            .build()
            .unwrap();
        assert_eq!(paginator.total_pages(), 3);
    }

    #[test]
    fn rejects_an_empty_item_list() {
        let result = PaginatorBuilder::new().build();
        assert_eq!(result.err(), Some(ConfigError::NoItems));
    }

    #[test]
    fn rejects_zero_items_per_page() {
        let result = PaginatorBuilder::new().items(items(3)).items_per_page(0).build();
        assert_eq!(result.err(), Some(ConfigError::InvalidItemsPerPage(0)));
    }

    #[test]
    fn rejects_out_of_range_columns() {
        let result = PaginatorBuilder::new().items(items(3)).columns(0).build();
        assert_eq!(result.err(), Some(ConfigError::InvalidColumns(0)));

        let result = PaginatorBuilder::new().items(items(3)).columns(4).build();
        assert_eq!(result.err(), Some(ConfigError::InvalidColumns(4)));
    }

    #[test]
    fn rejects_a_zero_timeout() {
        let result = PaginatorBuilder::new()
            .items(items(3))
            .timeout(std::time::Duration::ZERO)
            .build();
        assert_eq!(result.err(), Some(ConfigError::ZeroTimeout));
    }

    #[test]
    fn add_item_appends_to_the_list() {
        let paginator = PaginatorBuilder::new()
            .add_item("first")
            .add_item("second")
            .items_per_page(1)
            .build()
            .unwrap();
        assert_eq!(paginator.total_pages(), 2);
    }
}
