//! Stable facade for the reaction-driven pagination core.

/// Default timeout for reaction-based pagination sessions.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

mod builder;
mod page;
mod paginator;
mod view;

pub use builder::PaginatorBuilder;
pub use page::{clamp_page, column_chunks, page_window, parse_one_based_page, total_pages};
pub use paginator::{ColorFn, FinalAction, LEFT, Paginator, RIGHT, STOP, TextFn};
pub use view::{PageLayout, RenderedPage, render_page};
