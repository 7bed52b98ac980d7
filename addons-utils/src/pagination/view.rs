//! Embed composition for paginated menu pages.

use twilight_model::channel::message::embed::Embed;
use twilight_util::builder::embed::EmbedFieldBuilder;

use crate::embed::base_embed;

use super::page::{column_chunks, page_window};

/// Zero-width space; the platform rejects truly empty field names.
const BLANK_FIELD_NAME: &str = "\u{200b}";

/// Layout settings for [`render_page`].
#[derive(Clone, Copy, Debug)]
pub struct PageLayout<'a> {
    pub items: &'a [String],
    pub items_per_page: usize,
    pub columns: usize,
    pub number_items: bool,
    pub show_page_numbers: bool,
}

/// A fully rendered page: the embed plus optional plain message text.
#[derive(Clone, Debug)]
pub struct RenderedPage {
    pub embed: Embed,
    pub content: Option<String>,
}

/// Render one page of a paginated item list.
///
/// A single-column layout lists the page window as the embed description;
/// multi-column layouts split the window into side-by-side inline fields,
/// preserving item order left-to-right, top-to-bottom within each chunk.
pub fn render_page(
    layout: &PageLayout<'_>,
    page: usize,
    total_pages: usize,
    color: u32,
    content: Option<String>,
) -> anyhow::Result<RenderedPage> {
    let (start, end) = page_window(layout.items.len(), layout.items_per_page, page);
    let window = &layout.items[start..end];

    let footer = layout
        .show_page_numbers
        .then(|| format!("Page {page}/{total_pages}"));
    let mut builder = base_embed(color, footer.as_deref());

    if layout.columns == 1 {
        builder = builder.description(itemized_block(window, start, layout.number_items));
    } else {
        for (offset, chunk) in column_chunks(window, layout.columns) {
            let block = itemized_block(chunk, start + offset, layout.number_items);
            builder = builder.field(EmbedFieldBuilder::new(BLANK_FIELD_NAME, block).inline());
        }
    }

    Ok(RenderedPage {
        embed: builder.validate()?.build(),
        content,
    })
}

/// List a run of items, optionally prefixed with their one-based number.
fn itemized_block(items: &[String], first_index: usize, number_items: bool) -> String {
    let mut block = String::new();

    for (offset, item) in items.iter().enumerate() {
        if !block.is_empty() {
            block.push('\n');
        }
        if number_items {
            block.push_str(&format!("`{}.` ", first_index + offset + 1));
        }
        block.push_str(item);
    }

    block
}
