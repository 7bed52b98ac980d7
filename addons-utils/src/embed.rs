use twilight_util::builder::embed::{
    EmbedAuthorBuilder, EmbedBuilder, EmbedFooterBuilder, ImageSource,
};

/// Default embed color used across the add-on UI.
pub const DEFAULT_EMBED_COLOR: u32 = 0x58_65_F2;

/// Start a styled embed with a color accent and optional footer.
pub fn base_embed(color: u32, footer: Option<&str>) -> EmbedBuilder {
    let builder = EmbedBuilder::new().color(color);

    match footer {
        Some(text) if !text.is_empty() => builder.footer(EmbedFooterBuilder::new(text).build()),
        _ => builder,
    }
}

/// Start a styled embed attributed to a user, avatar icon included.
pub fn base_embed_with_author(
    color: u32,
    footer: Option<&str>,
    author_name: &str,
    icon_url: Option<&str>,
) -> anyhow::Result<EmbedBuilder> {
    let mut author = EmbedAuthorBuilder::new(author_name);
    if let Some(url) = icon_url {
        author = author.icon_url(ImageSource::url(url)?);
    }

    Ok(base_embed(color, footer).author(author.build()))
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_EMBED_COLOR, base_embed, base_embed_with_author};

    #[test]
    fn base_embed_sets_color_and_footer() {
        let embed = base_embed(DEFAULT_EMBED_COLOR, Some("footer text"))
            .description("body")
            .validate()
            .unwrap()
            .build();

        assert_eq!(embed.color, Some(DEFAULT_EMBED_COLOR));
        assert_eq!(embed.footer.unwrap().text, "footer text");
    }

    #[test]
    fn empty_footer_is_omitted() {
        let embed = base_embed(1, Some("")).description("body").validate().unwrap().build();
        assert!(embed.footer.is_none());

        let embed = base_embed(1, None).description("body").validate().unwrap().build();
        assert!(embed.footer.is_none());
    }

    #[test]
    fn author_variant_carries_the_name() {
        let embed = base_embed_with_author(1, None, "somebody", None)
            .unwrap()
            .description("body")
            .validate()
            .unwrap()
            .build();

        assert_eq!(embed.author.unwrap().name, "somebody");
    }
}
