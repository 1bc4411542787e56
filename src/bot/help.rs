//! Static help and example text.

use super::reply::Embed;

/// Help embed with `prefix` substituted into every command.
#[must_use]
pub fn help_embed(prefix: &str) -> Embed {
    let p = prefix;
    Embed::new("Item Lookup Bot Help")
        .description("Commands for searching items from the database")
        .field(
            format!("{p}item <query>"),
            format!(
                "**Advanced search with all features:**\n\
                 **Basic:** `{p}item sword`, `{p}item light dagger`\n\
                 **AND:** `{p}item sword+flame` (both terms)\n\
                 **OR:** `{p}item sword,flame` (either term)\n\
                 **Filters:** `{p}item rarity:legendary`\n\
                 `{p}item type:weapon voi:yes`\n\
                 `{p}item sub:elemental`\n\
                 **Exact:** `{p}item \"light dagger\"`"
            ),
            false,
        )
        .field(format!("{p}random"), "Get a random item", false)
        .field(format!("{p}voi"), "List VOI items", false)
        .field(format!("{p}helpme"), "Show this help message", false)
        .field(format!("{p}examples"), "Show search examples", false)
        .footer(format!(
            "Prefix: {p} | Use + for AND, comma/space for OR, : for filters"
        ))
}

/// Worked search examples.
#[must_use]
pub fn examples_embed(prefix: &str) -> Embed {
    let p = prefix;
    let examples = [
        ("Basic Search", format!("`{p}item sword` - Find items with 'sword'")),
        ("Multi-term OR", format!("`{p}item light dagger` - Items with 'light' OR 'dagger'")),
        ("AND Search", format!("`{p}item sword+flame` - Items with BOTH 'sword' AND 'flame'")),
        ("OR Search", format!("`{p}item sword,flame` - Items with EITHER 'sword' OR 'flame'")),
        ("", format!("`{p}item sword/flame` - Same as comma (OR search)")),
        ("Exact Phrase", format!("`{p}item \"light dagger\"` - Exact phrase match")),
        ("Rarity Filter", format!("`{p}item rarity:legendary` - Only legendary items")),
        ("Type Filter", format!("`{p}item type:weapon` - Only weapons")),
        ("VOI Filter", format!("`{p}item voi:yes` - Only VOI items")),
        (
            "Subcategory Filter",
            format!("`{p}item sub:elemental` - Items with 'elemental' in subcategories"),
        ),
        (
            "Combined Filters",
            format!("`{p}item sword rarity:legendary type:weapon` - All conditions"),
        ),
        ("Random Item", format!("`{p}random` - Get a random item")),
    ];

    examples.into_iter().fold(
        Embed::new("Search Examples").description(format!("How to use the {p}item command:")),
        |embed, (title, example)| embed.field(title, example, false),
    )
}
