//! Chat bot front end.
//!
//! Turns prefix commands into [`Reply`] values. The transport (a terminal
//! loop in `il chat`, or any messaging platform) only delivers text in and
//! draws replies out.

mod command;
mod help;
mod reply;

pub use command::BotCommand;
pub use help::{examples_embed, help_embed};
pub use reply::{Embed, EmbedField, Reply};

use tracing::{debug, error};

use crate::catalog::{Catalog, Item};
use crate::config::{Config, DisplayConfig};
use crate::error::{IlError, Result, suggest_for_error};
use crate::search::{SearchEngine, SearchOptions, SearchOutcome};

/// Shown when a request fails for reasons the user cannot fix.
pub const GENERIC_FAILURE: &str = "Something went wrong while searching the catalog. Please try again later.";

const VOI_TAG: &str = " [VOI]";

pub struct Bot<'a, C: Catalog + ?Sized> {
    engine: SearchEngine<'a, C>,
    display: DisplayConfig,
    prefix: String,
}

impl<'a, C: Catalog + ?Sized> Bot<'a, C> {
    pub fn new(catalog: &'a C, config: &Config) -> Self {
        Self {
            engine: SearchEngine::new(catalog, SearchOptions::from(config)),
            display: config.display.clone(),
            prefix: config.bot.prefix.clone(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Answer one incoming message, `None` when it is not addressed to the bot.
    pub fn handle_message(&self, message: &str) -> Option<Reply> {
        let command = BotCommand::parse(message, &self.prefix)?;
        debug!(command = command.name(), "handling chat command");
        Some(self.respond(&command))
    }

    /// Answer a parsed command. Failures become user-facing text.
    pub fn respond(&self, command: &BotCommand) -> Reply {
        match self.try_respond(command) {
            Ok(reply) => reply,
            Err(err @ IlError::QueryTooShort { .. }) => {
                Reply::text(suggest_for_error(err.code(), err.context().as_ref()))
            }
            Err(err) => {
                error!(command = command.name(), error = %err, "chat command failed");
                Reply::text(GENERIC_FAILURE)
            }
        }
    }

    fn try_respond(&self, command: &BotCommand) -> Result<Reply> {
        match command {
            BotCommand::Item(query) => {
                let outcome = self.engine.search(query)?;
                Ok(self.search_reply(&outcome))
            }
            BotCommand::Random => Ok(self.engine.random()?.map_or_else(
                || Reply::text("The catalog is empty."),
                |item| Reply::embed(random_embed(&item)),
            )),
            BotCommand::Voi => self.voi_reply(),
            BotCommand::Help => Ok(Reply::embed(help_embed(&self.prefix))),
            BotCommand::Examples => Ok(Reply::embed(examples_embed(&self.prefix))),
            BotCommand::Unknown(name) => Ok(Reply::text(format!(
                "Unknown command `{name}`. Try `{}helpme`.",
                self.prefix
            ))),
        }
    }

    fn search_reply(&self, outcome: &SearchOutcome) -> Reply {
        if outcome.is_empty() {
            return Reply::text(outcome.no_results_message());
        }

        let pages = outcome.pages(self.display.page_size, self.display.title_max_chars);
        if let [page] = pages.as_slice() {
            let mut embed = Embed::new(page.title.clone()).description(outcome.description());
            let active = outcome.active_filters();
            if !active.is_empty() {
                let value = active
                    .iter()
                    .map(|(label, value)| format!("**{label}:** `{value}`"))
                    .collect::<Vec<_>>()
                    .join("\n");
                embed = embed.field("Active Filters", value, false);
            }
            for item in page.items {
                let name = highlight(&item.name, &outcome.matched_terms(item));
                embed = embed.field(
                    name,
                    format!(
                        "**Type:** {}\n**Subcategories:** {}\n**Rarity:** {}{}",
                        item.category,
                        item.subcategories,
                        item.rarity,
                        voi_tag(item)
                    ),
                    true,
                );
            }
            return Reply::embed(embed);
        }

        let embeds = pages
            .iter()
            .map(|page| {
                page.items.iter().fold(Embed::new(page.title.clone()), |embed, item| {
                    embed.field(
                        item.name.clone(),
                        format!(
                            "Type: {}\nSub: {}\nRarity: {}{}",
                            item.category,
                            item.subcategories,
                            item.rarity,
                            voi_tag(item)
                        ),
                        true,
                    )
                })
            })
            .collect();
        Reply::Embeds(embeds)
    }

    fn voi_reply(&self) -> Result<Reply> {
        let listing = self.engine.notable()?;
        if listing.total == 0 {
            return Ok(Reply::text("No VOI items found."));
        }

        let mut embed = listing.items.iter().enumerate().fold(
            Embed::new("VOI Items").description(listing.description()),
            |embed, (idx, item)| {
                embed.field(
                    format!("{}. {}", idx + 1, item.name),
                    format!("Type: {}\nRarity: {}", item.category, item.rarity),
                    true,
                )
            },
        );
        if let Some(footer) = listing.footer() {
            embed = embed.footer(footer);
        }
        Ok(Reply::embed(embed))
    }
}

fn random_embed(item: &Item) -> Embed {
    Embed::new("Random Item")
        .field("Name", item.name.clone(), false)
        .field("Category", item.category.clone(), true)
        .field("Subcategories", item.subcategories.clone(), true)
        .field("Rarity", format!("{}{}", item.rarity, voi_tag(item)), true)
}

/// Bold the name when one of the matched tags occurs in it, ignoring ASCII case.
fn highlight(name: &str, matched: &[&str]) -> String {
    let lower = name.to_ascii_lowercase();
    if matched
        .iter()
        .any(|tag| lower.contains(&tag.to_ascii_lowercase()))
    {
        format!("**{name}**")
    } else {
        name.to_string()
    }
}

const fn voi_tag(item: &Item) -> &'static str {
    if item.is_notable { VOI_TAG } else { "" }
}
