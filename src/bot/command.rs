//! Prefix command parsing.

/// A chat command addressed to the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    /// `<prefix>item <query>`
    Item(String),
    /// `<prefix>random`
    Random,
    /// `<prefix>voi`
    Voi,
    /// `<prefix>helpme` or `<prefix>help`
    Help,
    /// `<prefix>examples`
    Examples,
    /// Prefixed but not a known command name.
    Unknown(String),
}

impl BotCommand {
    /// Parse a message. Returns `None` when it does not start with `prefix`.
    ///
    /// The command name is matched case-insensitively; the remainder of the
    /// message is passed through untouched as the query.
    #[must_use]
    pub fn parse(message: &str, prefix: &str) -> Option<Self> {
        let rest = message.trim_start().strip_prefix(prefix)?;
        let (name, args) = match rest.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (rest.trim_end(), ""),
        };
        if name.is_empty() {
            return None;
        }

        let command = match name.to_lowercase().as_str() {
            "item" => Self::Item(args.to_string()),
            "random" => Self::Random,
            "voi" => Self::Voi,
            "helpme" | "help" => Self::Help,
            "examples" => Self::Examples,
            _ => Self::Unknown(name.to_string()),
        };
        Some(command)
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Item(_) => "item",
            Self::Random => "random",
            Self::Voi => "voi",
            Self::Help => "helpme",
            Self::Examples => "examples",
            Self::Unknown(_) => "unknown",
        }
    }
}
