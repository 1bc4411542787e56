//! Platform-neutral replies.
//!
//! A reply is either plain text or a list of embeds (title, description,
//! fields, footer). Transports decide how to draw them; [`fmt::Display`]
//! gives a plain-text rendering for terminals.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum Reply {
    Text(String),
    Embeds(Vec<Embed>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Embed {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub fields: Vec<EmbedField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl Embed {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    #[must_use]
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    #[must_use]
    pub fn embed(embed: Embed) -> Self {
        Self::Embeds(vec![embed])
    }
}

impl fmt::Display for Embed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;
        if let Some(ref description) = self.description {
            writeln!(f, "{description}")?;
        }
        for field in &self.fields {
            writeln!(f)?;
            if !field.name.is_empty() {
                writeln!(f, "{}", field.name)?;
            }
            for line in field.value.lines() {
                writeln!(f, "  {line}")?;
            }
        }
        if let Some(ref footer) = self.footer {
            writeln!(f)?;
            writeln!(f, "-- {footer}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => writeln!(f, "{text}"),
            Self::Embeds(embeds) => {
                for (idx, embed) in embeds.iter().enumerate() {
                    if idx > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{embed}")?;
                }
                Ok(())
            }
        }
    }
}
