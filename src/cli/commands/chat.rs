//! il chat - Answer prefixed chat commands from stdin
//!
//! Each line is one incoming message. Lines that do not start with the
//! prefix are ignored, `exit` or `quit` ends the session. Replies are
//! written as text, or one JSON object per line in machine modes.

use std::io::{self, BufRead, Write};

use clap::Args;
use tracing::{debug, warn};

use crate::app::AppContext;
use crate::bot::{Bot, Reply};
use crate::catalog::Catalog;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ChatArgs {
    /// Command prefix (default: bot.prefix)
    #[arg(long)]
    pub prefix: Option<String>,
}

pub fn run(ctx: &AppContext, args: &ChatArgs) -> Result<()> {
    let mut config = ctx.config.clone();
    if let Some(ref prefix) = args.prefix {
        config.bot.prefix.clone_from(prefix);
        config.validate()?;
    }

    let bot = Bot::new(ctx.catalog()?, &config);
    let json = ctx.robot_mode || ctx.output_format.is_machine_readable();

    if !json {
        eprintln!(
            "il chat: try `{}helpme`, `exit` to quit",
            bot.prefix()
        );
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    serve(&bot, stdin.lock(), &mut stdout.lock(), json)
}

/// Read messages from `input` until EOF or `exit`, answering into `output`.
pub fn serve<C, R, W>(bot: &Bot<'_, C>, mut input: R, output: &mut W, json: bool) -> Result<()>
where
    C: Catalog + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        if matches!(line, std::borrow::Cow::Owned(_)) {
            warn!("message is not valid UTF-8, replaced invalid bytes");
        }

        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        let Some(reply) = bot.handle_message(message) else {
            debug!(message, "ignoring message without prefix");
            continue;
        };

        write_reply(output, &reply, json)?;
    }

    debug!("chat session ended");
    Ok(())
}

fn write_reply<W: Write>(output: &mut W, reply: &Reply, json: bool) -> Result<()> {
    if json {
        writeln!(output, "{}", serde_json::to_string(reply)?)?;
    } else {
        writeln!(output, "{reply}")?;
        writeln!(output)?;
    }
    output.flush()?;
    Ok(())
}
