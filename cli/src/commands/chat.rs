//! # RuleBot Chat Command
//!
//! File: cli/src/commands/chat.rs
//!
//! ## Overview
//!
//! Implements `rulebot chat`, an interactive loop on stdin/stdout. Each
//! non-blank line is classified and the reply printed with the configured
//! labels. Blank lines are skipped, as the chat UI never sent empty messages.
//! `/quit`, `/exit` or end of input leave the session. Saying "bye" is an
//! ordinary utterance and gets the farewell reply without ending the loop.
//!
//! The loop itself ([`run_session`]) is generic over reader and writer so it
//! can be driven from tests with in-memory buffers.
//!
use crate::core::config::{self, ChatConfig};
use crate::core::error::Result;
use crate::responder::Responder;
use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

const QUIT_COMMANDS: [&str; 2] = ["/quit", "/exit"];

/// # Chat Arguments (`ChatArgs`)
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Fixed seed for random replies (overrides `[responder] seed`).
    #[arg(long)]
    pub seed: Option<u64>,
}

/// # Handle Chat Command (`handle_chat`)
///
/// Loads configuration, builds a responder, then hands stdin/stdout to
/// [`run_session`] until the user quits.
pub async fn handle_chat(args: ChatArgs) -> Result<()> {
    let mut cfg = config::load_config()?;
    if args.seed.is_some() {
        cfg.responder.seed = args.seed;
    }
    let responder = Responder::from_config(&cfg.responder);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let replies = run_session(&responder, &cfg.chat, stdin.lock(), stdout.lock())?;
    info!("Chat session ended after {} repl(ies)", replies);
    Ok(())
}

/// Runs the read-classify-print loop. Returns the number of replies printed.
pub fn run_session<R: BufRead, W: Write>(
    responder: &Responder,
    labels: &ChatConfig,
    input: R,
    mut output: W,
) -> Result<usize> {
    writeln!(
        output,
        "Chat with {}! Type /quit to leave.",
        labels.bot_label
    )
    .context("Failed to write to stdout")?;

    let mut replies = 0;
    let mut lines = input.lines();
    loop {
        write!(output, "{}: ", labels.user_label).context("Failed to write to stdout")?;
        output.flush().context("Failed to flush stdout")?;

        let line = match lines.next() {
            Some(line) => line.context("Failed to read from stdin")?,
            None => {
                // End of input: finish the prompt line before leaving.
                writeln!(output).context("Failed to write to stdout")?;
                break;
            }
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if QUIT_COMMANDS.iter().any(|c| trimmed.eq_ignore_ascii_case(c)) {
            debug!("Quit command received");
            break;
        }

        let reply = responder.explain(trimmed);
        debug!(rule = reply.rule, "Replying");
        writeln!(output, "{}: {}", labels.bot_label, reply.text)
            .context("Failed to write to stdout")?;
        replies += 1;
    }
    Ok(replies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> (usize, String) {
        let responder = Responder::seeded(1);
        let mut out = Vec::new();
        let count = run_session(
            &responder,
            &ChatConfig::default(),
            Cursor::new(script.as_bytes()),
            &mut out,
        )
        .unwrap();
        (count, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_replies_until_quit() {
        let (count, out) = run("who are you\nwhat is 6 * 7\n/quit\nyour name\n");
        assert_eq!(count, 2);
        assert!(out.starts_with("Chat with RuleBot! Type /quit to leave.\n"));
        assert!(out.contains("RuleBot: I am RuleBot, a deterministic chat interface"));
        assert!(out.contains("RuleBot: The answer is 42."));
        assert!(!out.contains("You can call me RuleBot."));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let (count, _) = run("\n   \nhi\n");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (count, out) = run("goodbye");
        assert_eq!(count, 1);
        assert!(out.contains("RuleBot: Goodbye! Have a great day."));
        assert!(out.ends_with("You: \n"));
    }

    #[test]
    fn test_farewell_does_not_end_session() {
        let (count, _) = run("bye\nyour name\n/EXIT\n");
        assert_eq!(count, 2);
    }

    #[test]
    fn test_custom_labels() {
        let responder = Responder::seeded(1);
        let labels = ChatConfig {
            user_label: "Dave".into(),
            bot_label: "HAL".into(),
        };
        let mut out = Vec::new();
        run_session(
            &responder,
            &labels,
            Cursor::new("open the pod bay doors\n".as_bytes()),
            &mut out,
        )
        .unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Dave: HAL: I'm sorry, Dave. I'm afraid I can't do that."));
    }
}
