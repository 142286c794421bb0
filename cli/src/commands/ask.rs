//! # RuleBot Ask Command
//!
//! File: cli/src/commands/ask.rs
//!
//! ## Overview
//!
//! Implements `rulebot ask <words...>`: classifies a single utterance and
//! prints the reply. With `--explain` the name of the answering rule is
//! printed on its own line before the reply.
//!
//! ## Examples
//!
//! ```bash
//! rulebot ask what is 5 + 3
//! # The answer is 8.
//!
//! rulebot ask --explain --seed 7 tell me a joke
//! # [joke]
//! # Why do programmers prefer dark mode? Because light attracts bugs.
//! ```
//!
use crate::core::config;
use crate::core::error::{Result, RulebotError};
use crate::responder::{Reply, Responder};
use clap::Parser;
use tracing::info;

/// # Ask Arguments (`AskArgs`)
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The utterance. Multiple words are joined with single spaces.
    /// Flags go before the words; everything after the first word is text.
    #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,

    /// Fixed seed for random replies (overrides `[responder] seed`).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the name of the rule that answered.
    #[arg(long)]
    pub explain: bool,
}

/// # Handle Ask Command (`handle_ask`)
///
/// Loads configuration, builds a responder and prints one reply to stdout.
///
/// ## Errors
///
/// Fails if configuration cannot be loaded or if the joined utterance is blank.
pub async fn handle_ask(args: AskArgs) -> Result<()> {
    let mut cfg = config::load_config()?;
    if args.seed.is_some() {
        cfg.responder.seed = args.seed;
    }
    let responder = Responder::from_config(&cfg.responder);

    let reply = ask(&responder, &args.words)?;
    info!("Answered by rule '{}'", reply.rule);
    println!("{}", render(&reply, args.explain));
    Ok(())
}

/// Joins `words` into one utterance and classifies it. Blank input is rejected.
pub fn ask(responder: &Responder, words: &[String]) -> Result<Reply> {
    let utterance = words.join(" ");
    if utterance.trim().is_empty() {
        return Err(RulebotError::EmptyMessage.into());
    }
    Ok(responder.explain(&utterance))
}

fn render(reply: &Reply, explain: bool) -> String {
    if explain {
        format!("[{}]\n{}", reply.rule, reply.text)
    } else {
        reply.text.clone()
    }
}
