//! # RuleBot Rules Command
//!
//! File: cli/src/commands/rules.rs
//!
//! ## Overview
//!
//! Implements `rulebot rules`, which prints the rule table in the order the
//! dispatcher evaluates it. Earlier rows win over later rows when both match.
//!
//! Example output:
//!
//! ```text
//! Rules in priority order:
//!
//!  #  | Name                 | Matches when
//! ----+----------------------+----------------------------------------------
//!   1 | greeting             | starts with hi/hello/hey/howdy/greetings/yo
//!   2 | identity             | contains "who are you" or "what are you"
//! ...
//!  17 | fallback             | anything else
//!
//! 17 rule(s). The first matching rule answers.
//! ```
//!
use crate::core::error::Result;
use crate::responder::rules::{rules, Rule};
use clap::Parser;
use tracing::debug;

/// # Rules Arguments (`RulesArgs`)
///
/// Takes no arguments; exists so the command fits the clap subcommand layout.
#[derive(Parser, Debug)]
pub struct RulesArgs {}

/// # Handle Rules Command (`handle_rules`)
pub async fn handle_rules(_args: RulesArgs) -> Result<()> {
    let table = rules();
    debug!("Listing {} rules", table.len());
    print!("{}", render_table(table));
    Ok(())
}

fn render_table(table: &[Rule]) -> String {
    let name_width = table
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(0)
        .max("Name".len());
    let summary_width = table
        .iter()
        .map(|r| r.summary.len())
        .max()
        .unwrap_or(0)
        .max("Matches when".len());

    let mut out = String::from("Rules in priority order:\n\n");
    out.push_str(&format!(
        " #  | {:<name_width$} | Matches when\n",
        "Name",
        name_width = name_width
    ));
    out.push_str(&format!(
        "----+-{}-+-{}\n",
        "-".repeat(name_width),
        "-".repeat(summary_width)
    ));
    for (index, rule) in table.iter().enumerate() {
        out.push_str(&format!(
            "{:>3} | {:<name_width$} | {}\n",
            index + 1,
            rule.name,
            rule.summary,
            name_width = name_width
        ));
    }
    out.push_str(&format!(
        "\n{} rule(s). The first matching rule answers.\n",
        table.len()
    ));
    out
}
