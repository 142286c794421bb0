//! # RuleBot Rule Table
//!
//! File: cli/src/responder/rules.rs
//!
//! ## Overview
//!
//! The ordered list of `(matcher, producer)` pairs the dispatcher walks. The
//! position of a rule in [`rules()`] is its priority: the first rule whose
//! matcher accepts the normalized utterance answers, and later rules are never
//! consulted. Containment checks are plain substring tests with no word
//! boundaries, so `"js"` inside a longer word still selects the JavaScript
//! rule.
//!
//! ## Architecture
//!
//! - [`Matcher`]: a predicate over the normalized text. Most are keyword
//!   lists; the self-report rules use a regex and the arithmetic rule extracts
//!   an [`Expression`].
//! - [`Producer`]: what to say once matched. Static text, a [`ResponseSet`]
//!   pick, or a value computed from the clock or the expression. The
//!   dispatcher in `responder/mod.rs` owns the random source and the clock, so
//!   producers here are plain data.
//!
use super::arithmetic::Expression;
use super::response_set::ResponseSet;
use regex::Regex;
use std::sync::LazyLock;

// --- Reply text ---

pub const GREETINGS: ResponseSet = ResponseSet::new(&[
    "Hello! How can I help you today?",
    "Hi there! What's on your mind?",
    "Greetings! ready to chat.",
    "Hey! Need any assistance?",
]);

pub const IDENTITY_REPLY: &str = "I am RuleBot, a deterministic chat interface built with React. I function based on predefined logic patterns rather than generative AI.";

pub const NAME_REPLY: &str = "You can call me RuleBot.";

pub const PERSONHOOD_REPLY: &str =
    "No, I am a computer program designed to respond to your inputs.";

pub const STATUS: ResponseSet = ResponseSet::new(&[
    "I'm functioning at 100% efficiency! How about you?",
    "Systems are operational. Thanks for asking! How are you?",
    "I'm just a bot, but I'm feeling great. You?",
]);

pub const POSITIVE_REPLY: &str = "That's wonderful to hear! I love positive vibes.";

pub const NEGATIVE_REPLY: &str = "I'm sorry to hear that. I hope your day gets better soon. Is there anything I can do to help?";

/// Keeps the indented blank line and trailing indent of the chat UI's text.
pub const HELP_REPLY: &str = "I can assist with simple conversations. Here are some things you can ask me:\n    \n\
- \"Who are you?\"\n\
- \"What time is it?\"\n\
- \"Tell me a joke\"\n\
- \"Open the pod bay doors\"\n\
- \"What is React?\"\n    ";

pub const JOKES: ResponseSet = ResponseSet::new(&[
    "Why do programmers prefer dark mode? Because light attracts bugs.",
    "How many programmers does it take to change a light bulb? None, that's a hardware problem.",
    "I would tell you a UDP joke, but you might not get it.",
    "Why did the developer go broke? Because he used up all his cache.",
]);

pub const POD_BAY_REPLY: &str = "I'm sorry, Dave. I'm afraid I can't do that.";

pub const REACT_REPLY: &str = "React is a JavaScript library for building user interfaces, maintained by Meta and a community of developers. I'm built with it!";

pub const JAVASCRIPT_REPLY: &str =
    "JavaScript is the language of the web. It's versatile, powerful, and occasionally confusing!";

pub const FAREWELL_REPLY: &str = "Goodbye! Have a great day.";

pub const FALLBACKS: ResponseSet = ResponseSet::new(&[
    "I'm not sure I understand. Could you rephrase that?",
    "That's interesting. Tell me more.",
    "I don't have a specific rule for that, but I'm listening.",
    "Could you clarify what you mean?",
    "I'm a simple rule-based bot, so I might have missed that. Try asking for 'help'.",
]);

/// Name of the rule that answers when nothing else does.
pub const FALLBACK_RULE: &str = "fallback";

// --- Table types ---

/// Predicate over a normalized utterance.
#[derive(Debug)]
pub enum Matcher {
    StartsWithAny(&'static [&'static str]),
    EqualsAny(&'static [&'static str]),
    ContainsAny(&'static [&'static str]),
    Pattern(Regex),
    /// Matches when any inner matcher does.
    AnyOf(Vec<Matcher>),
    /// Matches when the text holds a `<number> <op> <number>` run.
    Arithmetic,
    Always,
}

/// What a matcher hands to the producer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matched {
    Text,
    Expression(Expression),
}

impl Matcher {
    pub fn matches(&self, text: &str) -> Option<Matched> {
        let hit = match self {
            Matcher::StartsWithAny(prefixes) => prefixes.iter().any(|p| text.starts_with(p)),
            Matcher::EqualsAny(words) => words.iter().any(|w| text == *w),
            Matcher::ContainsAny(needles) => needles.iter().any(|n| text.contains(n)),
            Matcher::Pattern(re) => re.is_match(text),
            Matcher::AnyOf(inner) => return inner.iter().find_map(|m| m.matches(text)),
            Matcher::Arithmetic => return Expression::find(text).map(Matched::Expression),
            Matcher::Always => true,
        };
        hit.then_some(Matched::Text)
    }
}

/// How a matched rule builds its reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Producer {
    Static(&'static str),
    Random(ResponseSet),
    /// "The current local time is {time}."
    TimeOfDay,
    /// "Today is {date}."
    LongDate,
    /// "The answer is {n}." or the divide-by-zero apology.
    Arithmetic,
}

/// One entry of the priority list.
#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    pub summary: &'static str,
    pub matcher: Matcher,
    pub producer: Producer,
}

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(build_rules);

/// The rule table in priority order. The last entry always matches.
pub fn rules() -> &'static [Rule] {
    &RULES
}

fn pattern(source: &str) -> Matcher {
    Matcher::Pattern(Regex::new(source).expect("rule pattern is a valid regex"))
}

fn build_rules() -> Vec<Rule> {
    vec![
        Rule {
            name: "greeting",
            summary: "starts with hi/hello/hey/howdy/greetings/yo",
            matcher: Matcher::AnyOf(vec![
                Matcher::StartsWithAny(&["hi", "hello", "hey", "howdy", "greetings", "yo"]),
                Matcher::EqualsAny(&["hi", "hello"]),
            ]),
            producer: Producer::Random(GREETINGS),
        },
        Rule {
            name: "identity",
            summary: "contains \"who are you\" or \"what are you\"",
            matcher: Matcher::ContainsAny(&["who are you", "what are you"]),
            producer: Producer::Static(IDENTITY_REPLY),
        },
        Rule {
            name: "name",
            summary: "contains \"your name\"",
            matcher: Matcher::ContainsAny(&["your name"]),
            producer: Producer::Static(NAME_REPLY),
        },
        Rule {
            name: "personhood",
            summary: "contains \"real person\" or \"human\"",
            matcher: Matcher::ContainsAny(&["real person", "human"]),
            producer: Producer::Static(PERSONHOOD_REPLY),
        },
        Rule {
            name: "status",
            summary: "contains \"how are you\" or \"how is it going\"",
            matcher: Matcher::ContainsAny(&["how are you", "how is it going"]),
            producer: Producer::Random(STATUS),
        },
        Rule {
            name: "positive-self-report",
            summary: "i am / i'm + good/great/fine/happy/doing well",
            matcher: pattern(r"(i am|i'm) (good|great|fine|happy|doing well)"),
            producer: Producer::Static(POSITIVE_REPLY),
        },
        Rule {
            name: "negative-self-report",
            summary: "i am / i'm + sad/bad/tired/unhappy/angry",
            matcher: pattern(r"(i am|i'm) (sad|bad|tired|unhappy|angry)"),
            producer: Producer::Static(NEGATIVE_REPLY),
        },
        Rule {
            name: "time",
            summary: "contains \"time\"",
            matcher: Matcher::ContainsAny(&["time"]),
            producer: Producer::TimeOfDay,
        },
        Rule {
            name: "date",
            summary: "contains \"date\" or \"day is it\"",
            matcher: Matcher::ContainsAny(&["date", "day is it"]),
            producer: Producer::LongDate,
        },
        Rule {
            name: "help",
            summary: "contains \"help\" or \"what can you do\"",
            matcher: Matcher::ContainsAny(&["help", "what can you do"]),
            producer: Producer::Static(HELP_REPLY),
        },
        Rule {
            name: "joke",
            summary: "contains \"joke\"",
            matcher: Matcher::ContainsAny(&["joke"]),
            producer: Producer::Random(JOKES),
        },
        Rule {
            name: "pod-bay-doors",
            summary: "contains \"open the pod bay doors\"",
            matcher: Matcher::ContainsAny(&["open the pod bay doors"]),
            producer: Producer::Static(POD_BAY_REPLY),
        },
        Rule {
            name: "react",
            summary: "contains \"react\"",
            matcher: Matcher::ContainsAny(&["react"]),
            producer: Producer::Static(REACT_REPLY),
        },
        Rule {
            name: "javascript",
            summary: "contains \"javascript\" or \"js\"",
            matcher: Matcher::ContainsAny(&["javascript", "js"]),
            producer: Producer::Static(JAVASCRIPT_REPLY),
        },
        Rule {
            name: "arithmetic",
            summary: "first <number> <+|-|*|/> <number> in the text",
            matcher: Matcher::Arithmetic,
            producer: Producer::Arithmetic,
        },
        Rule {
            name: "farewell",
            summary: "contains \"bye\", \"goodbye\" or \"see ya\"",
            matcher: Matcher::ContainsAny(&["bye", "goodbye", "see ya"]),
            producer: Producer::Static(FAREWELL_REPLY),
        },
        Rule {
            name: FALLBACK_RULE,
            summary: "anything else",
            matcher: Matcher::Always,
            producer: Producer::Random(FALLBACKS),
        },
    ]
}
