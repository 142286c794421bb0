//! # RuleBot Arithmetic Evaluator
//!
//! File: cli/src/responder/arithmetic.rs
//!
//! ## Overview
//!
//! Handles utterances such as `what is 5 + 3` or `calc 4 * 2.5`. The first
//! `<number> <operator> <number>` run in the text is extracted into an
//! [`Expression`], both operands are parsed as `f64`, and the result is
//! rendered into a reply.
//!
//! ## Failure policy
//!
//! [`evaluate`] keeps the causes apart ([`ArithmeticError`]), but every failure
//! is answered with the same [`DIVIDE_BY_ZERO_REPLY`]. Division by zero is
//! checked before dividing, so an infinite quotient never reaches the reply.
//!
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

/// Reply for a zero divisor, and for every other evaluation failure.
pub const DIVIDE_BY_ZERO_REPLY: &str = "I cannot divide by zero.";

/// ASCII digit runs with an optional fractional part around one of `+ - * /`.
/// `\d` would also accept other scripts' digits, which `f64` cannot parse.
static EXPRESSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*([-+*/])\s*([0-9]+(?:\.[0-9]+)?)")
        .expect("arithmetic pattern is a valid regex")
});

/// Why an expression could not produce a number.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("operand '{0}' is not a number")]
    InvalidOperand(String),

    #[error("unsupported operator '{0}'")]
    UnsupportedOperator(char),

    #[error("result is not a number")]
    NotANumber,
}

/// Two operands and an operator, lifted out of one utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub lhs: String,
    pub operator: char,
    pub rhs: String,
}

impl Expression {
    /// Extracts the first expression in `text`, if any. Later ones are ignored.
    pub fn find(text: &str) -> Option<Self> {
        let caps = EXPRESSION_PATTERN.captures(text)?;
        let operator = caps[2].chars().next()?;
        Some(Self {
            lhs: caps[1].to_string(),
            operator,
            rhs: caps[3].to_string(),
        })
    }

    pub fn evaluate(&self) -> Result<f64, ArithmeticError> {
        evaluate(&self.lhs, self.operator, &self.rhs)
    }

    /// Renders the chat reply for this expression.
    pub fn reply(&self) -> String {
        match self.evaluate() {
            Ok(value) => format!("The answer is {}.", format_number(value)),
            Err(e) => {
                debug!(
                    "Arithmetic on '{} {} {}' failed: {}",
                    self.lhs, self.operator, self.rhs, e
                );
                DIVIDE_BY_ZERO_REPLY.to_string()
            }
        }
    }
}

/// Parses both operands and applies `operator`.
pub fn evaluate(lhs: &str, operator: char, rhs: &str) -> Result<f64, ArithmeticError> {
    let a = parse_operand(lhs)?;
    let b = parse_operand(rhs)?;

    let result = match operator {
        '+' => a + b,
        '-' => a - b,
        '*' => a * b,
        '/' => {
            if b == 0.0 {
                return Err(ArithmeticError::DivisionByZero);
            }
            a / b
        }
        other => return Err(ArithmeticError::UnsupportedOperator(other)),
    };

    if result.is_nan() {
        return Err(ArithmeticError::NotANumber);
    }
    Ok(result)
}

fn parse_operand(raw: &str) -> Result<f64, ArithmeticError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ArithmeticError::InvalidOperand(raw.to_string()))
}

/// Shortest round-trip rendering: `8`, `10`, `2.5`, `0.30000000000000004`.
/// Negative zero prints as `0` and infinities as `Infinity` / `-Infinity`.
pub fn format_number(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
