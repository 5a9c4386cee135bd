//! Declarative input validation.
//!
//! # Responsibility
//! - Evaluate a labeled value against an optional constraint set.
//! - Coerce raw text fields into numbers before numeric checks.
//!
//! # Invariants
//! - Evaluation is pure; no state survives between calls.
//! - Length bounds are strict (`len > min_length`, `len < max_length`).
//! - Numeric bounds are inclusive (`value >= min`, `value <= max`).
//! - A constraint whose type does not match the value is skipped, not failed.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};

static DECIMAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").expect("valid decimal regex")
});
static INFINITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([+-]?)Infinity$").expect("valid infinity regex"));
static RADIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0([xXoObB])([0-9a-fA-F]+)$").expect("valid radix regex"));

/// Value under validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatableValue {
    Text(String),
    Number(f64),
}

impl ValidatableValue {
    /// Text form used by the `required` check.
    fn display_form(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Number(value) => value.to_string(),
        }
    }
}

/// One constraint kind, reported when evaluation fails.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Min(f64),
    Max(f64),
}

impl Display for Constraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => write!(f, "required"),
            Self::MinLength(bound) => write!(f, "min_length={bound}"),
            Self::MaxLength(bound) => write!(f, "max_length={bound}"),
            Self::Min(bound) => write!(f, "min={bound}"),
            Self::Max(bound) => write!(f, "max={bound}"),
        }
    }
}

/// A value paired with its optional constraints.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: ValidatableValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    /// Creates an unconstrained textual rule.
    pub fn text(value: impl Into<String>) -> Self {
        Self::unconstrained(ValidatableValue::Text(value.into()))
    }

    /// Creates an unconstrained numeric rule.
    pub fn number(value: f64) -> Self {
        Self::unconstrained(ValidatableValue::Number(value))
    }

    fn unconstrained(value: ValidatableValue) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, bound: usize) -> Self {
        self.min_length = Some(bound);
        self
    }

    pub fn max_length(mut self, bound: usize) -> Self {
        self.max_length = Some(bound);
        self
    }

    pub fn min(mut self, bound: f64) -> Self {
        self.min = Some(bound);
        self
    }

    pub fn max(mut self, bound: f64) -> Self {
        self.max = Some(bound);
        self
    }
}

/// Returns whether every applicable constraint holds.
pub fn validate(rule: &Validatable) -> bool {
    failed_constraints(rule).is_empty()
}

/// Evaluates `rule` and returns the constraints that did not hold, in
/// declaration order.
pub fn failed_constraints(rule: &Validatable) -> Vec<Constraint> {
    let mut failed = Vec::new();

    if rule.required && rule.value.display_form().trim().is_empty() {
        failed.push(Constraint::Required);
    }

    if let ValidatableValue::Text(text) = &rule.value {
        let length = text.encode_utf16().count();
        if let Some(bound) = rule.min_length {
            if length <= bound {
                failed.push(Constraint::MinLength(bound));
            }
        }
        if let Some(bound) = rule.max_length {
            if length >= bound {
                failed.push(Constraint::MaxLength(bound));
            }
        }
    }

    if let ValidatableValue::Number(number) = rule.value {
        if let Some(bound) = rule.min {
            if number.is_nan() || number < bound {
                failed.push(Constraint::Min(bound));
            }
        }
        if let Some(bound) = rule.max {
            if number.is_nan() || number > bound {
                failed.push(Constraint::Max(bound));
            }
        }
    }

    failed
}

/// Coerces raw field text to a number.
///
/// Blank input becomes `0`. Decimal literals, `Infinity` and `0x`/`0o`/`0b`
/// prefixed integers are accepted; anything else becomes `NaN`.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    if DECIMAL_RE.is_match(trimmed) {
        return trimmed.parse::<f64>().unwrap_or(f64::NAN);
    }

    if let Some(captures) = INFINITY_RE.captures(trimmed) {
        return if &captures[1] == "-" {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    if let Some(captures) = RADIX_RE.captures(trimmed) {
        let radix = match &captures[1] {
            "x" | "X" => 16,
            "o" | "O" => 8,
            _ => 2,
        };
        return parse_radix_digits(&captures[2], radix);
    }

    f64::NAN
}

fn parse_radix_digits(digits: &str, radix: u32) -> f64 {
    let mut value = 0.0_f64;
    for ch in digits.chars() {
        match ch.to_digit(radix) {
            Some(digit) => value = value * f64::from(radix) + f64::from(digit),
            None => return f64::NAN,
        }
    }
    value
}
