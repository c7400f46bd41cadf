use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// One element of a command scrutinee such as `["add", 1, 2]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Token {
    Int(i64),
    Float(f64),
    Word(String),
}

impl Token {
    /// Reads a single whitespace-free piece of a command line.
    pub fn parse(raw: &str) -> Self {
        if let Ok(value) = raw.parse::<i64>() {
            return Token::Int(value);
        }
        // "inf" and "nan" parse as f64 but are words on a command line
        if raw.chars().any(|c| c.is_ascii_digit()) {
            if let Ok(value) = raw.parse::<f64>() {
                return Token::Float(value);
            }
        }
        Token::Word(raw.to_string())
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Token::Int(v) => Some(Number::Int(*v)),
            Token::Float(v) => Some(Number::Float(*v)),
            Token::Word(_) => None,
        }
    }

    pub fn as_word(&self) -> Option<&str> {
        match self {
            Token::Word(w) => Some(w.as_str()),
            _ => None,
        }
    }

    /// Operand type name as shown in type errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Token::Int(_) => "int",
            Token::Float(_) => "float",
            Token::Word(_) => "str",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Int(v) => write!(f, "{}", Number::Int(*v)),
            Token::Float(v) => write!(f, "{}", Number::Float(*v)),
            Token::Word(w) => f.write_str(w),
        }
    }
}

impl From<Number> for Token {
    fn from(value: Number) -> Self {
        match value {
            Number::Int(v) => Token::Int(v),
            Number::Float(v) => Token::Float(v),
        }
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Token::Word(value.to_string())
    }
}

impl From<i64> for Token {
    fn from(value: i64) -> Self {
        Token::Int(value)
    }
}

impl From<f64> for Token {
    fn from(value: f64) -> Self {
        Token::Float(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            Number::Float(v) => f.write_str(&float_repr(*v)),
        }
    }
}

/// Shortest round-trip float text: `3.0`, `0.0001`, `1e+16`, `1.5e-05`,
/// `nan`, `-inf`. Exponent form below 1e-4 and from 1e16 up.
pub fn float_repr(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{:e}", v);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if v != 0.0 && !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    let plain = format!("{}", v);
    if plain.contains('.') {
        plain
    } else {
        // whole floats keep their ".0" so 3.0 never reads as an integer
        format!("{}.0", plain)
    }
}

/// A recognised command shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(Token, Token),
    Sub(Token, Token),
    Mul(Token, Token),
    Quit,
    Unknown,
}

/// Whether the caller should keep running demos after this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitTask {
    pub delay: Duration,
}

impl WaitTask {
    pub fn from_millis(ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(ms),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Completion {
    pub message: String,
    pub delay: Duration,
    /// Position in completion order, starting at zero.
    pub order: usize,
    /// Position in creation order.
    pub index: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct WaitReport {
    /// Sorted by completion order.
    pub completions: Vec<Completion>,
    pub elapsed: Duration,
}
