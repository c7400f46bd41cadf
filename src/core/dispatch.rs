use crate::core::{Command, Demo, Flow, Number, Output, Token};
use crate::utils::error::{DemoError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tokio::sync::Mutex;

pub const GOODBYE_MESSAGE: &str = "Goodbye!";
pub const UNKNOWN_MESSAGE: &str = "Unknown command";

/// Upper bound on the text produced by repeating a word.
pub const MAX_REPEAT_LEN: usize = 1 << 20;

impl Command {
    /// Matches `tokens` against the known shapes, first match wins.
    /// Arithmetic shapes bind operands of any type.
    pub fn from_tokens(tokens: &[Token]) -> Self {
        match tokens {
            [Token::Word(op), x, y] => match op.as_str() {
                "add" => Command::Add(x.clone(), y.clone()),
                "sub" => Command::Sub(x.clone(), y.clone()),
                "mul" => Command::Mul(x.clone(), y.clone()),
                _ => Command::Unknown,
            },
            [Token::Word(word)] if matches!(word.as_str(), "quit" | "exit") => Command::Quit,
            _ => Command::Unknown,
        }
    }
}

pub fn parse_line(line: &str) -> Vec<Token> {
    line.split_whitespace().map(Token::parse).collect()
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Add,
    Sub,
    Mul,
}

impl Op {
    fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
        }
    }

    fn apply_numbers(self, x: Number, y: Number) -> Result<Number> {
        match (x, y) {
            (Number::Int(a), Number::Int(b)) => {
                let value = match self {
                    Op::Add => a.checked_add(b),
                    Op::Sub => a.checked_sub(b),
                    Op::Mul => a.checked_mul(b),
                };
                value.map(Number::Int).ok_or_else(|| DemoError::Arithmetic {
                    message: format!("{} {} {} overflows a 64-bit integer", a, self.symbol(), b),
                })
            }
            _ => {
                let (a, b) = (x.as_f64(), y.as_f64());
                Ok(Number::Float(match self {
                    Op::Add => a + b,
                    Op::Sub => a - b,
                    Op::Mul => a * b,
                }))
            }
        }
    }

    /// Numbers combine arithmetically, two words concatenate under `+`,
    /// and a word times an integer repeats. Anything else is a type error.
    fn apply(self, x: &Token, y: &Token) -> Result<Token> {
        if let (Some(a), Some(b)) = (x.as_number(), y.as_number()) {
            return self.apply_numbers(a, b).map(Token::from);
        }
        match (self, x, y) {
            (Op::Add, Token::Word(a), Token::Word(b)) => Ok(Token::Word(format!("{}{}", a, b))),
            (Op::Mul, Token::Word(word), Token::Int(times))
            | (Op::Mul, Token::Int(times), Token::Word(word)) => repeat(word, *times),
            _ => Err(DemoError::TypeMismatch {
                message: format!(
                    "unsupported operand type(s) for {}: '{}' and '{}'",
                    self.symbol(),
                    x.type_name(),
                    y.type_name()
                ),
            }),
        }
    }

    fn describe(self, x: &Token, y: &Token) -> Result<String> {
        let result = self.apply(x, y)?;
        Ok(format!("{} {} {} = {}", x, self.symbol(), y, result))
    }
}

fn repeat(word: &str, times: i64) -> Result<Token> {
    // non-positive counts give an empty word
    let count = usize::try_from(times.max(0)).unwrap_or(usize::MAX);
    match word.len().checked_mul(count) {
        Some(len) if len <= MAX_REPEAT_LEN => Ok(Token::Word(word.repeat(count))),
        _ => Err(DemoError::Arithmetic {
            message: format!(
                "repeating a {}-byte word {} times exceeds {} bytes",
                word.len(),
                times,
                MAX_REPEAT_LEN
            ),
        }),
    }
}

/// Line to print for `command` and whether dispatch should stop afterwards.
pub fn dispatch(command: &Command) -> Result<(String, Flow)> {
    let line = match command {
        Command::Add(x, y) => Op::Add.describe(x, y)?,
        Command::Sub(x, y) => Op::Sub.describe(x, y)?,
        Command::Mul(x, y) => Op::Mul.describe(x, y)?,
        Command::Quit => return Ok((GOODBYE_MESSAGE.to_string(), Flow::Exit)),
        Command::Unknown => UNKNOWN_MESSAGE.to_string(),
    };
    Ok((line, Flow::Continue))
}

pub struct DispatchDemo {
    tokens: Vec<Token>,
}

impl DispatchDemo {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}

impl Default for DispatchDemo {
    fn default() -> Self {
        Self::new(vec![Token::from("add"), Token::Int(1), Token::Int(2)])
    }
}

#[async_trait]
impl Demo for DispatchDemo {
    fn name(&self) -> &str {
        "dispatch"
    }

    async fn run(&self, output: Arc<dyn Output>) -> Result<Flow> {
        let command = Command::from_tokens(&self.tokens);
        tracing::debug!("{:?} matched {:?}", self.tokens, command);
        let (line, flow) = dispatch(&command)?;
        output.emit(&line)?;
        Ok(flow)
    }
}

type LineSource = Lines<Box<dyn AsyncBufRead + Send + Unpin>>;

/// Dispatches one command per line as lines arrive, until a quit or exit.
/// Nothing past the quitting line is read.
pub struct ScriptDemo {
    lines: Mutex<LineSource>,
}

impl ScriptDemo {
    pub fn from_reader<R>(reader: R) -> Self
    where
        R: AsyncBufRead + Send + Unpin + 'static,
    {
        let boxed: Box<dyn AsyncBufRead + Send + Unpin> = Box::new(reader);
        Self {
            lines: Mutex::new(boxed.lines()),
        }
    }

    pub fn new(lines: Vec<String>) -> Self {
        Self::from_reader(std::io::Cursor::new(lines.join("\n").into_bytes()))
    }

    pub fn stdin() -> Self {
        Self::from_reader(BufReader::new(tokio::io::stdin()))
    }
}

#[async_trait]
impl Demo for ScriptDemo {
    fn name(&self) -> &str {
        "script"
    }

    async fn run(&self, output: Arc<dyn Output>) -> Result<Flow> {
        let mut lines = self.lines.lock().await;
        let mut number = 0usize;

        while let Some(raw) = lines.next_line().await? {
            number += 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let command = Command::from_tokens(&parse_line(line));
            tracing::debug!("line {}: {:?}", number, command);
            let (text, flow) = dispatch(&command)?;
            output.emit(&text)?;
            if flow == Flow::Exit {
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }
}
