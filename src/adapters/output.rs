use crate::domain::ports::Output;
use crate::utils::error::{DemoError, Result};
use std::io::Write;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for ConsoleOutput {
    fn emit(&self, line: &str) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", line)?;
        handle.flush()?;
        Ok(())
    }
}

/// Keeps every emitted line in memory.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Arc<Mutex<Vec<String>>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn text(&self) -> String {
        self.lines().join("\n")
    }
}

impl Output for Transcript {
    fn emit(&self, line: &str) -> Result<()> {
        let mut lines = self.lines.lock().map_err(|e| DemoError::OutputError {
            message: format!("transcript lock poisoned: {}", e),
        })?;
        lines.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_records_in_order() {
        let transcript = Transcript::new();
        transcript.emit("first").unwrap();
        transcript.clone().emit("second").unwrap();
        assert_eq!(transcript.lines(), vec!["first", "second"]);
        assert_eq!(transcript.text(), "first\nsecond");
    }
}
