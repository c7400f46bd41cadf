use crate::core::{BranchDemo, ConcurrentWaitDemo, DispatchDemo, Number, Token, WaitTask};
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{
    validate_finite, validate_non_empty, validate_positive_number, validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_TIME_SCALE: f64 = 100.0;

/// File configuration. Every table is optional; defaults reproduce the
/// stock demonstrations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub concurrency: ConcurrencyConfig,
    pub branch: BranchConfig,
    pub dispatch: DispatchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConcurrencyConfig {
    pub delays_ms: Vec<u64>,
    pub time_scale: f64,
}

impl Default for ConcurrencyConfig {
    fn default() -> Self {
        Self {
            delays_ms: vec![1000, 2000],
            time_scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BranchConfig {
    pub left: Number,
    pub right: Number,
}

impl Default for BranchConfig {
    fn default() -> Self {
        Self {
            left: Number::Int(5),
            right: Number::Int(2),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    pub command: Vec<Token>,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            command: vec![Token::from("add"), Token::Int(1), Token::Int(2)],
        }
    }
}

impl DemoConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DemoError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DemoError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the value of the environment variable.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").map_err(|e| {
            DemoError::ConfigValidationError {
                field: "env_substitution".to_string(),
                message: e.to_string(),
            }
        })?;

        let mut missing = None;
        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                missing.get_or_insert_with(|| var_name.to_string());
                String::new()
            })
        });

        match missing {
            Some(name) => Err(DemoError::MissingEnvVarError { name }),
            None => Ok(result.into_owned()),
        }
    }

    pub fn wait_tasks(&self) -> Vec<WaitTask> {
        self.concurrency
            .delays_ms
            .iter()
            .map(|&ms| WaitTask::from_millis(ms))
            .collect()
    }

    pub fn concurrent_demo(&self) -> ConcurrentWaitDemo {
        ConcurrentWaitDemo::new(self.wait_tasks(), self.concurrency.time_scale)
    }

    pub fn branch_demo(&self) -> BranchDemo {
        BranchDemo::new(self.branch.left, self.branch.right)
    }

    pub fn dispatch_demo(&self) -> DispatchDemo {
        DispatchDemo::new(self.dispatch.command.clone())
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty("concurrency.delays_ms", &self.concurrency.delays_ms)?;
        for &delay in &self.concurrency.delays_ms {
            validate_positive_number("concurrency.delays_ms", delay, 1)?;
        }

        validate_finite("concurrency.time_scale", self.concurrency.time_scale)?;
        validate_range(
            "concurrency.time_scale",
            self.concurrency.time_scale,
            0.0,
            MAX_TIME_SCALE,
        )?;

        validate_non_empty("dispatch.command", &self.dispatch.command)?;
        Ok(())
    }
}
