use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing environment variable: {name}")]
    MissingEnvVarError { name: String },

    #[error("Task '{task}' failed: {message}")]
    TaskFailed { task: String, message: String },

    #[error("Arithmetic error: {message}")]
    Arithmetic { message: String },

    #[error("Type error: {message}")]
    TypeMismatch { message: String },

    #[error("Output error: {message}")]
    OutputError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Runtime,
    Computation,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DemoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DemoError::ConfigValidationError { .. }
            | DemoError::InvalidConfigValueError { .. }
            | DemoError::MissingEnvVarError { .. } => ErrorCategory::Configuration,
            DemoError::TaskFailed { .. } => ErrorCategory::Runtime,
            DemoError::Arithmetic { .. } | DemoError::TypeMismatch { .. } => {
                ErrorCategory::Computation
            }
            DemoError::IoError(_)
            | DemoError::SerializationError(_)
            | DemoError::OutputError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Computation => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Runtime => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DemoError::ConfigValidationError { field, .. }
            | DemoError::InvalidConfigValueError { field, .. } => {
                format!("Check the '{}' entry in the configuration file", field)
            }
            DemoError::MissingEnvVarError { name } => {
                format!("Export {} before running, or remove it from the config", name)
            }
            DemoError::TaskFailed { .. } => "Re-run with --verbose to see the task log".to_string(),
            DemoError::Arithmetic { .. } => "Use smaller operands".to_string(),
            DemoError::TypeMismatch { .. } => {
                "Words only combine with '+' (two words) or '*' (word and integer)".to_string()
            }
            DemoError::IoError(_) | DemoError::OutputError { .. } => {
                "Check that stdout is writable and the config path exists".to_string()
            }
            DemoError::SerializationError(_) => "Check the report format".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Runtime => format!("A demo task did not finish: {}", self),
            ErrorCategory::Computation => format!("Could not evaluate the command: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
