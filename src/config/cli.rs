use crate::config::toml_config::DemoConfig;
use crate::core::dispatch::parse_line;
use crate::core::Token;
use crate::utils::error::Result;
use crate::utils::logger;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Options shared by every entry point.
#[derive(Debug, Clone, Parser)]
pub struct CommonArgs {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Multiplier applied to every real sleep (0 runs instantly)
    #[arg(long, global = true)]
    pub time_scale: Option<f64>,

    /// Log line format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,
}

impl CommonArgs {
    pub fn init_logging(&self) {
        match self.log_format {
            LogFormat::Compact => logger::init_cli_logger(self.verbose),
            LogFormat::Json => logger::init_json_logger(self.verbose),
        }
    }

    /// Loads the file configuration, if any, and applies command line overrides.
    pub fn load_config(&self) -> Result<DemoConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path);
                DemoConfig::from_file(path)?
            }
            None => DemoConfig::default(),
        };

        if let Some(scale) = self.time_scale {
            tracing::debug!("time_scale overridden to {}", scale);
            config.concurrency.time_scale = scale;
        }
        Ok(config)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "example-code")]
#[command(about = "Concurrent wait and command dispatch demonstrations")]
pub struct CliConfig {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Option<DemoCommand>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum DemoCommand {
    /// Start the timed waits together and wait for all of them
    Wait,
    /// Run the comparison chain followed by command dispatch
    Branch,
    /// Dispatch a single command, e.g. `dispatch add 1 2`. Negative
    /// numbers are tokens; other dash-prefixed words need a `--` first.
    Dispatch {
        #[arg(allow_negative_numbers = true)]
        tokens: Vec<String>,
    },
    /// Read commands from stdin, one per line, until quit or exit
    Script,
    /// Run every demonstration in order
    All,
}

impl DemoCommand {
    /// Tokens for `dispatch`, falling back to the configured command when none are given.
    pub fn dispatch_tokens(tokens: &[String], config: &DemoConfig) -> Vec<Token> {
        if tokens.is_empty() {
            config.dispatch.command.clone()
        } else {
            parse_line(&tokens.join(" "))
        }
    }
}
