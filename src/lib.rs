pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, CommonArgs, DemoCommand};

pub use adapters::{ConsoleOutput, Transcript};
pub use app::{run_plan, Plan};
pub use config::DemoConfig;
pub use crate::core::{DemoEngine, Flow, RunSummary};
pub use utils::error::{DemoError, Result};
