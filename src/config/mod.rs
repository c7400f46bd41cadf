#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, CommonArgs, DemoCommand, LogFormat};
pub use toml_config::DemoConfig;
