use clap::Parser;
use example_code::app::{report_failure, run_plan, Plan};
use example_code::config::{CliConfig, DemoCommand};
use example_code::utils::validation::Validate;
use example_code::ConsoleOutput;
use std::sync::Arc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    cli.common.init_logging();

    tracing::info!("Starting example-code");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.common.load_config() {
        Ok(config) => config,
        Err(e) => std::process::exit(report_failure(&e)),
    };
    if let Err(e) = config.validate() {
        std::process::exit(report_failure(&e));
    }

    let plan = match cli.command.unwrap_or(DemoCommand::All) {
        DemoCommand::Wait => Plan::Wait,
        DemoCommand::Branch => Plan::Branch,
        DemoCommand::Dispatch { tokens } => {
            Plan::Dispatch(DemoCommand::dispatch_tokens(&tokens, &config))
        }
        DemoCommand::Script => Plan::ScriptStdin,
        DemoCommand::All => Plan::All,
    };

    match run_plan(plan, &config, Arc::new(ConsoleOutput::new())).await {
        Ok(summary) => {
            tracing::info!(
                "✅ Finished: {} (exited early: {})",
                summary.completed.join(", "),
                summary.exited_early
            );
            if summary.exit_requested {
                // quit/exit ends the process without waiting on stdin
                std::process::exit(0);
            }
        }
        Err(e) => std::process::exit(report_failure(&e)),
    }

    Ok(())
}
