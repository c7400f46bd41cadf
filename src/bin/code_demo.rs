use clap::Parser;
use example_code::app::{report_failure, run_plan, Plan};
use example_code::config::CommonArgs;
use example_code::utils::validation::Validate;
use example_code::ConsoleOutput;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "code-demo")]
#[command(about = "Comparison chain followed by command dispatch")]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    args.common.init_logging();

    let config = match args.common.load_config() {
        Ok(config) => config,
        Err(e) => std::process::exit(report_failure(&e)),
    };
    if let Err(e) = config.validate() {
        std::process::exit(report_failure(&e));
    }

    if let Err(e) = run_plan(Plan::Branch, &config, Arc::new(ConsoleOutput::new())).await {
        std::process::exit(report_failure(&e));
    }
    Ok(())
}
