use crate::config::DemoConfig;
use crate::core::{DemoEngine, DispatchDemo, Output, RunSummary, ScriptDemo, Token};
use crate::utils::error::{DemoError, Result};
use std::sync::Arc;

/// What a single invocation should run.
#[derive(Debug, Clone, PartialEq)]
pub enum Plan {
    Wait,
    Branch,
    Dispatch(Vec<Token>),
    Script(Vec<String>),
    /// Commands read from stdin as they arrive.
    ScriptStdin,
    All,
}

/// Builds the engine for `plan` from `config`.
pub fn build_engine(plan: Plan, config: &DemoConfig, output: Arc<dyn Output>) -> DemoEngine {
    let engine = DemoEngine::new(output);
    match plan {
        Plan::Wait => engine.with_demo(config.concurrent_demo()),
        Plan::Branch => engine
            .with_demo(config.branch_demo())
            .with_demo(config.dispatch_demo()),
        Plan::Dispatch(tokens) => engine.with_demo(DispatchDemo::new(tokens)),
        Plan::Script(lines) => engine.with_demo(ScriptDemo::new(lines)),
        Plan::ScriptStdin => engine.with_demo(ScriptDemo::stdin()),
        Plan::All => engine
            .with_demo(config.concurrent_demo())
            .with_demo(config.branch_demo())
            .with_demo(config.dispatch_demo()),
    }
}

pub async fn run_plan(plan: Plan, config: &DemoConfig, output: Arc<dyn Output>) -> Result<RunSummary> {
    tracing::debug!("Running plan {:?}", plan);
    build_engine(plan, config, output).run().await
}

/// Logs a failure the way every binary reports it and returns the exit code.
pub fn report_failure(e: &DemoError) -> i32 {
    tracing::error!(
        "❌ Demo failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    e.exit_code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::Transcript;

    #[tokio::test]
    async fn test_branch_plan_runs_chain_then_dispatch() {
        let transcript = Transcript::new();
        let summary = run_plan(Plan::Branch, &DemoConfig::default(), Arc::new(transcript.clone()))
            .await
            .unwrap();

        assert_eq!(summary.completed, vec!["branch", "dispatch"]);
        assert_eq!(
            transcript.lines(),
            vec![
                "Five is greater than two!",
                "This is in the if block",
                "1 + 2 = 3"
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_all_plan_runs_every_demo_in_order() {
        let transcript = Transcript::new();
        let summary = run_plan(Plan::All, &DemoConfig::default(), Arc::new(transcript.clone()))
            .await
            .unwrap();

        assert_eq!(summary.completed, vec!["concurrent-wait", "branch", "dispatch"]);
        assert!(!summary.exit_requested);
        assert_eq!(
            transcript.lines(),
            vec![
                "Waited for 1 second",
                "Waited for 2 seconds",
                "Done",
                "Five is greater than two!",
                "This is in the if block",
                "1 + 2 = 3"
            ]
        );
    }

    #[test]
    fn test_build_engine_sizes() {
        let config = DemoConfig::default();
        let output: Arc<dyn Output> = Arc::new(Transcript::new());
        assert_eq!(build_engine(Plan::Wait, &config, output.clone()).len(), 1);
        assert_eq!(build_engine(Plan::All, &config, output).len(), 3);
    }
}
