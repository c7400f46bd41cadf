use crate::core::{Demo, Flow, Output};
use crate::utils::error::Result;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub completed: Vec<String>,
    /// Set when a demo asked to stop before the list was exhausted.
    pub exited_early: bool,
    /// Set when any demo returned `Flow::Exit`.
    pub exit_requested: bool,
}

pub struct DemoEngine {
    demos: Vec<Box<dyn Demo>>,
    output: Arc<dyn Output>,
}

impl DemoEngine {
    pub fn new(output: Arc<dyn Output>) -> Self {
        Self {
            demos: Vec::new(),
            output,
        }
    }

    pub fn with_demo<D: Demo + 'static>(mut self, demo: D) -> Self {
        self.demos.push(Box::new(demo));
        self
    }

    pub fn len(&self) -> usize {
        self.demos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.demos.is_empty()
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Running {} demo(s)", self.demos.len());
        let mut completed = Vec::with_capacity(self.demos.len());

        for (position, demo) in self.demos.iter().enumerate() {
            tracing::debug!("Starting demo '{}'", demo.name());
            let flow = demo.run(Arc::clone(&self.output)).await?;
            completed.push(demo.name().to_string());

            if flow == Flow::Exit {
                let skipped = self.demos.len() - position - 1;
                tracing::info!("Demo '{}' requested exit, skipping {} demo(s)", demo.name(), skipped);
                return Ok(RunSummary {
                    completed,
                    exited_early: skipped > 0,
                    exit_requested: true,
                });
            }
        }

        tracing::info!("All demos finished");
        Ok(RunSummary {
            completed,
            exited_early: false,
            exit_requested: false,
        })
    }
}
