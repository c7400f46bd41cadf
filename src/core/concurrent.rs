use crate::core::{Completion, Demo, Flow, Output, WaitReport, WaitTask};
use crate::utils::error::{DemoError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

pub const DONE_MESSAGE: &str = "Done";

/// Completion message for a wait of `delay`.
pub fn wait_message(delay: Duration) -> String {
    if delay.subsec_nanos() == 0 {
        match delay.as_secs() {
            1 => "Waited for 1 second".to_string(),
            secs => format!("Waited for {} seconds", secs),
        }
    } else {
        format!("Waited for {} seconds", delay.as_secs_f64())
    }
}

/// Starts every wait at once, awaits the handles in creation order and
/// finishes with [`DONE_MESSAGE`]. Each task reports itself when its sleep
/// ends, so messages come out in delay order. `time_scale` stretches the
/// real sleep without changing the reported delay. The first failure aborts
/// every wait that has not been joined yet.
pub async fn run_concurrent_waits(
    tasks: &[WaitTask],
    time_scale: f64,
    output: Arc<dyn Output>,
) -> Result<WaitReport> {
    if !time_scale.is_finite() || time_scale < 0.0 {
        return Err(DemoError::InvalidConfigValueError {
            field: "time_scale".to_string(),
            value: time_scale.to_string(),
            reason: "Value must be a finite, non-negative number".to_string(),
        });
    }

    let start = Instant::now();
    // Guards the completion counter and the emit together so order matches the transcript.
    let finished = Arc::new(Mutex::new(0usize));

    let mut handles = Vec::with_capacity(tasks.len());
    for (index, task) in tasks.iter().enumerate() {
        let output = Arc::clone(&output);
        let finished = Arc::clone(&finished);
        let delay = task.delay;
        let sleep_for = delay.mul_f64(time_scale);

        tracing::debug!("Spawning wait #{} ({:?}, sleeping {:?})", index + 1, delay, sleep_for);
        handles.push(tokio::spawn(async move {
            tokio::time::sleep(sleep_for).await;

            let message = wait_message(delay);
            let mut count = finished.lock().await;
            let order = *count;
            *count += 1;
            output.emit(&message)?;
            drop(count);

            tracing::debug!("Wait #{} finished as #{}", index + 1, order + 1);
            Ok::<_, DemoError>(Completion {
                message,
                delay,
                order,
                index,
            })
        }));
    }

    let mut completions = Vec::with_capacity(handles.len());
    let mut pending = handles.into_iter().enumerate();
    while let Some((index, handle)) = pending.next() {
        let joined = handle.await.map_err(|e| DemoError::TaskFailed {
            task: format!("wait #{}", index + 1),
            message: e.to_string(),
        });
        match joined.and_then(|result| result) {
            Ok(completion) => completions.push(completion),
            Err(e) => {
                // no wait may report after the failure
                for (_, rest) in pending.by_ref() {
                    rest.abort();
                }
                return Err(e);
            }
        }
    }
    completions.sort_by_key(|c| c.order);

    output.emit(DONE_MESSAGE)?;

    let elapsed = start.elapsed();
    tracing::info!("{} waits finished in {:?}", completions.len(), elapsed);
    let report = WaitReport {
        completions,
        elapsed,
    };
    tracing::debug!("Wait report: {}", serde_json::to_string(&report)?);
    Ok(report)
}

pub struct ConcurrentWaitDemo {
    tasks: Vec<WaitTask>,
    time_scale: f64,
}

impl ConcurrentWaitDemo {
    pub fn new(tasks: Vec<WaitTask>, time_scale: f64) -> Self {
        Self { tasks, time_scale }
    }
}

impl Default for ConcurrentWaitDemo {
    fn default() -> Self {
        Self::new(vec![WaitTask::from_millis(1000), WaitTask::from_millis(2000)], 1.0)
    }
}

#[async_trait]
impl Demo for ConcurrentWaitDemo {
    fn name(&self) -> &str {
        "concurrent-wait"
    }

    async fn run(&self, output: Arc<dyn Output>) -> Result<Flow> {
        run_concurrent_waits(&self.tasks, self.time_scale, output).await?;
        Ok(Flow::Continue)
    }
}
