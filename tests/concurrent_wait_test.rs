use example_code::core::concurrent::run_concurrent_waits;
use example_code::core::WaitTask;
use example_code::{run_plan, DemoConfig, Plan, Transcript};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_default_wait_demo_transcript() {
    let transcript = Transcript::new();

    let summary = run_plan(Plan::Wait, &DemoConfig::default(), Arc::new(transcript.clone()))
        .await
        .unwrap();

    assert_eq!(summary.completed, vec!["concurrent-wait"]);
    assert_eq!(
        transcript.lines(),
        vec!["Waited for 1 second", "Waited for 2 seconds", "Done"]
    );
}

#[tokio::test(start_paused = true)]
async fn test_waits_overlap_instead_of_adding_up() {
    let tasks = vec![WaitTask::from_millis(1000), WaitTask::from_millis(2000)];

    let report = run_concurrent_waits(&tasks, 1.0, Arc::new(Transcript::new()))
        .await
        .unwrap();

    assert!(report.elapsed >= Duration::from_secs(2));
    assert!(report.elapsed < Duration::from_secs(3));
    let orders: Vec<usize> = report.completions.iter().map(|c| c.order).collect();
    assert_eq!(orders, vec![0, 1]);
}

#[tokio::test(start_paused = true)]
async fn test_many_waits_complete_shortest_first() {
    let transcript = Transcript::new();
    let tasks: Vec<WaitTask> = [3000, 1000, 2000]
        .iter()
        .map(|&ms| WaitTask::from_millis(ms))
        .collect();

    let report = run_concurrent_waits(&tasks, 1.0, Arc::new(transcript.clone()))
        .await
        .unwrap();

    assert_eq!(
        transcript.lines(),
        vec![
            "Waited for 1 second",
            "Waited for 2 seconds",
            "Waited for 3 seconds",
            "Done"
        ]
    );
    let indices: Vec<usize> = report.completions.iter().map(|c| c.index).collect();
    assert_eq!(indices, vec![1, 2, 0]);
}

#[tokio::test(start_paused = true)]
async fn test_time_scale_shortens_sleep_but_not_messages() {
    let transcript = Transcript::new();
    let tasks = vec![WaitTask::from_millis(1000), WaitTask::from_millis(2000)];

    let report = run_concurrent_waits(&tasks, 0.1, Arc::new(transcript.clone()))
        .await
        .unwrap();

    assert!(report.elapsed < Duration::from_secs(1));
    assert_eq!(transcript.lines()[1], "Waited for 2 seconds");
}
