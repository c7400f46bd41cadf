use example_code::core::{Number, Token};
use example_code::{run_plan, DemoConfig, DemoError, Plan, Transcript};
use std::sync::Arc;

async fn transcript_for(plan: Plan, config: &DemoConfig) -> (Vec<String>, bool) {
    let transcript = Transcript::new();
    let summary = run_plan(plan, config, Arc::new(transcript.clone()))
        .await
        .unwrap();
    (transcript.lines(), summary.exited_early)
}

#[tokio::test]
async fn test_default_branch_plan() {
    let (lines, exited_early) = transcript_for(Plan::Branch, &DemoConfig::default()).await;

    assert!(!exited_early);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[2], "1 + 2 = 3");
}

#[tokio::test]
async fn test_else_arm_is_reachable_with_unordered_operands() {
    let mut config = DemoConfig::default();
    config.branch.left = Number::Float(f64::NAN);

    let (lines, _) = transcript_for(Plan::Branch, &config).await;

    assert_eq!(lines[1], "This is still in the else block");
    assert_eq!(lines[2], "1 + 2 = 3");
}

#[tokio::test]
async fn test_sub_command() {
    let tokens = vec![Token::from("sub"), Token::Int(5), Token::Int(3)];
    let (lines, _) = transcript_for(Plan::Dispatch(tokens), &DemoConfig::default()).await;
    assert_eq!(lines, vec!["5 - 3 = 2"]);
}

#[tokio::test]
async fn test_exit_command_says_goodbye() {
    let mut config = DemoConfig::default();
    config.dispatch.command = vec![Token::from("exit")];

    let (lines, exited_early) = transcript_for(Plan::Branch, &config).await;

    assert!(!exited_early);
    assert_eq!(lines.last().map(String::as_str), Some("Goodbye!"));
}

#[tokio::test]
async fn test_word_operands_bind() {
    let tokens = vec![Token::from("add"), Token::from("a"), Token::from("b")];
    let (lines, _) = transcript_for(Plan::Dispatch(tokens), &DemoConfig::default()).await;
    assert_eq!(lines, vec!["a + b = ab"]);

    let script = vec!["mul ab 3".to_string(), "mul 2 xy".to_string()];
    let (lines, _) = transcript_for(Plan::Script(script), &DemoConfig::default()).await;
    assert_eq!(lines, vec!["ab * 3 = ababab", "2 * xy = xyxy"]);
}

#[tokio::test]
async fn test_word_subtraction_is_a_type_error() {
    let transcript = Transcript::new();
    let tokens = vec![Token::from("sub"), Token::from("a"), Token::from("b")];

    let result = run_plan(
        Plan::Dispatch(tokens),
        &DemoConfig::default(),
        Arc::new(transcript.clone()),
    )
    .await;

    assert!(matches!(result, Err(DemoError::TypeMismatch { .. })));
    assert!(transcript.lines().is_empty());
}

#[tokio::test]
async fn test_unknown_shapes() {
    for tokens in [
        vec![Token::from("quit"), Token::from("now")],
        vec![Token::from("mul"), Token::Int(2)],
        vec![Token::Int(7)],
    ] {
        let (lines, _) = transcript_for(Plan::Dispatch(tokens), &DemoConfig::default()).await;
        assert_eq!(lines, vec!["Unknown command"]);
    }
}

#[tokio::test]
async fn test_script_stops_at_first_quit() {
    let lines: Vec<String> = ["mul 3 4", "quit", "add 1 1"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let (output, _) = transcript_for(Plan::Script(lines), &DemoConfig::default()).await;

    assert_eq!(output, vec!["3 * 4 = 12", "Goodbye!"]);
}
