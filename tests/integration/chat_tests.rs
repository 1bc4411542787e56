use super::fixture::TestFixture;

#[test]
fn test_chat_session_answers_commands() {
    let fixture = TestFixture::with_sample_items("test_chat_session_answers_commands");

    let output = fixture.run_il_with_stdin(
        &["--color", "never", "chat"],
        "good morning\nSitem fire+blade\nShelpme\nSbogus\nexit\nSitem frost\n",
    );
    assert_command_success!(output);
    assert_stdout_contains!(output, "Ember Blade");
    assert_stdout_contains!(output, "Unknown command `bogus`");
    assert!(!output.stdout.contains("Frost Sword"), "session should stop at exit");
}

#[test]
fn test_chat_json_replies() {
    let fixture = TestFixture::with_sample_items("test_chat_json_replies");

    let output = fixture.run_il_with_stdin(&["--robot", "chat"], "Srandom\nSitem x\nSvoi\n");
    assert_command_success!(output);
    let replies: Vec<serde_json::Value> = output
        .stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("json reply"))
        .collect();
    assert_eq!(replies.len(), 3);
    assert_eq!(replies[0]["type"], "embeds");
    assert_eq!(replies[0]["content"][0]["title"], "Random Item");
    assert_eq!(
        replies[1]["content"],
        "Please provide at least 2 characters to search for."
    );
    assert_eq!(replies[2]["content"][0]["title"], "VOI Items");
}

#[test]
fn test_chat_custom_prefix() {
    let fixture = TestFixture::with_sample_items("test_chat_custom_prefix");

    let output = fixture.run_il_with_stdin(&["--robot", "chat", "--prefix", "!"], "Sitem frost\n!item frost\n");
    assert_command_success!(output);
    assert_eq!(output.stdout.lines().count(), 1);
    assert!(output.stdout.contains("Frost Sword"));
}
