use super::fixture::TestFixture;

#[test]
fn test_plain_search_output() {
    let fixture = TestFixture::with_sample_items("test_plain_search_output");

    let output = fixture.run_il(&["--plain", "item", "blade"]);
    assert_command_success!(output);
    assert_eq!(
        output.stdout.trim_end(),
        "Frost Sword [relic]\nEmber Blade [legendary]"
    );
}

#[test]
fn test_tsv_search_output() {
    let fixture = TestFixture::with_sample_items("test_tsv_search_output");

    let output = fixture.run_il(&["-O", "tsv", "item", "fire+blade"]);
    assert_command_success!(output);
    let lines: Vec<_> = output.stdout.lines().collect();
    assert_eq!(lines[0], "name\tcategory\tsubcategories\trarity\tvoi");
    assert_eq!(lines[1], "Ember Blade\tweapon\tfire, blade\tlegendary\t0");
}

#[test]
fn test_jsonl_search_output() {
    let fixture = TestFixture::with_sample_items("test_jsonl_search_output");

    let output = fixture.run_il(&["-O", "jsonl", "item", "light"]);
    assert_command_success!(output);
    let rows: Vec<serde_json::Value> = output
        .stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("jsonl row"))
        .collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["name"], "Light Dagger");
    assert_eq!(rows[0]["matched_terms"], serde_json::json!(["light"]));
}

#[test]
fn test_machine_flag_is_json() {
    let fixture = TestFixture::with_sample_items("test_machine_flag_is_json");

    let output = fixture.run_il(&["-m", "item", "sword,shield"]);
    assert_command_success!(output);
    let json = output.json();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["mode"], "or");
    assert_eq!(json["count"], 2);
    assert!(json["title"].as_str().unwrap_or_default().starts_with("Items with ANY tag"));
}

#[test]
fn test_human_output_pages_results() {
    let fixture = TestFixture::with_sample_items("test_human_output_pages_results");

    let output = fixture.run_il_with_env(
        &["--color", "never", "item", "weapon"],
        &[("IL_DISPLAY_PAGE_SIZE", "3")],
    );
    assert_command_success!(output);
    assert_stdout_contains!(output, "Items matching: `weapon` (Page 1)");
    assert_stdout_contains!(output, "Items matching: `weapon` (Page 2)");
    assert_stdout_contains!(output, "Found 4 item(s)");
}

#[test]
fn test_human_random_card() {
    let fixture = TestFixture::new("test_human_random_card");
    assert_command_success!(fixture.init());
    assert_command_success!(fixture.import_str(
        "one.tsv",
        "item_name\tcategory\trarity\tvoi\tnotes\nFrost Sword\tweapon\trelic\tyes\tcold\n"
    ));

    let output = fixture.run_il(&["--color", "never", "random"]);
    assert_command_success!(output);
    assert_stdout_contains!(output, "Random Item");
    assert_stdout_contains!(output, "Frost Sword");
    assert_stdout_contains!(output, "cold");
}
