use super::fixture::TestFixture;

#[test]
fn test_init_creates_db_and_config() {
    let fixture = TestFixture::new("test_init_creates_db_and_config");

    let output = fixture.run_il(&["init"]);
    assert_command_success!(output);
    assert_stdout_contains!(output, "Initialized at");

    assert!(fixture.db_path().exists(), "items.db not created");
    let config = std::fs::read_to_string(&fixture.config_path).expect("read config");
    assert!(config.contains("[search]"));
    assert!(config.contains("[display]"));
    assert!(config.contains("prefix = \"S\""));
    assert_eq!(fixture.item_count(), 0);
}

#[test]
fn test_init_idempotent() {
    let fixture = TestFixture::with_sample_items("test_init_idempotent");

    let output = fixture.run_il(&["--robot", "init"]);
    assert_command_success!(output);
    let json = output.json();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["data"]["already_initialized"], true);
    assert_eq!(json["data"]["config_written"], false);
    assert_eq!(json["data"]["items"], 7);

    assert_eq!(fixture.item_count(), 7, "re-init must keep rows");
}

#[test]
fn test_init_force_rewrites_config() {
    let fixture = TestFixture::new("test_init_force_rewrites_config");
    assert_command_success!(fixture.init());
    std::fs::write(&fixture.config_path, "[bot]\nprefix = \"!\"\n").expect("write config");

    let output = fixture.run_il(&["--robot", "init", "--force"]);
    assert_command_success!(output);
    assert_eq!(output.json()["data"]["config_written"], true);

    let config = std::fs::read_to_string(&fixture.config_path).expect("read config");
    assert!(config.contains("prefix = \"S\""));
}

#[test]
fn test_random_returns_a_catalog_item() {
    let fixture = TestFixture::with_sample_items("test_random_returns_a_catalog_item");
    let names = [
        "Frost Sword",
        "Ember Blade",
        "Light Dagger",
        "Dagger of Light",
        "Pumpkin Lantern",
        "Flame Shield",
        "Rusty Key",
    ];

    for _ in 0..5 {
        let output = fixture.run_il(&["--robot", "random"]);
        assert_command_success!(output);
        let name = output.json()["data"]["name"]
            .as_str()
            .expect("name")
            .to_string();
        assert!(names.contains(&name.as_str()), "unexpected item {name}");
    }
}

#[test]
fn test_voi_lists_notable_items_in_rank_order() {
    let fixture = TestFixture::with_sample_items("test_voi_lists_notable_items_in_rank_order");

    let output = fixture.run_il(&["--robot", "voi"]);
    assert_command_success!(output);
    let json = output.json();
    assert_eq!(json["data"]["total"], 3);
    let names: Vec<_> = json["data"]["items"]
        .as_array()
        .expect("items")
        .iter()
        .map(|item| item["name"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(names, ["Flame Shield", "Frost Sword", "Dagger of Light"]);
}

#[test]
fn test_voi_truncates_with_footer() {
    let fixture = TestFixture::with_sample_items("test_voi_truncates_with_footer");

    let output = fixture.run_il_with_env(&["--plain", "voi"], &[("IL_DISPLAY_NOTABLE_LIMIT", "2")]);
    assert_command_success!(output);
    assert_stdout_contains!(output, "Showing 2 of 3 VOI items");
    assert_eq!(output.stdout.lines().count(), 3);

    let output = fixture.run_il(&["--plain", "voi", "--limit", "1"]);
    assert_stdout_contains!(output, "Showing 1 of 3 VOI items");
}

#[test]
fn test_config_file_is_honoured() {
    let fixture = TestFixture::with_sample_items("test_config_file_is_honoured");
    std::fs::write(&fixture.config_path, "[search]\nmax_results = 1\n").expect("write config");

    let output = fixture.run_il(&["--robot", "item", "weapon"]);
    assert_command_success!(output);
    assert_eq!(output.json()["data"]["total"], 1);
}
