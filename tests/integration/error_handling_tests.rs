use super::fixture::TestFixture;

#[test]
fn test_missing_catalog_robot_error() {
    let fixture = TestFixture::new("test_missing_catalog_robot_error");

    let output = fixture.run_il(&["--robot", "voi"]);
    assert!(!output.success);
    let json = output.json();
    let error = &json["status"]["error"];
    assert_eq!(error["code"], "CATALOG_UNAVAILABLE");
    assert_eq!(error["recoverable"], true);
    assert_eq!(error["category"], "storage");
    assert!(error["suggestion"].as_str().unwrap_or_default().contains("il init"));
}

#[test]
fn test_short_query_human_error() {
    let fixture = TestFixture::with_sample_items("test_short_query_human_error");

    let output = fixture.run_il(&["item", " a "]);
    assert!(!output.success);
    assert!(output.stderr.contains("Query too short"), "stderr: {}", output.stderr);
}

#[test]
fn test_invalid_config_value() {
    let fixture = TestFixture::with_sample_items("test_invalid_config_value");

    let output = fixture.run_il_with_env(&["--robot", "voi"], &[("IL_DISPLAY_PAGE_SIZE", "zero")]);
    assert!(!output.success);
    assert_eq!(output.json()["status"]["error"]["code"], "CONFIG_INVALID");

    let output = fixture.run_il_with_env(&["--robot", "voi"], &[("IL_DISPLAY_PAGE_SIZE", "0")]);
    assert!(!output.success);
    assert_eq!(output.json()["status"]["error"]["numeric_code"], 302);
}

#[test]
fn test_import_without_header_fails() {
    let fixture = TestFixture::new("test_import_without_header_fails");
    assert_command_success!(fixture.init());

    let output = fixture.import_str("empty.tsv", "\n\n");
    assert!(!output.success);
    assert_eq!(output.json()["status"]["error"]["code"], "IMPORT_FAILED");
}

#[test]
fn test_import_missing_file() {
    let fixture = TestFixture::new("test_import_missing_file");
    assert_command_success!(fixture.init());

    let output = fixture.run_il(&["--robot", "import", "does-not-exist.tsv"]);
    assert!(!output.success);
    assert_eq!(output.json()["status"]["error"]["code"], "IMPORT_FAILED");
}

#[test]
fn test_empty_catalog_random() {
    let fixture = TestFixture::new("test_empty_catalog_random");
    assert_command_success!(fixture.init());

    let output = fixture.run_il(&["--robot", "random"]);
    assert!(!output.success);
    assert_eq!(output.json()["status"]["error"]["code"], "CATALOG_EMPTY");
}
