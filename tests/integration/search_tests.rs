use serde_json::Value;

use super::fixture::TestFixture;

fn search(fixture: &TestFixture, query: &str) -> Value {
    let output = fixture.run_il(&["--robot", "item", query]);
    assert_command_success!(output);
    output.json()["data"].clone()
}

fn names(data: &Value) -> Vec<String> {
    data["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|item| item["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_single_term_searches_name_subcategories_and_category() {
    let fixture = TestFixture::with_sample_items("test_single_term");

    let data = search(&fixture, "blade");
    assert_eq!(data["mode"], "single");
    assert_eq!(names(&data), ["Frost Sword", "Ember Blade"]);

    let data = search(&fixture, "TRINKET");
    assert_eq!(names(&data), ["Pumpkin Lantern"]);
}

#[test]
fn test_and_requires_every_tag() {
    let fixture = TestFixture::with_sample_items("test_and_requires_every_tag");

    let data = search(&fixture, "fire+blade");
    assert_eq!(data["mode"], "and");
    assert_eq!(data["tags"], serde_json::json!(["fire", "blade"]));
    assert_eq!(names(&data), ["Ember Blade"]);
}

#[test]
fn test_or_accepts_any_tag_in_rank_order() {
    let fixture = TestFixture::with_sample_items("test_or_accepts_any_tag");

    let data = search(&fixture, "ice,fire");
    assert_eq!(data["mode"], "or");
    assert_eq!(names(&data), ["Flame Shield", "Frost Sword", "Ember Blade"]);

    let slash = search(&fixture, "ice/fire");
    assert_eq!(names(&slash), names(&data));
}

#[test]
fn test_whitespace_query_is_or() {
    let fixture = TestFixture::with_sample_items("test_whitespace_query_is_or");

    let data = search(&fixture, "light dagger");
    assert_eq!(data["mode"], "or");
    assert_eq!(
        names(&data),
        ["Light Dagger", "Pumpkin Lantern", "Dagger of Light"]
    );
}

#[test]
fn test_quoted_phrase_is_exact() {
    let fixture = TestFixture::with_sample_items("test_quoted_phrase_is_exact");

    let data = search(&fixture, "\"light dagger\"");
    assert_eq!(data["mode"], "smart");
    assert_eq!(names(&data), ["Light Dagger"]);
}

#[test]
fn test_smart_filters_combine_with_and() {
    let fixture = TestFixture::with_sample_items("test_smart_filters_combine_with_and");

    let data = search(&fixture, "rarity:relic voi:yes");
    assert_eq!(names(&data), ["Flame Shield", "Frost Sword"]);

    let data = search(&fixture, "type:weapon sub:light");
    assert_eq!(names(&data), ["Light Dagger", "Dagger of Light"]);

    let data = search(&fixture, "voi:no type:weapon");
    assert_eq!(names(&data), ["Ember Blade", "Light Dagger"]);

    let data = search(&fixture, "RARITY:Relic sword");
    assert_eq!(names(&data), ["Frost Sword"]);
}

#[test]
fn test_unknown_filter_key_is_ignored() {
    let fixture = TestFixture::with_sample_items("test_unknown_filter_key_is_ignored");

    let data = search(&fixture, "color:red sword");
    assert_eq!(data["mode"], "smart");
    assert_eq!(names(&data), ["Frost Sword"]);
}

#[test]
fn test_no_results_is_not_an_error() {
    let fixture = TestFixture::with_sample_items("test_no_results_is_not_an_error");

    let output = fixture.run_il(&["--robot", "item", "xyznonexistentitem123"]);
    assert_command_success!(output);
    let json = output.json();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["data"]["total"], 0);
    let warning = json["warnings"][0].as_str().unwrap_or_default();
    assert!(warning.contains("E403"), "warning: {warning}");
    assert!(warning.contains("xyznonexistentitem123"));

    let found = fixture.run_il(&["--robot", "item", "frost"]);
    assert!(found.json().get("warnings").is_none());

    let output = fixture.run_il(&["item", "xyznonexistentitem123"]);
    assert_command_success!(output);
    assert_stdout_contains!(output, "No items found for: `xyznonexistentitem123`");
}

#[test]
fn test_result_cap_applies() {
    let fixture = TestFixture::with_sample_items("test_result_cap_applies");

    let output = fixture.run_il_with_env(
        &["--robot", "item", "weapon"],
        &[("IL_SEARCH_MAX_RESULTS", "2")],
    );
    assert_command_success!(output);
    assert_eq!(names(&output.json()["data"]), ["Frost Sword", "Ember Blade"]);

    let output = fixture.run_il(&["--robot", "item", "--limit", "1", "weapon"]);
    assert_eq!(names(&output.json()["data"]), ["Frost Sword"]);
}

#[test]
fn test_like_wildcards_are_literal() {
    let fixture = TestFixture::with_sample_items("test_like_wildcards_are_literal");

    let data = search(&fixture, "%%");
    assert_eq!(data["total"], 0);

    let data = search(&fixture, "r_sty");
    assert_eq!(data["total"], 0);
}

#[test]
fn test_default_cap_is_thirty_in_every_mode() {
    let fixture = TestFixture::new("test_default_cap_is_thirty_in_every_mode");
    assert_command_success!(fixture.init(), "init failed");

    let mut tsv = String::from("item_name\tcategory\tsubcategories\trarity\tvoi\tnotes\n");
    for n in 0..40 {
        tsv.push_str(&format!("Glass Sword {n:02}\tweapon\tice, blade\tnormal\tno\t\n"));
    }
    assert_command_success!(fixture.import_str("many.tsv", &tsv), "import failed");
    assert_eq!(fixture.item_count(), 40);

    for (query, mode) in [
        ("glass", "single"),
        ("glass+blade", "and"),
        ("glass,ice", "or"),
        ("type:weapon glass", "smart"),
    ] {
        let data = search(&fixture, query);
        assert_eq!(data["mode"], mode, "mode for {query}");
        let found = names(&data);
        assert_eq!(found.len(), 30, "row count for {query}");
        assert_eq!(found[0], "Glass Sword 00");
        assert_eq!(found[29], "Glass Sword 29");
    }
}
