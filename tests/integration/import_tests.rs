use super::fixture::{SAMPLE_TSV, TestFixture};

#[test]
fn test_import_tsv_normalises_columns() {
    let fixture = TestFixture::with_sample_items("test_import_tsv_normalises_columns");
    assert_eq!(fixture.item_count(), 7);

    let (category, subcategories, rarity, voi, notes): (String, String, String, i64, String) =
        fixture
            .open_db()
            .query_row(
                "SELECT category, subcategories, rarity, voi, notes FROM items WHERE name = ?1",
                ["Frost Sword"],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?, r.get(4)?)),
            )
            .expect("Frost Sword row");
    assert_eq!(category, "weapon");
    assert_eq!(subcategories, "ice, blade");
    assert_eq!(rarity, "relic");
    assert_eq!(voi, 1);
    assert_eq!(notes, "Drops from the glacier boss");
}

#[test]
fn test_reimport_keeps_first_row() {
    let fixture = TestFixture::with_sample_items("test_reimport_keeps_first_row");

    let output = fixture.import_str(
        "again.tsv",
        "item_name\tcategory\trarity\nFrost Sword\tarmor\tnormal\nIce Cap\tarmor\tnormal\n",
    );
    assert_command_success!(output);
    let json = output.json();
    assert_eq!(json["data"]["inserted"], 1);
    assert_eq!(json["data"]["duplicates"], 1);

    let category: String = fixture
        .open_db()
        .query_row(
            "SELECT category FROM items WHERE name = 'Frost Sword'",
            [],
            |r| r.get(0),
        )
        .expect("row");
    assert_eq!(category, "weapon");
    assert_eq!(fixture.item_count(), 8);
}

#[test]
fn test_import_skips_rows_without_name() {
    let fixture = TestFixture::new("test_import_skips_rows_without_name");
    assert_command_success!(fixture.init());

    let output = fixture.import_str(
        "gaps.tsv",
        "item_name\tcategory\n\tweapon\nShort Bow\tweapon\n   \tarmor\n",
    );
    assert_command_success!(output);
    let json = output.json();
    assert_eq!(json["data"]["rows"], 3);
    assert_eq!(json["data"]["inserted"], 1);
    assert_eq!(json["data"]["skipped"], 2);
}

#[test]
fn test_import_json_and_jsonl() {
    let fixture = TestFixture::new("test_import_json_and_jsonl");
    assert_command_success!(fixture.init());

    let output = fixture.import_str(
        "items.json",
        r#"[{"name": "Storm Staff", "category": "Weapon", "rarity": "Relic", "voi": true},
            {"item_name": "Iron Ring", "category": "trinket", "voi": "no"}]"#,
    );
    assert_command_success!(output);
    assert_eq!(output.json()["data"]["format"], "json");
    assert_eq!(output.json()["data"]["inserted"], 2);

    let output = fixture.import_str(
        "more.jsonl",
        "{\"item_name\": \"Wind Cloak\", \"category\": \"armor\", \"voi\": 1}\n\n{\"item_name\": \"Rope\"}\n",
    );
    assert_command_success!(output);
    assert_eq!(output.json()["data"]["format"], "jsonl");
    assert_eq!(output.json()["data"]["inserted"], 2);

    let voi = fixture.run_il(&["--robot", "voi"]);
    assert_eq!(voi.json()["data"]["total"], 2);
}

#[test]
fn test_import_format_override() {
    let fixture = TestFixture::new("test_import_format_override");
    assert_command_success!(fixture.init());

    let path = fixture.root.join("export.txt");
    std::fs::write(&path, "{\"item_name\": \"Sun Disc\"}\n").expect("write");
    let output = fixture.run_il(&[
        "--robot",
        "import",
        "--format",
        "jsonl",
        path.to_str().expect("utf-8 path"),
    ]);
    assert_command_success!(output);
    assert_eq!(output.json()["data"]["inserted"], 1);
}

#[test]
fn test_import_creates_catalog_when_missing() {
    let fixture = TestFixture::new("test_import_creates_catalog_when_missing");

    let output = fixture.import_str("items.tsv", SAMPLE_TSV);
    assert_command_success!(output);
    assert_eq!(fixture.item_count(), 7);
}

#[test]
fn test_import_human_summary() {
    let fixture = TestFixture::new("test_import_human_summary");
    assert_command_success!(fixture.init());

    let path = fixture.root.join("items.tsv");
    std::fs::write(&path, "item_name\nA Thing\n\t\n").expect("write");
    let output = fixture.run_il(&["--plain", "import", path.to_str().expect("utf-8 path")]);
    assert_command_success!(output);
    assert_stdout_contains!(output, "Imported 1 item(s)");
}
