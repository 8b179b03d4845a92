use serde_json::{Value, json};
use trendview::table::{
    AUTO_INDEX_COLUMN, ColumnSelection, CssPosition, LAST_LEFT_PINNED_CLASS, PinSide, SortConfig,
    SortDirection, SortValueKind, TableColumn, TableRow, column_text, is_last_left_pinned,
    pinning_class, pinning_style, row_text, sort_rows, sort_rows_with, table_text,
};

fn row(value: Value) -> TableRow {
    serde_json::from_value(value).expect("table row")
}

fn field<'a>(rows: &'a [TableRow], name: &str) -> Vec<&'a Value> {
    rows.iter()
        .map(|row| row.get(name).unwrap_or(&Value::Null))
        .collect()
}

fn columns() -> Vec<TableColumn> {
    vec![
        TableColumn::new(AUTO_INDEX_COLUMN, "#", 40.0).pinned(PinSide::Left),
        TableColumn::new("shop", "Shop", 120.0).pinned(PinSide::Left),
        TableColumn::new("gmv", "GMV", 80.0),
        TableColumn::new("note", "Note", 80.0).hidden(),
        TableColumn::new("uv", "UV", 60.0),
    ]
}

fn rows() -> Vec<TableRow> {
    vec![
        row(json!({ "auto_index": 1, "shop": "north", "gmv": 12.5, "note": "x", "uv": 3 })),
        row(json!({ "auto_index": 2, "shop": "south\tside", "gmv": null, "note": "y", "uv": 9 })),
    ]
}

#[test]
fn numeric_sort_puts_unreadable_values_last_both_ways() {
    let data = vec![
        row(json!({ "v": 3 })),
        row(json!({ "v": "n/a" })),
        row(json!({ "v": "10" })),
        row(json!({})),
        row(json!({ "v": -1.5 })),
    ];

    let asc = sort_rows(&data, &SortConfig::new("v", SortDirection::Asc, SortValueKind::Number));
    assert_eq!(
        field(&asc, "v"),
        vec![&json!(-1.5), &json!(3), &json!("10"), &json!("n/a"), &Value::Null]
    );

    let desc = sort_rows(&data, &SortConfig::new("v", SortDirection::Desc, SortValueKind::Number));
    assert_eq!(
        field(&desc, "v"),
        vec![&json!("10"), &json!(3), &json!(-1.5), &json!("n/a"), &Value::Null]
    );
}

#[test]
fn date_sort_reads_common_formats() {
    let data = vec![
        row(json!({ "dt": "2024-03-01" })),
        row(json!({ "dt": "2024-01-15 08:30:00" })),
        row(json!({ "dt": "2023-12-31T23:00:00Z" })),
        row(json!({ "dt": "soon" })),
    ];
    let sorted = sort_rows(&data, &SortConfig::new("dt", SortDirection::Asc, SortValueKind::Date));
    assert_eq!(
        field(&sorted, "dt"),
        vec![
            &json!("2023-12-31T23:00:00Z"),
            &json!("2024-01-15 08:30:00"),
            &json!("2024-03-01"),
            &json!("soon")
        ]
    );
}

#[test]
fn string_sort_is_case_insensitive_and_stable() {
    let data = vec![
        row(json!({ "s": "beta", "id": 1 })),
        row(json!({ "s": "Alpha", "id": 2 })),
        row(json!({ "s": "alpha", "id": 3 })),
    ];
    let sorted = sort_rows(&data, &SortConfig::new("s", SortDirection::Asc, SortValueKind::String));
    assert_eq!(field(&sorted, "id"), vec![&json!(2), &json!(3), &json!(1)]);
}

#[test]
fn unsorted_config_keeps_input_order() {
    let data = rows();
    let config = SortConfig {
        field: "gmv".to_owned(),
        direction: None,
        kind: SortValueKind::Number,
    };
    assert_eq!(sort_rows(&data, &config), data);
    assert_eq!(SortDirection::next(None), Some(SortDirection::Asc));
    assert_eq!(SortDirection::next(Some(SortDirection::Desc)), None);
}

#[test]
fn custom_comparator_is_reversed_for_descending() {
    let data = vec![row(json!({ "n": "bb" })), row(json!({ "n": "a" })), row(json!({ "n": "ccc" }))];
    let by_len = |a: &Value, b: &Value| {
        let len = |value: &Value| value.as_str().map_or(0, str::len);
        len(a).cmp(&len(b))
    };
    let sorted = sort_rows_with(&data, "n", SortDirection::Desc, by_len);
    assert_eq!(field(&sorted, "n"), vec![&json!("ccc"), &json!("bb"), &json!("a")]);
}

#[test]
fn row_copy_skips_auto_index_and_hidden_columns() {
    let columns = columns();
    let rows = rows();

    assert_eq!(row_text(&columns, &rows[0], false), "north\t12.5\t3");
    assert_eq!(
        row_text(&columns, &rows[1], true),
        "Shop\tGMV\tUV\n\"south\tside\"\t\t9"
    );
}

#[test]
fn table_copy_supports_header_only() {
    let columns = columns();
    let rows = rows();

    assert_eq!(table_text(&columns, &rows, true, true), "Shop\tGMV\tUV");
    assert_eq!(
        table_text(&columns, &rows, false, false),
        "north\t12.5\t3\n\"south\tside\"\t\t9"
    );
}

#[test]
fn column_copy_drops_empty_values() {
    let columns = columns();
    let rows = rows();

    assert_eq!(column_text(&columns[2], &rows, true, false), "GMV\n12.5");
    assert_eq!(column_text(&columns[4], &rows, false, false), "3\n9");
    assert_eq!(column_text(&columns[4], &rows, true, true), "UV");
}

#[test]
fn column_selection_toggles_on_repeat_click() {
    let mut selection = ColumnSelection::new();
    selection.click("gmv", false);
    assert_eq!(selection.selected(), Some("gmv"));
    selection.click("gmv", false);
    assert_eq!(selection.selected(), None);
    selection.click("uv", true);
    selection.click("uv", true);
    assert_eq!(selection.selected(), Some("uv"));
}

#[test]
fn pinned_columns_stick_with_cumulative_offsets() {
    let columns = columns();

    let index = pinning_style(&columns, 0).expect("index column");
    assert_eq!(index.left, Some(0.0));
    assert_eq!(index.position, CssPosition::Sticky);
    assert_eq!(index.z_index, 1);

    let shop = pinning_style(&columns, 1).expect("shop column");
    assert_eq!(shop.left, Some(40.0));
    assert_eq!(shop.opacity, 0.95);

    let gmv = pinning_style(&columns, 2).expect("gmv column");
    assert_eq!(gmv.left, None);
    assert_eq!(gmv.position, CssPosition::Relative);
    assert_eq!(gmv.opacity, 1.0);
    assert_eq!(gmv.z_index, 0);

    assert!(pinning_style(&columns, 9).is_none());

    let mobile = shop.to_vw(400.0);
    assert_eq!(mobile.left, Some(10.0));
    assert_eq!(mobile.width, 30.0);
}

#[test]
fn only_last_left_pinned_column_gets_separator_class() {
    let columns = columns();
    assert!(!is_last_left_pinned(&columns, 0));
    assert!(is_last_left_pinned(&columns, 1));
    assert_eq!(pinning_class(&columns, 1), LAST_LEFT_PINNED_CLASS);
    assert_eq!(pinning_class(&columns, 2), "");
}
