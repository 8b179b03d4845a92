use serde_json::json;
use std::sync::{Arc, Mutex};
use trendview::api::{
    ChartInfo, ChartOptionBuilder, ChartOptionRequest, ChartTheme, legend_view_items,
};
use trendview::core::{LegendEntry, LegendIcon};
use trendview::interaction::LegendFilter;

fn info() -> ChartInfo {
    ChartInfo::from_json_value(json!({
        "chartConfig": {
            "type": "bar",
            "values": [],
            "option": {
                "xAxis": {},
                "yAxes": [{ "showAxis": true }, {}]
            }
        },
        "datasetSource": [["cat", "A", "B"], ["p-gmv", 1, 2], ["p-uv", 3, 4]],
        "indicatorList": [{ "name": "gmv", "index": 0 }, { "name": "uv", "index": 1 }]
    }))
    .expect("chart info")
}

fn entry(name: &str) -> LegendEntry {
    LegendEntry {
        name: name.to_owned(),
        icon: LegendIcon::Circle,
    }
}

#[test]
fn resolve_returns_none_while_pending_or_failed() {
    let builder = ChartOptionBuilder::default();
    let none: &[&str] = &[];

    let pending = ChartOptionRequest {
        pending: true,
        ..ChartOptionRequest::default()
    };
    assert_eq!(builder.resolve(&info(), pending, none), None);

    let failed = ChartOptionRequest {
        error: true,
        ..ChartOptionRequest::default()
    };
    assert_eq!(builder.resolve(&info(), failed, none), None);

    assert_eq!(
        builder.resolve(&ChartInfo::default(), ChartOptionRequest::default(), none),
        None
    );
}

#[test]
fn resolve_swallows_build_errors() {
    let mut broken = info();
    if let Some(config) = broken.chart_config.as_mut() {
        config.values = Some(json!({}));
    }
    let builder = ChartOptionBuilder::default();
    assert_eq!(
        builder.resolve(&broken, ChartOptionRequest::default(), &["p-gmv"]),
        None
    );
}

#[test]
fn resolve_marks_disabled_items_unselected() {
    let builder = ChartOptionBuilder::default();
    let output = builder
        .resolve(&info(), ChartOptionRequest::default(), &["p-uv"])
        .expect("resolved option");
    let selected = output
        .option()
        .expect("option")
        .legend
        .selected
        .clone()
        .expect("selected map");

    assert_eq!(selected.get("p-gmv"), Some(&true));
    assert_eq!(selected.get("p-uv"), Some(&false));
}

#[test]
fn sorted_view_disables_chart_legend() {
    let builder = ChartOptionBuilder::default();
    let request = ChartOptionRequest {
        use_sort: true,
        ..ChartOptionRequest::default()
    };
    let output = builder
        .resolve(&info(), request, &[] as &[String])
        .expect("resolved option");
    let option = output.option().expect("option");
    assert!(!option.legend.show);
    assert_eq!(option.grid.top, None);
}

#[test]
fn legend_view_keeps_series_colors_after_filtering() {
    let theme = ChartTheme::default().with_palette(["#a", "#b", "#c", "#d"]);
    let entries = vec![entry("x-gmv"), entry("-"), entry(""), entry("y-uv")];
    let items = legend_view_items(&entries, &theme, &["y-uv"]);

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "x-gmv");
    assert_eq!(items[0].color.as_deref(), Some("#a"));
    assert!(!items[0].disabled);
    assert_eq!(items[1].name, "y-uv");
    assert_eq!(items[1].color.as_deref(), Some("#d"));
    assert!(items[1].disabled);
}

#[test]
fn legend_view_cycles_short_palettes() {
    let theme = ChartTheme::default().with_palette(["#a"]);
    let entries = vec![entry("a-1"), entry("b-1")];
    let items = legend_view_items(&entries, &theme, &[] as &[&str]);
    assert!(items.iter().all(|item| item.color.as_deref() == Some("#a")));
}

#[test]
fn legend_filter_tracks_disabled_set_and_notifies() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut filter = LegendFilter::new().with_listener(move |disabled: &[String]| {
        sink.lock().expect("listener lock").push(disabled.to_vec());
    });

    filter.handle_click("a", true);
    filter.handle_click("a", true);
    filter.handle_click("b", true);
    assert_eq!(filter.disabled_items(), ["a".to_owned(), "b".to_owned()]);

    filter.handle_click("a", false);
    assert!(!filter.is_disabled("a"));
    assert!(filter.is_disabled("b"));

    filter.toggle("a");
    assert!(filter.is_disabled("a"));

    filter.reset();
    assert!(filter.disabled_items().is_empty());

    let seen = seen.lock().expect("listener lock");
    assert_eq!(seen.len(), 6);
    assert_eq!(seen[1], vec!["a".to_owned()]);
    assert!(seen[5].is_empty());
}

#[test]
fn legend_filter_feeds_resolver() {
    let mut filter = LegendFilter::new();
    filter.handle_click("p-gmv", true);

    let output = ChartOptionBuilder::new(ChartTheme::default())
        .resolve(&info(), ChartOptionRequest::default(), filter.disabled_items())
        .expect("resolved option");
    let selected = output
        .option()
        .and_then(|option| option.legend.selected.as_ref())
        .expect("selected map");
    assert_eq!(selected.get("p-gmv"), Some(&false));
}
