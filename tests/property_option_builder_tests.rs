use proptest::prelude::*;
use trendview::api::{ChartConfig, ChartInfo, ChartOptionConfig, build_bar_or_line_option};
use trendview::core::{AxisIndex, Cell, IndicatorDefinition, Orientation, ValueAxisConfig};

fn source_from(names: &[String], values: &[Vec<f64>], columns: usize) -> Vec<Vec<Cell>> {
    let mut source = Vec::with_capacity(names.len() + 1);
    source.push(
        std::iter::once(Cell::from("cat"))
            .chain((0..columns).map(|column| Cell::Text(format!("d{column}"))))
            .collect::<Vec<_>>(),
    );
    for (name, row) in names.iter().zip(values) {
        source.push(
            std::iter::once(Cell::Text(name.clone()))
                .chain(row.iter().take(columns).copied().map(Cell::from))
                .collect(),
        );
    }
    source
}

fn info_for(source: Vec<Vec<Cell>>, percent: bool, orientation: Orientation) -> ChartInfo {
    let primary_type = if percent { "PercentBar" } else { "STACKBAR" };
    let option = ChartOptionConfig::default()
        .with_orientation(orientation)
        .with_y_axes(vec![
            ValueAxisConfig {
                series_type: Some(primary_type.to_owned()),
                ..ValueAxisConfig::default()
            },
            ValueAxisConfig::default(),
        ]);
    ChartInfo::new(ChartConfig::new("line", option), source).with_indicators(vec![
        IndicatorDefinition::new("a", AxisIndex::Primary),
        IndicatorDefinition::new("b", AxisIndex::Secondary),
    ])
}

fn row_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("-".to_owned()),
        "[x-z]{1,3}-a",
        "[x-z]{1,3}-b",
        "[x-z]{1,3}-c",
    ]
}

proptest! {
    #[test]
    fn sentinel_rows_never_reach_series_or_legend(
        names in proptest::collection::vec(row_name(), 1..8),
        values in proptest::collection::vec(proptest::collection::vec(-1_000.0f64..1_000.0, 4), 8),
        horizontal in any::<bool>()
    ) {
        let orientation = if horizontal { Orientation::Horizontal } else { Orientation::Vertical };
        let info = info_for(source_from(&names, &values, 4), false, orientation);
        let output = build_bar_or_line_option(&info, false).expect("build");

        let expected = names.iter().filter(|name| name.as_str() != "-").count();
        match output.option() {
            None => prop_assert_eq!(expected, 0),
            Some(option) => {
                prop_assert_eq!(option.series.len(), expected);
                prop_assert!(option.series.iter().all(|series| series.name != "-"));
                prop_assert!(option.legend.data.iter().all(|entry| entry.name != "-"));
                prop_assert_eq!(option.category_count(), 4);
            }
        }
    }

    #[test]
    fn percent_columns_sum_to_one_hundred(
        values in proptest::collection::vec(proptest::collection::vec(1.0f64..1_000.0, 3), 1..6)
    ) {
        let names: Vec<String> = (0..values.len()).map(|i| format!("s{i}-a")).collect();
        let info = info_for(source_from(&names, &values, 3), true, Orientation::Vertical);
        let output = build_bar_or_line_option(&info, false).expect("build");
        let option = output.option().expect("option");

        for column in 0..3 {
            let total: f64 = option
                .series
                .iter()
                .map(|series| series.data[column].as_f64().expect("number"))
                .sum();
            prop_assert!((total - 100.0).abs() <= 0.01 * values.len() as f64 + 1e-9);
        }
    }

    #[test]
    fn builds_are_deterministic(
        names in proptest::collection::vec(row_name(), 1..6),
        values in proptest::collection::vec(proptest::collection::vec(-50.0f64..50.0, 3), 6),
        disabled_legend in any::<bool>()
    ) {
        let info = info_for(source_from(&names, &values, 3), true, Orientation::Vertical);
        let first = build_bar_or_line_option(&info, disabled_legend).expect("first build");
        let second = build_bar_or_line_option(&info, disabled_legend).expect("second build");

        prop_assert_eq!(
            first.to_json_pretty().expect("first json"),
            second.to_json_pretty().expect("second json")
        );
    }
}
