use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use trendview::api::{ChartConfig, ChartInfo, ChartOptionBuilder, ChartOptionConfig};
use trendview::core::{AxisIndex, Cell, IndicatorDefinition, ValueAxisConfig};
use trendview::table::{SortConfig, SortDirection, SortValueKind, TableRow, sort_rows};

fn dataset(series: usize, columns: usize) -> Vec<Vec<Cell>> {
    let mut source = Vec::with_capacity(series + 1);
    source.push(
        std::iter::once(Cell::from("dt"))
            .chain((0..columns).map(|column| Cell::Text(format!("day-{column}"))))
            .collect::<Vec<_>>(),
    );
    for row in 0..series {
        let name = if row % 2 == 0 {
            format!("shop{row}-gmv")
        } else {
            format!("shop{row}-cvr")
        };
        source.push(
            std::iter::once(Cell::Text(name))
                .chain((0..columns).map(|column| Cell::Number((row * columns + column) as f64)))
                .collect(),
        );
    }
    source
}

fn chart_info(percent: bool) -> ChartInfo {
    let primary_type = if percent { "PercentBar" } else { "STACKBAR" };
    let option = ChartOptionConfig::default().with_y_axes(vec![
        ValueAxisConfig {
            series_type: Some(primary_type.to_owned()),
            show_split_line: true,
            ..ValueAxisConfig::default()
        },
        ValueAxisConfig::default(),
    ]);
    ChartInfo::new(ChartConfig::new("line", option), dataset(24, 365)).with_indicators(vec![
        IndicatorDefinition::new("gmv", AxisIndex::Primary),
        IndicatorDefinition::new("cvr", AxisIndex::Secondary).with_series_type("line"),
    ])
}

fn bench_stacked_option_24x365(c: &mut Criterion) {
    let builder = ChartOptionBuilder::default();
    let info = chart_info(false);

    c.bench_function("stacked_option_24x365", |b| {
        b.iter(|| {
            let _ = builder
                .build(black_box(&info), black_box(false))
                .expect("build should succeed");
        })
    });
}

fn bench_percent_option_json_24x365(c: &mut Criterion) {
    let builder = ChartOptionBuilder::default();
    let info = chart_info(true);

    c.bench_function("percent_option_json_24x365", |b| {
        b.iter(|| {
            let output = builder
                .build(black_box(&info), false)
                .expect("build should succeed");
            let _ = output.to_json_value().expect("serialize option");
        })
    });
}

fn bench_table_numeric_sort_5k(c: &mut Criterion) {
    let rows: Vec<TableRow> = (0..5_000)
        .map(|i| {
            let mut row = TableRow::new();
            row.insert("id".to_owned(), i.into());
            row.insert("gmv".to_owned(), (((i * 7_919) % 5_000) as f64 * 1.5).into());
            row
        })
        .collect();
    let config = SortConfig::new("gmv", SortDirection::Desc, SortValueKind::Number);

    c.bench_function("table_numeric_sort_5k", |b| {
        b.iter(|| {
            let _ = sort_rows(black_box(&rows), black_box(&config));
        })
    });
}

criterion_group!(
    benches,
    bench_stacked_option_24x365,
    bench_percent_option_json_24x365,
    bench_table_numeric_sort_5k
);
criterion_main!(benches);
