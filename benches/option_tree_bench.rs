use chart_bridge::api::{ChartOptions, OptionBuilder, SeriesOptions, SeriesType};
use chart_bridge::core::OptionTree;
use chart_bridge::interaction::{EventBridge, EventKind, NativePayload, event_handler};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_deep_set_option(c: &mut Criterion) {
    c.bench_function("option_tree_deep_set_1k", |b| {
        b.iter(|| {
            let mut tree = OptionTree::new();
            for i in 0..1_000 {
                tree.set_option("/plotOptions/series/dataLabels/style/fontSize", i)
                    .expect("set");
            }
            black_box(tree.get_options())
        })
    });
}

fn bench_chart_snapshot_json(c: &mut Criterion) {
    let mut chart = ChartOptions::new();
    for i in 0..32 {
        let mut series = SeriesOptions::new(format!("s-{i}"), SeriesType::Line).expect("series");
        let data: Vec<f64> = (0..256).map(|x| f64::from(x) * 0.5).collect();
        series.set_data(&data).expect("data");
        chart.add_series(&series).expect("add series");
    }

    c.bench_function("chart_snapshot_json_32x256", |b| {
        b.iter(|| black_box(chart.get_options().to_json_pretty().expect("json")))
    });
}

fn bench_dispatch(c: &mut Criterion) {
    let bridge = EventBridge::new();
    bridge.register(
        "series-1",
        EventKind::Click,
        Some(event_handler(|event| Ok(event.x_as_double()? >= 0.0))),
    );
    let payload = NativePayload::new().with("x", 12.0).with("y", "Q1");

    c.bench_function("event_bridge_dispatch_click", |b| {
        b.iter(|| {
            black_box(
                bridge
                    .dispatch("series-1", EventKind::Click, &payload, &[])
                    .expect("dispatch"),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_deep_set_option,
    bench_chart_snapshot_json,
    bench_dispatch
);
criterion_main!(benches);
