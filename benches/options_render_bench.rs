use chart_embed::ChartBuilder;
use chart_embed::core::DataPoint;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn grouped_bars_with_lines() -> ChartBuilder {
    let mut builder = ChartBuilder::new();
    builder.set_graph_title("bench");
    builder.set_font_color("#333333");
    builder
        .set_x_axis_tick_labels((0..200).map(|i| format!("c{i}")), 12)
        .expect("labels");

    for series in 0..4 {
        let points: Vec<DataPoint> = (0..200)
            .map(|i| {
                let point = DataPoint::new(f64::from(i * (series + 1)));
                if i % 10 == 0 {
                    point.with_action(format!("function() {{ select({series}, {i}); }}"))
                } else {
                    point
                }
            })
            .collect();
        builder
            .add_bar_series(points, format!("bars {series}"), series == 0)
            .expect("bar series");
    }
    for series in 0..2 {
        builder
            .add_line_plot((0..200).map(|i| f64::from(i) * 0.5), format!("line {series}"))
            .expect("line series");
    }
    builder
}

fn bench_options_json(c: &mut Criterion) {
    let builder = grouped_bars_with_lines();

    c.bench_function("options_json_6x200", |b| {
        b.iter(|| {
            let _ = black_box(&builder)
                .options_json()
                .expect("options should serialize");
        })
    });
}

fn bench_render_html(c: &mut Criterion) {
    let builder = grouped_bars_with_lines();

    c.bench_function("render_html_6x200", |b| {
        b.iter(|| {
            let _ = black_box(&builder).render().expect("render should succeed");
        })
    });
}

criterion_group!(benches, bench_options_json, bench_render_html);
criterion_main!(benches);
