use approx::assert_relative_eq;
use chart_embed::ChartBuilder;
use chart_embed::core::{ActionRef, ChartType, DataPoint};
use serde_json::{Value, json};

fn values_of(builder: &ChartBuilder) -> Vec<f64> {
    builder.series()[0]
        .points()
        .iter()
        .map(DataPoint::value)
        .collect()
}

#[test]
fn empty_values_yield_one_zero_point_for_every_type() {
    for chart_type in ChartType::ALL {
        let mut builder = ChartBuilder::new();
        let empty: Vec<f64> = Vec::new();
        let added = match chart_type {
            ChartType::Bar => builder.add_bar_series(empty, "s", false),
            ChartType::BarHorizontal => builder.add_horizontal_bar_series(empty, "s", false),
            ChartType::StackedBar => builder.add_stacked_bar_series(empty, "s", false),
            ChartType::StackedBarHorizontal => builder.add_stacked_bar_series(empty, "s", true),
            ChartType::Line => builder.add_line_plot(empty, "s"),
            ChartType::Pie => builder.set_pie_chart(empty, Vec::<String>::new()),
        };
        added.expect("add series");

        let points = builder.series()[0].points();
        assert_eq!(points.len(), 1, "{chart_type}");
        assert_eq!(points[0].value(), 0.0, "{chart_type}");
        assert!(points[0].action().is_none());
    }
}

#[test]
fn non_numeric_entries_become_zero() {
    let mut builder = ChartBuilder::new();
    builder
        .add_bar_series(vec![json!(1), json!("x"), json!(3)], "mixed", false)
        .expect("bar");
    assert_eq!(values_of(&builder), [1.0, 0.0, 3.0]);
}

#[test]
fn quasi_numeric_json_inputs_are_normalized() {
    let mut builder = ChartBuilder::new();
    let inputs: Vec<Value> = vec![
        json!("2.5"),
        json!(" 4 "),
        json!(null),
        json!(false),
        json!([1]),
        json!({"y": 1}),
        json!(-1.25),
    ];
    builder.add_line_plot(inputs, "quasi").expect("line");
    assert_eq!(values_of(&builder), [2.5, 4.0, 0.0, 0.0, 0.0, 0.0, -1.25]);
}

#[test]
fn string_inputs_parse_like_numbers() {
    let mut builder = ChartBuilder::new();
    builder
        .add_line_plot(["1e3", "0.1", "abc", "", "inf"], "strings")
        .expect("line");
    let values = values_of(&builder);
    assert_relative_eq!(values[0], 1000.0);
    assert_relative_eq!(values[1], 0.1);
    assert_eq!(&values[2..], [0.0, 0.0, 0.0]);
}

#[test]
fn optional_and_non_finite_floats_become_zero() {
    let mut builder = ChartBuilder::new();
    builder
        .add_line_plot([Some(1.5), None, Some(f64::NAN), Some(f64::NEG_INFINITY)], "opt")
        .expect("line");
    assert_eq!(values_of(&builder), [1.5, 0.0, 0.0, 0.0]);
}

#[test]
fn actions_survive_conversion() {
    let mut builder = ChartBuilder::new();
    builder
        .add_bar_series(
            vec![
                DataPoint::from((json!("x"), ActionRef::new("noop"))),
                DataPoint::from(4u32),
            ],
            "actions",
            false,
        )
        .expect("bar");

    let points = builder.series()[0].points();
    assert_eq!(points[0].value(), 0.0);
    assert_eq!(points[0].action(), Some(&ActionRef::new("noop")));
    assert!(points[1].action().is_none());
}
