use chart_embed::core::ChartType;
use chart_embed::{ChartBuilder, ChartError, ChartResult};

fn add(builder: &mut ChartBuilder, chart_type: ChartType) -> ChartResult<()> {
    let values = vec![1.0, 2.0, 3.0];
    match chart_type {
        ChartType::Bar => builder.add_bar_series(values, "bar", false),
        ChartType::BarHorizontal => builder.add_horizontal_bar_series(values, "hbar", false),
        ChartType::StackedBar => builder.add_stacked_bar_series(values, "stacked", false),
        ChartType::StackedBarHorizontal => builder.add_stacked_bar_series(values, "hstacked", true),
        ChartType::Line => builder.add_line_plot(values, "line"),
        ChartType::Pie => builder.set_pie_chart(values, ["a", "b", "c"]),
    }
}

/// `(existing, requested)` pairs that must be rejected. The check is
/// directional, so a pair listed one way says nothing about the reverse.
fn incompatible(existing: ChartType, requested: ChartType) -> bool {
    use ChartType::*;
    const PAIRS: &[(ChartType, ChartType)] = &[
        (Pie, Pie),
        (Pie, Bar),
        (Pie, StackedBar),
        (Pie, StackedBarHorizontal),
        (Pie, Line),
        (Bar, Pie),
        (StackedBar, Pie),
        (Line, Pie),
        (StackedBar, Bar),
        (Bar, StackedBar),
        (StackedBar, Line),
        (Line, StackedBar),
        (StackedBar, StackedBarHorizontal),
        (StackedBarHorizontal, StackedBar),
        (Bar, StackedBarHorizontal),
        (Line, StackedBarHorizontal),
    ];
    PAIRS.contains(&(existing, requested))
}

#[test]
fn every_pair_follows_the_coexistence_table() {
    for first in ChartType::ALL {
        for second in ChartType::ALL {
            let mut builder = ChartBuilder::new();
            add(&mut builder, first).expect("first series always fits an empty chart");

            let result = add(&mut builder, second);
            if incompatible(first, second) {
                let err = result.expect_err("incompatible pair must fail");
                assert!(
                    matches!(
                        err,
                        ChartError::IncompatibleChartTypes { existing, requested }
                            if existing == first && requested == second
                    ),
                    "{first} then {second}: unexpected error {err:?}"
                );
                assert_eq!(builder.series().len(), 1);
            } else {
                result.unwrap_or_else(|e| panic!("{first} then {second} must succeed: {e}"));
                assert_eq!(builder.series().len(), 2);
            }
        }
    }
}

#[test]
fn check_runs_against_all_previous_series() {
    let mut builder = ChartBuilder::new();
    builder.add_line_plot([1, 2], "line").expect("line");
    builder.add_bar_series([3, 4], "bar", true).expect("bar");

    let err = builder
        .add_stacked_bar_series([5, 6], "stacked", false)
        .expect_err("line added earlier still blocks stacked bars");
    assert!(matches!(
        err,
        ChartError::IncompatibleChartTypes {
            existing: ChartType::Line,
            requested: ChartType::StackedBar,
        }
    ));
}

#[test]
fn rejected_series_does_not_touch_global_options() {
    let mut builder = ChartBuilder::new();
    builder.add_line_plot([1], "line").expect("line");
    let _ = builder.add_stacked_bar_series([1], "stacked", false);

    assert!(!builder.config().y_axis.stack_labels);
    assert!(!builder.contains_chart_type(ChartType::StackedBar));
}

#[test]
fn error_message_names_both_types() {
    let mut builder = ChartBuilder::new();
    builder.set_pie_chart([1], ["a"]).expect("pie");
    let err = builder.add_line_plot([1], "line").expect_err("pie is exclusive");
    assert_eq!(
        err.to_string(),
        "chart already contains a pie series; line cannot be combined with it"
    );
}

#[test]
fn horizontal_stacked_bar_first_accepts_later_series() {
    for (label, second) in [
        ("line", ChartType::Line),
        ("bar", ChartType::Bar),
        ("pie", ChartType::Pie),
        ("horizontal bar", ChartType::BarHorizontal),
    ] {
        let mut builder = ChartBuilder::new();
        builder
            .add_stacked_bar_series([1, 2], "hstacked", true)
            .expect("horizontal stacked bar");
        add(&mut builder, second).unwrap_or_else(|e| panic!("{label} after it: {e}"));
        assert_eq!(builder.series().len(), 2);
    }
}

#[test]
fn horizontal_bar_does_not_block_stacked_bars_or_pies() {
    let mut builder = ChartBuilder::new();
    builder
        .add_horizontal_bar_series([1, 2], "hbar", false)
        .expect("horizontal bar");
    builder
        .add_stacked_bar_series([3, 4], "stacked", false)
        .expect("stacked bar after horizontal bar");

    let mut builder = ChartBuilder::new();
    builder
        .add_horizontal_bar_series([1, 2], "hbar", false)
        .expect("horizontal bar");
    builder
        .set_pie_chart([3, 4], ["a", "b"])
        .expect("pie after horizontal bar");
    assert_eq!(builder.series().len(), 2);
}
