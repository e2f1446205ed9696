use approx::assert_relative_eq;
use dashchart::core::{
    ChartData, DEFAULT_TICK_COUNT, Dataset, Padding, PathCommand, PathData, Point, Viewport,
    arc_slice_path, compute_scale, compute_ticks, project_point, usable_width,
};
use dashchart::layout::{BarMode, layout_bars, layout_pie};

fn users() -> Vec<Dataset> {
    vec![Dataset::new("users", vec![10.0, 0.0, 30.0])]
}

#[test]
fn line_scale_pads_max_and_ticks_reach_past_it() {
    let scale = compute_scale(&users(), false);
    assert_eq!(scale.domain_min, 0.0);
    assert_eq!(scale.domain_max, 33.0);

    let ticks = compute_ticks(scale, DEFAULT_TICK_COUNT);
    let values: Vec<f64> = ticks.iter().map(|tick| tick.value).collect();
    assert_eq!(values, vec![36.0, 27.0, 18.0, 9.0, 0.0]);
    assert_eq!(ticks.step(), Some(9.0));
}

#[test]
fn larger_values_project_higher_on_screen() {
    let scale = compute_scale(&users(), false);
    let viewport = Viewport::new(480.0, 240.0);
    let padding = Padding::default();

    let zero = project_point(scale, 0.0, 1, 3, viewport, padding);
    let thirty = project_point(scale, 30.0, 2, 3, viewport, padding);
    assert!(thirty.y < zero.y);
    assert_relative_eq!(zero.y, viewport.height - padding.bottom, epsilon = 1e-9);
    assert_relative_eq!(thirty.x, viewport.width - padding.right, epsilon = 1e-9);
}

#[test]
fn single_sample_is_centered() {
    let scale = compute_scale(&[Dataset::new("one", vec![4.0])], false);
    let viewport = Viewport::new(300.0, 200.0);
    let padding = Padding::default();
    let point = project_point(scale, 4.0, 0, 1, viewport, padding);
    assert_relative_eq!(
        point.x,
        padding.left + usable_width(viewport, padding) / 2.0,
        epsilon = 1e-9
    );
}

#[test]
fn empty_and_all_zero_inputs_get_unit_domain() {
    assert_eq!(compute_scale(&[], false).domain_max, 1.0);
    let zeros = [Dataset::new("zero", vec![0.0, 0.0])];
    let scale = compute_scale(&zeros, true);
    assert_eq!((scale.domain_min, scale.domain_max), (0.0, 1.0));
}

#[test]
fn zero_and_negative_widths_still_project_finite_points() {
    let scale = compute_scale(&users(), false);
    for width in [0.0, -40.0] {
        let point = project_point(
            scale,
            30.0,
            2,
            3,
            Viewport::new(width, 240.0),
            Padding::default(),
        );
        assert!(point.x.is_finite() && point.y.is_finite());
    }
}

#[test]
fn stacked_columns_walk_datasets_up_from_the_baseline() {
    let data = ChartData::new(
        vec!["mon".into(), "tue".into()],
        vec![
            Dataset::new("new", vec![5.0, 5.0]),
            Dataset::new("returning", vec![5.0, 15.0]),
        ],
    );
    let layout = layout_bars(
        &data,
        Viewport::new(400.0, 260.0),
        Padding::default(),
        BarMode::Stacked,
    );
    let plot = layout.frame.plot;
    let domain_max = layout.frame.scale.domain_max;
    assert_eq!(domain_max, 24.0);

    assert_relative_eq!(
        layout.column_height(1),
        20.0 / domain_max * plot.height,
        epsilon = 0.01
    );
    let first = layout.slot(1, 0).expect("first segment");
    let second = layout.slot(1, 1).expect("second segment");
    assert_relative_eq!(first.y + first.height, plot.bottom(), epsilon = 1e-9);
    assert_relative_eq!(second.y + second.height, first.y, epsilon = 1e-9);
    assert!(first.width <= 24.0);
}

#[test]
fn grouped_bars_stay_centered_in_their_cell() {
    let data = ChartData::new(
        vec!["a".into(), "b".into(), "c".into()],
        vec![
            Dataset::new("web", vec![1.0, 2.0, 3.0]),
            Dataset::new("mobile", vec![3.0, 2.0, 1.0]),
        ],
    );
    let layout = layout_bars(
        &data,
        Viewport::new(600.0, 300.0),
        Padding::default(),
        BarMode::Grouped,
    );
    for group in 0..3 {
        let left = layout.slot(group, 0).expect("left bar");
        let right = layout.slot(group, 1).expect("right bar");
        assert_relative_eq!(right.x - (left.x + left.width), 4.0, epsilon = 1e-9);
        let middle = (left.x + right.x + right.width) / 2.0;
        assert_relative_eq!(middle, layout.group_centers[group], epsilon = 1e-9);
    }
}

#[test]
fn pie_sweeps_follow_input_order() {
    let layout = layout_pie(&[1.0, 1.0, 2.0], 240.0, Point::new(120.0, 120.0), 45.0);
    let sweeps: Vec<f64> = layout.slices.iter().map(|slice| slice.sweep()).collect();
    assert_eq!(sweeps, vec![90.0, 90.0, 180.0]);
    assert_eq!(layout.slices[0].start_angle, -90.0);
    assert_eq!(layout.slices[2].end_angle, 270.0);
    assert_eq!(layout.outer_radius, 110.0);
    assert_eq!(layout.inner_radius, 65.0);
    assert_eq!(layout.leader_lines.len(), 3);
}

#[test]
fn thin_pie_slices_get_no_leader_line() {
    let layout = layout_pie(&[96.0, 4.0], 200.0, Point::new(100.0, 100.0), 45.0);
    assert_eq!(layout.leader_lines.len(), 1);
    assert_eq!(layout.leader_lines[0].slice_index, 0);
}

#[test]
fn arc_flags_follow_sweep_size() {
    let small = arc_slice_path(0.0, 0.0, 100.0, 50.0, -90.0, 0.0);
    let large = arc_slice_path(0.0, 0.0, 100.0, 50.0, -90.0, 180.0);
    let arcs = |path: &PathData| -> Vec<(bool, bool)> {
        path.commands()
            .iter()
            .filter_map(|command| match *command {
                PathCommand::ArcTo {
                    large_arc, sweep, ..
                } => Some((large_arc, sweep)),
                _ => None,
            })
            .collect()
    };
    assert_eq!(arcs(&small), vec![(false, true), (false, false)]);
    assert_eq!(arcs(&large), vec![(true, true), (true, false)]);
}
