use dashchart::api::{
    ChartEngine, ChartEngineConfig, ChartKind, ChartOptions, HitMap, LayoutInputs, recompute,
};
use dashchart::core::{ChartData, Dataset, NumberLocale, Viewport};
use dashchart::interaction::{HoverState, HoverTarget};
use dashchart::render::{Color, LayerKind, NullRenderer, Renderer};

fn weekly() -> ChartData {
    ChartData::new(
        vec!["w1".into(), "w2".into(), "w3".into(), "w4".into()],
        vec![Dataset::new("revenue", vec![12_000.0, 18_500.0, 9_000.0, 21_000.0])],
    )
}

#[test]
fn line_chart_draws_axis_titles_and_compact_ticks() {
    let data = weekly();
    let options = ChartOptions::default()
        .with_x_axis_label("Week")
        .with_y_axis_label("Revenue");
    let rendered = recompute(&LayoutInputs::new(
        ChartKind::Line,
        &data,
        Viewport::new(520.0, 260.0),
        &options,
    ));
    let axis = &rendered.frame.layer(LayerKind::Axis).texts;

    let y_title = axis.iter().find(|t| t.text == "Revenue").expect("y title");
    assert_eq!(y_title.rotation_deg, -90.0);
    let x_title = axis.iter().find(|t| t.text == "Week").expect("x title");
    assert_eq!(x_title.rotation_deg, 0.0);

    assert!(axis.iter().any(|t| t.text == "23.1K"));
    assert!(axis.iter().any(|t| t.text == "0"));
    assert_eq!(rendered.frame.layer(LayerKind::Grid).lines.len(), 5);
    assert!(rendered.frame.validate().is_ok());
}

#[test]
fn spanish_locale_formats_labels_and_tooltip_values() {
    let data = weekly();
    let options = ChartOptions::default()
        .with_locale(NumberLocale::EsEs)
        .with_stacked(true);
    let viewport = Viewport::new(520.0, 260.0);
    let idle = recompute(&LayoutInputs::new(ChartKind::Bar, &data, viewport, &options));

    let slot = match &idle.hit_map {
        HitMap::Bar { slots, .. } => slots[1],
        other => panic!("expected bar hit map, got {other:?}"),
    };
    let (_, tooltip) = idle
        .hit_map
        .hover_at(&data, &options, slot.center_x(), slot.y + 1.0)
        .expect("bar hit");
    assert_eq!(tooltip.value, 18_500.0);

    let hover = HoverState::Hovering {
        target: HoverTarget::Bar {
            dataset_index: 0,
            group_index: 1,
        },
        tooltip,
    };
    let hovered = recompute(
        &LayoutInputs::new(ChartKind::Bar, &data, viewport, &options).with_hover(&hover),
    );
    let tooltip_texts: Vec<&str> = hovered
        .frame
        .layer(LayerKind::Tooltip)
        .texts
        .iter()
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(tooltip_texts, vec!["w2", "revenue: 18.500", "↑ 54,2%"]);
}

#[test]
fn dataset_hex_color_overrides_the_palette() {
    let data = ChartData::new(
        vec!["a".into(), "b".into()],
        vec![Dataset::new("orders", vec![3.0, 4.0]).with_color("#ff0000")],
    );
    let options = ChartOptions::default();
    let rendered = recompute(&LayoutInputs::new(
        ChartKind::Bar,
        &data,
        Viewport::new(300.0, 200.0),
        &options,
    ));
    let rects = &rendered.frame.layer(LayerKind::Series).rects;
    assert_eq!(rects.len(), 2);
    assert!(rects.iter().all(|rect| rect.fill == Color::from_rgb8(255, 0, 0)));
}

#[test]
fn lone_sample_line_draws_a_point_instead_of_a_path() {
    let data = ChartData::new(vec!["today".into()], vec![Dataset::new("users", vec![7.0])]);
    let options = ChartOptions::default();
    let rendered = recompute(&LayoutInputs::new(
        ChartKind::Line,
        &data,
        Viewport::new(300.0, 200.0),
        &options,
    ));
    let series = rendered.frame.layer(LayerKind::Series);
    assert!(series.paths.is_empty());
    assert_eq!(series.circles.len(), 1);
}

#[test]
fn mismatched_lengths_render_against_the_labels() {
    let data = ChartData::new(
        vec!["a".into(), "b".into(), "c".into()],
        vec![
            Dataset::new("short", vec![1.0]),
            Dataset::new("long", vec![1.0, 2.0, 3.0, 4.0]),
        ],
    );
    let options = ChartOptions::default();
    let rendered = recompute(&LayoutInputs::new(
        ChartKind::Bar,
        &data,
        Viewport::new(400.0, 240.0),
        &options,
    ));
    match &rendered.hit_map {
        HitMap::Bar { slots, .. } => {
            assert_eq!(slots.len(), 6);
            assert!(slots.iter().all(|slot| slot.group_index < 3));
        }
        other => panic!("expected bar hit map, got {other:?}"),
    }
}

#[test]
fn every_kind_renders_valid_frames_at_degenerate_widths() {
    let data = ChartData::new(
        vec!["a".into(), "b".into(), "c".into()],
        vec![
            Dataset::new("web", vec![3.0, 1.0, 2.0]),
            Dataset::new("mobile", vec![1.0, 2.0, 3.0]),
        ],
    );
    for kind in [ChartKind::Line, ChartKind::Bar, ChartKind::Pie] {
        let config = ChartEngineConfig::new(kind, 200.0).with_initial_width(0.0);
        let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
        engine.set_data(data.clone());
        engine.render().expect("zero width renders");
        engine.on_resize(-25.0);
        engine.render().expect("negative width renders");
        engine.on_resize(12.0);
        engine.pointer_move(6.0, 100.0);
        engine.render().expect("narrow width renders");

        let mut renderer = NullRenderer::default();
        renderer.render(engine.frame()).expect("frame validates");
        assert_eq!(renderer.frames_rendered, 1);
        assert_eq!(engine.renderer().frames_rendered, 3);
    }
}
