use approx::assert_relative_eq;
use chrono::NaiveDate;
use gantt_rs::GanttError;
use gantt_rs::core::{
    HourPreset, LayoutEngine, LayoutTuning, MonthPreset, ViewConfig, ViewPreset, ViewType,
    Viewport, WeekPreset, compute_layout,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn hour_view(preset: HourPreset) -> ViewConfig {
    ViewConfig::new(ViewType::Hour, date(2024, 3, 15)).with_preset(ViewPreset::Hour(preset))
}

#[test]
fn full_day_preset_fits_the_viewport_without_scrolling() {
    let layout = compute_layout(
        &hour_view(HourPreset::Hours24),
        Viewport::new(1000.0),
        LayoutTuning::default(),
    )
    .expect("layout");

    assert_eq!(layout.total_units, 24);
    assert_eq!(layout.visible_units, 24);
    assert_relative_eq!(layout.content_width_px, 1002.0);
    assert_relative_eq!(layout.pixels_per_unit, 41.75);
    assert!(!layout.scroll_enabled);
    assert_relative_eq!(layout.max_scroll_offset_px(), 0.0);
}

#[test]
fn partial_day_preset_widens_content_and_enables_scrolling() {
    let layout = compute_layout(
        &hour_view(HourPreset::Hours4),
        Viewport::new(800.0),
        LayoutTuning::default(),
    )
    .expect("layout");

    assert_eq!(layout.visible_units, 4);
    assert_relative_eq!(layout.content_width_px, 4802.0);
    assert_relative_eq!(layout.pixels_per_unit, 4802.0 / 24.0);
    assert!(layout.scroll_enabled);
    assert_relative_eq!(layout.max_scroll_offset_px(), 4002.0);
}

#[test]
fn fourteen_days_of_a_31_day_month_scrolls() {
    let view = ViewConfig::new(ViewType::Month, date(2024, 1, 20))
        .with_preset(ViewPreset::Month(MonthPreset::Days14));
    let layout =
        compute_layout(&view, Viewport::new(700.0), LayoutTuning::default()).expect("layout");

    assert_eq!(layout.total_units, 31);
    assert_eq!(layout.visible_units, 14);
    assert!(layout.scroll_enabled);
    assert_relative_eq!(layout.content_width_px, 1552.0);
    assert_relative_eq!(
        layout.pixels_per_unit * f64::from(layout.total_units),
        layout.content_width_px,
        max_relative = 1e-12
    );
}

#[test]
fn week_view_never_scrolls() {
    for preset in [WeekPreset::Work, WeekPreset::Full] {
        let view = ViewConfig::new(ViewType::Week, date(2024, 3, 14))
            .with_preset(ViewPreset::Week(preset));
        let layout =
            compute_layout(&view, Viewport::new(640.0), LayoutTuning::default()).expect("layout");
        assert_eq!(layout.total_units, preset.days());
        assert_eq!(layout.visible_units, preset.days());
        assert!(!layout.scroll_enabled);
    }
}

#[test]
fn preset_from_another_view_type_shows_the_full_span() {
    let view = ViewConfig::new(ViewType::Hour, date(2024, 3, 15))
        .with_preset(ViewPreset::Month(MonthPreset::Days7));
    let layout =
        compute_layout(&view, Viewport::new(600.0), LayoutTuning::default()).expect("layout");
    assert_eq!(layout.visible_units, 24);
    assert!(!layout.scroll_enabled);
}

#[test]
fn unmeasured_viewport_is_rejected() {
    let view = hour_view(HourPreset::Hours12);
    for width in [0.0, -10.0, f64::NAN, f64::INFINITY] {
        let err = compute_layout(&view, Viewport::new(width), LayoutTuning::default())
            .expect_err("unready viewport");
        assert!(matches!(err, GanttError::InvalidViewport { .. }));
    }
}

#[test]
fn content_pad_is_configurable() {
    let tuning = LayoutTuning {
        content_pad_px: 0.0,
        ..LayoutTuning::default()
    };
    let layout = compute_layout(&hour_view(HourPreset::Hours12), Viewport::new(600.0), tuning)
        .expect("layout");
    assert_relative_eq!(layout.content_width_px, 1200.0);
    assert_relative_eq!(layout.pixels_per_unit, 50.0);
}

#[test]
fn stateful_engine_waits_for_a_measured_viewport() {
    let mut engine = LayoutEngine::new(hour_view(HourPreset::Hours12), LayoutTuning::default());
    assert!(engine.state().is_none());

    assert!(!engine.set_viewport(Viewport::new(0.0)));
    assert!(engine.state().is_none());

    assert!(engine.set_viewport(Viewport::new(600.0)));
    let first = *engine.state().expect("state after measurement");

    // Unready measurements keep the last good layout.
    assert!(!engine.set_viewport(Viewport::new(-1.0)));
    assert_eq!(engine.state(), Some(&first));
    assert_eq!(engine.viewport(), Some(Viewport::new(600.0)));
}

#[test]
fn identical_inputs_report_no_change() {
    let mut engine = LayoutEngine::new(hour_view(HourPreset::Hours6), LayoutTuning::default());
    assert!(engine.set_viewport(Viewport::new(900.0)));
    let before = *engine.state().expect("state");

    assert!(!engine.set_viewport(Viewport::new(900.0)));
    assert!(!engine.recompute());
    assert_eq!(engine.state(), Some(&before));

    assert!(engine.set_view_config(hour_view(HourPreset::Hours12)));
    assert_ne!(engine.state(), Some(&before));
}

#[test]
fn invalid_tuning_is_rejected_and_previous_kept() {
    let mut engine = LayoutEngine::new(hour_view(HourPreset::Hours6), LayoutTuning::default());
    let bad = LayoutTuning {
        min_bar_width_px: f64::NAN,
        ..LayoutTuning::default()
    };
    assert!(matches!(
        engine.set_tuning(bad),
        Err(GanttError::InvalidConfig(_))
    ));
    assert_eq!(engine.tuning(), LayoutTuning::default());
}
