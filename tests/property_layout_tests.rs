use chrono::NaiveDate;
use gantt_rs::core::primitives::millis_between;
use gantt_rs::core::{
    CoordinateMapper, LayoutTuning, ViewConfig, ViewPreset, ViewType, Viewport, compute_layout,
};
use proptest::prelude::*;

fn view_strategy() -> impl Strategy<Value = ViewConfig> {
    let view_type = prop_oneof![
        Just(ViewType::Hour),
        Just(ViewType::Week),
        Just(ViewType::Month),
    ];
    (view_type, 0usize..5, 0u32..3650).prop_map(|(view_type, preset_index, day_offset)| {
        let date = NaiveDate::from_ymd_opt(2020, 1, 1)
            .expect("valid date")
            .checked_add_days(chrono::Days::new(u64::from(day_offset)))
            .expect("date in range");
        let presets: &[ViewPreset] = view_type.presets();
        ViewConfig::new(view_type, date).with_preset(presets[preset_index % presets.len()])
    })
}

proptest! {
    #[test]
    fn layout_geometry_is_consistent(view in view_strategy(), width in 1.0f64..5000.0) {
        let layout = compute_layout(&view, Viewport::new(width), LayoutTuning::default())
            .expect("layout");

        prop_assert!(layout.pixels_per_unit.is_finite() && layout.pixels_per_unit > 0.0);
        prop_assert!(layout.content_width_px >= width);
        prop_assert!(layout.visible_units <= layout.total_units);
        prop_assert_eq!(layout.scroll_enabled, layout.visible_units < layout.total_units);

        let rebuilt = layout.pixels_per_unit * f64::from(layout.total_units);
        prop_assert!((rebuilt - layout.content_width_px).abs() <= 1e-9 * layout.content_width_px);
    }

    #[test]
    fn layout_is_idempotent(view in view_strategy(), width in 1.0f64..5000.0) {
        let first = compute_layout(&view, Viewport::new(width), LayoutTuning::default())
            .expect("layout");
        let second = compute_layout(&view, Viewport::new(width), LayoutTuning::default())
            .expect("layout");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn pixel_to_time_round_trip(
        view in view_strategy(),
        width in 100.0f64..4000.0,
        fraction in 0.0f64..1.0
    ) {
        let layout = compute_layout(&view, Viewport::new(width), LayoutTuning::default())
            .expect("layout");
        let mapper = CoordinateMapper::new(&layout, 24.0);

        let px = fraction * layout.content_width_px;
        let instant = mapper.to_time(px).expect("to time");
        let recovered = mapper.time_to_pixel(instant);
        prop_assert!((recovered - px).abs() <= 1e-6);
    }

    #[test]
    fn time_to_pixel_round_trip(
        view in view_strategy(),
        width in 100.0f64..4000.0,
        offset_minutes in 0i64..(28 * 24 * 60)
    ) {
        let layout = compute_layout(&view, Viewport::new(width), LayoutTuning::default())
            .expect("layout");
        let mapper = CoordinateMapper::new(&layout, 24.0);

        let instant = layout.anchor + chrono::TimeDelta::minutes(offset_minutes);
        let recovered = mapper.to_time(mapper.time_to_pixel(instant)).expect("to time");
        // Rounding happens only at nanosecond resolution.
        prop_assert!(millis_between(instant, recovered).abs() <= 0.001);
    }
}
