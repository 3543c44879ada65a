use dotplot_rs::ForecastError;
use dotplot_rs::api::{ForecastEngine, ForecastEngineConfig};
use dotplot_rs::core::{TickAxis, TickGrid, TickGridConfig, format_fixed};
use dotplot_rs::sink::NullSink;

#[test]
fn default_config_builds_quarter_point_value_axis() {
    let grid = TickGrid::from_config(&TickGridConfig::default()).expect("default grid");

    assert_eq!(grid.categories().ticks(), &[2024.0, 2025.0, 2026.0, 2027.0]);
    assert_eq!(grid.values().len(), 25);
    assert_eq!(grid.values().first(), 0.0);
    assert_eq!(grid.values().last(), 6.0);
    assert_eq!(grid.values().ticks()[1], 0.25);
    assert!(grid.values().has_constant_step());
}

#[test]
fn stepped_axis_has_no_float_drift() {
    let axis = TickAxis::stepped(0.0, 1.0, 0.1, "value").expect("stepped axis");
    assert_eq!(axis.len(), 11);
    assert_eq!(axis.ticks()[3], 0.3);
    assert_eq!(axis.ticks()[7], 0.7);
}

#[test]
fn duplicate_ticks_are_rejected() {
    let result = TickGrid::new(vec![2024.0, 2024.0, 2025.0], vec![0.0, 0.25, 0.5]);
    assert!(matches!(result, Err(ForecastError::InvalidGrid(_))));
}

#[test]
fn unordered_ticks_are_rejected() {
    let result = TickGrid::new(vec![2025.0, 2024.0], vec![0.0, 0.25, 0.5]);
    assert!(matches!(result, Err(ForecastError::InvalidGrid(_))));

    let result = TickGrid::new(vec![2024.0, 2025.0], vec![0.5, 0.25, 0.0]);
    assert!(matches!(result, Err(ForecastError::InvalidGrid(_))));
}

#[test]
fn single_tick_axes_are_rejected() {
    let result = TickGrid::new(vec![2024.0], vec![0.0, 0.25]);
    assert!(matches!(result, Err(ForecastError::InvalidGrid(_))));

    let result = TickGrid::new(vec![2024.0, 2025.0], vec![]);
    assert!(matches!(result, Err(ForecastError::InvalidGrid(_))));
}

#[test]
fn non_finite_ticks_are_rejected() {
    let result = TickGrid::new(vec![2024.0, f64::NAN], vec![0.0, 0.25]);
    assert!(matches!(result, Err(ForecastError::InvalidGrid(_))));
}

#[test]
fn uneven_value_step_is_rejected() {
    let result = TickGrid::new(vec![2024.0, 2025.0], vec![0.0, 0.25, 0.75]);
    assert!(matches!(result, Err(ForecastError::InvalidGrid(_))));
}

#[test]
fn uneven_category_spacing_is_allowed() {
    let grid = TickGrid::new(vec![2024.0, 2025.0, 2030.0], vec![0.0, 0.5, 1.0])
        .expect("categories need not be evenly spaced");
    assert_eq!(grid.category_tolerance(), 0.5);
}

#[test]
fn invalid_stepped_ranges_are_rejected() {
    assert!(TickAxis::stepped(0.0, 6.0, 0.0, "value").is_err());
    assert!(TickAxis::stepped(0.0, 6.0, -0.25, "value").is_err());
    assert!(TickAxis::stepped(6.0, 0.0, 0.25, "value").is_err());
    assert!(TickAxis::stepped(0.0, f64::INFINITY, 0.25, "value").is_err());
    assert!(TickAxis::stepped(0.0, 1_000_000.0, 0.001, "value").is_err());
}

#[test]
fn category_labels_override_default_rendering() {
    let grid = TickGrid::from_config(&TickGridConfig::default()).expect("default grid");
    assert_eq!(grid.category_label(2027.0), "Long Run");
    assert_eq!(grid.category_label(2025.0), "2025");
}

#[test]
fn labels_for_unknown_ticks_are_rejected() {
    let grid = TickGrid::new(vec![2024.0, 2025.0], vec![0.0, 0.5]).expect("grid");
    assert!(grid.with_category_label(2030.0, "Later").is_err());
}

#[test]
fn tolerance_is_half_the_smallest_spacing() {
    let grid = TickGrid::new(vec![0.0, 10.0, 12.0, 20.0], vec![0.0, 1.0]).expect("grid");
    assert_eq!(grid.category_tolerance(), 1.0);
}

#[test]
fn overflowing_tick_count_is_rejected_without_panicking() {
    let result = TickAxis::stepped(0.0, 1e20, 1e-20, "value");
    assert!(matches!(result, Err(ForecastError::InvalidGrid(_))));
}

#[test]
fn overflowing_grid_config_fails_engine_construction() {
    let config = ForecastEngineConfig::from_json_str(
        r#"{"grid":{"category_ticks":[2024,2025],"value_start":0,"value_end":1e20,"value_step":1e-20}}"#,
    )
    .expect("config parses");

    let result = ForecastEngine::new(NullSink::default(), config);
    assert!(matches!(result, Err(ForecastError::InvalidGrid(_))));
}

#[test]
fn eighth_point_axis_displays_midpoints_rounded_up() {
    let axis = TickAxis::stepped(0.0, 3.0, 0.125, "value").expect("stepped axis");
    let grid = TickGrid::from_axes(
        TickAxis::new(vec![2024.0, 2025.0], "category").expect("categories"),
        axis,
    )
    .expect("grid");

    let displays: Vec<String> = grid
        .values()
        .ticks()
        .iter()
        .copied()
        .filter(|tick| [0.125, 0.375, 2.625].contains(tick))
        .map(format_fixed)
        .collect();
    assert_eq!(displays, vec!["0.13", "0.38", "2.63"]);
}
