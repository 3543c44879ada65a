use dotplot_rs::api::{ForecastEngine, ForecastEngineConfig};
use dotplot_rs::core::{Color, USER_FORECAST_COLOR, USER_OWNER_LABEL, UserStyle};
use dotplot_rs::interaction::{ClickOutcome, RejectReason};
use dotplot_rs::sink::NullSink;

fn engine() -> ForecastEngine<NullSink> {
    ForecastEngine::new(NullSink::default(), ForecastEngineConfig::default()).expect("engine init")
}

fn user_values(engine: &ForecastEngine<NullSink>) -> Vec<(f64, f64)> {
    engine
        .session()
        .user_series()
        .points()
        .map(|point| (point.category(), point.value()))
        .collect()
}

#[test]
fn new_category_appends_point_with_user_identity() {
    let mut engine = engine();

    let outcome = engine.on_pointer_click(2025.2, 3.1);
    assert!(matches!(outcome, ClickOutcome::Placed(c) if c.category == 2025.0 && c.value == 3.0));

    let point = engine
        .session()
        .user_series()
        .get(2025.0)
        .expect("placed point");
    assert_eq!(point.display_value(), "3.00");
    assert_eq!(point.color(), USER_FORECAST_COLOR);
    assert_eq!(point.owner_label(), USER_OWNER_LABEL);
    assert!(point.tags().is_empty());
}

#[test]
fn existing_category_replaces_value_in_place() {
    let mut engine = engine();
    engine.on_pointer_click(2024.0, 5.0);
    engine.on_pointer_click(2025.0, 4.0);

    let outcome = engine.on_pointer_click(2024.2, 3.6);
    match outcome {
        ClickOutcome::Replaced {
            coordinate,
            previous_value,
        } => {
            assert_eq!(coordinate.category, 2024.0);
            assert_eq!(coordinate.value, 3.5);
            assert_eq!(previous_value, 5.0);
        }
        other => panic!("expected replace, got {other:?}"),
    }

    assert_eq!(user_values(&engine), vec![(2024.0, 3.5), (2025.0, 4.0)]);
}

#[test]
fn replace_preserves_identity_fields_and_refreshes_display_value() {
    let style = UserStyle {
        color: Color::rgb(0.2, 0.4, 0.6),
        owner_label: "Analyst".to_owned(),
    };
    let config = ForecastEngineConfig::default().with_user_style(style.clone());
    let mut engine = ForecastEngine::new(NullSink::default(), config).expect("engine init");

    engine.on_pointer_click(2025.0, 4.25);
    engine.on_pointer_click(2025.0, 1.0);

    let point = engine
        .session()
        .user_series()
        .get(2025.0)
        .expect("point for 2025");
    assert_eq!(point.value(), 1.0);
    assert_eq!(point.display_value(), "1.00");
    assert_eq!(point.color(), style.color);
    assert_eq!(point.owner_label(), "Analyst");
}

#[test]
fn rejected_click_leaves_series_untouched() {
    let mut engine = engine();
    engine.on_pointer_click(2024.0, 5.0);
    let before = engine.session().clone();

    let outcome = engine.on_pointer_click(2023.2, 1.0);

    assert!(matches!(
        outcome,
        ClickOutcome::Rejected(RejectReason::OutsideCategoryTolerance { .. })
    ));
    assert!(!outcome.is_applied());
    assert_eq!(engine.session(), &before);
}

#[test]
fn re_click_of_same_coordinate_is_idempotent() {
    let mut once = engine();
    once.on_pointer_click(2026.1, 3.3);

    let mut twice = engine();
    twice.on_pointer_click(2026.1, 3.3);
    twice.on_pointer_click(2025.9, 3.2);

    assert_eq!(once.session(), twice.session());
}

#[test]
fn every_category_holds_at_most_one_point() {
    let mut engine = engine();
    for (category, value) in [
        (2024.0, 1.0),
        (2024.3, 2.0),
        (2025.0, 3.0),
        (2023.7, 4.0),
        (2025.4, 5.0),
        (2027.0, 0.5),
    ] {
        engine.on_pointer_click(category, value);
    }

    assert_eq!(
        user_values(&engine),
        vec![(2024.0, 4.0), (2025.0, 5.0), (2027.0, 0.5)]
    );
}
