use std::cell::RefCell;
use std::rc::Rc;

use dotplot_rs::ForecastError;
use dotplot_rs::api::{ForecastEngine, ForecastEngineConfig};
use dotplot_rs::core::ReferenceSeries;
use dotplot_rs::extensions::{EngineEvent, ForecastPlugin, PluginContext};
use dotplot_rs::interaction::SeriesVisibility;
use dotplot_rs::sink::NullSink;

#[derive(Clone)]
struct RecordingPlugin {
    id: String,
    events: Rc<RefCell<Vec<(EngineEvent, PluginContext)>>>,
}

impl RecordingPlugin {
    fn new(id: impl Into<String>, events: Rc<RefCell<Vec<(EngineEvent, PluginContext)>>>) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

impl ForecastPlugin for RecordingPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: &EngineEvent, context: PluginContext) {
        self.events.borrow_mut().push((event.clone(), context));
    }
}

fn event_kind(event: &EngineEvent) -> &'static str {
    match event {
        EngineEvent::PointPlaced { .. } => "placed",
        EngineEvent::PointReplaced { .. } => "replaced",
        EngineEvent::ClickRejected { .. } => "rejected",
        EngineEvent::TagToggled { .. } => "tag",
        EngineEvent::Submitted { .. } => "submitted",
        EngineEvent::Reset => "reset",
        EngineEvent::ReferenceSeriesReplaced { .. } => "references",
        EngineEvent::AggregateSeriesReplaced { .. } => "aggregates",
        EngineEvent::VisibilityChanged(_) => "visibility",
        EngineEvent::GridReplaced { .. } => "grid",
    }
}

fn engine() -> ForecastEngine<NullSink> {
    ForecastEngine::new(NullSink::default(), ForecastEngineConfig::default()).expect("engine init")
}

#[test]
fn plugin_receives_deterministic_event_sequence() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut engine = engine();
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", Rc::clone(&events))))
        .expect("register plugin");

    engine.on_pointer_click(2024.0, 5.0);
    engine.on_pointer_click(2024.0, 4.0);
    engine.on_pointer_click(2020.0, 4.0);
    engine.on_tag_toggle("Global Risks");
    engine.on_submit().expect("submit");
    engine.set_visibility(SeriesVisibility::user_only());
    engine.set_visibility(SeriesVisibility::user_only());
    engine.set_reference_series(ReferenceSeries::default());
    engine.on_reset();

    let kinds: Vec<&str> = events.borrow().iter().map(|(e, _)| event_kind(e)).collect();
    assert_eq!(
        kinds,
        vec![
            "placed",
            "replaced",
            "rejected",
            "tag",
            "submitted",
            "visibility",
            "references",
            "reset"
        ]
    );
}

#[test]
fn plugin_context_reflects_state_after_the_event() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut engine = engine();
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", Rc::clone(&events))))
        .expect("register plugin");

    engine.on_pointer_click(2025.0, 3.0);
    engine.on_tag_toggle("Housing Market");
    engine.on_submit().expect("submit");

    let events = events.borrow();
    let (_, placed_context) = &events[0];
    assert_eq!(placed_context.user_points_len, 1);
    assert_eq!(placed_context.selected_tags_len, 0);

    let (submitted, submitted_context) = &events[2];
    assert_eq!(
        submitted,
        &EngineEvent::Submitted {
            sequence: 1,
            points_len: 1
        }
    );
    assert_eq!(submitted_context.submissions_emitted, 1);
    assert_eq!(submitted_context.selected_tags_len, 1);
}

#[test]
fn duplicate_and_empty_plugin_ids_are_rejected() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut engine = engine();
    engine
        .register_plugin(Box::new(RecordingPlugin::new("a", Rc::clone(&events))))
        .expect("first register");

    let duplicate = engine.register_plugin(Box::new(RecordingPlugin::new("a", Rc::clone(&events))));
    assert!(matches!(duplicate, Err(ForecastError::InvalidData(_))));

    let empty = engine.register_plugin(Box::new(RecordingPlugin::new("", Rc::clone(&events))));
    assert!(matches!(empty, Err(ForecastError::InvalidData(_))));

    assert_eq!(engine.plugin_count(), 1);
    assert!(engine.has_plugin("a"));
    assert!(engine.unregister_plugin("a"));
    assert!(!engine.unregister_plugin("a"));
    assert_eq!(engine.plugin_count(), 0);
}
