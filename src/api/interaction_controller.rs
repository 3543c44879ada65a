use tracing::{debug, trace};

use crate::extensions::EngineEvent;
use crate::interaction::ClickOutcome;
use crate::sink::SubmissionSink;

use super::ForecastEngine;

impl<S: SubmissionSink> ForecastEngine<S> {
    /// Handles a click inside the plotting area, in data-space coordinates.
    ///
    /// Stray clicks come back as `ClickOutcome::Rejected` and leave the
    /// session untouched.
    pub fn on_pointer_click(&mut self, raw_category: f64, raw_value: f64) -> ClickOutcome {
        if self.read_only {
            trace!(raw_category, raw_value, "click ignored in read-only mode");
            return ClickOutcome::ReadOnly;
        }

        let outcome = self.session.place(
            &self.grid,
            self.snap_policy,
            &self.user_style,
            raw_category,
            raw_value,
        );
        let event = match outcome {
            ClickOutcome::Placed(coordinate) => {
                debug!(
                    category = coordinate.category,
                    value = coordinate.value,
                    points_len = self.session.user_series().len(),
                    "user point placed"
                );
                EngineEvent::PointPlaced {
                    category: coordinate.category,
                    value: coordinate.value,
                }
            }
            ClickOutcome::Replaced {
                coordinate,
                previous_value,
            } => {
                debug!(
                    category = coordinate.category,
                    previous_value,
                    value = coordinate.value,
                    "user point replaced"
                );
                EngineEvent::PointReplaced {
                    category: coordinate.category,
                    previous_value,
                    value: coordinate.value,
                }
            }
            ClickOutcome::Rejected(reason) => {
                trace!(raw_category, raw_value, ?reason, "stray click rejected");
                EngineEvent::ClickRejected { reason }
            }
            ClickOutcome::ReadOnly => return outcome,
        };
        self.emit_plugin_event(event);
        outcome
    }

    /// Toggles a reasoning tag and returns its new selection state.
    ///
    /// Tags outside the catalog are accepted. Read-only engines return
    /// `false` without touching the selection.
    pub fn on_tag_toggle(&mut self, tag: &str) -> bool {
        if self.read_only {
            trace!(tag, "tag toggle ignored in read-only mode");
            return false;
        }
        let selected = self.session.toggle_tag(tag);
        debug!(
            tag,
            selected,
            tags_len = self.session.annotations().len(),
            "tag toggled"
        );
        self.emit_plugin_event(EngineEvent::TagToggled {
            tag: tag.to_owned(),
            selected,
        });
        selected
    }

    /// Clears the user series and the selected tags.
    pub fn on_reset(&mut self) {
        if self.read_only {
            trace!("reset ignored in read-only mode");
            return;
        }
        self.session.reset();
        debug!("forecast session reset");
        self.emit_plugin_event(EngineEvent::Reset);
    }
}
