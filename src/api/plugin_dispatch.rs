use crate::extensions::{EngineEvent, PluginContext};
use crate::sink::SubmissionSink;

use super::ForecastEngine;

impl<S: SubmissionSink> ForecastEngine<S> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            user_points_len: self.session.user_series().len(),
            selected_tags_len: self.session.annotations().len(),
            submitter_points_len: self.submitters.len(),
            aggregate_points_len: self.aggregates.len(),
            visibility: self.visibility,
            read_only: self.read_only,
            submissions_emitted: self.submissions_emitted,
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: EngineEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(&event, context);
        }
    }
}
