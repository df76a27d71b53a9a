//! Point-in-time registry summaries for observability surfaces.

use crate::registry::Registry;
use serde::Serialize;

///
/// LoadReport
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct LoadReport {
    pub models: usize,
    pub fields: usize,
    pub views: usize,
    pub actions: usize,
    pub menu_entries: usize,
    /// `(model, field count)` in model-name order.
    pub fields_per_model: Vec<(String, usize)>,
}

/// Build a load report for a registry snapshot.
#[must_use]
pub fn load_report(registry: &Registry) -> LoadReport {
    let fields_per_model: Vec<(String, usize)> = registry
        .models()
        .map(|m| (m.name.clone(), m.fields.len()))
        .collect();

    LoadReport {
        models: fields_per_model.len(),
        fields: fields_per_model.iter().map(|(_, n)| *n).sum(),
        views: registry.views().count(),
        actions: registry.actions().count(),
        menu_entries: registry.menu().len(),
        fields_per_model,
    }
}
