use serde::Serialize;
use std::collections::BTreeMap;
use vellum_schema::{node::ActionDef, types::ViewMode};

///
/// Action
///
/// Compiled window action: the model it opens and the validated mode →
/// view bindings. All referenced views exist and match the model by the
/// time one of these is constructed.
///

#[derive(Clone, Debug, Serialize)]
pub struct Action {
    pub id: String,
    pub name: String,
    pub model: String,
    pub view_sequence: Vec<ViewMode>,
    pub default_views: BTreeMap<ViewMode, String>,
}

impl Action {
    pub(crate) fn compile(def: &ActionDef) -> Self {
        Self {
            id: def.id.clone(),
            name: def.name.clone(),
            model: def.model.clone(),
            view_sequence: def.view_sequence.clone(),
            default_views: def.default_views.clone(),
        }
    }

    /// The explicitly bound view for a mode, if any.
    #[must_use]
    pub fn default_view(&self, mode: ViewMode) -> Option<&str> {
        self.default_views.get(&mode).map(String::as_str)
    }

    #[must_use]
    pub fn has_mode(&self, mode: ViewMode) -> bool {
        self.view_sequence.contains(&mode)
    }
}
