use crate::types::ViewMode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// ActionDef
///
/// Binds a named trigger to a model and the ordered presentation modes it
/// opens with. `default_views` maps each mode to the view id that serves it.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ActionDef {
    pub id: String,
    pub name: String,
    pub model: String,
    pub view_sequence: Vec<ViewMode>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub default_views: BTreeMap<ViewMode, String>,
}

impl ActionDef {
    #[must_use]
    pub fn default_view(&self, mode: ViewMode) -> Option<&str> {
        self.default_views.get(&mode).map(String::as_str)
    }
}
