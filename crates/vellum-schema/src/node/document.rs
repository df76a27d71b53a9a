use crate::node::{ActionDef, MenuDef, ModelDef, ViewDef};
use serde::{Deserialize, Serialize};

///
/// Document
///
/// Order-independent container for one load's worth of definitions.
/// Cross-references are by string id; nothing is resolved until the
/// registry build.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Document {
    #[serde(default)]
    pub models: Vec<ModelDef>,

    #[serde(default)]
    pub views: Vec<ViewDef>,

    #[serde(default)]
    pub actions: Vec<ActionDef>,

    #[serde(default)]
    pub menus: Vec<MenuDef>,
}

impl Document {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
            && self.views.is_empty()
            && self.actions.is_empty()
            && self.menus.is_empty()
    }

    /// Append another document's definitions, preserving declaration order
    /// within each kind.
    pub fn extend(&mut self, other: Self) {
        self.models.extend(other.models);
        self.views.extend(other.views);
        self.actions.extend(other.actions);
        self.menus.extend(other.menus);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_all_optional() {
        let doc: Document = serde_json::from_str(r#"{ "menus": [] }"#).unwrap();
        assert!(doc.is_empty());
    }
}
