use crate::node::FieldDef;
use serde::{Deserialize, Serialize};

///
/// ModelDef
///
/// The registration unit for the field registry: one model and its
/// declaration-ordered fields.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ModelDef {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    pub fields: Vec<FieldDef>,
}

impl ModelDef {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Display label used for menus and window titles.
    #[must_use]
    pub fn resolved_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}
