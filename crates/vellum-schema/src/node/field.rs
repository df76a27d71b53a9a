use crate::types::{SemanticType, Widget};
use serde::{Deserialize, Serialize};

///
/// FieldDef
///
/// One field of a model as declared in a document. Immutable once the
/// model is registered.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FieldDef {
    pub name: String,
    pub semantic_type: SemanticType,

    #[serde(default)]
    pub read_only: bool,

    #[serde(default = "default_visible")]
    pub visible: bool,

    #[serde(default)]
    pub required: bool,

    /// Changes to this field are surfaced in the host's activity feed.
    #[serde(default)]
    pub tracked: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget: Option<Widget>,

    /// Initial value offered when a record is created.
    #[serde(default, rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

const fn default_visible() -> bool {
    true
}

impl FieldDef {
    #[must_use]
    pub fn new(name: impl Into<String>, semantic_type: SemanticType) -> Self {
        Self {
            name: name.into(),
            semantic_type,
            read_only: false,
            visible: true,
            required: false,
            tracked: false,
            widget: None,
            default_value: None,
            help: None,
        }
    }

    /// Declared widget override, else the semantic type's default.
    #[must_use]
    pub fn resolved_widget(&self) -> Widget {
        self.widget
            .unwrap_or_else(|| self.semantic_type.default_widget())
    }
}
