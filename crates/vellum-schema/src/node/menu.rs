use serde::{Deserialize, Serialize};

///
/// MenuDef
///
/// One navigation entry. `parent` and `action` are unresolved ids here;
/// linking happens in the registry's two-phase menu build.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MenuDef {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    /// Sibling sort key; declaration order breaks ties.
    #[serde(default)]
    pub sequence: u32,
}

impl MenuDef {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent: None,
            action: None,
            sequence: 0,
        }
    }

    #[must_use]
    pub fn under(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    #[must_use]
    pub fn triggers(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    #[must_use]
    pub const fn at(mut self, sequence: u32) -> Self {
        self.sequence = sequence;
        self
    }
}
