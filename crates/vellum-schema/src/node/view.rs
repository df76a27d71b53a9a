use crate::types::ViewMode;
use serde::{Deserialize, Serialize};

///
/// LayoutNode
///
/// One node of a view's layout tree. Field references are resolved
/// against the field registry when the document is compiled.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutNode {
    Field(String),
    Group(Vec<LayoutNode>),
    Separator,
    Section {
        title: String,
        children: Vec<LayoutNode>,
    },
}

impl LayoutNode {
    #[must_use]
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }

    /// Pre-order walk over every field reference in this subtree.
    #[must_use]
    pub fn field_refs(&self) -> FieldRefs<'_> {
        FieldRefs { stack: vec![self] }
    }
}

///
/// FieldRefs
///
/// Pre-order iterator over the field references of a layout subtree.
/// The walk order is the documented order for first-failure reporting.
///

pub struct FieldRefs<'a> {
    stack: Vec<&'a LayoutNode>,
}

impl<'a> Iterator for FieldRefs<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                LayoutNode::Field(name) => return Some(name),
                LayoutNode::Group(children) | LayoutNode::Section { children, .. } => {
                    self.stack.extend(children.iter().rev());
                }
                LayoutNode::Separator => {}
            }
        }

        None
    }
}

///
/// ViewDef
///
/// A named layout of one model's fields for one presentation mode.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ViewDef {
    pub id: String,
    pub model: String,
    pub mode: ViewMode,
    pub layout: Vec<LayoutNode>,
}

impl ViewDef {
    /// Pre-order field references across the whole layout.
    pub fn field_refs(&self) -> impl Iterator<Item = &str> {
        self.layout.iter().flat_map(LayoutNode::field_refs)
    }
}

///
/// TESTS
///
