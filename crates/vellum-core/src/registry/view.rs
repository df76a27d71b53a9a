use crate::{error::RenderError, render::Record};
use serde::Serialize;
use vellum_schema::{
    node::{LayoutNode, ViewDef},
    types::ViewMode,
};

///
/// ViewDescriptor
///
/// Immutable, fully-resolved view: the layout tree plus the pre-order
/// list of field names the view requires from a record. Built once at
/// load time; customization means defining a new descriptor, never
/// patching an existing one.
///

#[derive(Clone, Debug, Serialize)]
pub struct ViewDescriptor {
    pub id: String,
    pub model: String,
    pub mode: ViewMode,
    pub layout: Vec<LayoutNode>,
    required_fields: Vec<String>,
}

impl ViewDescriptor {
    pub(crate) fn compile(def: &ViewDef) -> Self {
        let required_fields = def.field_refs().map(str::to_string).collect();

        Self {
            id: def.id.clone(),
            model: def.model.clone(),
            mode: def.mode,
            layout: def.layout.clone(),
            required_fields,
        }
    }

    /// Field names the view reads, in layout pre-order.
    pub fn required_fields(&self) -> impl Iterator<Item = &str> {
        self.required_fields.iter().map(String::as_str)
    }

    /// Check a record snapshot against the view's shape. The first missing
    /// field in layout pre-order is the one reported.
    pub fn check_record(&self, record: &Record) -> Result<(), RenderError> {
        for name in &self.required_fields {
            if !record.has(name) {
                return Err(RenderError::RecordShapeMismatch {
                    view: self.id.clone(),
                    model: self.model.clone(),
                    field: name.clone(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Value;

    fn tree_view() -> ViewDescriptor {
        ViewDescriptor::compile(&ViewDef {
            id: "hosts_tree".to_string(),
            model: "hosts".to_string(),
            mode: ViewMode::List,
            layout: vec![
                LayoutNode::field("ip"),
                LayoutNode::Group(vec![LayoutNode::field("username")]),
                LayoutNode::field("owner"),
            ],
        })
    }

    #[test]
    fn required_fields_follow_pre_order() {
        let view = tree_view();
        let fields: Vec<&str> = view.required_fields().collect();
        assert_eq!(fields, vec!["ip", "username", "owner"]);
    }

    #[test]
    fn check_record_reports_the_first_missing_field() {
        let view = tree_view();
        let record = Record::new("hosts").with("ip", Value::Text("10.0.0.1".to_string()));

        let err = view.check_record(&record).unwrap_err();
        assert_eq!(
            err,
            RenderError::RecordShapeMismatch {
                view: "hosts_tree".to_string(),
                model: "hosts".to_string(),
                field: "username".to_string(),
            }
        );
    }

    #[test]
    fn complete_record_passes_the_shape_check() {
        let view = tree_view();
        let record = Record::new("hosts")
            .with("ip", Value::Text("10.0.0.1".to_string()))
            .with("username", Value::Text("root".to_string()))
            .with("owner", Value::Null);

        assert!(view.check_record(&record).is_ok());
    }
}
