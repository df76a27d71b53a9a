use serde::Serialize;
use vellum_schema::{
    node::{FieldDef, ModelDef},
    types::{SemanticType, Widget},
};

///
/// Field
///
/// Compiled runtime field metadata with its widget fully resolved.
///

#[derive(Clone, Debug, Serialize)]
pub struct Field {
    pub name: String,
    pub semantic_type: SemanticType,
    pub widget: Widget,
    pub read_only: bool,
    pub visible: bool,
    pub required: bool,
    pub tracked: bool,
    pub default_value: Option<String>,
    pub help: Option<String>,
}

impl From<&FieldDef> for Field {
    fn from(def: &FieldDef) -> Self {
        Self {
            name: def.name.clone(),
            semantic_type: def.semantic_type,
            widget: def.resolved_widget(),
            read_only: def.read_only,
            visible: def.visible,
            required: def.required,
            tracked: def.tracked,
            default_value: def.default_value.clone(),
            help: def.help.clone(),
        }
    }
}

///
/// FieldTable
///
/// Declaration-ordered field registry for one model.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct FieldTable {
    fields: Vec<Field>,
}

impl FieldTable {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub(crate) fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

///
/// Model
///
/// One registered model: its label and field table.
///

#[derive(Clone, Debug, Serialize)]
pub struct Model {
    pub name: String,
    pub label: String,
    pub fields: FieldTable,
}

impl Model {
    pub(crate) fn compile(def: &ModelDef) -> Self {
        let mut fields = FieldTable::default();
        for field in &def.fields {
            fields.push(Field::from(field));
        }

        Self {
            name: def.name.clone(),
            label: def.resolved_label().to_string(),
            fields,
        }
    }
}
