//! The compiled, immutable registry and its read surface.
//!
//! Schema nodes declare *what exists*; types here are *what serves*.
//! A `Registry` is populated exactly once by the builder and read-only
//! for the rest of its life, so it is safe to share behind an `Arc`
//! with any number of concurrent readers.

mod action;
mod field;
mod menu;
mod view;

pub use action::Action;
pub use field::{Field, FieldTable, Model};
pub use menu::{MenuEntry, MenuTree, Traverse};
pub use view::ViewDescriptor;

use crate::{
    build::RegistryBuilder,
    error::{RegistryError, RenderError, ResolveError},
};
use serde::Serialize;
use std::collections::BTreeMap;
use vellum_schema::types::ViewMode;

///
/// Registry
///
/// Process-lifetime table of compiled definitions: field registry, view
/// descriptors, actions, and the menu tree.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct Registry {
    pub(crate) models: BTreeMap<String, Model>,
    pub(crate) views: BTreeMap<String, ViewDescriptor>,
    /// View ids in document declaration order, for first-declared fallback.
    pub(crate) view_order: Vec<String>,
    pub(crate) actions: BTreeMap<String, Action>,
    pub(crate) menu: MenuTree,
}

impl Registry {
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    //
    // field registry
    //

    pub fn model(&self, name: &str) -> Result<&Model, RegistryError> {
        self.models.get(name).ok_or_else(|| RegistryError::UnknownModel {
            model: name.to_string(),
        })
    }

    /// Registered models in name order.
    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    pub fn lookup_field(&self, model: &str, name: &str) -> Result<&Field, RegistryError> {
        self.model(model)?
            .fields
            .get(name)
            .ok_or_else(|| RegistryError::UnknownField {
                model: model.to_string(),
                field: name.to_string(),
            })
    }

    /// Declaration-ordered field table for a model.
    pub fn fields_of(&self, model: &str) -> Result<&FieldTable, RegistryError> {
        Ok(&self.model(model)?.fields)
    }

    //
    // views
    //

    pub fn view(&self, id: &str) -> Result<&ViewDescriptor, RenderError> {
        self.views.get(id).ok_or_else(|| RenderError::UnknownView {
            id: id.to_string(),
        })
    }

    /// Registered views in document declaration order.
    pub fn views(&self) -> impl Iterator<Item = &ViewDescriptor> {
        self.view_order.iter().filter_map(|id| self.views.get(id))
    }

    //
    // actions
    //

    pub fn resolve(&self, action_id: &str) -> Result<&Action, ResolveError> {
        self.actions
            .get(action_id)
            .ok_or_else(|| ResolveError::UnknownAction {
                id: action_id.to_string(),
            })
    }

    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.actions.values()
    }

    /// Pick the view serving `mode` for an action. The explicit default
    /// wins; otherwise, when the mode appears in the action's sequence,
    /// the first-declared view of `(action.model, mode)` serves it.
    pub fn pick_view(
        &self,
        action_id: &str,
        mode: ViewMode,
    ) -> Result<&ViewDescriptor, ResolveError> {
        let action = self.resolve(action_id)?;

        if let Some(id) = action.default_view(mode)
            && let Some(view) = self.views.get(id)
        {
            return Ok(view);
        }

        if action.has_mode(mode)
            && let Some(view) = self
                .views()
                .find(|v| v.model == action.model && v.mode == mode)
        {
            return Ok(view);
        }

        Err(ResolveError::NoViewForMode {
            action: action.id.clone(),
            mode,
        })
    }

    //
    // menu
    //

    #[must_use]
    pub const fn menu(&self) -> &MenuTree {
        &self.menu
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_schema::{
        node::{ActionDef, Document, FieldDef, LayoutNode, ModelDef, ViewDef},
        types::SemanticType,
    };

    fn registry() -> Registry {
        let doc = Document {
            models: vec![
                ModelDef::new("hosts")
                    .field(FieldDef::new("ip", SemanticType::Text))
                    .field(FieldDef::new("username", SemanticType::Text))
                    .field(FieldDef::new("vendor", SemanticType::Reference))
                    .field(FieldDef::new("owner", SemanticType::Reference)),
            ],
            views: vec![
                ViewDef {
                    id: "hosts_tree".to_string(),
                    model: "hosts".to_string(),
                    mode: ViewMode::List,
                    layout: vec![
                        LayoutNode::field("ip"),
                        LayoutNode::field("username"),
                        LayoutNode::field("vendor"),
                        LayoutNode::field("owner"),
                    ],
                },
                ViewDef {
                    id: "hosts_form".to_string(),
                    model: "hosts".to_string(),
                    mode: ViewMode::Form,
                    layout: vec![LayoutNode::field("ip")],
                },
            ],
            actions: vec![ActionDef {
                id: "act_hosts".to_string(),
                name: "Hosts".to_string(),
                model: "hosts".to_string(),
                view_sequence: vec![ViewMode::List, ViewMode::Form],
                default_views: [
                    (ViewMode::List, "hosts_tree".to_string()),
                    (ViewMode::Form, "hosts_form".to_string()),
                ]
                .into_iter()
                .collect(),
            }],
            menus: Vec::new(),
        };

        Registry::builder().document(doc).finish().unwrap()
    }

    #[test]
    fn lookup_field_returns_the_same_type_every_time() {
        let registry = registry();
        for _ in 0..3 {
            let field = registry.lookup_field("hosts", "vendor").unwrap();
            assert_eq!(field.semantic_type, SemanticType::Reference);
        }
    }

    #[test]
    fn lookup_field_rejects_unknown_names() {
        let registry = registry();
        assert_eq!(
            registry.lookup_field("hosts", "bogus").unwrap_err(),
            RegistryError::UnknownField {
                model: "hosts".to_string(),
                field: "bogus".to_string(),
            }
        );
        assert!(matches!(
            registry.lookup_field("nope", "ip").unwrap_err(),
            RegistryError::UnknownModel { .. }
        ));
    }

    #[test]
    fn pick_view_is_deterministic_with_explicit_defaults() {
        let registry = registry();
        for _ in 0..3 {
            assert_eq!(
                registry.pick_view("act_hosts", ViewMode::List).unwrap().id,
                "hosts_tree"
            );
            assert_eq!(
                registry.pick_view("act_hosts", ViewMode::Form).unwrap().id,
                "hosts_form"
            );
        }
    }

    #[test]
    fn pick_view_falls_back_to_the_first_declared_view_of_the_mode() {
        // Assembled by hand: the builder refuses an action whose sequence
        // mode has no binding, but the resolution policy itself is total.
        let mut registry = Registry::default();
        registry.models.insert(
            "hosts".to_string(),
            Model::compile(&ModelDef::new("hosts").field(FieldDef::new("ip", SemanticType::Text))),
        );

        for (id, mode) in [
            ("hosts_tree", ViewMode::List),
            ("hosts_form_a", ViewMode::Form),
            ("hosts_form_b", ViewMode::Form),
        ] {
            registry.view_order.push(id.to_string());
            registry.views.insert(
                id.to_string(),
                ViewDescriptor::compile(&ViewDef {
                    id: id.to_string(),
                    model: "hosts".to_string(),
                    mode,
                    layout: vec![LayoutNode::field("ip")],
                }),
            );
        }

        registry.actions.insert(
            "act_hosts".to_string(),
            Action {
                id: "act_hosts".to_string(),
                name: "Hosts".to_string(),
                model: "hosts".to_string(),
                view_sequence: vec![ViewMode::List, ViewMode::Form],
                default_views: [(ViewMode::List, "hosts_tree".to_string())]
                    .into_iter()
                    .collect(),
            },
        );

        // Form has no explicit binding; the first-declared form view wins.
        assert_eq!(
            registry.pick_view("act_hosts", ViewMode::Form).unwrap().id,
            "hosts_form_a"
        );
    }

    #[test]
    fn pick_view_rejects_modes_outside_the_sequence() {
        let mut registry = Registry::default();
        registry.actions.insert(
            "act_hosts".to_string(),
            Action {
                id: "act_hosts".to_string(),
                name: "Hosts".to_string(),
                model: "hosts".to_string(),
                view_sequence: vec![ViewMode::List],
                default_views: std::collections::BTreeMap::new(),
            },
        );

        assert_eq!(
            registry.pick_view("act_hosts", ViewMode::Form).unwrap_err(),
            ResolveError::NoViewForMode {
                action: "act_hosts".to_string(),
                mode: ViewMode::Form,
            }
        );
    }

    #[test]
    fn resolve_rejects_unknown_actions() {
        let registry = registry();
        assert_eq!(
            registry.resolve("act_missing").unwrap_err(),
            ResolveError::UnknownAction {
                id: "act_missing".to_string(),
            }
        );
    }
}
