//! Staged compilation from a definition document to an immutable registry.
//!
//! Every stage collects into one [`ErrorTree`], so a failed load reports
//! the full set of configuration problems. A registry never escapes this
//! module in a partially-valid state.

use crate::{
    error::{BuildError, RegistryError},
    registry::{Action, MenuEntry, MenuTree, Model, Registry, ViewDescriptor},
};
use std::collections::{BTreeMap, BTreeSet};
use vellum_schema::{
    error::ErrorTree,
    node::{ActionDef, Document, MenuDef, ModelDef, ViewDef},
    validate::{validate_def_id, validate_field_name, validate_model_name},
};

///
/// RegistryBuilder
///
/// Accumulates definitions in any order; all resolution happens in
/// `finish`. Loading is order-independent apart from the documented
/// two-phase menu parent resolution.
///

#[derive(Debug, Default)]
pub struct RegistryBuilder {
    document: Document,
}

impl RegistryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn document(mut self, document: Document) -> Self {
        self.document.extend(document);
        self
    }

    #[must_use]
    pub fn model(mut self, def: ModelDef) -> Self {
        self.document.models.push(def);
        self
    }

    #[must_use]
    pub fn view(mut self, def: ViewDef) -> Self {
        self.document.views.push(def);
        self
    }

    #[must_use]
    pub fn action(mut self, def: ActionDef) -> Self {
        self.document.actions.push(def);
        self
    }

    #[must_use]
    pub fn menu(mut self, def: MenuDef) -> Self {
        self.document.menus.push(def);
        self
    }

    /// Compile everything. Stage order: field registry, views, actions,
    /// menu phase (a) registration, menu phase (b) parent resolution,
    /// cycle detection.
    pub fn finish(self) -> Result<Registry, BuildError> {
        let mut errs = ErrorTree::new();
        let mut registry = Registry::default();

        build_models(&mut registry, &self.document.models, &mut errs);
        build_views(&mut registry, &self.document.views, &mut errs);
        build_actions(&mut registry, &self.document.actions, &mut errs);
        build_menu(&mut registry, &self.document.menus, &mut errs);

        errs.result().map_err(BuildError::Validation)?;

        Ok(registry)
    }
}

fn build_models(registry: &mut Registry, models: &[ModelDef], errs: &mut ErrorTree) {
    for def in models {
        let route = format!("model.{}", def.name);

        if let Err(source) = validate_model_name(&def.name) {
            errs.add_at(
                route.as_str(),
                RegistryError::InvalidIdent {
                    kind: "model",
                    source,
                },
            );
        }

        if registry.models.contains_key(&def.name) {
            errs.add_at(
                route.as_str(),
                RegistryError::DuplicateModel {
                    model: def.name.clone(),
                },
            );
            continue;
        }

        let mut seen = BTreeSet::new();
        for field in &def.fields {
            if let Err(source) = validate_field_name(&field.name) {
                errs.add_at(
                    route.as_str(),
                    RegistryError::InvalidIdent {
                        kind: "field",
                        source,
                    },
                );
            }
            if !seen.insert(field.name.as_str()) {
                errs.add_at(
                    route.as_str(),
                    RegistryError::DuplicateField {
                        model: def.name.clone(),
                        field: field.name.clone(),
                    },
                );
            }
        }

        registry.models.insert(def.name.clone(), Model::compile(def));
    }
}

fn build_views(registry: &mut Registry, views: &[ViewDef], errs: &mut ErrorTree) {
    for def in views {
        let route = format!("view.{}", def.id);

        if let Err(source) = validate_def_id(&def.id) {
            errs.add_at(
                route.as_str(),
                RegistryError::InvalidIdent {
                    kind: "view",
                    source,
                },
            );
        }

        if registry.views.contains_key(&def.id) {
            errs.add_at(
                route.as_str(),
                RegistryError::DuplicateViewId { id: def.id.clone() },
            );
            continue;
        }

        let Some(model) = registry.models.get(&def.model) else {
            errs.add_at(
                route.as_str(),
                RegistryError::UnknownModel {
                    model: def.model.clone(),
                },
            );
            continue;
        };

        // Pre-order traversal; the first unresolved reference wins so
        // error messages are reproducible.
        if let Some(bad) = def.field_refs().find(|name| !model.fields.contains(name)) {
            errs.add_at(
                route.as_str(),
                RegistryError::UnknownField {
                    model: def.model.clone(),
                    field: bad.to_string(),
                },
            );
            continue;
        }

        registry.view_order.push(def.id.clone());
        registry
            .views
            .insert(def.id.clone(), ViewDescriptor::compile(def));
    }
}

fn build_actions(registry: &mut Registry, actions: &[ActionDef], errs: &mut ErrorTree) {
    for def in actions {
        let route = format!("action.{}", def.id);
        let before = errs.len();

        if let Err(source) = validate_def_id(&def.id) {
            errs.add_at(
                route.as_str(),
                RegistryError::InvalidIdent {
                    kind: "action",
                    source,
                },
            );
        }

        if registry.actions.contains_key(&def.id) {
            errs.add_at(
                route.as_str(),
                RegistryError::DuplicateActionId { id: def.id.clone() },
            );
            continue;
        }

        if !registry.models.contains_key(&def.model) {
            errs.add_at(
                route.as_str(),
                RegistryError::UnknownModel {
                    model: def.model.clone(),
                },
            );
        }

        if def.view_sequence.is_empty() {
            errs.add_at(
                route.as_str(),
                RegistryError::EmptyViewSequence {
                    action: def.id.clone(),
                },
            );
        }

        // Every declared binding must point at a registered view of the
        // action's model and the bound mode.
        for (&mode, view_id) in &def.default_views {
            match registry.views.get(view_id) {
                None => errs.add_at(
                    route.as_str(),
                    RegistryError::UnknownView {
                        id: view_id.clone(),
                    },
                ),
                Some(view) => {
                    if view.model != def.model {
                        errs.add_at(
                            route.as_str(),
                            RegistryError::WrongModel {
                                action: def.id.clone(),
                                view: view_id.clone(),
                                expected: def.model.clone(),
                                found: view.model.clone(),
                            },
                        );
                    }
                    if view.mode != mode {
                        errs.add_at(
                            route.as_str(),
                            RegistryError::WrongMode {
                                action: def.id.clone(),
                                view: view_id.clone(),
                                expected: mode,
                                found: view.mode,
                            },
                        );
                    }
                }
            }
        }

        // Every mode in the sequence must be served by a binding.
        let mut checked = BTreeSet::new();
        for &mode in &def.view_sequence {
            if checked.insert(mode) && !def.default_views.contains_key(&mode) {
                errs.add_at(
                    route.as_str(),
                    RegistryError::MissingDefaultView {
                        action: def.id.clone(),
                        mode,
                    },
                );
            }
        }

        if errs.len() == before {
            registry.actions.insert(def.id.clone(), Action::compile(def));
        }
    }
}

fn build_menu(registry: &mut Registry, menus: &[MenuDef], errs: &mut ErrorTree) {
    // Phase (a): register every entry. Definitions may arrive in any
    // order, so parent links are not touched yet.
    let mut tree = MenuTree::default();
    for (order, def) in menus.iter().enumerate() {
        let route = format!("menu.{}", def.id);

        if let Err(source) = validate_def_id(&def.id) {
            errs.add_at(
                route.as_str(),
                RegistryError::InvalidIdent {
                    kind: "menu",
                    source,
                },
            );
        }

        if tree.contains(&def.id) {
            errs.add_at(
                route.as_str(),
                RegistryError::DuplicateMenuId { id: def.id.clone() },
            );
            continue;
        }

        if let Some(action) = &def.action
            && !registry.actions.contains_key(action)
        {
            errs.add_at(
                route.as_str(),
                RegistryError::UnknownAction { id: action.clone() },
            );
        }

        tree.push(MenuEntry::compile(def, order));
    }

    // Phase (b): every entry is present, so any still-unresolved parent
    // is a genuine dangling reference.
    for entry in tree.iter() {
        if let Some(parent) = entry.parent.as_deref()
            && !tree.contains(parent)
        {
            errs.add_at(
                format!("menu.{}", entry.id),
                RegistryError::UnknownParent {
                    id: entry.id.clone(),
                    parent: parent.to_string(),
                },
            );
        }
    }

    // The graph is unsound beyond the first cycle, so stop at one.
    if let Some(id) = find_cycle(&tree) {
        errs.add_at(format!("menu.{id}"), RegistryError::MenuCycle { id });
    }

    registry.menu = tree;
}

// Follow parent chains with a three-state marking; revisiting an entry on
// the chain currently being walked is a cycle.
fn find_cycle(tree: &MenuTree) -> Option<String> {
    const UNSEEN: u8 = 0;
    const ON_CHAIN: u8 = 1;
    const CLEARED: u8 = 2;

    let entries: Vec<&MenuEntry> = tree.iter().collect();
    let index: BTreeMap<&str, usize> = entries
        .iter()
        .enumerate()
        .map(|(i, e)| (e.id.as_str(), i))
        .collect();
    let mut state = vec![UNSEEN; entries.len()];

    for start in 0..entries.len() {
        if state[start] != UNSEEN {
            continue;
        }

        let mut chain = Vec::new();
        let mut cur = start;
        loop {
            match state[cur] {
                CLEARED => break,
                ON_CHAIN => return Some(entries[cur].id.clone()),
                _ => {}
            }
            state[cur] = ON_CHAIN;
            chain.push(cur);

            // Dangling parents were already reported in phase (b).
            let Some(next) = entries[cur]
                .parent
                .as_deref()
                .and_then(|p| index.get(p).copied())
            else {
                break;
            };
            cur = next;
        }

        for i in chain {
            state[i] = CLEARED;
        }
    }

    None
}

///
/// TESTS
///
