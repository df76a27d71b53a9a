use thiserror::Error as ThisError;
use vellum_schema::{error::ErrorTree, types::ViewMode, validate::IdentError};

///
/// BuildError
///
/// Fatal load-phase failure. Carries every collected validation error;
/// a registry in this state is never returned and never published.
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error("document validation failed:\n{0}")]
    Validation(ErrorTree),
}

///
/// RegistryError
///
/// Individual load-phase failures. Collected into the validation tree
/// during the build; also returned directly by registry lookups.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum RegistryError {
    #[error("duplicate action id '{id}'")]
    DuplicateActionId { id: String },

    #[error("duplicate field '{field}' on model '{model}'")]
    DuplicateField { model: String, field: String },

    #[error("duplicate menu id '{id}'")]
    DuplicateMenuId { id: String },

    #[error("duplicate model '{model}'")]
    DuplicateModel { model: String },

    #[error("duplicate view id '{id}'")]
    DuplicateViewId { id: String },

    #[error("action '{action}': view sequence is empty")]
    EmptyViewSequence { action: String },

    #[error("invalid {kind} identifier: {source}")]
    InvalidIdent { kind: &'static str, source: IdentError },

    #[error("menu cycle detected through '{id}'")]
    MenuCycle { id: String },

    #[error("action '{action}': no default view bound for mode '{mode}'")]
    MissingDefaultView { action: String, mode: ViewMode },

    #[error("unknown action '{id}'")]
    UnknownAction { id: String },

    #[error("unknown field '{field}' on model '{model}'")]
    UnknownField { model: String, field: String },

    #[error("unknown model '{model}'")]
    UnknownModel { model: String },

    #[error("menu entry '{id}' references unknown parent '{parent}'")]
    UnknownParent { id: String, parent: String },

    #[error("unknown view '{id}'")]
    UnknownView { id: String },

    #[error("action '{action}': view '{view}' is a {found} view, expected {expected}")]
    WrongMode {
        action: String,
        view: String,
        expected: ViewMode,
        found: ViewMode,
    },

    #[error("action '{action}': view '{view}' targets model '{found}', expected '{expected}'")]
    WrongModel {
        action: String,
        view: String,
        expected: String,
        found: String,
    },
}

///
/// ResolveError
///
/// Per-call action resolution failure; recoverable by the caller.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ResolveError {
    #[error("unknown action '{id}'")]
    UnknownAction { id: String },

    #[error("action '{action}' has no view for mode '{mode}'")]
    NoViewForMode { action: String, mode: ViewMode },
}

///
/// RenderError
///
/// Per-call render boundary failure. Never poisons the registry.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum RenderError {
    #[error("unknown view '{id}'")]
    UnknownView { id: String },

    #[error("record for model '{model}' is missing field '{field}' required by view '{view}'")]
    RecordShapeMismatch {
        view: String,
        model: String,
        field: String,
    },
}
