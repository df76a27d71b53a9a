//! Declarative layer for Vellum: definition nodes, the vocabulary enums,
//! the document format, and the error aggregation used by load-time
//! validation.

pub mod error;
pub mod node;
pub mod types;
pub mod validate;

/// Maximum length for model identifiers.
pub const MAX_MODEL_NAME_LEN: usize = 64;

/// Maximum length for field identifiers.
pub const MAX_FIELD_NAME_LEN: usize = 64;

/// Maximum length for view, action, and menu definition ids.
pub const MAX_DEF_ID_LEN: usize = 128;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        err,
        error::ErrorTree,
        node::*,
        types::{SemanticType, ViewMode, Widget},
    };
    pub use serde::{Deserialize, Serialize};
}
