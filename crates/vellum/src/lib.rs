//! Vellum — a model-driven CRUD view-descriptor registry.
//!
//! Declarative model, view, action, and menu definitions load once from a
//! document, compile into an immutable [`Registry`], and serve unlimited
//! concurrent readers for the life of the process. The actual rendering
//! and record storage live in the host framework; this crate owns the
//! descriptor table between them.
//!
//! ## Crate layout
//! - `schema`: definition nodes, vocabulary enums, the document format.
//! - `core`: the compiled registry, resolution, menu traversal, and the
//!   render/record-store boundary.

pub use vellum_core as core;
pub use vellum_schema as schema;

use std::sync::Arc;
use thiserror::Error as ThisError;
use vellum_core::{publish, registry::Registry};
use vellum_schema::node::Document;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Build(#[from] vellum_core::error::BuildError),

    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Render(#[from] vellum_core::error::RenderError),

    #[error(transparent)]
    Resolve(#[from] vellum_core::error::ResolveError),
}

/// Parse a JSON definition document and compile it into a registry.
/// All load-phase failures are collected and reported together.
pub fn load_json(json: &str) -> Result<Registry, Error> {
    let document: Document = serde_json::from_str(json)?;
    let registry = Registry::builder().document(document).finish()?;

    Ok(registry)
}

/// Load, compile, and publish in one step. Nothing is published unless
/// the whole document validates.
pub fn load_and_publish(json: &str) -> Result<Arc<Registry>, Error> {
    Ok(publish::publish(load_json(json)?))
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{Error, load_and_publish, load_json};
    pub use vellum_core::prelude::*;
    pub use vellum_schema::prelude::*;
}
