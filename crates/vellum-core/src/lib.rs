//! Core runtime for Vellum: the compiled registry, action resolution,
//! menu traversal, the render/record-store boundary, and one-way
//! snapshot publication.

pub mod build;
pub mod error;
pub mod publish;
pub mod registry;
pub mod render;
pub mod report;
pub mod store;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        build::RegistryBuilder,
        error::{BuildError, RegistryError, RenderError, ResolveError},
        registry::{Action, Field, FieldTable, MenuEntry, MenuTree, Model, Registry, ViewDescriptor},
        render::{Record, RenderSource, Renderer, Value},
        report::{LoadReport, load_report},
        store::{Filter, RecordStore},
    };
    pub use vellum_schema::types::{SemanticType, ViewMode, Widget};
}
