//! Definition nodes as they appear in a document, before compilation.

mod action;
mod document;
mod field;
mod menu;
mod model;
mod view;

pub use action::ActionDef;
pub use document::Document;
pub use field::FieldDef;
pub use menu::MenuDef;
pub use model::ModelDef;
pub use view::{FieldRefs, LayoutNode, ViewDef};
