//! The boundary to the host rendering layer.
//!
//! This core validates shapes and resolves descriptors; producing actual
//! UI output is the host framework's job. Render failures are per-call
//! and recoverable; they never invalidate the registry.

use crate::{
    error::RenderError,
    registry::{Registry, ViewDescriptor},
};
use serde::Serialize;
use std::{collections::BTreeMap, slice};

///
/// Value
///
/// Minimal cell vocabulary crossing the record-store boundary.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Value {
    Null,
    Text(String),
    Int(i64),
    Reference { model: String, id: String },
    Timestamp(i64),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }
}

///
/// Record
///
/// Point-in-time snapshot of one record, supplied by the external store.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Record {
    pub model: String,
    pub values: BTreeMap<String, Value>,
}

impl Record {
    #[must_use]
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            values: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: Value) -> Self {
        self.values.insert(field.into(), value);
        self
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }
}

///
/// RenderSource
///
/// One record or a record set, as handed to a renderer.
///

#[derive(Clone, Copy, Debug)]
pub enum RenderSource<'a> {
    Record(&'a Record),
    RecordSet(&'a [Record]),
}

impl<'a> RenderSource<'a> {
    pub fn iter(&self) -> slice::Iter<'a, Record> {
        match self {
            Self::Record(record) => slice::from_ref(*record).iter(),
            Self::RecordSet(records) => records.iter(),
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::Record(_) => 1,
            Self::RecordSet(records) => records.len(),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

///
/// Renderer
///
/// Implemented by the host rendering layer; this core only defines the
/// contract and the shape checks every implementation shares.
///

pub trait Renderer {
    type Output;

    fn render(
        &self,
        registry: &Registry,
        view_id: &str,
        source: RenderSource<'_>,
    ) -> Result<Self::Output, RenderError>;
}

/// Resolve a view and check every supplied record against its shape.
/// The standard first step of any renderer implementation.
pub fn prepare<'r>(
    registry: &'r Registry,
    view_id: &str,
    source: RenderSource<'_>,
) -> Result<&'r ViewDescriptor, RenderError> {
    let view = registry.view(view_id)?;
    for record in source.iter() {
        view.check_record(record)?;
    }

    Ok(view)
}

///
/// TESTS
///
