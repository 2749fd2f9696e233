//! Decoder-side schema: an immutable value tree describing the
//! identifiers and kinds a caller expects on the wire.
//!
//! Schemas derive `Serialize`/`Deserialize` so a caller may keep a
//! device's object schema as a JSON or TOML fixture alongside its
//! configuration rather than constructing it in code, the way
//! `ObisCode` round-trips through serde in the workspace this crate was
//! split out of.

use crate::kind::ResourceKind;
use serde::{Deserialize, Serialize};

/// Schema for a single Resource: its identifier and declared kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSchema {
    pub id: u16,
    pub kind: ResourceKind,
}

impl ResourceSchema {
    pub fn new(id: u16, kind: ResourceKind) -> Self {
        Self { id, kind }
    }
}

/// Schema for an Object Instance: its identifier and the schemas of its
/// children, held by value and looked up by identifier during decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectInstanceSchema {
    pub id: u16,
    pub resources: Vec<ResourceSchema>,
}

impl ObjectInstanceSchema {
    pub fn new(id: u16, resources: Vec<ResourceSchema>) -> Self {
        Self { id, resources }
    }

    /// Find the resource schema matching a wire identifier.
    pub fn resource(&self, id: u16) -> Option<&ResourceSchema> {
        self.resources.iter().find(|r| r.id == id)
    }
}

/// Schema for an Object: its identifier and the schemas of its
/// instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectSchema {
    pub id: u16,
    pub instances: Vec<ObjectInstanceSchema>,
}

impl ObjectSchema {
    pub fn new(id: u16, instances: Vec<ObjectInstanceSchema>) -> Self {
        Self { id, instances }
    }

    /// Find the object-instance schema matching a wire identifier.
    pub fn instance(&self, id: u16) -> Option<&ObjectInstanceSchema> {
        self.instances.iter().find(|i| i.id == id)
    }
}
