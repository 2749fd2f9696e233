//! Core types and utilities for the LwM2M TLV codec
//!
//! This crate provides the fundamental value/schema/error types shared by
//! the codec. It contains no framing or encoding logic itself.

pub mod error;
pub mod kind;
pub mod model;
pub mod schema;
pub mod value;

pub use error::{TlvError, TlvResult};
pub use kind::{FrameKind, ResourceKind};
pub use model::{LwM2MObject, ObjectInstance, Resource};
pub use schema::{ObjectInstanceSchema, ObjectSchema, ResourceSchema};
pub use value::{ResourceValue, Value};
