//! OMA LwM2M TLV codec
//!
//! Converts structured LwM2M domain values — Objects containing Object
//! Instances containing Resources — to and from the compact
//! self-describing TLV byte representation, and back.
//!
//! The codec is a pure-function library: every operation here is
//! synchronous, allocates no process-wide state, and is safe to call
//! from any number of threads concurrently. It knows nothing about
//! transport, HTTP, notification lifecycles, or authentication —
//! those are external collaborators that produce and consume the byte
//! sequences this crate encodes and decodes.
//!
//! Data flows strictly upward on encode (value → frame → resource →
//! container) and strictly downward on decode, guided by a
//! caller-supplied schema tree ([`ResourceSchema`] /
//! [`ObjectInstanceSchema`] / [`ObjectSchema`]).

pub mod container;
pub mod frame;
pub mod resource;
pub mod value;

pub use container::{decode_object, decode_object_instance, encode_object, encode_object_instance};
pub use frame::{decode_frame, encode_frame, Frame};
pub use resource::{decode_resource, decode_resource_instance, encode_resource, encode_resource_instance};
pub use value::{decode_resource_value, encode_integer_checked, encode_resource_value};

pub use tlv_core::{
    FrameKind, LwM2MObject, ObjectInstance, ObjectInstanceSchema, ObjectSchema, Resource,
    ResourceKind, ResourceSchema, ResourceValue, TlvError, TlvResult, Value,
};
