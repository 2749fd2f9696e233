//! lwm2m-tlv - Rust codec for the OMA LwM2M TLV wire format
//!
//! This crate is a thin facade over the workspace's two member crates:
//!
//! - `tlv-core`: value/schema/error types, no codec logic
//! - `tlv-codec`: the primitive value, frame, resource, and container
//!   codecs
//!
//! # Example
//!
//! ```
//! use lwm2m_tlv::{encode_resource, decode_resource, Resource, ResourceSchema, ResourceKind, ResourceValue, Value};
//!
//! let resource = Resource::new(5850, ResourceValue::Single(Value::Bool(true)));
//! let encoded = encode_resource(&resource).unwrap();
//! assert_eq!(encoded, vec![0xE1, 0x16, 0xDA, 0x01]);
//!
//! let schema = ResourceSchema::new(5850, ResourceKind::Boolean);
//! let (decoded, size) = decode_resource(&encoded, &schema).unwrap();
//! assert_eq!(decoded, resource);
//! assert_eq!(size, encoded.len());
//! ```

pub use tlv_codec::*;
