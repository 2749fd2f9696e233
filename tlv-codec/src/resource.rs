//! Resource codec: bridges structured [`Resource`] values to the Frame
//! sequences that carry them on the wire.

use crate::frame::{decode_frame, encode_frame};
use crate::value::{decode_resource_value, encode_resource_value};
use tlv_core::{FrameKind, Resource, ResourceSchema, ResourceValue, TlvError, TlvResult, Value};

/// Encode a Resource. A scalar value produces a single RESOURCE frame;
/// an ordered sequence always produces a MULTIPLE_RESOURCE frame
/// wrapping one RESOURCE_INSTANCE sub-frame per element, regardless of
/// element count. The kind encoded is whatever the value's own variant
/// declares — on the encode side a `Value` is always self-describing,
/// unlike the raw bytes a decoder has to interpret against a schema.
pub fn encode_resource(resource: &Resource) -> TlvResult<Vec<u8>> {
    match &resource.value {
        ResourceValue::Single(value) => {
            let payload = encode_resource_value(value.kind(), value)?;
            encode_frame(FrameKind::Resource, resource.id, &payload)
        }
        ResourceValue::Instances(values) => {
            let mut inner = Vec::new();
            for (index, value) in values.iter().enumerate() {
                inner.extend(encode_resource_instance(index as u16, value)?);
            }
            encode_frame(FrameKind::MultipleResource, resource.id, &inner)
        }
    }
}

/// Encode one resource-instance sub-frame: identifier is the element's
/// 0-based position within its parent resource.
pub fn encode_resource_instance(index: u16, value: &Value) -> TlvResult<Vec<u8>> {
    let payload = encode_resource_value(value.kind(), value)?;
    encode_frame(FrameKind::ResourceInstance, index, &payload)
}

/// Decode a Resource against its schema.
///
/// Returns the decoded resource and the number of input bytes consumed.
/// The resource-instance index of a multi-instance element is the
/// element's position within the returned `Vec`, matching encounter
/// order on the wire, so re-encoding round-trips the index.
pub fn decode_resource(buf: &[u8], schema: &ResourceSchema) -> TlvResult<(Resource, usize)> {
    let frame = decode_frame(buf)?;
    if frame.id != schema.id {
        return Err(TlvError::IdentifierMismatch {
            expected: schema.id,
            found: frame.id,
        });
    }

    let value = match frame.kind {
        FrameKind::Resource => {
            ResourceValue::Single(decode_resource_value(schema.kind, frame.value)?)
        }
        FrameKind::MultipleResource => {
            ResourceValue::Instances(decode_resource_instances(frame.value, schema)?)
        }
        other => {
            return Err(TlvError::UnexpectedFrameKind {
                expected: FrameKind::Resource,
                found: other,
            })
        }
    };

    Ok((Resource::new(frame.id, value), frame.size))
}

/// Decode one resource-instance sub-frame against a parent resource's
/// schema. Used when a caller already knows it's looking at a
/// RESOURCE_INSTANCE sub-frame rather than a top-level Resource.
pub fn decode_resource_instance(buf: &[u8], schema: &ResourceSchema) -> TlvResult<(u16, Value, usize)> {
    let frame = decode_frame(buf)?;
    if frame.kind != FrameKind::ResourceInstance {
        return Err(TlvError::UnexpectedFrameKind {
            expected: FrameKind::ResourceInstance,
            found: frame.kind,
        });
    }
    let value = decode_resource_value(schema.kind, frame.value)?;
    Ok((frame.id, value, frame.size))
}

fn decode_resource_instances(payload: &[u8], schema: &ResourceSchema) -> TlvResult<Vec<Value>> {
    let mut values = Vec::new();
    let mut index = 0usize;
    while index < payload.len() {
        let (_, value, consumed) = decode_resource_instance(&payload[index..], schema)?;
        values.push(value);
        index += consumed;
    }
    Ok(values)
}
