//! Container codec: Object Instances (sequences of Resources) and
//! Objects (sequences of Object Instances).

use crate::frame::{decode_frame, encode_frame};
use crate::resource::{decode_resource, encode_resource};
use tlv_core::{
    FrameKind, LwM2MObject, ObjectInstance, ObjectInstanceSchema, ObjectSchema, TlvError,
    TlvResult,
};

/// Encode an Object Instance: concatenate its children's resource
/// frames in declaration order, then wrap in one OBJECT_INSTANCE frame.
pub fn encode_object_instance(instance: &ObjectInstance) -> TlvResult<Vec<u8>> {
    let mut payload = Vec::new();
    for resource in &instance.resources {
        payload.extend(encode_resource(resource)?);
    }
    encode_frame(FrameKind::ObjectInstance, instance.id, &payload)
}

/// Encode an Object: the concatenation of its object-instance frames,
/// in declaration order. An Object has no wrapper frame of its own.
pub fn encode_object(object: &LwM2MObject) -> TlvResult<Vec<u8>> {
    let mut out = Vec::new();
    for instance in &object.instances {
        out.extend(encode_object_instance(instance)?);
    }
    Ok(out)
}

/// Decode an Object Instance against its schema.
///
/// Walks the frame's payload, peeking each child's identifier to find
/// its resource schema before decoding it, and advances by the exact
/// number of bytes the resource decoder consumed.
pub fn decode_object_instance(
    buf: &[u8],
    schema: &ObjectInstanceSchema,
) -> TlvResult<(ObjectInstance, usize)> {
    let frame = decode_frame(buf)?;
    if frame.kind != FrameKind::ObjectInstance {
        return Err(TlvError::UnexpectedFrameKind {
            expected: FrameKind::ObjectInstance,
            found: frame.kind,
        });
    }

    let mut resources = Vec::new();
    let mut index = 0usize;
    while index < frame.value.len() {
        let remaining = &frame.value[index..];
        let peeked = decode_frame(remaining)?;
        let resource_schema = schema
            .resource(peeked.id)
            .ok_or(TlvError::UnknownIdentifier(peeked.id))?;
        let (resource, consumed) = decode_resource(remaining, resource_schema)?;
        resources.push(resource);
        index += consumed;
    }

    Ok((ObjectInstance::new(frame.id, resources), frame.size))
}

/// Decode an Object against its schema.
///
/// Walks the input by peeking each object-instance identifier and
/// looking up its schema, continuing until the input is exhausted.
pub fn decode_object(buf: &[u8], schema: &ObjectSchema) -> TlvResult<LwM2MObject> {
    let mut instances = Vec::new();
    let mut index = 0usize;
    while index < buf.len() {
        let remaining = &buf[index..];
        let peeked = decode_frame(remaining)?;
        let instance_schema = schema
            .instance(peeked.id)
            .ok_or(TlvError::UnknownIdentifier(peeked.id))?;
        let (instance, consumed) = decode_object_instance(remaining, instance_schema)?;
        instances.push(instance);
        index += consumed;
    }
    Ok(LwM2MObject::new(schema.id, instances))
}
