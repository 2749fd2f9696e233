//! Primitive value codec: encode/decode one resource value given its
//! declared [`ResourceKind`], independent of frame layout.

use tlv_core::{ResourceKind, TlvError, TlvResult, Value};

const MIN_I8: i32 = i8::MIN as i32;
const MAX_I8: i32 = i8::MAX as i32;
const MIN_I16: i32 = i16::MIN as i32;
const MAX_I16: i32 = i16::MAX as i32;

/// Encode a resource value for its declared kind.
///
/// NONE always encodes to an empty byte sequence regardless of the
/// value supplied. Integers pack to the minimum width that holds them
/// in two's complement (1, 2, or 4 bytes); range checks are inclusive
/// and performed before packing, never by truncating.
pub fn encode_resource_value(kind: ResourceKind, value: &Value) -> TlvResult<Vec<u8>> {
    match kind {
        ResourceKind::None => Ok(Vec::new()),
        ResourceKind::Boolean => Ok(vec![if value.as_bool()? { 0x01 } else { 0x00 }]),
        ResourceKind::Integer => Ok(encode_integer(value.as_int()?)),
        ResourceKind::Float => Ok((value.as_float()? as f32).to_bits().to_be_bytes().to_vec()),
        ResourceKind::String => Ok(value.as_str()?.as_bytes().to_vec()),
        ResourceKind::Opaque => Ok(value.as_opaque()?.to_vec()),
    }
}

/// Width-minimizing two's complement big-endian integer encode.
///
/// Values outside the 32-bit signed range are a [`TlvError::ValueTooLarge`]
/// at the call site that validates the domain `i32` — this helper only
/// ever sees values already in range.
fn encode_integer(value: i32) -> Vec<u8> {
    if (MIN_I8..=MAX_I8).contains(&value) {
        vec![value as i8 as u8]
    } else if (MIN_I16..=MAX_I16).contains(&value) {
        (value as i16).to_be_bytes().to_vec()
    } else {
        value.to_be_bytes().to_vec()
    }
}

/// Decode a resource value given its declared kind.
pub fn decode_resource_value(kind: ResourceKind, bytes: &[u8]) -> TlvResult<Value> {
    match kind {
        ResourceKind::None => Ok(Value::None),
        ResourceKind::Boolean => Ok(Value::Bool(bytes.iter().any(|&b| b != 0))),
        ResourceKind::Integer => decode_integer(bytes).map(Value::Int),
        ResourceKind::Float => decode_float(bytes).map(Value::Float),
        ResourceKind::String => std::str::from_utf8(bytes)
            .map(|s| Value::Str(s.to_string()))
            .map_err(|_| TlvError::TypeMismatch("invalid UTF-8 in STRING payload".to_string())),
        ResourceKind::Opaque => Ok(Value::Opaque(bytes.to_vec())),
    }
}

fn decode_integer(bytes: &[u8]) -> TlvResult<i32> {
    match bytes.len() {
        0 => Ok(0),
        1 => Ok(bytes[0] as i8 as i32),
        2 => Ok(i16::from_be_bytes([bytes[0], bytes[1]]) as i32),
        4 => Ok(i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])),
        other => Err(TlvError::InvalidLength(other)),
    }
}

fn decode_float(bytes: &[u8]) -> TlvResult<f64> {
    match bytes.len() {
        4 => {
            let bits = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
            Ok(f32::from_bits(bits) as f64)
        }
        8 => {
            let bits = u64::from_be_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
            ]);
            Ok(f64::from_bits(bits))
        }
        other => Err(TlvError::InvalidLength(other)),
    }
}

/// Encode a 32-bit-range integer, rejecting values no `i32` can hold.
///
/// Callers working from a wider native integer type go through this
/// instead of [`encode_resource_value`] so the out-of-range case is a
/// `ValueTooLarge` rather than a silent truncation.
pub fn encode_integer_checked(value: i64) -> TlvResult<Vec<u8>> {
    if value < i32::MIN as i64 || value > i32::MAX as i64 {
        return Err(TlvError::ValueTooLarge(format!(
            "{value} is outside the 32-bit signed range; 64-bit integers are not supported"
        )));
    }
    Ok(encode_integer(value as i32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_always_encodes_empty() {
        assert_eq!(
            encode_resource_value(ResourceKind::None, &Value::Int(42)).unwrap(),
            Vec::<u8>::new()
        );
    }

    #[test]
    fn boolean_encodes_to_one_byte() {
        assert_eq!(
            encode_resource_value(ResourceKind::Boolean, &Value::Bool(true)).unwrap(),
            vec![0x01]
        );
        assert_eq!(
            encode_resource_value(ResourceKind::Boolean, &Value::Bool(false)).unwrap(),
            vec![0x00]
        );
    }

    #[test]
    fn boolean_decode_empty_input_is_false() {
        assert_eq!(
            decode_resource_value(ResourceKind::Boolean, &[]).unwrap(),
            Value::Bool(false)
        );
    }

    #[test]
    fn integer_width_boundaries() {
        let cases: &[(i32, usize)] = &[
            (127, 1),
            (128, 2),
            (-128, 1),
            (-129, 2),
            (32_767, 2),
            (32_768, 4),
            (-32_768, 2),
            (-32_769, 4),
            (i32::MAX, 4),
            (i32::MIN, 4),
        ];
        for &(value, width) in cases {
            let encoded =
                encode_resource_value(ResourceKind::Integer, &Value::Int(value)).unwrap();
            assert_eq!(encoded.len(), width, "value {value} encoded width");
            assert_eq!(
                decode_resource_value(ResourceKind::Integer, &encoded).unwrap(),
                Value::Int(value)
            );
        }
    }

    #[test]
    fn integer_decode_empty_buffer_is_zero() {
        assert_eq!(
            decode_resource_value(ResourceKind::Integer, &[]).unwrap(),
            Value::Int(0)
        );
    }

    #[test]
    fn integer_decode_rejects_invalid_length() {
        assert_eq!(
            decode_resource_value(ResourceKind::Integer, &[0, 0, 0]),
            Err(TlvError::InvalidLength(3))
        );
    }

    #[test]
    fn out_of_range_integer_is_rejected() {
        assert!(matches!(
            encode_integer_checked(1 << 40),
            Err(TlvError::ValueTooLarge(_))
        ));
    }

    #[test]
    fn float_1_23_encodes_to_exact_single_precision_bytes() {
        let encoded = encode_resource_value(ResourceKind::Float, &Value::Float(1.23)).unwrap();
        assert_eq!(encoded, vec![0x3F, 0x9D, 0x70, 0xA4]);
    }

    #[test]
    fn float_decode_promotes_double_to_f64() {
        let bytes = [0x3F, 0xF3, 0xAE, 0x14, 0x7A, 0xE1, 0x47, 0xAE];
        let decoded = decode_resource_value(ResourceKind::Float, &bytes).unwrap();
        match decoded {
            Value::Float(f) => assert!((f - 1.23).abs() < 1e-9),
            other => panic!("expected Float, got {other:?}"),
        }
    }

    #[test]
    fn float_decode_rejects_invalid_length() {
        assert_eq!(
            decode_resource_value(ResourceKind::Float, &[0, 0, 0]),
            Err(TlvError::InvalidLength(3))
        );
    }

    #[test]
    fn string_round_trips_as_utf8() {
        let encoded =
            encode_resource_value(ResourceKind::String, &Value::Str("device".to_string()))
                .unwrap();
        assert_eq!(encoded, b"device");
        assert_eq!(
            decode_resource_value(ResourceKind::String, &encoded).unwrap(),
            Value::Str("device".to_string())
        );
    }

    #[test]
    fn opaque_passes_through_unchanged() {
        let bytes = vec![0xDE, 0xAD, 0xBE, 0xEF];
        let encoded =
            encode_resource_value(ResourceKind::Opaque, &Value::Opaque(bytes.clone())).unwrap();
        assert_eq!(encoded, bytes);
        assert_eq!(
            decode_resource_value(ResourceKind::Opaque, &encoded).unwrap(),
            Value::Opaque(bytes)
        );
    }

    #[test]
    fn mismatched_native_type_is_rejected() {
        assert!(matches!(
            encode_resource_value(ResourceKind::Boolean, &Value::Int(1)),
            Err(TlvError::TypeMismatch(_))
        ));
    }
}
