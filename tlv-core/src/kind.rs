//! The two closed enumerations the wire format is built from: the
//! resource value kind and the frame structural kind.

use crate::error::TlvError;
use serde::{Deserialize, Serialize};

/// The scalar payload kind carried by a Resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    None,
    Boolean,
    Integer,
    Float,
    String,
    Opaque,
}

impl ResourceKind {
    /// Numeric code as used on the wire (§3 of the spec: NONE=0 .. OPAQUE=5).
    pub fn code(self) -> u8 {
        match self {
            ResourceKind::None => 0,
            ResourceKind::Boolean => 1,
            ResourceKind::Integer => 2,
            ResourceKind::Float => 3,
            ResourceKind::String => 4,
            ResourceKind::Opaque => 5,
        }
    }

    /// Recover a kind from its numeric code.
    pub fn from_code(code: u8) -> Result<Self, TlvError> {
        match code {
            0 => Ok(ResourceKind::None),
            1 => Ok(ResourceKind::Boolean),
            2 => Ok(ResourceKind::Integer),
            3 => Ok(ResourceKind::Float),
            4 => Ok(ResourceKind::String),
            5 => Ok(ResourceKind::Opaque),
            other => Err(TlvError::UnrecognizedKind(other)),
        }
    }
}

/// The 2-bit structural tag distinguishing the four frame roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameKind {
    ObjectInstance,
    ResourceInstance,
    MultipleResource,
    Resource,
}

impl FrameKind {
    /// 2-bit code occupying bits 7..6 of the type byte.
    pub fn bits(self) -> u8 {
        match self {
            FrameKind::ObjectInstance => 0b00,
            FrameKind::ResourceInstance => 0b01,
            FrameKind::MultipleResource => 0b10,
            FrameKind::Resource => 0b11,
        }
    }

    /// Recover a frame kind from its 2-bit code (0..=3, infallible).
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => FrameKind::ObjectInstance,
            0b01 => FrameKind::ResourceInstance,
            0b10 => FrameKind::MultipleResource,
            _ => FrameKind::Resource,
        }
    }
}
