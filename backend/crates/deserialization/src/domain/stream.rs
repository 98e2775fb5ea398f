//! Object Stream
//!
//! ## Wire format
//! | field       | size            |
//! |-------------|-----------------|
//! | magic       | 4 bytes `WGOS`  |
//! | version     | 1 byte (`1`)    |
//! | name length | u16 big-endian  |
//! | type name   | UTF-8           |
//! | body length | u32 big-endian  |
//! | body        | JSON            |
//!
//! ## Read order
//! header -> policy -> registry -> body. The body is neither sliced nor
//! decoded for a type the policy does not permit.

use super::objects::LessonObject;
use super::policy::AllowListPolicy;
use super::registry::TypeRegistry;
use crate::error::{DeserializationError, DeserializationResult};

pub const STREAM_MAGIC: &[u8; 4] = b"WGOS";
pub const STREAM_VERSION: u8 = 1;

/// Upper bound on the body length a stream may declare
pub const MAX_BODY_LEN: usize = 64 * 1024;

/// Policy-gated reader
pub struct ObjectReader<'a> {
    policy: &'a AllowListPolicy,
    registry: &'a TypeRegistry,
}

impl<'a> ObjectReader<'a> {
    pub fn new(policy: &'a AllowListPolicy, registry: &'a TypeRegistry) -> Self {
        Self { policy, registry }
    }

    /// Read exactly one object from `bytes`
    pub fn read_object(&self, bytes: &[u8]) -> DeserializationResult<LessonObject> {
        let mut cursor = Cursor::new(bytes);

        if cursor.take(STREAM_MAGIC.len())? != STREAM_MAGIC {
            return Err(malformed("bad magic"));
        }
        let version = cursor.take(1)?[0];
        if version != STREAM_VERSION {
            return Err(malformed(format!("unsupported version {version}")));
        }
        let name_len = u16::from_be_bytes(cursor.take_array()?) as usize;
        let type_name = std::str::from_utf8(cursor.take(name_len)?)
            .map_err(|_| malformed("type name is not UTF-8"))?;

        if !self.policy.permits(type_name) {
            let err = DeserializationError::Rejected {
                type_name: type_name.to_string(),
            };
            err.log();
            return Err(err);
        }

        let decoder = self.registry.decoder(type_name)?;

        let body_len = u32::from_be_bytes(cursor.take_array()?) as usize;
        if body_len > MAX_BODY_LEN {
            return Err(malformed(format!("body length {body_len} exceeds limit")));
        }
        let body = cursor.take(body_len)?;
        if !cursor.is_empty() {
            return Err(malformed("trailing bytes after object"));
        }

        decoder(body).map_err(|e| DeserializationError::InvalidBody {
            type_name: type_name.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Writer for the same format
pub struct ObjectWriter;

impl ObjectWriter {
    pub fn write_object(object: &LessonObject) -> DeserializationResult<Vec<u8>> {
        let name = object.type_name().as_bytes();
        let body = object
            .encode_body()
            .map_err(|e| DeserializationError::Encoding(e.to_string()))?;

        let name_len = u16::try_from(name.len())
            .map_err(|_| DeserializationError::Encoding("type name too long".to_string()))?;
        let body_len = u32::try_from(body.len())
            .ok()
            .filter(|len| (*len as usize) <= MAX_BODY_LEN)
            .ok_or_else(|| DeserializationError::Encoding("body too long".to_string()))?;

        let mut out = Vec::with_capacity(4 + 1 + 2 + name.len() + 4 + body.len());
        out.extend_from_slice(STREAM_MAGIC);
        out.push(STREAM_VERSION);
        out.extend_from_slice(&name_len.to_be_bytes());
        out.extend_from_slice(name);
        out.extend_from_slice(&body_len.to_be_bytes());
        out.extend_from_slice(&body);
        Ok(out)
    }
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn take(&mut self, len: usize) -> DeserializationResult<&'a [u8]> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.bytes.len())
            .ok_or_else(|| malformed("unexpected end of stream"))?;
        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn take_array<const N: usize>(&mut self) -> DeserializationResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    fn is_empty(&self) -> bool {
        self.pos == self.bytes.len()
    }
}

fn malformed(reason: impl Into<String>) -> DeserializationError {
    DeserializationError::MalformedStream(reason.into())
}
