//! Schema-driven binary encoder for instruction arguments.
//!
//! The layout is what the on-chain program expects: fields are concatenated in
//! schema order, integers are little-endian and use exactly the declared width,
//! there is no padding and no alignment.  Length prefixes exist only where the
//! schema declares a variable-length [`Type::Vec`] or [`Type::String`].
//!
//! Encoding is all-or-nothing.  If any field fails validation an error is
//! returned and no bytes are produced.

use crate::error::{Error, Path, Result};
use crate::schema::{Field, Schema, Type, Variant};
use crate::value::{Struct, Value};

/// Eight-byte opcode identifying an instruction of the remote program.
///
/// Every instruction payload starts with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Discriminator(pub [u8; Discriminator::LEN]);

impl Discriminator {
    pub const LEN: usize = 8;

    pub const fn new(bytes: [u8; Self::LEN]) -> Self { Self(bytes) }

    pub fn as_bytes(&self) -> &[u8; Self::LEN] { &self.0 }
}

impl core::fmt::Display for Discriminator {
    fn fmt(&self, fmtr: &mut core::fmt::Formatter) -> core::fmt::Result {
        self.0.iter().try_for_each(|byte| write!(fmtr, "{byte:02x}"))
    }
}


/// Encodes `value` according to `schema`.
///
/// Fails with [`Error::SchemaMismatch`] if the value is missing a field, has
/// a field the schema doesn’t declare, has a value of a wrong kind or a fixed
/// array of a wrong length.  Fails with [`Error::OutOfRange`] if an integer
/// doesn’t fit the declared width.
pub fn encode(schema: &Schema, value: &Struct) -> Result<Vec<u8>> {
    let mut enc = Encoder::with_capacity(schema.fixed_size().unwrap_or(0));
    enc.fields(&Path::Root(schema.name), schema.fields, value)?;
    log::trace!("encoded {}: {} bytes", schema.name, enc.buf.len());
    Ok(enc.buf)
}

/// Encodes instruction data, i.e. discriminator followed by the arguments.
///
/// The result is `discriminator ++ encode(schema, args)`.
pub fn encode_instruction_data(
    discriminator: &Discriminator,
    schema: &Schema,
    args: &Struct,
) -> Result<Vec<u8>> {
    let size = Discriminator::LEN + schema.fixed_size().unwrap_or(0);
    let mut enc = Encoder::with_capacity(size);
    enc.buf.extend_from_slice(discriminator.as_bytes());
    enc.fields(&Path::Root(schema.name), schema.fields, args)?;
    log::trace!(
        "encoded {} instruction data: {} bytes",
        schema.name,
        enc.buf.len()
    );
    Ok(enc.buf)
}


struct Encoder {
    buf: Vec<u8>,
}

impl Encoder {
    fn with_capacity(capacity: usize) -> Self {
        Self { buf: Vec::with_capacity(capacity) }
    }

    fn fields(
        &mut self,
        path: &Path<'_>,
        fields: &[Field],
        value: &Struct,
    ) -> Result {
        if let Some(name) =
            value.names().find(|name| !fields.iter().any(|f| f.name == *name))
        {
            return Err(Error::mismatch(&path.field(name), "unexpected field"));
        }
        for field in fields {
            let path = path.field(field.name);
            let value = value
                .get(field.name)
                .ok_or_else(|| Error::mismatch(&path, "missing field"))?;
            self.value(&path, &field.ty, value)?;
        }
        Ok(())
    }

    fn value(&mut self, path: &Path<'_>, ty: &Type, value: &Value) -> Result {
        if let Some((width, signed)) = ty.int_width() {
            return self.int(path, ty, width, signed, value);
        }
        match (ty, value) {
            (Type::Bool, Value::Bool(value)) => self.buf.push(u8::from(*value)),
            (Type::Pubkey, Value::Pubkey(key)) => {
                self.buf.extend_from_slice(key.as_ref())
            }
            (Type::Pubkey, Value::Bytes(bytes)) => self.bytes(path, 32, bytes)?,
            (Type::FixedBytes(len), Value::Bytes(bytes)) => {
                self.bytes(path, *len, bytes)?
            }
            (Type::Array(Type::U8, len), Value::Bytes(bytes)) => {
                self.bytes(path, *len, bytes)?
            }
            (Type::Array(ty, len), Value::List(items)) => {
                if items.len() != *len {
                    return Err(Error::mismatch(
                        path,
                        format!("expected {len} elements, got {}", items.len()),
                    ));
                }
                self.items(path, ty, items)?;
            }
            (Type::Vec(Type::U8), Value::Bytes(bytes)) => {
                self.len_prefix(path, bytes.len())?;
                self.buf.extend_from_slice(bytes);
            }
            (Type::Vec(ty), Value::List(items)) => {
                self.len_prefix(path, items.len())?;
                self.items(path, ty, items)?;
            }
            (Type::String, Value::String(value)) => {
                self.len_prefix(path, value.len())?;
                self.buf.extend_from_slice(value.as_bytes());
            }
            (Type::Struct(schema), Value::Struct(value)) => {
                self.fields(path, schema.fields, value)?
            }
            (Type::Enum(variants), Value::Variant(name, fields)) => {
                self.variant(path, variants, name, fields)?
            }
            (Type::Option(_), Value::Option(None)) => self.buf.push(0),
            (Type::Option(ty), Value::Option(Some(value))) => {
                self.buf.push(1);
                self.value(path, ty, value)?;
            }
            (ty, value) => {
                return Err(Error::mismatch(
                    path,
                    format!("expected {}, got {}", ty.name(), value.kind()),
                ))
            }
        }
        Ok(())
    }

    /// Emits integer using exactly `width` little-endian bytes.
    fn int(
        &mut self,
        path: &Path<'_>,
        ty: &Type,
        width: usize,
        signed: bool,
        value: &Value,
    ) -> Result {
        let bits = width * 8;
        let bytes = match (signed, value) {
            (false, Value::Uint(value)) => {
                let value = *value;
                (bits >= 128 || value >> bits == 0).then(|| value.to_le_bytes())
            }
            (false, Value::Int(value)) => u128::try_from(*value)
                .ok()
                .filter(|value| bits >= 128 || value >> bits == 0)
                .map(u128::to_le_bytes),
            (true, Value::Int(value)) => {
                Some(*value).filter(|v| fits_signed(*v, bits)).map(i128::to_le_bytes)
            }
            (true, Value::Uint(value)) => i128::try_from(*value)
                .ok()
                .filter(|v| fits_signed(*v, bits))
                .map(i128::to_le_bytes),
            (_, value) => {
                return Err(Error::mismatch(
                    path,
                    format!("expected {}, got {}", ty.name(), value.kind()),
                ))
            }
        };
        let bytes = bytes.ok_or_else(|| Error::range(path, ty.name()))?;
        self.buf.extend_from_slice(&bytes[..width]);
        Ok(())
    }

    fn bytes(&mut self, path: &Path<'_>, len: usize, bytes: &[u8]) -> Result {
        if bytes.len() != len {
            return Err(Error::mismatch(
                path,
                format!("expected {len} bytes, got {}", bytes.len()),
            ));
        }
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    fn items(&mut self, path: &Path<'_>, ty: &Type, items: &[Value]) -> Result {
        items
            .iter()
            .enumerate()
            .try_for_each(|(index, item)| self.value(&path.index(index), ty, item))
    }

    /// Emits the `u32` length prefix of a variable-length sequence.
    fn len_prefix(&mut self, path: &Path<'_>, len: usize) -> Result {
        let len = u32::try_from(len).map_err(|_| Error::range(path, "u32"))?;
        self.buf.extend_from_slice(&len.to_le_bytes());
        Ok(())
    }

    fn variant(
        &mut self,
        path: &Path<'_>,
        variants: &[Variant],
        name: &str,
        fields: &Struct,
    ) -> Result {
        let (index, variant) = variants
            .iter()
            .enumerate()
            .find(|(_, variant)| variant.name == name)
            .ok_or_else(|| {
                Error::mismatch(path, format!("unknown variant {name}"))
            })?;
        let tag = u8::try_from(index).map_err(|_| Error::range(path, "u8"))?;
        self.buf.push(tag);
        self.fields(&path.field(variant.name), variant.fields, fields)
    }
}

/// Checks whether `value` fits in a signed integer of given bit width.
fn fits_signed(value: i128, bits: usize) -> bool {
    if bits >= 128 {
        return true;
    }
    let half = 1i128 << (bits - 1);
    (-half..half).contains(&value)
}
