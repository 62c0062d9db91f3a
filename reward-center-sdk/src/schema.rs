//! Static description of the binary layout of instruction arguments.
//!
//! A [`Schema`] is an ordered list of named fields.  The order of the fields is
//! the only thing determining the order of bytes in the encoded value; names
//! are used to find values and in error messages.  All the types are `const`
//! constructible so schemas live in read-only statics.

/// Wire type of a single field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Type {
    U8,
    U16,
    U32,
    U64,
    U128,
    I8,
    I16,
    I32,
    I64,
    I128,
    /// Single byte, zero or one.
    Bool,
    /// 32-byte account address.
    Pubkey,
    /// Byte array of exactly given length.
    FixedBytes(usize),
    /// Array of exactly given number of elements.  No length prefix.
    Array(&'static Type, usize),
    /// Variable-length sequence prefixed by its length as a little-endian
    /// `u32`.
    Vec(&'static Type),
    /// UTF-8 string prefixed by its length in bytes as a little-endian `u32`.
    String,
    /// Nested composite value.
    Struct(&'static Schema),
    /// Sum type encoded as a single-byte variant index followed by the fields
    /// of the chosen variant.
    Enum(&'static [Variant]),
    /// Single-byte presence flag followed by the value if present.
    Option(&'static Type),
}

/// Named field of a composite value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub ty: Type,
}

/// Ordered list of fields describing a composite value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [Field],
}

/// Variant of an enum type.  Unit variants have no fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Variant {
    pub name: &'static str,
    pub fields: &'static [Field],
}

impl Field {
    pub const fn new(name: &'static str, ty: Type) -> Self { Self { name, ty } }
}

impl Variant {
    pub const fn unit(name: &'static str) -> Self { Self { name, fields: &[] } }
}

impl Type {
    /// Returns name of the type as used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
            Self::Bool => "bool",
            Self::Pubkey => "pubkey",
            Self::FixedBytes(_) => "bytes",
            Self::Array(..) => "array",
            Self::Vec(_) => "vec",
            Self::String => "string",
            Self::Struct(schema) => schema.name,
            Self::Enum(_) => "enum",
            Self::Option(_) => "option",
        }
    }

    /// Returns width and signedness if this is an integer type.
    pub(crate) fn int_width(&self) -> Option<(usize, bool)> {
        Some(match self {
            Self::U8 => (1, false),
            Self::U16 => (2, false),
            Self::U32 => (4, false),
            Self::U64 => (8, false),
            Self::U128 => (16, false),
            Self::I8 => (1, true),
            Self::I16 => (2, true),
            Self::I32 => (4, true),
            Self::I64 => (8, true),
            Self::I128 => (16, true),
            _ => return None,
        })
    }

    /// Returns length of the encoded value if it doesn’t depend on the value.
    ///
    /// Returns `None` for variable-length sequences and strings, for options
    /// and enums whose encoded length varies with the value and for enums
    /// without any variants.
    pub fn fixed_size(&self) -> Option<usize> {
        if let Some((width, _)) = self.int_width() {
            return Some(width);
        }
        match self {
            Self::Bool => Some(1),
            Self::Pubkey => Some(32),
            Self::FixedBytes(len) => Some(*len),
            Self::Array(ty, len) => ty.fixed_size()?.checked_mul(*len),
            Self::Struct(schema) => schema.fixed_size(),
            Self::Enum(variants) => {
                let mut sizes = variants.iter().map(|v| fields_size(v.fields));
                // No variants means no value can be encoded at all.
                let first = sizes.next()??;
                sizes.all(|size| size == Some(first)).then_some(1 + first)
            }
            _ => None,
        }
    }
}

impl Schema {
    pub const fn new(name: &'static str, fields: &'static [Field]) -> Self {
        Self { name, fields }
    }

    /// Returns length of an encoded value if all fields have fixed size.
    pub fn fixed_size(&self) -> Option<usize> { fields_size(self.fields) }

    /// Looks up field by name.
    pub fn field(&self, name: &str) -> Option<&'static Field> {
        self.fields.iter().find(|field| field.name == name)
    }
}

fn fields_size(fields: &[Field]) -> Option<usize> {
    fields
        .iter()
        .try_fold(0usize, |acc, field| acc.checked_add(field.ty.fixed_size()?))
}
