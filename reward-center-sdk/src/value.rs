//! Runtime argument values encoded against a [`Schema`](crate::schema::Schema).

use solana_program::pubkey::Pubkey;

/// Argument value.
///
/// Integers are held in the widest representation and are range-checked
/// against the declared width only when encoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Uint(u128),
    Int(i128),
    Bool(bool),
    Pubkey(Pubkey),
    Bytes(Vec<u8>),
    String(String),
    List(Vec<Value>),
    Struct(Struct),
    /// Enum variant chosen by name with the variant’s fields.  Unit variants
    /// use an empty struct.
    Variant(&'static str, Struct),
    Option(Option<Box<Value>>),
}

/// Composite value made of named fields.
///
/// Order of the fields doesn’t matter; the encoder follows order of the schema.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Struct(Vec<(&'static str, Value)>);

impl Struct {
    pub fn new() -> Self { Self::default() }

    /// Adds a field to the struct and returns it.  If field with the same
    /// name already exists, it is replaced.
    pub fn with(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        let value = value.into();
        match self.0.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.iter().find(|(key, _)| *key == name).map(|(_, value)| value)
    }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(name, _)| *name)
    }
}

impl Value {
    /// Constructs a unit enum variant.
    pub fn unit(name: &'static str) -> Self { Self::Variant(name, Struct::new()) }

    /// Returns short description of the kind of the value for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Uint(_) => "unsigned integer",
            Self::Int(_) => "signed integer",
            Self::Bool(_) => "bool",
            Self::Pubkey(_) => "pubkey",
            Self::Bytes(_) => "bytes",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Struct(_) => "struct",
            Self::Variant(..) => "variant",
            Self::Option(_) => "option",
        }
    }
}


/// Conversion of typed argument structures into [`Value`].
///
/// Implemented by the generated argument types so that typed builders go
/// through the same schema encoder as dynamically constructed values.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

macro_rules! impl_from_int {
    ($variant:ident: $($ty:ty),*) => {$(
        impl From<$ty> for Value {
            fn from(value: $ty) -> Self { Self::$variant(value.into()) }
        }
    )*};
}

impl_from_int!(Uint: u8, u16, u32, u64, u128);
impl_from_int!(Int: i8, i16, i32, i64, i128);

impl From<bool> for Value {
    fn from(value: bool) -> Self { Self::Bool(value) }
}

impl From<Pubkey> for Value {
    fn from(value: Pubkey) -> Self { Self::Pubkey(value) }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self { Self::Bytes(value) }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self { Self::Bytes(value.to_vec()) }
}

impl<const N: usize> From<[u8; N]> for Value {
    fn from(value: [u8; N]) -> Self { Self::Bytes(value.to_vec()) }
}

impl From<String> for Value {
    fn from(value: String) -> Self { Self::String(value) }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self { Self::String(value.into()) }
}

impl From<Struct> for Value {
    fn from(value: Struct) -> Self { Self::Struct(value) }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        Self::Option(value.map(|value| Box::new(value.into())))
    }
}

macro_rules! impl_to_value {
    ($($ty:ty),*) => {$(
        impl ToValue for $ty {
            fn to_value(&self) -> Value { self.clone().into() }
        }
    )*};
}

impl_to_value!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);
impl_to_value!(bool, Pubkey, String, Vec<u8>);

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        Value::Option(self.as_ref().map(|value| Box::new(value.to_value())))
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_struct_with_replaces() {
        let value = Struct::new().with("a", 1u8).with("b", true).with("a", 2u16);
        assert_eq!(2, value.len());
        assert_eq!(Some(&Value::Uint(2)), value.get("a"));
        assert_eq!(Some(&Value::Bool(true)), value.get("b"));
        assert_eq!(None, value.get("c"));
        assert_eq!(vec!["a", "b"], value.names().collect::<Vec<_>>());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Value::Int(-5), Value::from(-5i32));
        assert_eq!(Value::Uint(u128::from(u64::MAX)), Value::from(u64::MAX));
        assert_eq!(Value::Bytes(vec![1, 2, 3, 4]), Value::from([1u8, 2, 3, 4]));
        assert_eq!(Value::String("memo".into()), Value::from("memo"));
        assert_eq!(Value::Option(None), Value::from(None::<u8>));
        assert_eq!(
            Value::Option(Some(Box::new(Value::Uint(7)))),
            Value::from(Some(7u64))
        );
    }
}
