//! Dynamically typed argument values.

use solana_sdk::pubkey::Pubkey;

use crate::error::SdkError;

/// An argument value, checked against its [`FieldType`] when encoded.
///
/// All integer widths share [`ArgValue::Unsigned`]; the declared field type
/// decides the wire width and range.
///
/// [`FieldType`]: crate::schema::FieldType
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArgValue {
    /// Unsigned integer of any declared width.
    Unsigned(u128),
    /// Boolean.
    Bool(bool),
    /// Fixed or length-prefixed byte array.
    Bytes(Vec<u8>),
    /// Sequence of nested values.
    Seq(Vec<ArgValue>),
    /// Enum variant index and its payload.
    Enum {
        /// Variant index.
        tag: u8,
        /// Payload values in wire order.
        fields: Vec<ArgValue>,
    },
}

impl ArgValue {
    /// Creates an enum value without payload.
    #[must_use]
    pub const fn unit_variant(tag: u8) -> Self {
        Self::Enum {
            tag,
            fields: Vec::new(),
        }
    }

    /// Returns the integer value.
    ///
    /// # Errors
    ///
    /// Returns `SdkError::TypeMismatch` if the value is not an integer.
    pub fn as_unsigned(&self, field: &str) -> Result<u128, SdkError> {
        match self {
            Self::Unsigned(value) => Ok(*value),
            _ => Err(mismatch(field, "unsigned integer")),
        }
    }

    /// Returns the integer value narrowed to `T`.
    ///
    /// # Errors
    ///
    /// Returns `SdkError::TypeMismatch` if the value is not an integer, or
    /// `SdkError::ArgumentOutOfRange` if it does not fit in `T`.
    pub fn narrow<T: TryFrom<u128>>(&self, field: &str, ty: &'static str) -> Result<T, SdkError> {
        let value = self.as_unsigned(field)?;
        T::try_from(value).map_err(|_| SdkError::ArgumentOutOfRange {
            field: field.to_string(),
            ty,
            value: value.to_string(),
        })
    }

    /// Returns the value as `u8`.
    ///
    /// # Errors
    ///
    /// See [`ArgValue::narrow`].
    pub fn as_u8(&self, field: &str) -> Result<u8, SdkError> {
        self.narrow(field, "u8")
    }

    /// Returns the value as `u64`.
    ///
    /// # Errors
    ///
    /// See [`ArgValue::narrow`].
    pub fn as_u64(&self, field: &str) -> Result<u64, SdkError> {
        self.narrow(field, "u64")
    }

    /// Returns the boolean value.
    ///
    /// # Errors
    ///
    /// Returns `SdkError::TypeMismatch` if the value is not a boolean.
    pub fn as_bool(&self, field: &str) -> Result<bool, SdkError> {
        match self {
            Self::Bool(value) => Ok(*value),
            _ => Err(mismatch(field, "bool")),
        }
    }

    /// Returns the byte array.
    ///
    /// # Errors
    ///
    /// Returns `SdkError::TypeMismatch` if the value is not a byte array.
    pub fn as_bytes(&self, field: &str) -> Result<&[u8], SdkError> {
        match self {
            Self::Bytes(bytes) => Ok(bytes.as_slice()),
            _ => Err(mismatch(field, "bytes")),
        }
    }

    /// Returns the sequence elements.
    ///
    /// # Errors
    ///
    /// Returns `SdkError::TypeMismatch` if the value is not a sequence.
    pub fn as_seq(&self, field: &str) -> Result<&[ArgValue], SdkError> {
        match self {
            Self::Seq(items) => Ok(items.as_slice()),
            _ => Err(mismatch(field, "sequence")),
        }
    }

    /// Returns the enum tag and payload.
    ///
    /// # Errors
    ///
    /// Returns `SdkError::TypeMismatch` if the value is not an enum.
    pub fn as_enum(&self, field: &str) -> Result<(u8, &[ArgValue]), SdkError> {
        match self {
            Self::Enum { tag, fields } => Ok((*tag, fields.as_slice())),
            _ => Err(mismatch(field, "enum")),
        }
    }
}

fn mismatch(field: &str, expected: &'static str) -> SdkError {
    SdkError::TypeMismatch {
        field: field.to_string(),
        expected,
    }
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ArgValue {
                fn from(value: $ty) -> Self {
                    Self::Unsigned(u128::from(value))
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128);

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<u8>> for ArgValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl<const N: usize> From<[u8; N]> for ArgValue {
    fn from(value: [u8; N]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl From<Pubkey> for ArgValue {
    fn from(value: Pubkey) -> Self {
        Self::Bytes(value.to_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_integers() {
        assert_eq!(ArgValue::from(7u8), ArgValue::Unsigned(7));
        assert_eq!(ArgValue::from(u64::MAX), ArgValue::Unsigned(u128::from(u64::MAX)));
        assert_eq!(ArgValue::from(u128::MAX), ArgValue::Unsigned(u128::MAX));
    }

    #[test]
    fn test_from_bytes() {
        assert_eq!(ArgValue::from([1u8, 2, 3]), ArgValue::Bytes(vec![1, 2, 3]));
        let key = Pubkey::new_unique();
        assert_eq!(ArgValue::from(key), ArgValue::Bytes(key.to_bytes().to_vec()));
    }

    #[test]
    fn test_narrow_in_range() {
        let value = ArgValue::Unsigned(255);
        assert_eq!(value.as_u8("bump"), Ok(255));
        assert_eq!(value.as_u64("price"), Ok(255));
    }

    #[test]
    fn test_narrow_out_of_range() {
        let value = ArgValue::Unsigned(256);
        assert_eq!(
            value.as_u8("bump"),
            Err(SdkError::ArgumentOutOfRange {
                field: "bump".to_string(),
                ty: "u8",
                value: "256".to_string(),
            })
        );
    }

    #[test]
    fn test_type_mismatch() {
        let value = ArgValue::Bool(true);
        assert_eq!(
            value.as_u64("price"),
            Err(SdkError::TypeMismatch {
                field: "price".to_string(),
                expected: "unsigned integer",
            })
        );
        assert!(ArgValue::Unsigned(1).as_seq("scopes").is_err());
        assert!(ArgValue::Unsigned(1).as_enum("scope").is_err());
    }

    #[test]
    fn test_unit_variant() {
        let value = ArgValue::unit_variant(4);
        let (tag, fields) = value.as_enum("scope").expect("should be enum");
        assert_eq!(tag, 4);
        assert!(fields.is_empty());
    }
}
