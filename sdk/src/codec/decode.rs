//! Value decoder.
//!
//! Reads never index past the input: every read goes through
//! [`Reader::take`], which fails with `TruncatedInput` instead of panicking.

use crate::error::SdkError;
use crate::schema::FieldType;

use super::value::ArgValue;

/// Forward-only cursor over an input buffer.
pub(crate) struct Reader<'a> {
    data: &'a [u8],
}

impl<'a> Reader<'a> {
    pub(crate) const fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    pub(crate) const fn remaining(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn take(&mut self, field: &str, len: usize) -> Result<&'a [u8], SdkError> {
        if self.data.len() < len {
            return Err(SdkError::TruncatedInput {
                field: field.to_string(),
                needed: len,
                remaining: self.data.len(),
            });
        }
        let (head, tail) = self.data.split_at(len);
        self.data = tail;
        Ok(head)
    }

    pub(crate) fn take_array<const N: usize>(&mut self, field: &str) -> Result<[u8; N], SdkError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(field, N)?);
        Ok(out)
    }

    /// Reads a `u32` element count and checks that the input can hold that
    /// many elements of at least `min_elem` bytes each. Zero-width elements
    /// are counted as one byte, so a count never exceeds the input length.
    fn take_len(&mut self, field: &str, min_elem: usize) -> Result<usize, SdkError> {
        let len = u32::from_le_bytes(self.take_array(field)?);
        let len = usize::try_from(len).map_err(|_| SdkError::ArgumentOutOfRange {
            field: field.to_string(),
            ty: "usize",
            value: len.to_string(),
        })?;
        let needed = len.saturating_mul(min_elem.max(1));
        if needed > self.data.len() {
            return Err(SdkError::TruncatedInput {
                field: field.to_string(),
                needed,
                remaining: self.data.len(),
            });
        }
        Ok(len)
    }
}

/// Reads one value of type `ty`.
pub(crate) fn decode_value(
    reader: &mut Reader<'_>,
    field: &str,
    ty: &FieldType,
) -> Result<ArgValue, SdkError> {
    let value = match ty {
        FieldType::U8 => ArgValue::from(u8::from_le_bytes(reader.take_array(field)?)),
        FieldType::U16 => ArgValue::from(u16::from_le_bytes(reader.take_array(field)?)),
        FieldType::U32 => ArgValue::from(u32::from_le_bytes(reader.take_array(field)?)),
        FieldType::U64 => ArgValue::from(u64::from_le_bytes(reader.take_array(field)?)),
        FieldType::U128 => ArgValue::from(u128::from_le_bytes(reader.take_array(field)?)),
        FieldType::Bool => match reader.take_array::<1>(field)? {
            [0] => ArgValue::Bool(false),
            [1] => ArgValue::Bool(true),
            [byte] => {
                return Err(SdkError::InvalidBool {
                    field: field.to_string(),
                    byte,
                })
            }
        },
        FieldType::FixedBytes(len) => ArgValue::Bytes(reader.take(field, *len)?.to_vec()),
        FieldType::Bytes => {
            let len = reader.take_len(field, 1)?;
            ArgValue::Bytes(reader.take(field, len)?.to_vec())
        }
        FieldType::Vec(inner) => {
            let len = reader.take_len(field, inner.min_size())?;
            let mut items = Vec::with_capacity(len.min(reader.remaining()));
            for i in 0..len {
                items.push(decode_value(reader, &format!("{field}[{i}]"), inner)?);
            }
            ArgValue::Seq(items)
        }
        FieldType::Enum(variants) => {
            let [tag] = reader.take_array::<1>(field)?;
            let variant = variants
                .get(usize::from(tag))
                .ok_or_else(|| SdkError::InvalidEnumTag {
                    field: field.to_string(),
                    tag,
                })?;
            let mut fields = Vec::with_capacity(variant.fields.len());
            for (i, ty) in variant.fields.iter().enumerate() {
                fields.push(decode_value(
                    reader,
                    &format!("{field}::{}.{i}", variant.name),
                    ty,
                )?);
            }
            ArgValue::Enum { tag, fields }
        }
    };
    Ok(value)
}
