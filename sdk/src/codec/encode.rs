//! Value encoder.

use crate::error::SdkError;
use crate::schema::FieldType;

use super::value::ArgValue;

/// Appends `value` to `out` using the wire rule for `ty`.
pub(crate) fn encode_value(
    out: &mut Vec<u8>,
    field: &str,
    ty: &FieldType,
    value: &ArgValue,
) -> Result<(), SdkError> {
    match ty {
        FieldType::U8 => out.push(value.narrow::<u8>(field, "u8")?),
        FieldType::U16 => out.extend_from_slice(&value.narrow::<u16>(field, "u16")?.to_le_bytes()),
        FieldType::U32 => out.extend_from_slice(&value.narrow::<u32>(field, "u32")?.to_le_bytes()),
        FieldType::U64 => out.extend_from_slice(&value.narrow::<u64>(field, "u64")?.to_le_bytes()),
        FieldType::U128 => out.extend_from_slice(&value.as_unsigned(field)?.to_le_bytes()),
        FieldType::Bool => out.push(u8::from(value.as_bool(field)?)),
        FieldType::FixedBytes(len) => {
            let bytes = value.as_bytes(field)?;
            if bytes.len() != *len {
                return Err(SdkError::InvalidFixedLength {
                    field: field.to_string(),
                    expected: *len,
                    actual: bytes.len(),
                });
            }
            out.extend_from_slice(bytes);
        }
        FieldType::Bytes => {
            let bytes = value.as_bytes(field)?;
            write_len(out, field, bytes.len())?;
            out.extend_from_slice(bytes);
        }
        FieldType::Vec(inner) => {
            let items = value.as_seq(field)?;
            write_len(out, field, items.len())?;
            for (i, item) in items.iter().enumerate() {
                encode_value(out, &format!("{field}[{i}]"), inner, item)?;
            }
        }
        FieldType::Enum(variants) => {
            let (tag, payload) = value.as_enum(field)?;
            let variant =
                variants
                    .get(usize::from(tag))
                    .ok_or_else(|| SdkError::ArgumentOutOfRange {
                        field: field.to_string(),
                        ty: "enum tag",
                        value: tag.to_string(),
                    })?;
            if payload.len() != variant.fields.len() {
                return Err(SdkError::TypeMismatch {
                    field: format!("{field}::{}", variant.name),
                    expected: "variant payload",
                });
            }
            out.push(tag);
            for (i, (ty, item)) in variant.fields.iter().zip(payload).enumerate() {
                encode_value(out, &format!("{field}::{}.{i}", variant.name), ty, item)?;
            }
        }
    }
    Ok(())
}

/// Writes a `u32` little-endian element count.
fn write_len(out: &mut Vec<u8>, field: &str, len: usize) -> Result<(), SdkError> {
    let len = u32::try_from(len).map_err(|_| SdkError::ArgumentOutOfRange {
        field: field.to_string(),
        ty: "u32 length",
        value: len.to_string(),
    })?;
    out.extend_from_slice(&len.to_le_bytes());
    Ok(())
}
