//! Argument codec.
//!
//! Encodes argument values into an instruction payload per an
//! [`OperationSchema`], and decodes payloads back:
//!
//! ```text
//! payload = discriminator (8 bytes) || field_1 || ... || field_n
//! ```
//!
//! Integers are little-endian at their declared width. Byte arrays and
//! sequences of variable length carry a `u32` little-endian element count.
//! Enums are a one-byte tag followed by the variant payload. This is the
//! Borsh layout the program deserializes with.

mod decode;
mod encode;
pub mod value;

pub use value::ArgValue;

use crate::error::SdkError;
use crate::schema::{Discriminator, OperationSchema, DISCRIMINATOR_LEN};

use decode::{decode_value, Reader};
use encode::encode_value;

/// Encodes `args` into a payload prefixed by `discriminator`.
///
/// `args` are positional and must match `schema.fields` one to one.
///
/// # Errors
///
/// Returns `SdkError::ArgumentCountMismatch` if the number of arguments is
/// wrong, or the first field error (`ArgumentOutOfRange`,
/// `InvalidFixedLength`, `TypeMismatch`).
pub fn encode(
    schema: &OperationSchema,
    discriminator: &Discriminator,
    args: &[ArgValue],
) -> Result<Vec<u8>, SdkError> {
    if args.len() != schema.fields.len() {
        return Err(SdkError::ArgumentCountMismatch {
            expected: schema.fields.len(),
            actual: args.len(),
        });
    }

    let capacity = DISCRIMINATOR_LEN
        + schema
            .fields
            .iter()
            .map(|field| field.ty.min_size())
            .sum::<usize>();
    let mut data = Vec::with_capacity(capacity);
    data.extend_from_slice(discriminator);

    for (field, value) in schema.fields.iter().zip(args) {
        encode_value(&mut data, field.name, &field.ty, value)?;
    }

    Ok(data)
}

/// Decodes a payload into its discriminator and argument values.
///
/// The discriminator is returned as read; it is not checked against
/// `schema`.
///
/// # Errors
///
/// Returns `SdkError::TruncatedInput` if the payload is too short,
/// `SdkError::TrailingBytes` if bytes remain after the last field, or
/// `InvalidEnumTag`/`InvalidBool` for malformed values.
pub fn decode(
    schema: &OperationSchema,
    data: &[u8],
) -> Result<(Discriminator, Vec<ArgValue>), SdkError> {
    let mut reader = Reader::new(data);
    let discriminator = reader.take_array::<DISCRIMINATOR_LEN>("discriminator")?;

    let args = schema
        .fields
        .iter()
        .map(|field| decode_value(&mut reader, field.name, &field.ty))
        .collect::<Result<Vec<_>, _>>()?;

    match reader.remaining() {
        0 => Ok((discriminator, args)),
        extra => Err(SdkError::TrailingBytes(extra)),
    }
}
