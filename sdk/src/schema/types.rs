//! Schema types: operation kinds, field types and operation schemas.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::accounts::AccountRequirement;
use crate::error::SdkError;

/// Length of an instruction discriminator in bytes.
pub const DISCRIMINATOR_LEN: usize = 8;

/// Fixed-width tag prefixed to every instruction payload.
pub type Discriminator = [u8; DISCRIMINATOR_LEN];

/// Operation kinds understood by the Auction House program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// List a token for sale.
    Sell,
    /// Cancel a listing or bid.
    Cancel,
    /// Cancel a listing or bid on behalf of a delegated auctioneer.
    AuctioneerCancel,
    /// Delegate authority scopes to an auctioneer program.
    DelegateAuctioneer,
    /// Record a receipt for a listing.
    PrintListingReceipt,
    /// List a token for sale through a delegated auctioneer.
    AuctioneerSell,
}

impl OperationKind {
    /// All operation kinds, in registry order.
    pub const ALL: [Self; 6] = [
        Self::Sell,
        Self::Cancel,
        Self::AuctioneerCancel,
        Self::DelegateAuctioneer,
        Self::PrintListingReceipt,
        Self::AuctioneerSell,
    ];

    /// Returns the program-side instruction name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sell => "sell",
            Self::Cancel => "cancel",
            Self::AuctioneerCancel => "auctioneer_cancel",
            Self::DelegateAuctioneer => "delegate_auctioneer",
            Self::PrintListingReceipt => "print_listing_receipt",
            Self::AuctioneerSell => "auctioneer_sell",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OperationKind {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| SdkError::UnknownOperation(s.to_string()))
    }
}

/// Wire type of a single argument field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Unsigned 8-bit integer.
    U8,
    /// Unsigned 16-bit integer, little-endian.
    U16,
    /// Unsigned 32-bit integer, little-endian.
    U32,
    /// Unsigned 64-bit integer, little-endian.
    U64,
    /// Unsigned 128-bit integer, little-endian.
    U128,
    /// Single byte, 0 or 1.
    Bool,
    /// Byte array of a fixed length, emitted verbatim.
    FixedBytes(usize),
    /// Byte array with a `u32` length prefix.
    Bytes,
    /// Sequence of a nested type with a `u32` element-count prefix.
    Vec(&'static FieldType),
    /// One-byte tag followed by the chosen variant's payload fields.
    Enum(&'static [EnumVariant]),
}

impl FieldType {
    /// Returns a short name for error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::Bool => "bool",
            Self::FixedBytes(_) => "fixed bytes",
            Self::Bytes => "bytes",
            Self::Vec(_) => "vec",
            Self::Enum(_) => "enum",
        }
    }

    /// Returns the fewest bytes any value of this type encodes to.
    #[must_use]
    pub fn min_size(&self) -> usize {
        match self {
            Self::Bytes | Self::Vec(_) => 4,
            Self::Enum(variants) => {
                1 + variants
                    .iter()
                    .map(|v| v.fields.iter().map(FieldType::min_size).sum::<usize>())
                    .min()
                    .unwrap_or(0)
            }
            other => other.fixed_size().unwrap_or(0),
        }
    }

    /// Returns the encoded width if it does not depend on the value.
    #[must_use]
    pub fn fixed_size(&self) -> Option<usize> {
        match self {
            Self::U8 | Self::Bool => Some(1),
            Self::U16 => Some(2),
            Self::U32 => Some(4),
            Self::U64 => Some(8),
            Self::U128 => Some(16),
            Self::FixedBytes(len) => Some(*len),
            Self::Bytes | Self::Vec(_) => None,
            Self::Enum(variants) => {
                let mut sizes = variants.iter().map(|v| {
                    v.fields
                        .iter()
                        .map(FieldType::fixed_size)
                        .sum::<Option<usize>>()
                });
                let first = sizes.next()??;
                sizes
                    .all(|size| size == Some(first))
                    .then_some(first + 1)
            }
        }
    }
}

/// A named variant of an enum field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumVariant {
    /// Variant name.
    pub name: &'static str,
    /// Payload fields following the tag, in wire order.
    pub fields: &'static [FieldType],
}

impl EnumVariant {
    /// Creates a variant without payload.
    #[must_use]
    pub const fn unit(name: &'static str) -> Self {
        Self { name, fields: &[] }
    }
}

/// A named argument field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Field name.
    pub name: &'static str,
    /// Wire type.
    pub ty: FieldType,
}

impl Field {
    /// Creates a field.
    #[must_use]
    pub const fn new(name: &'static str, ty: FieldType) -> Self {
        Self { name, ty }
    }
}

/// Wire layout of one operation: discriminator, argument fields and the
/// positional accounts the program expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationSchema {
    /// Operation kind.
    pub kind: OperationKind,
    /// Unique discriminator.
    pub discriminator: Discriminator,
    /// Argument fields in wire order.
    pub fields: &'static [Field],
    /// Account requirements in wire order.
    pub accounts: &'static [AccountRequirement],
}

impl OperationSchema {
    /// Returns the operation name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Returns the payload size if every field has a fixed width.
    #[must_use]
    pub fn fixed_size(&self) -> Option<usize> {
        self.fields
            .iter()
            .map(|field| field.ty.fixed_size())
            .sum::<Option<usize>>()
            .map(|size| size + DISCRIMINATOR_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static UNIT_VARIANTS: [EnumVariant; 2] = [EnumVariant::unit("A"), EnumVariant::unit("B")];
    static MIXED_VARIANTS: [EnumVariant; 2] = [
        EnumVariant::unit("None"),
        EnumVariant {
            name: "Some",
            fields: &[FieldType::U64],
        },
    ];
    static BYTE: FieldType = FieldType::U8;

    #[test]
    fn test_operation_kind_name_roundtrip() {
        for kind in OperationKind::ALL {
            let parsed: OperationKind = kind.name().parse().expect("should parse");
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_operation_kind_unknown() {
        let result = "execute_sale".parse::<OperationKind>();
        assert_eq!(
            result,
            Err(SdkError::UnknownOperation("execute_sale".to_string()))
        );
    }

    #[test]
    fn test_operation_kind_display() {
        assert_eq!(
            OperationKind::DelegateAuctioneer.to_string(),
            "delegate_auctioneer"
        );
    }

    #[test]
    fn test_fixed_size_scalars() {
        assert_eq!(FieldType::U8.fixed_size(), Some(1));
        assert_eq!(FieldType::U128.fixed_size(), Some(16));
        assert_eq!(FieldType::FixedBytes(32).fixed_size(), Some(32));
        assert_eq!(FieldType::Bytes.fixed_size(), None);
        assert_eq!(FieldType::Vec(&BYTE).fixed_size(), None);
    }

    #[test]
    fn test_fixed_size_enum() {
        assert_eq!(FieldType::Enum(&UNIT_VARIANTS).fixed_size(), Some(1));
        assert_eq!(FieldType::Enum(&MIXED_VARIANTS).fixed_size(), None);
        assert_eq!(FieldType::Enum(&[]).fixed_size(), None);
    }

    #[test]
    fn test_min_size() {
        assert_eq!(FieldType::U64.min_size(), 8);
        assert_eq!(FieldType::Bytes.min_size(), 4);
        assert_eq!(FieldType::Vec(&BYTE).min_size(), 4);
        assert_eq!(FieldType::Enum(&MIXED_VARIANTS).min_size(), 1);
        assert_eq!(FieldType::FixedBytes(0).min_size(), 0);
    }
}
