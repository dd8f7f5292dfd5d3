//! Registered Auction House operations.
//!
//! Each operation is one [`OperationSchema`] row: discriminator, argument
//! fields and account requirements. Field and account order is the wire
//! layout and must match the program exactly.
//!
//! Discriminators are the first 8 bytes of `sha256("global:<name>")`.

use crate::accounts::{AccountRequirement, RENT_SYSVAR_ID, SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID};
use crate::error::SdkError;

use super::types::{Discriminator, EnumVariant, Field, FieldType, OperationKind, OperationSchema};

/// Variants of the program's `AuthorityScope`, in tag order.
pub static AUTHORITY_SCOPE_VARIANTS: [EnumVariant; 7] = [
    EnumVariant::unit("Deposit"),
    EnumVariant::unit("Buy"),
    EnumVariant::unit("PublicBuy"),
    EnumVariant::unit("ExecuteSale"),
    EnumVariant::unit("Sell"),
    EnumVariant::unit("Cancel"),
    EnumVariant::unit("Withdraw"),
];

/// Wire type of a single `AuthorityScope`.
pub static AUTHORITY_SCOPE: FieldType = FieldType::Enum(&AUTHORITY_SCOPE_VARIANTS);

const TOKEN_PROGRAM: AccountRequirement =
    AccountRequirement::readonly("token_program").with_default(TOKEN_PROGRAM_ID);
const SYSTEM_PROGRAM: AccountRequirement =
    AccountRequirement::readonly("system_program").with_default(SYSTEM_PROGRAM_ID);
const RENT: AccountRequirement = AccountRequirement::readonly("rent").with_default(RENT_SYSVAR_ID);

static PRICE_AND_SIZE: [Field; 2] = [
    Field::new("buyer_price", FieldType::U64),
    Field::new("token_size", FieldType::U64),
];

/// `sell`: list a token at `buyer_price`.
pub static SELL: OperationSchema = OperationSchema {
    kind: OperationKind::Sell,
    discriminator: [51, 230, 133, 164, 1, 127, 131, 173],
    fields: &[
        Field::new("trade_state_bump", FieldType::U8),
        Field::new("free_trade_state_bump", FieldType::U8),
        Field::new("program_as_signer_bump", FieldType::U8),
        Field::new("buyer_price", FieldType::U64),
        Field::new("token_size", FieldType::U64),
    ],
    accounts: &[
        AccountRequirement::readonly("wallet"),
        AccountRequirement::writable("token_account"),
        // Written by the Token Metadata delegate CPI.
        AccountRequirement::writable("metadata"),
        AccountRequirement::readonly("authority"),
        AccountRequirement::readonly("auction_house"),
        AccountRequirement::writable("auction_house_fee_account"),
        AccountRequirement::writable("seller_trade_state"),
        AccountRequirement::writable("free_seller_trade_state"),
        TOKEN_PROGRAM,
        SYSTEM_PROGRAM,
        AccountRequirement::readonly("program_as_signer"),
        RENT,
    ],
};

/// `cancel`: close a trade state.
pub static CANCEL: OperationSchema = OperationSchema {
    kind: OperationKind::Cancel,
    discriminator: [232, 219, 223, 41, 219, 236, 220, 190],
    fields: &PRICE_AND_SIZE,
    accounts: &[
        AccountRequirement::writable("wallet"),
        AccountRequirement::writable("token_account"),
        AccountRequirement::readonly("token_mint"),
        AccountRequirement::readonly("authority"),
        AccountRequirement::readonly("auction_house"),
        AccountRequirement::writable("auction_house_fee_account"),
        AccountRequirement::writable("trade_state"),
        TOKEN_PROGRAM,
    ],
};

/// `auctioneer_cancel`: close a trade state as a delegated auctioneer.
pub static AUCTIONEER_CANCEL: OperationSchema = OperationSchema {
    kind: OperationKind::AuctioneerCancel,
    discriminator: [197, 97, 152, 196, 115, 204, 64, 215],
    fields: &PRICE_AND_SIZE,
    accounts: &[
        AccountRequirement::writable("wallet"),
        AccountRequirement::writable("token_account"),
        AccountRequirement::readonly("token_mint"),
        AccountRequirement::readonly("authority"),
        AccountRequirement::readonly("auctioneer_authority").signer(),
        AccountRequirement::readonly("auction_house"),
        AccountRequirement::writable("auction_house_fee_account"),
        AccountRequirement::writable("trade_state"),
        AccountRequirement::readonly("ah_auctioneer_pda"),
        TOKEN_PROGRAM,
    ],
};

/// `delegate_auctioneer`: grant authority scopes to an auctioneer.
pub static DELEGATE_AUCTIONEER: OperationSchema = OperationSchema {
    kind: OperationKind::DelegateAuctioneer,
    discriminator: [106, 178, 12, 122, 74, 173, 251, 222],
    fields: &[Field::new("scopes", FieldType::Vec(&AUTHORITY_SCOPE))],
    accounts: &[
        AccountRequirement::writable("auction_house"),
        AccountRequirement::writable("authority").signer(),
        AccountRequirement::readonly("auctioneer_authority"),
        AccountRequirement::writable("ah_auctioneer_pda"),
        SYSTEM_PROGRAM,
    ],
};

/// `print_listing_receipt`: record a receipt for the preceding `sell`.
pub static PRINT_LISTING_RECEIPT: OperationSchema = OperationSchema {
    kind: OperationKind::PrintListingReceipt,
    discriminator: [207, 107, 44, 160, 75, 222, 195, 27],
    fields: &[Field::new("receipt_bump", FieldType::U8)],
    accounts: &[
        AccountRequirement::writable("receipt"),
        AccountRequirement::writable("bookkeeper").signer(),
        SYSTEM_PROGRAM,
        RENT,
        AccountRequirement::readonly("instruction"),
    ],
};

/// `auctioneer_sell`: list a token as a delegated auctioneer. The price is
/// fixed by the program, so only the size is encoded.
pub static AUCTIONEER_SELL: OperationSchema = OperationSchema {
    kind: OperationKind::AuctioneerSell,
    discriminator: [251, 60, 142, 195, 121, 203, 26, 183],
    fields: &[
        Field::new("trade_state_bump", FieldType::U8),
        Field::new("free_trade_state_bump", FieldType::U8),
        Field::new("program_as_signer_bump", FieldType::U8),
        Field::new("token_size", FieldType::U64),
    ],
    accounts: &[
        AccountRequirement::writable("wallet"),
        AccountRequirement::writable("token_account"),
        AccountRequirement::writable("metadata"),
        AccountRequirement::readonly("authority"),
        AccountRequirement::readonly("auctioneer_authority").signer(),
        AccountRequirement::readonly("auction_house"),
        AccountRequirement::writable("auction_house_fee_account"),
        AccountRequirement::writable("seller_trade_state"),
        AccountRequirement::writable("free_seller_trade_state"),
        AccountRequirement::readonly("ah_auctioneer_pda"),
        AccountRequirement::readonly("program_as_signer"),
        TOKEN_PROGRAM,
        SYSTEM_PROGRAM,
        RENT,
    ],
};

static REGISTRY: [&OperationSchema; 6] = [
    &SELL,
    &CANCEL,
    &AUCTIONEER_CANCEL,
    &DELEGATE_AUCTIONEER,
    &PRINT_LISTING_RECEIPT,
    &AUCTIONEER_SELL,
];

/// Returns every registered schema.
#[must_use]
pub fn all_schemas() -> &'static [&'static OperationSchema] {
    &REGISTRY
}

/// Returns the schema for `kind`.
#[must_use]
pub fn schema_for(kind: OperationKind) -> &'static OperationSchema {
    match kind {
        OperationKind::Sell => &SELL,
        OperationKind::Cancel => &CANCEL,
        OperationKind::AuctioneerCancel => &AUCTIONEER_CANCEL,
        OperationKind::DelegateAuctioneer => &DELEGATE_AUCTIONEER,
        OperationKind::PrintListingReceipt => &PRINT_LISTING_RECEIPT,
        OperationKind::AuctioneerSell => &AUCTIONEER_SELL,
    }
}

/// Returns the schema registered under `name`.
///
/// # Errors
///
/// Returns `SdkError::UnknownOperation` if no schema has that name.
pub fn schema_for_name(name: &str) -> Result<&'static OperationSchema, SdkError> {
    REGISTRY
        .iter()
        .copied()
        .find(|schema| schema.name() == name)
        .ok_or_else(|| SdkError::UnknownOperation(name.to_string()))
}

/// Returns the account requirements for `kind`.
#[must_use]
pub fn account_requirements(kind: OperationKind) -> &'static [AccountRequirement] {
    schema_for(kind).accounts
}

/// Returns the schema whose discriminator is `discriminator`.
///
/// # Errors
///
/// Returns `SdkError::UnknownOperation` if no schema matches.
pub fn find_by_discriminator(
    discriminator: &Discriminator,
) -> Result<&'static OperationSchema, SdkError> {
    REGISTRY
        .iter()
        .copied()
        .find(|schema| &schema.discriminator == discriminator)
        .ok_or_else(|| {
            SdkError::UnknownOperation(format!("discriminator {:?}", discriminator))
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_discriminators_unique() {
        let discriminators: HashSet<_> = all_schemas().iter().map(|s| s.discriminator).collect();
        assert_eq!(discriminators.len(), all_schemas().len());
    }

    #[test]
    fn test_registry_covers_all_kinds() {
        assert_eq!(all_schemas().len(), OperationKind::ALL.len());
        for kind in OperationKind::ALL {
            assert_eq!(schema_for(kind).kind, kind);
        }
    }

    #[test]
    fn test_schema_for_name() {
        let schema = schema_for_name("delegate_auctioneer").expect("should be registered");
        assert_eq!(schema.kind, OperationKind::DelegateAuctioneer);
    }

    #[test]
    fn test_schema_for_name_unknown() {
        let result = schema_for_name("execute_sale");
        assert_eq!(
            result,
            Err(SdkError::UnknownOperation("execute_sale".to_string()))
        );
    }

    #[test]
    fn test_find_by_discriminator() {
        let schema =
            find_by_discriminator(&[207, 107, 44, 160, 75, 222, 195, 27]).expect("should match");
        assert_eq!(schema.kind, OperationKind::PrintListingReceipt);

        assert!(matches!(
            find_by_discriminator(&[0; 8]),
            Err(SdkError::UnknownOperation(_))
        ));
    }

    #[test]
    fn test_account_roles_unique_per_operation() {
        for schema in all_schemas() {
            let roles: HashSet<_> = schema.accounts.iter().map(|a| a.role).collect();
            assert_eq!(roles.len(), schema.accounts.len(), "{}", schema.name());
        }
    }

    #[test]
    fn test_sell_layout() {
        assert_eq!(SELL.accounts.len(), 12);
        assert_eq!(SELL.fixed_size(), Some(8 + 3 + 8 + 8));
        assert_eq!(SELL.accounts[8].default, Some(TOKEN_PROGRAM_ID));
        assert_eq!(SELL.accounts[9].default, Some(SYSTEM_PROGRAM_ID));
        assert_eq!(SELL.accounts[11].default, Some(RENT_SYSVAR_ID));
    }

    #[test]
    fn test_signers() {
        fn signers(schema: &OperationSchema) -> Vec<&'static str> {
            schema
                .accounts
                .iter()
                .filter(|a| a.signer)
                .map(|a| a.role)
                .collect()
        }

        assert!(signers(&SELL).is_empty());
        assert!(signers(&CANCEL).is_empty());
        assert_eq!(signers(&AUCTIONEER_CANCEL), vec!["auctioneer_authority"]);
        assert_eq!(signers(&DELEGATE_AUCTIONEER), vec!["authority"]);
        assert_eq!(signers(&PRINT_LISTING_RECEIPT), vec!["bookkeeper"]);
        assert_eq!(signers(&AUCTIONEER_SELL), vec!["auctioneer_authority"]);
    }

    #[test]
    fn test_delegate_auctioneer_variable_size() {
        assert_eq!(DELEGATE_AUCTIONEER.fixed_size(), None);
        assert_eq!(AUTHORITY_SCOPE.fixed_size(), Some(1));
    }
}
