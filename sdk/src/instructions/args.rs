//! Typed instruction arguments.
//!
//! Each struct mirrors one registered schema field for field. The structs
//! derive Borsh so their encoding can be checked against the table-driven
//! codec; [`OperationArgs`] converts them to and from positional
//! [`ArgValue`]s.

use std::fmt;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::codec::ArgValue;
use crate::error::SdkError;
use crate::schema::OperationKind;

/// Typed arguments of one operation kind.
pub trait OperationArgs: Sized {
    /// Operation the arguments belong to.
    const KIND: OperationKind;

    /// Returns the argument values in schema order.
    fn to_values(&self) -> Vec<ArgValue>;

    /// Builds the arguments from values in schema order.
    ///
    /// # Errors
    ///
    /// Returns an error if the count or any value does not fit the schema.
    fn from_values(values: &[ArgValue]) -> Result<Self, SdkError>;
}

fn count_mismatch(expected: usize, values: &[ArgValue]) -> SdkError {
    SdkError::ArgumentCountMismatch {
        expected,
        actual: values.len(),
    }
}

/// Authority scope an auctioneer can be delegated.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    BorshSerialize,
    BorshDeserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AuthorityScope {
    /// Deposit into escrow.
    Deposit,
    /// Place a private bid.
    Buy,
    /// Place a public bid.
    PublicBuy,
    /// Execute a sale.
    ExecuteSale,
    /// List for sale.
    Sell,
    /// Cancel a listing or bid.
    Cancel,
    /// Withdraw from escrow.
    Withdraw,
}

impl AuthorityScope {
    /// All scopes, in tag order.
    pub const ALL: [Self; 7] = [
        Self::Deposit,
        Self::Buy,
        Self::PublicBuy,
        Self::ExecuteSale,
        Self::Sell,
        Self::Cancel,
        Self::Withdraw,
    ];
}

impl fmt::Display for AuthorityScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit => write!(f, "deposit"),
            Self::Buy => write!(f, "buy"),
            Self::PublicBuy => write!(f, "public_buy"),
            Self::ExecuteSale => write!(f, "execute_sale"),
            Self::Sell => write!(f, "sell"),
            Self::Cancel => write!(f, "cancel"),
            Self::Withdraw => write!(f, "withdraw"),
        }
    }
}

impl From<AuthorityScope> for u8 {
    fn from(scope: AuthorityScope) -> Self {
        match scope {
            AuthorityScope::Deposit => 0,
            AuthorityScope::Buy => 1,
            AuthorityScope::PublicBuy => 2,
            AuthorityScope::ExecuteSale => 3,
            AuthorityScope::Sell => 4,
            AuthorityScope::Cancel => 5,
            AuthorityScope::Withdraw => 6,
        }
    }
}

impl TryFrom<u8> for AuthorityScope {
    type Error = SdkError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Deposit),
            1 => Ok(Self::Buy),
            2 => Ok(Self::PublicBuy),
            3 => Ok(Self::ExecuteSale),
            4 => Ok(Self::Sell),
            5 => Ok(Self::Cancel),
            6 => Ok(Self::Withdraw),
            _ => Err(SdkError::InvalidEnumTag {
                field: "authority_scope".to_string(),
                tag: value,
            }),
        }
    }
}

impl From<AuthorityScope> for ArgValue {
    fn from(scope: AuthorityScope) -> Self {
        ArgValue::unit_variant(scope.into())
    }
}

/// Arguments of `sell`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct SellArgs {
    /// Bump of the seller trade state PDA.
    pub trade_state_bump: u8,
    /// Bump of the free seller trade state PDA.
    pub free_trade_state_bump: u8,
    /// Bump of the program-as-signer PDA.
    pub program_as_signer_bump: u8,
    /// Listing price in treasury mint atoms.
    pub buyer_price: u64,
    /// Number of tokens listed.
    pub token_size: u64,
}

impl OperationArgs for SellArgs {
    const KIND: OperationKind = OperationKind::Sell;

    fn to_values(&self) -> Vec<ArgValue> {
        vec![
            self.trade_state_bump.into(),
            self.free_trade_state_bump.into(),
            self.program_as_signer_bump.into(),
            self.buyer_price.into(),
            self.token_size.into(),
        ]
    }

    fn from_values(values: &[ArgValue]) -> Result<Self, SdkError> {
        match values {
            [
                trade_state_bump,
                free_trade_state_bump,
                program_as_signer_bump,
                buyer_price,
                token_size,
            ] => Ok(Self {
                trade_state_bump: trade_state_bump.as_u8("trade_state_bump")?,
                free_trade_state_bump: free_trade_state_bump.as_u8("free_trade_state_bump")?,
                program_as_signer_bump: program_as_signer_bump.as_u8("program_as_signer_bump")?,
                buyer_price: buyer_price.as_u64("buyer_price")?,
                token_size: token_size.as_u64("token_size")?,
            }),
            _ => Err(count_mismatch(5, values)),
        }
    }
}

/// Arguments of `cancel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct CancelArgs {
    /// Price of the trade state being cancelled.
    pub buyer_price: u64,
    /// Token amount of the trade state being cancelled.
    pub token_size: u64,
}

/// Arguments of `auctioneer_cancel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct AuctioneerCancelArgs {
    /// Price of the trade state being cancelled.
    pub buyer_price: u64,
    /// Token amount of the trade state being cancelled.
    pub token_size: u64,
}

macro_rules! impl_price_and_size_args {
    ($ty:ident, $kind:expr) => {
        impl OperationArgs for $ty {
            const KIND: OperationKind = $kind;

            fn to_values(&self) -> Vec<ArgValue> {
                vec![self.buyer_price.into(), self.token_size.into()]
            }

            fn from_values(values: &[ArgValue]) -> Result<Self, SdkError> {
                match values {
                    [buyer_price, token_size] => Ok(Self {
                        buyer_price: buyer_price.as_u64("buyer_price")?,
                        token_size: token_size.as_u64("token_size")?,
                    }),
                    _ => Err(count_mismatch(2, values)),
                }
            }
        }
    };
}

impl_price_and_size_args!(CancelArgs, OperationKind::Cancel);
impl_price_and_size_args!(AuctioneerCancelArgs, OperationKind::AuctioneerCancel);

/// Arguments of `delegate_auctioneer`.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct DelegateAuctioneerArgs {
    /// Scopes granted to the auctioneer.
    pub scopes: Vec<AuthorityScope>,
}

impl OperationArgs for DelegateAuctioneerArgs {
    const KIND: OperationKind = OperationKind::DelegateAuctioneer;

    fn to_values(&self) -> Vec<ArgValue> {
        vec![ArgValue::Seq(
            self.scopes.iter().copied().map(ArgValue::from).collect(),
        )]
    }

    fn from_values(values: &[ArgValue]) -> Result<Self, SdkError> {
        match values {
            [scopes] => {
                let scopes = scopes
                    .as_seq("scopes")?
                    .iter()
                    .map(|scope| {
                        let (tag, _) = scope.as_enum("scopes")?;
                        AuthorityScope::try_from(tag)
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self { scopes })
            }
            _ => Err(count_mismatch(1, values)),
        }
    }
}

/// Arguments of `print_listing_receipt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct PrintListingReceiptArgs {
    /// Bump of the listing receipt PDA.
    pub receipt_bump: u8,
}

impl OperationArgs for PrintListingReceiptArgs {
    const KIND: OperationKind = OperationKind::PrintListingReceipt;

    fn to_values(&self) -> Vec<ArgValue> {
        vec![self.receipt_bump.into()]
    }

    fn from_values(values: &[ArgValue]) -> Result<Self, SdkError> {
        match values {
            [receipt_bump] => Ok(Self {
                receipt_bump: receipt_bump.as_u8("receipt_bump")?,
            }),
            _ => Err(count_mismatch(1, values)),
        }
    }
}

/// Arguments of `auctioneer_sell`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct AuctioneerSellArgs {
    /// Bump of the seller trade state PDA.
    pub trade_state_bump: u8,
    /// Bump of the free seller trade state PDA.
    pub free_trade_state_bump: u8,
    /// Bump of the program-as-signer PDA.
    pub program_as_signer_bump: u8,
    /// Number of tokens listed.
    pub token_size: u64,
}

impl OperationArgs for AuctioneerSellArgs {
    const KIND: OperationKind = OperationKind::AuctioneerSell;

    fn to_values(&self) -> Vec<ArgValue> {
        vec![
            self.trade_state_bump.into(),
            self.free_trade_state_bump.into(),
            self.program_as_signer_bump.into(),
            self.token_size.into(),
        ]
    }

    fn from_values(values: &[ArgValue]) -> Result<Self, SdkError> {
        match values {
            [trade_state_bump, free_trade_state_bump, program_as_signer_bump, token_size] => {
                Ok(Self {
                    trade_state_bump: trade_state_bump.as_u8("trade_state_bump")?,
                    free_trade_state_bump: free_trade_state_bump.as_u8("free_trade_state_bump")?,
                    program_as_signer_bump: program_as_signer_bump
                        .as_u8("program_as_signer_bump")?,
                    token_size: token_size.as_u64("token_size")?,
                })
            }
            _ => Err(count_mismatch(4, values)),
        }
    }
}
