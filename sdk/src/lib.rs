//! Auction House SDK - instruction construction for the Auction House program.
//!
//! This crate builds and decodes instructions for the Auction House listing
//! operations on Solana. Each operation is described by a static schema:
//! an 8-byte discriminator, positional argument fields and an ordered account
//! list. One generic codec and one account resolver serve every operation.
//!
//! # Modules
//!
//! - [`schema`]: operation kinds, field types and the schema registry
//! - [`codec`]: argument encoding and decoding
//! - [`accounts`]: account requirements and account list resolution
//! - [`instructions`]: typed arguments, [`InstructionBuilder`] and decoding
//! - [`config`]: program id and well-known address configuration
//! - [`error`]: [`SdkError`]
//!
//! # Example
//!
//! ```rust
//! use auction_house_sdk::{InstructionBuilder, PrintListingReceiptArgs};
//! use solana_sdk::pubkey::Pubkey;
//!
//! let program_id = Pubkey::new_unique();
//!
//! let args = PrintListingReceiptArgs { receipt_bump: 254 };
//! let ix = InstructionBuilder::for_args(program_id, &args)
//!     .account("receipt", Pubkey::new_unique())
//!     .account("bookkeeper", Pubkey::new_unique())
//!     .account("instruction", Pubkey::new_unique())
//!     .build()
//!     .expect("should build instruction");
//!
//! assert_eq!(ix.accounts.len(), 5);
//! assert_eq!(ix.data.len(), 9);
//! ```

pub mod accounts;
pub mod codec;
pub mod config;
pub mod error;
pub mod instructions;
pub mod schema;

pub use accounts::{build_accounts, AccountMap, AccountRequirement, SellRemainingAccounts};
pub use codec::{decode, encode, ArgValue};
pub use config::{ConfigError, SdkConfig};
pub use error::SdkError;
pub use instructions::{
    assemble, build_instruction, decode_instruction, decode_instruction_data,
    AuctioneerCancelArgs, AuctioneerSellArgs, AuthorityScope, CancelArgs, DecodedInstruction,
    DelegateAuctioneerArgs, InstructionBuilder, OperationArgs, PrintListingReceiptArgs, SellArgs,
};
pub use schema::{
    account_requirements, all_schemas, find_by_discriminator, schema_for, schema_for_name,
    FieldType, OperationKind, OperationSchema,
};
