//! Instruction construction and decoding for Auction House operations.
//!
//! - [`args`]: typed arguments per operation
//! - [`builder`]: [`InstructionBuilder`] and [`build_instruction`]
//! - [`assemble`]: composes program id, accounts and payload
//! - [`decoded`]: identifies and decodes existing instructions
//!
//! # Example
//!
//! ```rust,ignore
//! use auction_house_sdk::instructions::{CancelArgs, InstructionBuilder};
//! use solana_sdk::pubkey::Pubkey;
//!
//! let program_id = Pubkey::new_unique();
//!
//! let args = CancelArgs { buyer_price: 1_000, token_size: 1 };
//! let ix = InstructionBuilder::for_args(program_id, &args)
//!     .account("wallet", wallet)
//!     .account("token_account", token_account)
//!     .account("token_mint", token_mint)
//!     .account("authority", authority)
//!     .account("auction_house", auction_house)
//!     .account("auction_house_fee_account", fee_account)
//!     .account("trade_state", trade_state)
//!     .build()
//!     .expect("should build instruction");
//! ```

pub mod args;
pub mod assemble;
pub mod builder;
pub mod decoded;

pub use args::{
    AuctioneerCancelArgs, AuctioneerSellArgs, AuthorityScope, CancelArgs,
    DelegateAuctioneerArgs, OperationArgs, PrintListingReceiptArgs, SellArgs,
};
pub use assemble::assemble;
pub use builder::{build_instruction, InstructionBuilder};
pub use decoded::{decode_instruction, decode_instruction_data, DecodedInstruction};
