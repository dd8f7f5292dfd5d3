//! Account requirements and account list resolution.
//!
//! - [`requirement`]: positional [`AccountRequirement`]s and well-known addresses
//! - [`builder`]: [`build_accounts`], the override/supplied/default resolver
//! - [`remaining`]: typed trailing accounts for handlers that read past the
//!   declared list

pub mod builder;
pub mod remaining;
pub mod requirement;

pub use builder::{build_accounts, AccountMap};
pub use remaining::SellRemainingAccounts;
pub use requirement::{
    AccountRequirement, AUTH_RULES_PROGRAM_ID, INSTRUCTIONS_SYSVAR_ID, RENT_SYSVAR_ID,
    SYSTEM_PROGRAM_ID, TOKEN_METADATA_PROGRAM_ID, TOKEN_PROGRAM_ID,
};
