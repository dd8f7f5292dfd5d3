//! Trailing accounts consumed by the `sell` handler.
//!
//! When the seller signs, `sell` delegates the token to the program through
//! Token Metadata instead of a plain SPL approve. That path reads eight extra
//! accounts after the declared ones, in the order produced here.

use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey};

use super::requirement::{AUTH_RULES_PROGRAM_ID, INSTRUCTIONS_SYSVAR_ID, TOKEN_METADATA_PROGRAM_ID};

/// Remaining accounts for delegating a programmable NFT during `sell`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellRemainingAccounts {
    /// Token Metadata program.
    pub metadata_program: Pubkey,
    /// Delegate record PDA.
    pub delegate_record: Pubkey,
    /// Token record PDA.
    pub token_record: Pubkey,
    /// Mint of the listed token.
    pub token_mint: Pubkey,
    /// Master edition account.
    pub edition: Pubkey,
    /// Token Auth Rules program.
    pub auth_rules_program: Pubkey,
    /// Rule set account.
    pub auth_rules: Pubkey,
    /// Instructions sysvar.
    pub sysvar_instructions: Pubkey,
}

impl SellRemainingAccounts {
    /// Creates the set with the well-known programs and sysvar filled in.
    #[must_use]
    pub fn new(
        delegate_record: Pubkey,
        token_record: Pubkey,
        token_mint: Pubkey,
        edition: Pubkey,
        auth_rules: Pubkey,
    ) -> Self {
        Self {
            metadata_program: TOKEN_METADATA_PROGRAM_ID,
            delegate_record,
            token_record,
            token_mint,
            edition,
            auth_rules_program: AUTH_RULES_PROGRAM_ID,
            auth_rules,
            sysvar_instructions: INSTRUCTIONS_SYSVAR_ID,
        }
    }

    /// Returns the account metas in the order the handler reads them.
    #[must_use]
    pub fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new_readonly(self.metadata_program, false),
            AccountMeta::new(self.delegate_record, false),
            AccountMeta::new(self.token_record, false),
            AccountMeta::new_readonly(self.token_mint, false),
            AccountMeta::new_readonly(self.edition, false),
            AccountMeta::new_readonly(self.auth_rules_program, false),
            AccountMeta::new_readonly(self.auth_rules, false),
            AccountMeta::new_readonly(self.sysvar_instructions, false),
        ]
    }
}
