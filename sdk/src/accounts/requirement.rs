//! Positional account requirements.

use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey};

/// SPL Token program ID.
pub const TOKEN_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

/// System program ID.
pub const SYSTEM_PROGRAM_ID: Pubkey = solana_sdk::pubkey!("11111111111111111111111111111111");

/// Rent sysvar ID.
pub const RENT_SYSVAR_ID: Pubkey =
    solana_sdk::pubkey!("SysvarRent111111111111111111111111111111111");

/// Instructions sysvar ID.
pub const INSTRUCTIONS_SYSVAR_ID: Pubkey =
    solana_sdk::pubkey!("Sysvar1nstructions1111111111111111111111111");

/// Metaplex Token Metadata program ID.
pub const TOKEN_METADATA_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s");

/// Metaplex Token Auth Rules program ID.
pub const AUTH_RULES_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("auth9SigNpDKz4sJJ1DfCTuZrZNSAgh9sFD3rboVmgg");

/// A declared, positional need for an account with fixed access flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountRequirement {
    /// Role name, used as the lookup key in address maps.
    pub role: &'static str,
    /// Whether the program may mutate the account.
    pub writable: bool,
    /// Whether the account must sign the transaction.
    pub signer: bool,
    /// Address used when the caller supplies none.
    pub default: Option<Pubkey>,
}

impl AccountRequirement {
    /// Creates a read-only, non-signer requirement.
    #[must_use]
    pub const fn readonly(role: &'static str) -> Self {
        Self {
            role,
            writable: false,
            signer: false,
            default: None,
        }
    }

    /// Creates a writable, non-signer requirement.
    #[must_use]
    pub const fn writable(role: &'static str) -> Self {
        Self {
            role,
            writable: true,
            signer: false,
            default: None,
        }
    }

    /// Marks the requirement as a signer.
    #[must_use]
    pub const fn signer(self) -> Self {
        Self {
            signer: true,
            ..self
        }
    }

    /// Sets the well-known default address.
    #[must_use]
    pub const fn with_default(self, address: Pubkey) -> Self {
        Self {
            default: Some(address),
            ..self
        }
    }

    /// Pairs `pubkey` with this requirement's access flags.
    #[must_use]
    pub const fn to_meta(&self, pubkey: Pubkey) -> AccountMeta {
        AccountMeta {
            pubkey,
            is_signer: self.signer,
            is_writable: self.writable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirement_flags() {
        let req = AccountRequirement::writable("authority").signer();
        assert_eq!(req.role, "authority");
        assert!(req.writable);
        assert!(req.signer);
        assert_eq!(req.default, None);

        let req = AccountRequirement::readonly("rent").with_default(RENT_SYSVAR_ID);
        assert!(!req.writable);
        assert!(!req.signer);
        assert_eq!(req.default, Some(RENT_SYSVAR_ID));
    }

    #[test]
    fn test_requirement_to_meta() {
        let key = Pubkey::new_unique();
        let meta = AccountRequirement::writable("receipt").to_meta(key);
        assert_eq!(meta, AccountMeta::new(key, false));

        let meta = AccountRequirement::readonly("auctioneer_authority")
            .signer()
            .to_meta(key);
        assert_eq!(meta, AccountMeta::new_readonly(key, true));
    }

    #[test]
    fn test_well_known_ids_distinct() {
        let ids = [
            TOKEN_PROGRAM_ID,
            SYSTEM_PROGRAM_ID,
            RENT_SYSVAR_ID,
            INSTRUCTIONS_SYSVAR_ID,
            TOKEN_METADATA_PROGRAM_ID,
            AUTH_RULES_PROGRAM_ID,
        ];
        for (i, a) in ids.iter().enumerate() {
            for b in ids.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
        assert_eq!(SYSTEM_PROGRAM_ID, Pubkey::default());
    }
}
