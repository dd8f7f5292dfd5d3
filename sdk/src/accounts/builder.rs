//! Account list resolution.
//!
//! Turns an operation's declared [`AccountRequirement`]s plus caller-supplied
//! addresses into the ordered account list the program expects.

use std::collections::HashMap;

use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey};

use super::requirement::AccountRequirement;
use crate::error::SdkError;

/// Role name to address mapping.
pub type AccountMap = HashMap<String, Pubkey>;

/// Resolves `requirements` into an ordered account list.
///
/// For each requirement, in declaration order, the address is taken from
/// `overrides`, then `supplied`, then the requirement's default. The access
/// flags always come from the requirement. `extensions` are appended
/// verbatim after the declared accounts.
///
/// Roles present in the maps but not declared by any requirement are ignored.
///
/// # Errors
///
/// Returns `SdkError::MissingRequiredAccount` if a role cannot be resolved.
pub fn build_accounts(
    requirements: &[AccountRequirement],
    supplied: &AccountMap,
    overrides: &AccountMap,
    extensions: &[AccountMeta],
) -> Result<Vec<AccountMeta>, SdkError> {
    let mut accounts = Vec::with_capacity(requirements.len() + extensions.len());

    for req in requirements {
        let pubkey = resolve(req, supplied, overrides)?;
        accounts.push(req.to_meta(pubkey));
    }

    accounts.extend_from_slice(extensions);
    Ok(accounts)
}

fn resolve(
    req: &AccountRequirement,
    supplied: &AccountMap,
    overrides: &AccountMap,
) -> Result<Pubkey, SdkError> {
    if let Some(pubkey) = overrides.get(req.role) {
        tracing::trace!(role = req.role, %pubkey, "account overridden");
        return Ok(*pubkey);
    }
    if let Some(pubkey) = supplied.get(req.role) {
        return Ok(*pubkey);
    }
    match req.default {
        Some(pubkey) => {
            tracing::trace!(role = req.role, %pubkey, "using default account");
            Ok(pubkey)
        }
        None => Err(SdkError::MissingRequiredAccount(req.role.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, Pubkey)]) -> AccountMap {
        entries
            .iter()
            .map(|(role, key)| ((*role).to_string(), *key))
            .collect()
    }

    #[test]
    fn test_build_supplied_and_default() {
        let wallet = Pubkey::new_unique();
        let fee_default = Pubkey::new_unique();
        let requirements = [
            AccountRequirement::writable("wallet"),
            AccountRequirement::writable("fee_account").with_default(fee_default),
        ];

        let accounts = build_accounts(
            &requirements,
            &map(&[("wallet", wallet)]),
            &AccountMap::new(),
            &[],
        )
        .expect("should build accounts");

        assert_eq!(
            accounts,
            vec![
                AccountMeta::new(wallet, false),
                AccountMeta::new(fee_default, false),
            ]
        );
    }

    #[test]
    fn test_override_precedence() {
        let supplied_key = Pubkey::new_unique();
        let override_key = Pubkey::new_unique();
        let requirements = [AccountRequirement::readonly("authority").signer()];

        let accounts = build_accounts(
            &requirements,
            &map(&[("authority", supplied_key)]),
            &map(&[("authority", override_key)]),
            &[],
        )
        .expect("should build accounts");

        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].pubkey, override_key);
        // Overrides change the address only.
        assert!(accounts[0].is_signer);
        assert!(!accounts[0].is_writable);
    }

    #[test]
    fn test_override_beats_default() {
        let custom = Pubkey::new_unique();
        let requirements =
            [AccountRequirement::readonly("token_program").with_default(Pubkey::new_unique())];

        let accounts = build_accounts(
            &requirements,
            &AccountMap::new(),
            &map(&[("token_program", custom)]),
            &[],
        )
        .expect("should build accounts");

        assert_eq!(accounts[0].pubkey, custom);
    }

    #[test]
    fn test_missing_required_account() {
        let requirements = [
            AccountRequirement::writable("wallet"),
            AccountRequirement::readonly("auctioneer_authority").signer(),
        ];

        let result = build_accounts(
            &requirements,
            &map(&[("wallet", Pubkey::new_unique())]),
            &AccountMap::new(),
            &[],
        );

        assert_eq!(
            result,
            Err(SdkError::MissingRequiredAccount(
                "auctioneer_authority".to_string()
            ))
        );
    }

    #[test]
    fn test_order_follows_requirements() {
        let roles = ["a", "b", "c", "d", "e", "f", "g", "h"];
        let requirements: Vec<_> = roles
            .iter()
            .map(|role| AccountRequirement::readonly(*role))
            .collect();
        let keys: Vec<_> = roles.iter().map(|_| Pubkey::new_unique()).collect();

        let forward: Vec<_> = roles.iter().copied().zip(keys.iter().copied()).collect();
        let mut backward = forward.clone();
        backward.reverse();

        let first = build_accounts(&requirements, &map(&forward), &AccountMap::new(), &[])
            .expect("should build accounts");
        let second = build_accounts(&requirements, &map(&backward), &AccountMap::new(), &[])
            .expect("should build accounts");

        assert_eq!(first, second);
        let resolved: Vec<_> = first.iter().map(|meta| meta.pubkey).collect();
        assert_eq!(resolved, keys);
    }

    #[test]
    fn test_extensions_appended_verbatim() {
        let wallet = Pubkey::new_unique();
        let ext = [
            AccountMeta::new(Pubkey::new_unique(), true),
            AccountMeta::new_readonly(Pubkey::new_unique(), false),
        ];
        let requirements = [AccountRequirement::readonly("wallet")];

        let accounts = build_accounts(
            &requirements,
            &map(&[("wallet", wallet)]),
            &AccountMap::new(),
            &ext,
        )
        .expect("should build accounts");

        assert_eq!(accounts.len(), 3);
        assert_eq!(accounts[1], ext[0]);
        assert_eq!(accounts[2], ext[1]);
    }

    #[test]
    fn test_unknown_roles_ignored() {
        let wallet = Pubkey::new_unique();
        let requirements = [AccountRequirement::readonly("wallet")];

        let accounts = build_accounts(
            &requirements,
            &map(&[("wallet", wallet), ("bookkeeper", Pubkey::new_unique())]),
            &map(&[("receipt", Pubkey::new_unique())]),
            &[],
        )
        .expect("should build accounts");

        assert_eq!(accounts, vec![AccountMeta::new_readonly(wallet, false)]);
    }
}
