//! Instruction builder.
//!
//! Runs the whole pipeline for one operation: look up the schema, encode the
//! arguments, resolve the accounts and assemble the instruction.

use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

use crate::accounts::{build_accounts, AccountMap};
use crate::codec::{self, ArgValue};
use crate::error::SdkError;
use crate::schema::{schema_for, OperationKind};

use super::args::OperationArgs;
use super::assemble::assemble;

/// Builds the instruction for `kind` from positional `args` and account maps.
///
/// # Errors
///
/// Returns any codec, account resolution or assembly error.
pub fn build_instruction(
    program_id: Pubkey,
    kind: OperationKind,
    args: &[ArgValue],
    supplied: &AccountMap,
    overrides: &AccountMap,
    extensions: &[AccountMeta],
) -> Result<Instruction, SdkError> {
    let schema = schema_for(kind);
    let data = codec::encode(schema, &schema.discriminator, args)?;
    let accounts = build_accounts(schema.accounts, supplied, overrides, extensions)?;
    assemble(program_id, accounts, data)
}

/// Builder for an Auction House instruction.
#[derive(Debug, Clone)]
pub struct InstructionBuilder {
    program_id: Pubkey,
    kind: OperationKind,
    args: Vec<ArgValue>,
    supplied: AccountMap,
    overrides: AccountMap,
    fallbacks: AccountMap,
    remaining_accounts: Vec<AccountMeta>,
}

impl InstructionBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new(program_id: Pubkey, kind: OperationKind) -> Self {
        Self {
            program_id,
            kind,
            args: Vec::new(),
            supplied: AccountMap::new(),
            overrides: AccountMap::new(),
            fallbacks: AccountMap::new(),
            remaining_accounts: Vec::new(),
        }
    }

    /// Creates a builder for the operation `args` belong to.
    #[must_use]
    pub fn for_args<A: OperationArgs>(program_id: Pubkey, args: &A) -> Self {
        Self::new(program_id, A::KIND).args(args.to_values())
    }

    /// Returns the program ID.
    #[must_use]
    pub const fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    /// Returns the operation kind.
    #[must_use]
    pub const fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Sets the positional argument values.
    #[must_use]
    pub fn args(mut self, args: Vec<ArgValue>) -> Self {
        self.args = args;
        self
    }

    /// Supplies the address for `role`.
    #[must_use]
    pub fn account(mut self, role: impl Into<String>, pubkey: Pubkey) -> Self {
        self.supplied.insert(role.into(), pubkey);
        self
    }

    /// Supplies several role addresses.
    #[must_use]
    pub fn accounts<I, K>(mut self, accounts: I) -> Self
    where
        I: IntoIterator<Item = (K, Pubkey)>,
        K: Into<String>,
    {
        self.supplied
            .extend(accounts.into_iter().map(|(role, pubkey)| (role.into(), pubkey)));
        self
    }

    /// Forces the address for `role`, taking precedence over supplied
    /// addresses and defaults.
    #[must_use]
    pub fn override_account(mut self, role: impl Into<String>, pubkey: Pubkey) -> Self {
        self.overrides.insert(role.into(), pubkey);
        self
    }

    /// Sets addresses used when a role is not supplied, ahead of the
    /// built-in defaults.
    #[must_use]
    pub fn fallback_accounts(mut self, fallbacks: AccountMap) -> Self {
        self.fallbacks = fallbacks;
        self
    }

    /// Appends an account after the declared ones.
    #[must_use]
    pub fn remaining_account(mut self, meta: AccountMeta) -> Self {
        self.remaining_accounts.push(meta);
        self
    }

    /// Appends accounts after the declared ones.
    #[must_use]
    pub fn remaining_accounts(mut self, metas: impl IntoIterator<Item = AccountMeta>) -> Self {
        self.remaining_accounts.extend(metas);
        self
    }

    /// Builds the instruction.
    ///
    /// # Errors
    ///
    /// Returns an error if an argument does not fit the schema or a required
    /// account is not set.
    pub fn build(self) -> Result<Instruction, SdkError> {
        let mut supplied = self.supplied;
        for (role, pubkey) in self.fallbacks {
            supplied.entry(role).or_insert(pubkey);
        }

        build_instruction(
            self.program_id,
            self.kind,
            &self.args,
            &supplied,
            &self.overrides,
            &self.remaining_accounts,
        )
    }
}
