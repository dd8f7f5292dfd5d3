//! Instruction decoding.
//!
//! Identifies the operation from the 8-byte discriminator and decodes the
//! arguments with its schema. Account lists are mapped back to their roles
//! by position.

use solana_sdk::instruction::{AccountMeta, Instruction};

use crate::accounts::AccountMap;
use crate::codec::{self, ArgValue};
use crate::error::SdkError;
use crate::schema::{find_by_discriminator, Discriminator, OperationKind, DISCRIMINATOR_LEN};

use super::args::OperationArgs;

/// A decoded Auction House instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedInstruction {
    /// Operation the payload belongs to.
    pub kind: OperationKind,
    /// Positional argument values.
    pub args: Vec<ArgValue>,
    /// Declared accounts by role. Empty when only the payload was decoded.
    pub accounts: AccountMap,
    /// Accounts past the declared list.
    pub remaining_accounts: Vec<AccountMeta>,
}

impl DecodedInstruction {
    /// Converts the arguments into the typed arguments of `A`.
    ///
    /// # Errors
    ///
    /// Returns `SdkError::UnknownOperation` if the instruction is not an
    /// `A::KIND` instruction, or the conversion error.
    pub fn args_as<A: OperationArgs>(&self) -> Result<A, SdkError> {
        if self.kind != A::KIND {
            return Err(SdkError::UnknownOperation(format!(
                "expected {}, found {}",
                A::KIND,
                self.kind
            )));
        }
        A::from_values(&self.args)
    }
}

/// Decodes an instruction payload.
///
/// # Errors
///
/// Returns `SdkError::TruncatedInput` if the payload is shorter than a
/// discriminator, `SdkError::UnknownOperation` if the discriminator is not
/// registered, or any codec error.
pub fn decode_instruction_data(data: &[u8]) -> Result<DecodedInstruction, SdkError> {
    let Some(head) = data.get(..DISCRIMINATOR_LEN) else {
        return Err(SdkError::TruncatedInput {
            field: "discriminator".to_string(),
            needed: DISCRIMINATOR_LEN,
            remaining: data.len(),
        });
    };
    let mut discriminator: Discriminator = [0; DISCRIMINATOR_LEN];
    discriminator.copy_from_slice(head);

    let schema = find_by_discriminator(&discriminator)?;
    let (_, args) = codec::decode(schema, data)?;

    tracing::trace!(operation = %schema.kind, args = args.len(), "decoded instruction data");

    Ok(DecodedInstruction {
        kind: schema.kind,
        args,
        accounts: AccountMap::new(),
        remaining_accounts: Vec::new(),
    })
}

/// Decodes an instruction, including its account roles.
///
/// # Errors
///
/// Returns any [`decode_instruction_data`] error, or
/// `SdkError::MissingRequiredAccount` naming the first declared role with no
/// account in the instruction.
pub fn decode_instruction(ix: &Instruction) -> Result<DecodedInstruction, SdkError> {
    let mut decoded = decode_instruction_data(&ix.data)?;
    let requirements = crate::schema::account_requirements(decoded.kind);

    if let Some(missing) = requirements.get(ix.accounts.len()) {
        return Err(SdkError::MissingRequiredAccount(missing.role.to_string()));
    }

    decoded.accounts = requirements
        .iter()
        .zip(&ix.accounts)
        .map(|(req, meta)| (req.role.to_string(), meta.pubkey))
        .collect();
    decoded.remaining_accounts = ix.accounts.iter().skip(requirements.len()).cloned().collect();

    Ok(decoded)
}
