//! Instruction assembly.

use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

use crate::error::SdkError;

/// Composes a program id, resolved accounts and an encoded payload into an
/// [`Instruction`].
///
/// # Errors
///
/// Returns `SdkError::EmptyProgramId` if `program_id` is the all-zero address.
pub fn assemble(
    program_id: Pubkey,
    accounts: Vec<AccountMeta>,
    data: Vec<u8>,
) -> Result<Instruction, SdkError> {
    if program_id == Pubkey::default() {
        return Err(SdkError::EmptyProgramId);
    }

    tracing::debug!(
        %program_id,
        accounts = accounts.len(),
        data_len = data.len(),
        "assembled instruction"
    );

    Ok(Instruction {
        program_id,
        accounts,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble() {
        let program_id = Pubkey::new_unique();
        let accounts = vec![AccountMeta::new(Pubkey::new_unique(), true)];
        let data = vec![1, 2, 3];

        let ix = assemble(program_id, accounts.clone(), data.clone()).expect("should assemble");

        assert_eq!(ix.program_id, program_id);
        assert_eq!(ix.accounts, accounts);
        assert_eq!(ix.data, data);
    }

    #[test]
    fn test_assemble_empty_program_id() {
        let result = assemble(Pubkey::default(), Vec::new(), vec![0; 8]);
        assert_eq!(result, Err(SdkError::EmptyProgramId));
    }

    #[test]
    fn test_assemble_allows_empty_accounts() {
        let ix = assemble(Pubkey::new_unique(), Vec::new(), Vec::new()).expect("should assemble");
        assert!(ix.accounts.is_empty());
        assert!(ix.data.is_empty());
    }
}
