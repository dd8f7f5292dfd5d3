//! SDK configuration.
//!
//! Holds the Auction House program id and the addresses used in place of the
//! built-in well-known program defaults, for example against a local
//! validator with redeployed programs.

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::accounts::{AccountMap, RENT_SYSVAR_ID, SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID};
use crate::instructions::InstructionBuilder;
use crate::schema::OperationKind;

/// Address of the deployed Auction House program.
pub const DEFAULT_PROGRAM_ID: &str = "nightTsJBrqSQfZRbQcgg9WDVKUM78GpwUJwKt64zWr";

/// Configuration for building Auction House instructions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SdkConfig {
    /// Auction House program id (base58).
    pub program_id: String,

    /// SPL Token program (base58).
    pub token_program_id: String,

    /// System program (base58).
    pub system_program_id: String,

    /// Rent sysvar (base58).
    pub rent_sysvar_id: String,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            program_id: DEFAULT_PROGRAM_ID.to_string(),
            token_program_id: TOKEN_PROGRAM_ID.to_string(),
            system_program_id: SYSTEM_PROGRAM_ID.to_string(),
            rent_sysvar_id: RENT_SYSVAR_ID.to_string(),
        }
    }
}

impl SdkConfig {
    /// Creates a configuration for the given program id.
    #[must_use]
    pub fn with_program_id(program_id: impl Into<String>) -> Self {
        Self {
            program_id: program_id.into(),
            ..Default::default()
        }
    }

    /// Sets the token program.
    #[must_use]
    pub fn with_token_program(mut self, address: impl Into<String>) -> Self {
        self.token_program_id = address.into();
        self
    }

    /// Sets the system program.
    #[must_use]
    pub fn with_system_program(mut self, address: impl Into<String>) -> Self {
        self.system_program_id = address.into();
        self
    }

    /// Sets the rent sysvar.
    #[must_use]
    pub fn with_rent_sysvar(mut self, address: impl Into<String>) -> Self {
        self.rent_sysvar_id = address.into();
        self
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the configuration is
    /// invalid.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any address is invalid or the program id is the
    /// all-zero address.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.parse_program_id()?;
        self.default_overrides()?;
        Ok(())
    }

    /// Parses the program id.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is invalid or all zeros.
    pub fn parse_program_id(&self) -> Result<Pubkey, ConfigError> {
        let program_id = parse_address("program_id", &self.program_id)?;
        if program_id == Pubkey::default() {
            return Err(ConfigError::EmptyProgramId);
        }
        Ok(program_id)
    }

    /// Returns the configured well-known addresses by role. The instruction
    /// builder uses them for roles the caller did not supply.
    ///
    /// # Errors
    ///
    /// Returns an error if any address is invalid.
    pub fn default_overrides(&self) -> Result<AccountMap, ConfigError> {
        Ok(AccountMap::from([
            (
                "token_program".to_string(),
                parse_address("token_program_id", &self.token_program_id)?,
            ),
            (
                "system_program".to_string(),
                parse_address("system_program_id", &self.system_program_id)?,
            ),
            (
                "rent".to_string(),
                parse_address("rent_sysvar_id", &self.rent_sysvar_id)?,
            ),
        ]))
    }

    /// Creates an [`InstructionBuilder`] for `kind` against the configured
    /// program and well-known addresses.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn instruction_builder(
        &self,
        kind: OperationKind,
    ) -> Result<InstructionBuilder, ConfigError> {
        Ok(InstructionBuilder::new(self.parse_program_id()?, kind)
            .fallback_accounts(self.default_overrides()?))
    }
}

fn parse_address(field: &'static str, value: &str) -> Result<Pubkey, ConfigError> {
    let invalid = || ConfigError::InvalidAddress {
        field,
        value: value.to_string(),
    };

    let bytes = bs58::decode(value).into_vec().map_err(|_| invalid())?;
    let bytes: [u8; 32] = bytes.try_into().map_err(|_| invalid())?;
    Ok(Pubkey::new_from_array(bytes))
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Invalid base58 address.
    #[error("invalid address for {field}: {value}")]
    InvalidAddress {
        /// Config field.
        field: &'static str,
        /// Value as given.
        value: String,
    },

    /// Program id is the all-zero address.
    #[error("program_id must not be the all-zero address")]
    EmptyProgramId,

    /// Malformed JSON.
    #[error("invalid config JSON: {0}")]
    Json(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::OperationArgs;
    use crate::instructions::PrintListingReceiptArgs;

    #[test]
    fn test_config_default() {
        let config = SdkConfig::default();
        assert_eq!(config.program_id, DEFAULT_PROGRAM_ID);
        assert_eq!(
            config.token_program_id,
            "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"
        );
        assert_eq!(config.system_program_id, "11111111111111111111111111111111");
        assert_eq!(
            config.rent_sysvar_id,
            "SysvarRent111111111111111111111111111111111"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let program_id = Pubkey::new_unique();
        let token_program = Pubkey::new_unique();

        let config = SdkConfig::with_program_id(program_id.to_string())
            .with_token_program(token_program.to_string());

        assert_eq!(config.parse_program_id(), Ok(program_id));
        let overrides = config.default_overrides().expect("should parse");
        assert_eq!(overrides.get("token_program"), Some(&token_program));
        assert_eq!(overrides.get("system_program"), Some(&SYSTEM_PROGRAM_ID));
        assert_eq!(overrides.get("rent"), Some(&RENT_SYSVAR_ID));
    }

    #[test]
    fn test_config_invalid_program_id() {
        let config = SdkConfig::with_program_id("not-base58!");
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidAddress {
                field: "program_id",
                value: "not-base58!".to_string(),
            })
        );
    }

    #[test]
    fn test_config_short_address() {
        let config = SdkConfig::default().with_rent_sysvar("abc");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidAddress {
                field: "rent_sysvar_id",
                ..
            })
        ));
    }

    #[test]
    fn test_config_zero_program_id() {
        let config = SdkConfig::with_program_id(Pubkey::default().to_string());
        assert_eq!(config.parse_program_id(), Err(ConfigError::EmptyProgramId));
    }

    #[test]
    fn test_config_from_json() {
        let system_program = Pubkey::new_unique();
        let json = format!(r#"{{"system_program_id": "{system_program}"}}"#);

        let config = SdkConfig::from_json(&json).expect("should parse");
        assert_eq!(config.program_id, DEFAULT_PROGRAM_ID);
        assert_eq!(config.system_program_id, system_program.to_string());
    }

    #[test]
    fn test_config_from_json_malformed() {
        let result = SdkConfig::from_json("{");
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_config_serialization() {
        let config = SdkConfig::default().with_token_program(Pubkey::new_unique().to_string());
        let json = serde_json::to_string(&config).expect("should serialize");
        let parsed = SdkConfig::from_json(&json).expect("should parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_config_instruction_builder() {
        let system_program = Pubkey::new_unique();
        let config = SdkConfig::default().with_system_program(system_program.to_string());
        let receipt = Pubkey::new_unique();

        let ix = config
            .instruction_builder(PrintListingReceiptArgs::KIND)
            .expect("valid config")
            .args(PrintListingReceiptArgs { receipt_bump: 1 }.to_values())
            .account("receipt", receipt)
            .account("bookkeeper", Pubkey::new_unique())
            .account("instruction", Pubkey::new_unique())
            .build()
            .expect("should build instruction");

        assert_eq!(ix.program_id.to_string(), DEFAULT_PROGRAM_ID);
        assert_eq!(ix.accounts[0].pubkey, receipt);
        assert_eq!(ix.accounts[2].pubkey, system_program);
        assert_eq!(ix.accounts[3].pubkey, RENT_SYSVAR_ID);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidAddress {
            field: "program_id",
            value: "xyz".to_string(),
        };
        assert_eq!(err.to_string(), "invalid address for program_id: xyz");
    }
}
