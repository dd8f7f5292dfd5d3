//! Schema registry.
//!
//! Declares, per operation kind, the argument fields, the discriminator and
//! the account requirements. The tables are `'static` and never change at
//! runtime, so lookups need no synchronization.

pub mod registry;
pub mod types;

pub use registry::{
    account_requirements, all_schemas, find_by_discriminator, schema_for, schema_for_name,
    AUTHORITY_SCOPE,
};
pub use types::{
    Discriminator, EnumVariant, Field, FieldType, OperationKind, OperationSchema,
    DISCRIMINATOR_LEN,
};
