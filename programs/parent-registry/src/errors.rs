use anchor_lang::prelude::*;

/// Codes start at 7000 so they stay distinct from ledger codes when
/// propagated through the ledger unchanged.
#[error_code(offset = 7000)]
pub enum RegistryError {
    #[msg("Unknown parent asset")]
    UnknownParent,

    #[msg("Account is not the parent asset address for this id")]
    ParentAccountMismatch,

    #[msg("Caller is not the parent owner")]
    NotOwner,

    #[msg("Invalid recipient")]
    InvalidRecipient,

    #[msg("Numerical overflow")]
    NumericalOverflow,
}
