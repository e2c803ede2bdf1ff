use anchor_lang::prelude::*;

#[error_code]
pub enum LedgerError {
    #[msg("Caller is not the owner of the parent asset")]
    NotAuthorized,

    #[msg("No access token to revoke")]
    NoActiveToken,

    #[msg("Transfer not allowed")]
    TransferNotAllowed,

    #[msg("Previous access token missing or does not match the parent link")]
    PreviousTokenMismatch,

    #[msg("Access token account does not match the parent link")]
    TokenAccountMismatch,

    #[msg("Numerical overflow")]
    NumericalOverflow,
}
