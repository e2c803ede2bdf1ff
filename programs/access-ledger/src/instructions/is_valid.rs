use anchor_lang::prelude::*;
use crate::validity;

/// Whether `token_id` currently grants access
pub fn is_valid(ctx: Context<ValidityQuery>, token_id: u64) -> Result<bool> {
    let valid = ctx.accounts.check(token_id);

    msg!("Access token {} valid: {}", token_id, valid);

    Ok(valid)
}

/// Accounts for the read-only validity queries.
///
/// The client derives `parent_link` and `parent_asset` from the record's
/// parent id. For an unknown token any accounts may be passed; the answer
/// is then always false.
#[derive(Accounts)]
pub struct ValidityQuery<'info> {
    /// Access token record PDA
    /// CHECK: Loaded by AccessTokenRecord::load; anything else reads as invalid
    pub access_token: UncheckedAccount<'info>,

    /// Parent link PDA for the record's parent
    /// CHECK: Loaded by ParentLink::load and matched against the record
    pub parent_link: UncheckedAccount<'info>,

    /// Registry parent asset account for the record's parent
    /// CHECK: Verified by ParentAsset::owner_of; failures read as invalid
    pub parent_asset: UncheckedAccount<'info>,
}

impl<'info> ValidityQuery<'info> {
    pub fn check(&self, token_id: u64) -> bool {
        validity::check(token_id, &self.access_token, &self.parent_link, &self.parent_asset)
    }
}
