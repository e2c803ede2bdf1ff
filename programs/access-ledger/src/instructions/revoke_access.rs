use anchor_lang::prelude::*;
use crate::events::AccessRevoked;
use crate::lifecycle;
use crate::state::*;

/// Revoke the active access token of `parent_id`.
///
/// The parent link keeps pointing at the revoked token.
pub fn revoke_access(ctx: Context<RevokeAccess>, parent_id: u64) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    lifecycle::authorize(&caller, &ctx.accounts.parent_asset, parent_id)?;

    let parent_link = ParentLink::load(&ctx.accounts.parent_link);
    let current = AccessTokenRecord::load(&ctx.accounts.access_token);

    let record = lifecycle::revoke(parent_link.as_ref(), current)?;
    record.store(&ctx.accounts.access_token)?;

    emit!(AccessRevoked {
        token_id: record.id,
        parent_id,
        revoked_by: caller,
    });

    msg!("Access token {} for parent {} revoked", record.id, parent_id);

    Ok(())
}

#[derive(Accounts)]
#[instruction(parent_id: u64)]
pub struct RevokeAccess<'info> {
    /// Current owner of the parent asset
    pub caller: Signer<'info>,

    /// Registry parent asset account
    /// CHECK: Address, owning program and contents verified by lifecycle::authorize
    pub parent_asset: UncheckedAccount<'info>,

    /// Parent link PDA, possibly never initialized
    /// CHECK: Address fixed by seeds; contents loaded by ParentLink::load
    #[account(
        seeds = [
            ParentLink::SEED_PREFIX,
            parent_id.to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub parent_link: UncheckedAccount<'info>,

    /// Record the parent link points at
    /// CHECK: Loaded by AccessTokenRecord::load and matched against the link
    #[account(mut)]
    pub access_token: UncheckedAccount<'info>,
}
