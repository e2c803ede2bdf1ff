use anchor_lang::prelude::*;
use crate::state::*;

/// Address `token_id` was granted to, whether or not it is still valid
pub fn holder_of(ctx: Context<HolderOf>, token_id: u64) -> Result<Pubkey> {
    let holder = ctx.accounts.access_token.holder;

    msg!("Access token {} held by: {}", token_id, holder);

    Ok(holder)
}

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct HolderOf<'info> {
    /// Access token record PDA
    #[account(
        seeds = [
            AccessTokenRecord::SEED_PREFIX,
            token_id.to_le_bytes().as_ref(),
        ],
        bump = access_token.bump,
    )]
    pub access_token: Account<'info, AccessTokenRecord>,
}
