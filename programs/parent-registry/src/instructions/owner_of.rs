use anchor_lang::prelude::*;
use crate::state::*;

/// Return the current owner of `parent_id`
pub fn owner_of(ctx: Context<OwnerOf>, parent_id: u64) -> Result<Pubkey> {
    let owner = ParentAsset::owner_of(&ctx.accounts.parent_asset, parent_id)?;

    msg!("Parent asset {} owned by: {}", parent_id, owner);

    Ok(owner)
}

#[derive(Accounts)]
pub struct OwnerOf<'info> {
    /// Parent asset PDA
    /// CHECK: Address and initialization verified by ParentAsset::owner_of
    pub parent_asset: UncheckedAccount<'info>,
}
