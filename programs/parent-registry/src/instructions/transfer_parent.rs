use anchor_lang::prelude::*;
use crate::events::ParentTransferred;
use crate::state::*;

/// Transfer a parent asset to `new_owner`.
///
/// Access tokens granted against this parent are not touched here; their
/// validity follows the new owner the next time they are checked.
pub fn transfer_parent(
    ctx: Context<TransferParent>,
    parent_id: u64,
    new_owner: Pubkey,
) -> Result<()> {
    let signer = ctx.accounts.owner.key();
    let parent_asset = &mut ctx.accounts.parent_asset;

    let previous_owner = parent_asset.transfer(&signer, new_owner)?;

    emit!(ParentTransferred {
        parent_id,
        from: previous_owner,
        to: new_owner,
    });

    msg!("Parent asset {} transferred from {} to {}", parent_id, previous_owner, new_owner);

    Ok(())
}

#[derive(Accounts)]
#[instruction(parent_id: u64)]
pub struct TransferParent<'info> {
    /// Current owner of the parent asset
    pub owner: Signer<'info>,

    /// Parent asset PDA
    #[account(
        mut,
        seeds = [
            ParentAsset::SEED_PREFIX,
            parent_id.to_le_bytes().as_ref(),
        ],
        bump = parent_asset.bump,
    )]
    pub parent_asset: Account<'info, ParentAsset>,
}
