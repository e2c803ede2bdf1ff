use anchor_lang::prelude::*;
use crate::events::ParentMinted;
use crate::state::*;

/// Issue the next parent asset to the signer
pub fn mint_parent(ctx: Context<MintParent>) -> Result<u64> {
    let registry_state = &mut ctx.accounts.registry_state;
    let clock = Clock::get()?;

    let parent_id = registry_state.allocate_id()?;
    let owner = ctx.accounts.owner.key();

    let parent_asset = &mut ctx.accounts.parent_asset;
    parent_asset.id = parent_id;
    parent_asset.owner = owner;
    parent_asset.minted_ts = clock.unix_timestamp;
    parent_asset.bump = ctx.bumps.parent_asset;

    emit!(ParentMinted { parent_id, owner });

    msg!("Parent asset {} minted to: {}, total issued: {}",
        parent_id, owner, registry_state.total_issued);

    Ok(parent_id)
}

#[derive(Accounts)]
pub struct MintParent<'info> {
    /// Receives the new parent asset and pays for its account
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Registry state PDA
    #[account(
        mut,
        seeds = [RegistryState::SEED_PREFIX],
        bump = registry_state.bump,
    )]
    pub registry_state: Account<'info, RegistryState>,

    /// Parent asset PDA for the id about to be issued
    #[account(
        init,
        payer = owner,
        space = ParentAsset::LEN,
        seeds = [
            ParentAsset::SEED_PREFIX,
            registry_state.next_parent_id.to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub parent_asset: Account<'info, ParentAsset>,

    /// System program
    pub system_program: Program<'info, System>,
}
