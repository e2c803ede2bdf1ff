use anchor_lang::prelude::*;
use crate::state::*;

/// Initialize the registry state PDA
pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
    let registry_state = &mut ctx.accounts.registry_state;
    let clock = Clock::get()?;

    registry_state.next_parent_id = RegistryState::FIRST_PARENT_ID;
    registry_state.total_issued = 0;
    registry_state.created_ts = clock.unix_timestamp;
    registry_state.bump = ctx.bumps.registry_state;

    msg!("Parent registry initialized by: {}", ctx.accounts.payer.key());

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    /// Pays for the registry state account
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Registry state PDA
    #[account(
        init,
        payer = payer,
        space = RegistryState::LEN,
        seeds = [RegistryState::SEED_PREFIX],
        bump
    )]
    pub registry_state: Account<'info, RegistryState>,

    /// System program
    pub system_program: Program<'info, System>,
}
