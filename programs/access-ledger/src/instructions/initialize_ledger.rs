use anchor_lang::prelude::*;
use crate::state::*;

/// Initialize the ledger state PDA
pub fn initialize_ledger(ctx: Context<InitializeLedger>) -> Result<()> {
    let ledger_state = &mut ctx.accounts.ledger_state;
    let clock = Clock::get()?;

    ledger_state.next_token_id = LedgerState::FIRST_TOKEN_ID;
    ledger_state.total_minted = 0;
    ledger_state.created_ts = clock.unix_timestamp;
    ledger_state.bump = ctx.bumps.ledger_state;

    msg!("Access ledger initialized by: {}", ctx.accounts.payer.key());

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    /// Pays for the ledger state account
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Ledger state PDA
    #[account(
        init,
        payer = payer,
        space = LedgerState::LEN,
        seeds = [LedgerState::SEED_PREFIX],
        bump
    )]
    pub ledger_state: Account<'info, LedgerState>,

    /// System program
    pub system_program: Program<'info, System>,
}
