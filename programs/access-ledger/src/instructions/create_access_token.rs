use anchor_lang::prelude::*;
use crate::events::{AccessTokenCreated, AccessTokenSuperseded};
use crate::lifecycle::{self, Grant};
use crate::state::*;

/// Grant `holder` an access token derived from `parent_id`.
///
/// The signer must currently own the parent in the registry. If the parent
/// already has a linked token, that token is passed as `previous_token` and
/// becomes superseded.
pub fn create_access_token(
    ctx: Context<CreateAccessToken>,
    parent_id: u64,
    holder: Pubkey,
) -> Result<u64> {
    let caller = ctx.accounts.caller.key();
    lifecycle::authorize(&caller, &ctx.accounts.parent_asset, parent_id)?;

    let clock = Clock::get()?;
    let token_bump = ctx.bumps.access_token;
    let link_bump = ctx.bumps.parent_link;
    let accounts = &mut *ctx.accounts;

    let Grant { record, superseded } = lifecycle::issue(
        &mut accounts.ledger_state,
        &mut accounts.parent_link,
        accounts.previous_token.as_deref_mut(),
        parent_id,
        holder,
        clock.unix_timestamp,
    )?;
    accounts.parent_link.bump = link_bump;

    let token_id = record.id;
    accounts.access_token.set_inner(AccessTokenRecord {
        bump: token_bump,
        ..record
    });

    if let Some(previous_id) = superseded {
        emit!(AccessTokenSuperseded {
            token_id: previous_id,
            parent_id,
            superseded_by: token_id,
        });
        msg!("Access token {} superseded by {}", previous_id, token_id);
    }

    emit!(AccessTokenCreated {
        token_id,
        parent_id,
        holder,
        granted_by: caller,
    });

    msg!("Access token {} for parent {} granted to: {}, total minted: {}",
        token_id, parent_id, holder, accounts.ledger_state.total_minted);

    Ok(token_id)
}

#[derive(Accounts)]
#[instruction(parent_id: u64)]
pub struct CreateAccessToken<'info> {
    /// Current owner of the parent asset, pays for the new accounts
    #[account(mut)]
    pub caller: Signer<'info>,

    /// Ledger state PDA
    #[account(
        mut,
        seeds = [LedgerState::SEED_PREFIX],
        bump = ledger_state.bump,
    )]
    pub ledger_state: Account<'info, LedgerState>,

    /// Registry parent asset account
    /// CHECK: Address, owning program and contents verified by lifecycle::authorize
    pub parent_asset: UncheckedAccount<'info>,

    /// Parent link PDA, created on the parent's first grant
    #[account(
        init_if_needed,
        payer = caller,
        space = ParentLink::LEN,
        seeds = [
            ParentLink::SEED_PREFIX,
            parent_id.to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub parent_link: Account<'info, ParentLink>,

    /// Record the parent link currently points at, if any
    #[account(mut)]
    pub previous_token: Option<Account<'info, AccessTokenRecord>>,

    /// Record for the token being minted
    #[account(
        init,
        payer = caller,
        space = AccessTokenRecord::LEN,
        seeds = [
            AccessTokenRecord::SEED_PREFIX,
            ledger_state.next_token_id.to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub access_token: Account<'info, AccessTokenRecord>,

    /// System program
    pub system_program: Program<'info, System>,
}
