use anchor_lang::prelude::*;
use crate::lifecycle;

// Access tokens are bound to the address they were granted to. These entry
// points keep the usual token interface shape and all end in
// lifecycle::reject_transfer, without reading or writing any ledger account.

pub fn transfer_from(
    ctx: Context<TransferAccessToken>,
    from: Pubkey,
    to: Pubkey,
    token_id: u64,
) -> Result<()> {
    msg!("transfer_from {} by: {}", from, ctx.accounts.caller.key());
    lifecycle::reject_transfer(&to, &[token_id])
}

pub fn safe_transfer_from(
    ctx: Context<TransferAccessToken>,
    from: Pubkey,
    to: Pubkey,
    token_id: u64,
    data: Vec<u8>,
) -> Result<()> {
    msg!("safe_transfer_from {} ({} bytes of data) by: {}",
        from, data.len(), ctx.accounts.caller.key());
    lifecycle::reject_transfer(&to, &[token_id])
}

pub fn batch_transfer(
    ctx: Context<TransferAccessToken>,
    to: Pubkey,
    token_ids: Vec<u64>,
) -> Result<()> {
    msg!("batch_transfer by: {}", ctx.accounts.caller.key());
    lifecycle::reject_transfer(&to, &token_ids)
}

#[derive(Accounts)]
pub struct TransferAccessToken<'info> {
    /// Whoever is asking; no signer is ever allowed to transfer
    pub caller: Signer<'info>,
}
