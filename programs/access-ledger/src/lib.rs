#![allow(unexpected_cfgs, deprecated)]
use anchor_lang::prelude::*;

declare_id!("4Qc2CmUo9xb7VFqdJhJjWMT2YW7FqHyeeMaUDFQmw9Aa");

pub mod state;
pub mod instructions;
pub mod errors;
pub mod events;
pub mod lifecycle;
pub mod metadata;
pub mod validity;

use instructions::*;
use metadata::DisplayPayload;

#[program]
pub mod access_ledger {
    use super::*;

    /// Initialize the ledger and its access token id sequence
    pub fn initialize_ledger(ctx: Context<InitializeLedger>) -> Result<()> {
        instructions::initialize_ledger::initialize_ledger(ctx)
    }

    /// Grant an access token for a parent asset the signer owns
    ///
    /// Supersedes the token currently linked to the parent, if any.
    ///
    /// # Arguments
    /// * `parent_id` - Registry id of the parent asset
    /// * `holder` - Address the access token is granted to
    pub fn create_access_token(
        ctx: Context<CreateAccessToken>,
        parent_id: u64,
        holder: Pubkey,
    ) -> Result<u64> {
        instructions::create_access_token::create_access_token(ctx, parent_id, holder)
    }

    /// Revoke the active access token of a parent asset the signer owns
    pub fn revoke_access(ctx: Context<RevokeAccess>, parent_id: u64) -> Result<()> {
        instructions::revoke_access::revoke_access(ctx, parent_id)
    }

    /// Whether an access token currently grants access. Never fails.
    pub fn is_valid(ctx: Context<ValidityQuery>, token_id: u64) -> Result<bool> {
        instructions::is_valid::is_valid(ctx, token_id)
    }

    /// Display payload for an access token
    pub fn describe(ctx: Context<ValidityQuery>, token_id: u64) -> Result<DisplayPayload> {
        instructions::describe::describe(ctx, token_id)
    }

    /// Display payload rendered as a base64 JSON data URI
    pub fn token_uri(ctx: Context<ValidityQuery>, token_id: u64) -> Result<String> {
        instructions::describe::token_uri(ctx, token_id)
    }

    /// Address an access token was granted to
    pub fn holder_of(ctx: Context<HolderOf>, token_id: u64) -> Result<Pubkey> {
        instructions::holder_of::holder_of(ctx, token_id)
    }

    /// Always fails: access tokens cannot change holder
    pub fn transfer_from(
        ctx: Context<TransferAccessToken>,
        from: Pubkey,
        to: Pubkey,
        token_id: u64,
    ) -> Result<()> {
        instructions::transfer::transfer_from(ctx, from, to, token_id)
    }

    /// Always fails: access tokens cannot change holder
    pub fn safe_transfer_from(
        ctx: Context<TransferAccessToken>,
        from: Pubkey,
        to: Pubkey,
        token_id: u64,
        data: Vec<u8>,
    ) -> Result<()> {
        instructions::transfer::safe_transfer_from(ctx, from, to, token_id, data)
    }

    /// Always fails: access tokens cannot change holder
    pub fn batch_transfer(
        ctx: Context<TransferAccessToken>,
        to: Pubkey,
        token_ids: Vec<u64>,
    ) -> Result<()> {
        instructions::transfer::batch_transfer(ctx, to, token_ids)
    }
}
