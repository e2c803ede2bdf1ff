#![allow(unexpected_cfgs, deprecated)]
use anchor_lang::prelude::*;

declare_id!("ANMsrCRiBLx6pkonKSMKJop4UaMpQPJrixXUDgoSq6Wq");

pub mod state;
pub mod instructions;
pub mod errors;
pub mod events;

use instructions::*;

#[program]
pub mod parent_registry {
    use super::*;

    /// Initialize the registry and its parent id sequence
    pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
        instructions::initialize_registry::initialize_registry(ctx)
    }

    /// Issue a new parent asset owned by the signer
    ///
    /// Returns the id assigned to the parent asset
    pub fn mint_parent(ctx: Context<MintParent>) -> Result<u64> {
        instructions::mint_parent::mint_parent(ctx)
    }

    /// Move a parent asset to a new owner
    ///
    /// # Arguments
    /// * `parent_id` - Id of the parent asset being transferred
    /// * `new_owner` - Address that becomes the current owner
    pub fn transfer_parent(
        ctx: Context<TransferParent>,
        parent_id: u64,
        new_owner: Pubkey,
    ) -> Result<()> {
        instructions::transfer_parent::transfer_parent(ctx, parent_id, new_owner)
    }

    /// Current owner of a parent asset
    /// Fails with `UnknownParent` for ids that were never issued
    pub fn owner_of(ctx: Context<OwnerOf>, parent_id: u64) -> Result<Pubkey> {
        instructions::owner_of::owner_of(ctx, parent_id)
    }
}
