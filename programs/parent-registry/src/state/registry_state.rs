use anchor_lang::prelude::*;
use crate::errors::RegistryError;

/// Registry State - the parent id sequence
#[account]
pub struct RegistryState {
    /// Id handed to the next minted parent asset (starts at 1)
    pub next_parent_id: u64,

    /// Number of parent assets issued so far
    pub total_issued: u64,

    /// Timestamp when created
    pub created_ts: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl RegistryState {
    /// Discriminator (8) + u64 (8) + u64 (8) + i64 (8) + u8 (1)
    pub const LEN: usize = 8 + 8 + 8 + 8 + 1;

    /// PDA seed prefix
    pub const SEED_PREFIX: &'static [u8] = b"registry_state";

    /// First id issued by a fresh registry
    pub const FIRST_PARENT_ID: u64 = 1;

    /// Hand out the next parent id and advance the sequence
    pub fn allocate_id(&mut self) -> Result<u64> {
        let parent_id = self.next_parent_id;

        self.next_parent_id = parent_id
            .checked_add(1)
            .ok_or(RegistryError::NumericalOverflow)?;
        self.total_issued = self
            .total_issued
            .checked_add(1)
            .ok_or(RegistryError::NumericalOverflow)?;

        Ok(parent_id)
    }
}
